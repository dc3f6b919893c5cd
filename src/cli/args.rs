// src/cli/args.rs
use crate::cli::error::{CliError, CliResult};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Quick access to saved directories
///
/// Help and version are handled by `bm` itself to keep the classic colored usage text.
#[derive(Parser, Debug)]
#[command(
    name = "bm",
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
#[command(group(
    ArgGroup::new("action")
        .multiple(false)
        .args(["add", "delete", "go", "print", "list", "help", "version", "completion"])
))]
pub struct Cli {
    /// Bookmark to go to
    #[arg(allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Surplus arguments, ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Add bookmark for the current directory
    #[arg(short = 'a', long = "add", value_name = "BOOKMARK", num_args = 0..=1)]
    pub add: Option<Option<String>>,

    /// Delete bookmark
    #[arg(short = 'd', long = "delete", value_name = "BOOKMARK", num_args = 0..=1)]
    pub delete: Option<Option<String>>,

    /// Go to directory of bookmark
    #[arg(short = 'g', long = "go", value_name = "BOOKMARK", num_args = 0..=1)]
    pub go: Option<Option<String>>,

    /// Show directory of bookmark
    #[arg(short = 'p', long = "print", value_name = "BOOKMARK", num_args = 0..=1)]
    pub print: Option<Option<String>>,

    /// Show available bookmarks
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Show usage information
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Show version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Generate bash completion script, optionally saved as bm.bash into PATH
    #[arg(short = 'c', long = "completion", value_name = "PATH", num_args = 0..=1)]
    pub completion: Option<Option<PathBuf>>,

    /// Sets a custom config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    /// Turn debugging information on
    #[arg(long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// The operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(Option<String>),
    Delete(Option<String>),
    Go(Option<String>),
    Print(Option<String>),
    List,
    Help,
    Version,
    Completion(Option<PathBuf>),
    GenerateConfig,
    Usage,
}

impl Cli {
    /// An unknown first argument is taken as a bookmark name, surplus arguments are ignored.
    /// Completion is the exception: it accepts at most one directory.
    pub fn action(&self) -> CliResult<Action> {
        if let Some(name) = &self.add {
            return Ok(Action::Add(name.clone()));
        }
        if let Some(name) = &self.delete {
            return Ok(Action::Delete(name.clone()));
        }
        if let Some(name) = &self.go {
            return Ok(Action::Go(name.clone()));
        }
        if let Some(name) = &self.print {
            return Ok(Action::Print(name.clone()));
        }
        if self.list {
            return Ok(Action::List);
        }
        if self.help {
            return Ok(Action::Help);
        }
        if self.version {
            return Ok(Action::Version);
        }
        if let Some(path) = &self.completion {
            if self.name.is_some() || !self.extra.is_empty() {
                return Err(CliError::CompletionUsage);
            }
            return Ok(Action::Completion(path.clone()));
        }
        if self.generate_config {
            return Ok(Action::GenerateConfig);
        }
        Ok(match self.name.as_deref() {
            Some(name) if !name.is_empty() => Action::Go(Some(name.to_string())),
            _ => Action::Usage,
        })
    }
}
