// src/cli/bookmark_commands.rs
use crate::application::BookmarkService;
use crate::cli::completion::{generate_completion_script, save_completion_script};
use crate::cli::display::{paint, print_bookmarks};
use crate::cli::error::{CliError, CliResult};
use crate::domain::error::DomainError;
use crate::domain::repositories::repository::BookmarkRepository;
use crate::domain::shell::ShellLauncher;
use std::env;
use std::path::Path;
use termcolor::{Color, WriteColor};
use tracing::{debug, info, instrument};

fn require_name(name: Option<String>) -> CliResult<String> {
    name.ok_or(CliError::MissingName)
}

#[instrument(skip(service))]
pub fn add<R: BookmarkRepository>(
    service: &BookmarkService<R>,
    name: Option<String>,
) -> CliResult<()> {
    let name = require_name(name)?;
    let dir = env::current_dir()
        .map_err(|e| CliError::from(e).context("Error getting current directory"))?;
    add_dir(service, &name, &dir)
}

/// Adds `dir` under `name`; the name is checked before the store is touched.
pub fn add_dir<R: BookmarkRepository>(
    service: &BookmarkService<R>,
    name: &str,
    dir: &Path,
) -> CliResult<()> {
    let bookmark = service
        .add(name, dir)
        .map_err(|e| CliError::from(e).context("Error saving bookmark"))?;
    info!("Added bookmark: {}", bookmark);
    Ok(())
}

#[instrument(skip(service))]
pub fn delete<R: BookmarkRepository>(
    service: &BookmarkService<R>,
    name: Option<String>,
) -> CliResult<()> {
    let name = require_name(name)?;
    let removed = service
        .delete(&name)
        .map_err(|e| CliError::from(e).context("Error deleting bookmark"))?;
    if !removed {
        debug!("Bookmark '{}' was not stored, nothing deleted", name);
    }
    Ok(())
}

#[instrument(skip(service, launcher))]
pub fn go<R: BookmarkRepository>(
    service: &BookmarkService<R>,
    launcher: &dyn ShellLauncher,
    name: Option<String>,
) -> CliResult<()> {
    let name = require_name(name)?;
    service
        .go(&name, launcher)
        .map_err(|e| CliError::from(e).context("Error reading bookmarks"))
}

#[instrument(skip(out, service))]
pub fn print<R: BookmarkRepository>(
    out: &mut impl WriteColor,
    service: &BookmarkService<R>,
    name: Option<String>,
) -> CliResult<()> {
    let name = require_name(name)?;
    let bookmark = service
        .get(&name)
        .map_err(|e| CliError::from(e).context("Error reading bookmarks"))?;
    match bookmark {
        Some(bookmark) => writeln!(out, "{}", bookmark.path.display())?,
        None => {
            paint(
                out,
                Color::Red,
                &DomainError::BookmarkNotFound(name).to_string(),
            )?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[instrument(skip(out, service))]
pub fn list<R: BookmarkRepository>(
    out: &mut impl WriteColor,
    service: &BookmarkService<R>,
) -> CliResult<()> {
    let bookmarks = service
        .list()
        .map_err(|e| CliError::from(e).context("Error reading bookmarks"))?;
    print_bookmarks(out, &bookmarks)?;
    Ok(())
}

#[instrument(skip(out))]
pub fn completion(
    out: &mut impl WriteColor,
    target_dir: Option<&Path>,
    store_path: &Path,
) -> CliResult<()> {
    match target_dir {
        None => {
            eprintln!("# Outputting bash completion script for bm");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(bm --completion)\"              # one-time use");
            eprintln!("# - bm --completion ~/.bash_completion.d    # save as bm.bash");
            eprintln!("#");
            writeln!(out, "{}", generate_completion_script(store_path))?;
        }
        Some(dir) => {
            save_completion_script(dir, store_path)
                .map_err(|e| CliError::from(e).context("Error saving completion script"))?;
            writeln!(out, "Completion script saved to {}", dir.display())?;
        }
    }
    Ok(())
}
