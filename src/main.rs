// src/main.rs
use bm::cli::args::{Action, Cli};
use bm::cli::error::CliError;
use bm::cli::{execute_command, report_error};
use bm::config::{load_settings, Settings};
use bm::exitcode;
use bm::infrastructure::repositories::export_file::ExportFileStore;
use clap::Parser;
use crossterm::style::Stylize;
use std::io::IsTerminal;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info, warn};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

fn main() {
    let cli = Cli::try_parse();
    let no_color = cli.as_ref().map(|c| c.no_color).unwrap_or(false);

    // human output goes to stdout, colored only on a terminal
    let color_choice = if no_color || !std::io::stdout().is_terminal() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let cli = match cli {
        Ok(cli) => cli,
        Err(e) => {
            setup_logging(0, no_color);
            // argument errors are reported like any other failed command
            let rendered = e.render().to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            let err = CliError::InvalidUsage(first_line.trim_start_matches("error: ").to_string());
            debug!("Argument parsing failed: {}", e);
            if let Err(io_err) = report_error(&mut stdout, &err) {
                eprintln!("{}", format!("Error: {}", io_err).red());
            }
            return;
        }
    };

    setup_logging(cli.debug, no_color);

    let settings = load_settings(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!("Failed to load settings: {}. Using environment only.", e);
        Settings::from_env()
    });

    let action = match cli.action() {
        Ok(action) => action,
        Err(e) => {
            if let Err(io_err) = report_error(&mut stdout, &e) {
                eprintln!("{}", format!("Error: {}", io_err).red());
            }
            return;
        }
    };
    let store = if action == Action::GenerateConfig {
        ExportFileStore::new(&settings.store_path)
    } else {
        match ExportFileStore::open(&settings.store_path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!(
                    "{}: {}: {}",
                    "Cannot create bookmark store".red(),
                    settings.store_path.display(),
                    e
                );
                std::process::exit(exitcode::CANTCREAT);
            }
        }
    };

    if let Err(e) = execute_command(&mut stdout, action, &settings, store) {
        debug!("Command failed: {:?}", e);
        if let Err(io_err) = report_error(&mut stdout, &e) {
            eprintln!("{}", format!("Error: {}", io_err).red());
        }
    }
}

fn setup_logging(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is --debug --debug --debug");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
