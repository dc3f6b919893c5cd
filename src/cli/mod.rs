// src/cli/mod.rs
use crate::application::BookmarkService;
use crate::cli::args::Action;
use crate::cli::display::{print_error, print_usage, print_version, print_warning};
use crate::cli::error::{CliError, CliResult};
use crate::config::{generate_default_config, Settings};
use crate::domain::repositories::repository::BookmarkRepository;
use crate::domain::shell::ShellLauncher;
use crate::infrastructure::repositories::export_file::ExportFileStore;
use crate::infrastructure::shell::InteractiveShell;
use termcolor::WriteColor;
use tracing::instrument;

pub mod args;
pub mod bookmark_commands;
pub mod completion;
pub mod display;
pub mod error;

/// Runs `action` against the store configured in `settings`.
pub fn execute_command(
    out: &mut impl WriteColor,
    action: Action,
    settings: &Settings,
    store: ExportFileStore,
) -> CliResult<()> {
    let service = BookmarkService::new(store);
    let launcher = InteractiveShell::new(settings.shell.as_str());
    dispatch(out, action, settings, &service, &launcher)
}

#[instrument(skip(out, settings, service, launcher))]
pub fn dispatch<R: BookmarkRepository>(
    out: &mut impl WriteColor,
    action: Action,
    settings: &Settings,
    service: &BookmarkService<R>,
    launcher: &dyn ShellLauncher,
) -> CliResult<()> {
    match action {
        Action::Add(name) => bookmark_commands::add(service, name),
        Action::Delete(name) => bookmark_commands::delete(service, name),
        Action::Go(name) => bookmark_commands::go(service, launcher, name),
        Action::Print(name) => bookmark_commands::print(out, service, name),
        Action::List => bookmark_commands::list(out, service),
        Action::Completion(dir) => {
            bookmark_commands::completion(out, dir.as_deref(), service.repository().location())
        }
        Action::GenerateConfig => {
            writeln!(out, "{}", generate_default_config(settings))?;
            Ok(())
        }
        Action::Version => Ok(print_version(out)?),
        Action::Help | Action::Usage => Ok(print_usage(out)?),
    }
}

/// Prints a failed command the way the user sees it; the process still exits normally.
pub fn report_error(out: &mut impl WriteColor, err: &CliError) -> std::io::Result<()> {
    match err {
        CliError::MissingName | CliError::InvalidUsage(_) => {
            print_error(out, &err.to_string())?;
            print_usage(out)
        }
        err if err.is_warning() => print_warning(out, &err.to_string()),
        err => print_error(out, &err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{temp_store, RecordingLauncher};
    use std::path::PathBuf;
    use termcolor::Buffer;

    fn settings(store: &ExportFileStore) -> Settings {
        Settings {
            store_path: store.location().to_path_buf(),
            shell: "true".to_string(),
        }
    }

    fn text(buf: Buffer) -> String {
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn given_missing_name_when_reported_then_message_and_usage() {
        let mut buf = Buffer::no_color();

        report_error(&mut buf, &CliError::MissingName).unwrap();

        let out = text(buf);
        assert!(out.starts_with("Missing bookmark name\nUsage: bm"));
    }

    #[test]
    fn given_go_without_name_when_dispatch_then_missing_name() {
        let (_dir, store) = temp_store();
        let settings = settings(&store);
        let service = BookmarkService::new(store);
        let launcher = RecordingLauncher::default();
        let mut buf = Buffer::no_color();

        let result = dispatch(&mut buf, Action::Go(None), &settings, &service, &launcher);

        assert!(matches!(result, Err(CliError::MissingName)));
    }

    #[test]
    fn given_unknown_bookmark_when_go_reported_then_warning_and_no_launch() {
        let (_dir, store) = temp_store();
        let settings = settings(&store);
        let service = BookmarkService::new(store);
        let launcher = RecordingLauncher::default();
        let mut buf = Buffer::no_color();

        let err = dispatch(
            &mut buf,
            Action::Go(Some("nope".to_string())),
            &settings,
            &service,
            &launcher,
        )
        .unwrap_err();
        report_error(&mut buf, &err).unwrap();

        assert_eq!(text(buf), "WARNING: Bookmark 'nope' does not exist\n");
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn given_added_bookmark_when_go_then_launcher_gets_directory() {
        let (dir, store) = temp_store();
        let settings = settings(&store);
        let service = BookmarkService::new(store);
        service.add("home", dir.path()).unwrap();
        let launcher = RecordingLauncher::default();
        let mut buf = Buffer::no_color();

        dispatch(
            &mut buf,
            Action::Go(Some("home".to_string())),
            &settings,
            &service,
            &launcher,
        )
        .unwrap();

        assert_eq!(launcher.launched(), vec![PathBuf::from(dir.path())]);
    }

    #[test]
    fn given_completion_action_when_dispatch_then_script_references_store() {
        let (_dir, store) = temp_store();
        let settings = settings(&store);
        let location = store.location().display().to_string();
        let service = BookmarkService::new(store);
        let launcher = RecordingLauncher::default();
        let mut buf = Buffer::no_color();

        dispatch(&mut buf, Action::Completion(None), &settings, &service, &launcher).unwrap();

        let out = text(buf);
        assert!(out.contains(&location));
        assert!(out.contains("complete -F _bm bm"));
    }

    #[test]
    fn given_usage_action_when_dispatch_then_usage_printed() {
        let (_dir, store) = temp_store();
        let settings = settings(&store);
        let service = BookmarkService::new(store);
        let launcher = RecordingLauncher::default();
        let mut buf = Buffer::no_color();

        dispatch(&mut buf, Action::Usage, &settings, &service, &launcher).unwrap();

        assert!(text(buf).contains("Quick access to saved directories"));
    }

    #[test]
    fn given_io_error_when_reported_then_plain_message() {
        let mut buf = Buffer::no_color();
        let err = CliError::from(std::io::Error::other("disk full")).context("Error saving bookmark");

        report_error(&mut buf, &err).unwrap();

        assert_eq!(text(buf), "Error saving bookmark: disk full\n");
    }
}
