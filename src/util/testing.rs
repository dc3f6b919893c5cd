// src/util/testing.rs

use std::cell::RefCell;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::{ENV_PREFIX, ENV_SHELL, ENV_STORE};
use crate::domain::error::DomainResult;
use crate::domain::shell::ShellLauncher;
use crate::infrastructure::repositories::export_file::ExportFileStore;

static TEST_LOGGING: OnceLock<()> = OnceLock::new();

/// Initializes test logging exactly once.
pub fn init_test_env() {
    TEST_LOGGING.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
    });
}

fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Restores the configuration environment variables on drop.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    store: Option<String>,
    prefix: Option<String>,
    shell: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            store: env::var(ENV_STORE).ok(),
            prefix: env::var(ENV_PREFIX).ok(),
            shell: env::var(ENV_SHELL).ok(),
        }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        for (key, value) in [
            (ENV_STORE, &self.store),
            (ENV_PREFIX, &self.prefix),
            (ENV_SHELL, &self.shell),
        ] {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }
}

/// Launcher that only records the directories it was asked to enter.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<PathBuf>>,
}

impl RecordingLauncher {
    pub fn launched(&self) -> Vec<PathBuf> {
        self.launched.borrow().clone()
    }
}

impl ShellLauncher for RecordingLauncher {
    fn launch(&self, dir: &Path) -> DomainResult<()> {
        self.launched.borrow_mut().push(dir.to_path_buf());
        Ok(())
    }
}

/// Creates an empty store in a fresh temporary directory.
pub fn temp_store() -> (TempDir, ExportFileStore) {
    init_test_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store =
        ExportFileStore::open(dir.path().join("sdirs")).expect("Failed to create temp store");
    (dir, store)
}
