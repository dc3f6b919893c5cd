// src/infrastructure/shell.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::shell::ShellLauncher;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Starts `program` as an interactive shell inheriting the terminal.
#[derive(Debug, Clone)]
pub struct InteractiveShell {
    program: String,
}

impl InteractiveShell {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ShellLauncher for InteractiveShell {
    #[instrument(level = "debug", skip(self), fields(program = %self.program))]
    fn launch(&self, dir: &Path) -> DomainResult<()> {
        std::env::set_current_dir(dir)
            .map_err(|e| DomainError::ChangeDirectory(e.to_string()))?;

        let status = Command::new(&self.program)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| DomainError::ShellLaunch(format!("{}: {}", self.program, e)))?;

        // the user's last command decides the status of an interactive shell
        if !status.success() {
            debug!("Shell exited with status: {:?}", status.code());
        }
        Ok(())
    }
}
