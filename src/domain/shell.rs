// src/domain/shell.rs
use crate::domain::error::DomainResult;
use std::path::Path;

/// Hands the terminal over to an interactive shell started in a directory.
pub trait ShellLauncher: std::fmt::Debug {
    /// Changes the process working directory to `dir`, runs the shell attached to the
    /// current stdin/stdout/stderr and returns once it has exited.
    fn launch(&self, dir: &Path) -> DomainResult<()>;
}
