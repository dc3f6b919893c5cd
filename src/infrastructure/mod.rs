pub mod repositories;
pub mod shell;
