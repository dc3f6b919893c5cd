// src/application/mod.rs
pub mod services;

pub use services::bookmark_service::BookmarkService;
