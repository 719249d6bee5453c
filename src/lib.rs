//! Library Management System
//!
//! A REST JSON API over books, members, lendings, fines, reservations and
//! notifications. Every resource is served by the same generic store and
//! endpoint factory; the entities only declare their shapes and constraints.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
