//! AI Kanban Server Library
//!
//! This library exports the core modules used by the server binary and by
//! integration tests.

pub mod ai;
pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::AppError;
