//! Study Room Server Library
//!
//! REST API for study goals, completed study sessions and the ambient
//! catalog, backed by volatile in-memory storage.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
