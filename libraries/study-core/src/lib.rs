//! Study Room Core
//!
//! Platform-agnostic core types, traits, and error handling for Study Room.
//!
//! This crate provides the foundational building blocks shared by the storage
//! layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Goal`, `StudySession`, and the background/soundscape catalog
//! - **Core Traits**: `StudyStorage`
//! - **Error Handling**: Unified `StudyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use study_core::types::{NewGoal, NewStudySession};
//! use study_core::catalog;
//!
//! // Describe a goal before it is stored
//! let goal = NewGoal::new("Read chapter 4", 0);
//! assert!(goal.validate().is_ok());
//!
//! // Record a finished 25 minute session in the library with rain
//! let rain = catalog::soundscape("rain").unwrap();
//! let session = NewStudySession::new(25, "library", rain.id);
//! assert!(session.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StudyError};
pub use storage::StudyStorage;

pub use types::{
    Goal, GoalId, GoalPatch, NewGoal, NewStudySession, SessionId, StudySession,
};
