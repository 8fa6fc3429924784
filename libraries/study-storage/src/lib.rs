//! Study Room Storage
//!
//! Volatile, single-process storage for goals and study sessions.
//!
//! # Architecture
//!
//! - **In-Memory**: everything lives in `HashMap`s behind async `RwLock`s and
//!   is gone when the process exits
//! - **Vertical Slicing**: each feature owns its own table and ordering logic
//! - **Trusting**: there are no users or permissions; every caller may mutate
//!
//! # Example
//!
//! ```rust
//! use study_core::{NewGoal, StudyStorage};
//! use study_storage::MemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = MemoryStorage::new();
//!
//! storage.create_goal(NewGoal::new("Finish problem set", 0)).await?;
//! let goals = storage.get_goals().await?;
//! assert_eq!(goals.len(), 1);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod goals;
pub mod sessions;

pub use context::MemoryStorage;
pub use error::StorageError;
