//! Storage trait for goals and study sessions

use crate::error::Result;
use crate::types::{Goal, GoalId, GoalPatch, NewGoal, NewStudySession, StudySession};
use async_trait::async_trait;

/// Storage backend for the study room
///
/// Implementations decide durability; the server only relies on the
/// ordering and lookup semantics documented per method.
#[async_trait]
pub trait StudyStorage: Send + Sync {
    // ========================================================================
    // Goals
    // ========================================================================

    /// Get all goals, ordered by `order` ascending
    async fn get_goals(&self) -> Result<Vec<Goal>>;

    /// Get goal by ID
    async fn get_goal(&self, id: &GoalId) -> Result<Option<Goal>>;

    /// Create a new goal with a generated ID
    async fn create_goal(&self, goal: NewGoal) -> Result<Goal>;

    /// Merge a partial update into a goal
    ///
    /// Returns `None` when no goal has this ID.
    async fn update_goal(&self, id: &GoalId, patch: GoalPatch) -> Result<Option<Goal>>;

    /// Delete a goal, returning whether it existed
    async fn delete_goal(&self, id: &GoalId) -> Result<bool>;

    // ========================================================================
    // Study sessions
    // ========================================================================

    /// Get all sessions, most recently completed first
    async fn get_sessions(&self) -> Result<Vec<StudySession>>;

    /// Record a session, stamping it as completed now
    async fn create_session(&self, session: NewStudySession) -> Result<StudySession>;
}
