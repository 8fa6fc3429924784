//! `StudyStorage` implementation over the in-memory slices

use async_trait::async_trait;
use chrono::Utc;
use study_core::{
    Goal, GoalId, GoalPatch, NewGoal, NewStudySession, Result, StudySession, StudyStorage,
};
use tokio::sync::RwLock;

use crate::goals::{self, GoalTable};
use crate::sessions::{self, SessionTable};

/// Volatile storage shared by all request handlers
///
/// Each table has its own lock so goal edits never wait on session writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    goals: RwLock<GoalTable>,
    sessions: RwLock<SessionTable>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudyStorage for MemoryStorage {
    async fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(goals::get_all(&*self.goals.read().await))
    }

    async fn get_goal(&self, id: &GoalId) -> Result<Option<Goal>> {
        Ok(goals::get(&*self.goals.read().await, id))
    }

    async fn create_goal(&self, goal: NewGoal) -> Result<Goal> {
        let goal = goals::create(&mut *self.goals.write().await, goal)?;
        tracing::debug!(goal_id = %goal.id, "Created goal");
        Ok(goal)
    }

    async fn update_goal(&self, id: &GoalId, patch: GoalPatch) -> Result<Option<Goal>> {
        Ok(goals::update(&mut *self.goals.write().await, id, patch)?)
    }

    async fn delete_goal(&self, id: &GoalId) -> Result<bool> {
        let deleted = goals::delete(&mut *self.goals.write().await, id);
        if deleted {
            tracing::debug!(goal_id = %id, "Deleted goal");
        }
        Ok(deleted)
    }

    async fn get_sessions(&self) -> Result<Vec<StudySession>> {
        Ok(sessions::get_all(&*self.sessions.read().await))
    }

    async fn create_session(&self, session: NewStudySession) -> Result<StudySession> {
        let session = sessions::create(&mut *self.sessions.write().await, session, Utc::now())?;
        tracing::debug!(
            session_id = %session.id,
            duration = session.duration,
            "Recorded study session"
        );
        Ok(session)
    }
}
