/// Study session domain types
use crate::error::{Result, StudyError};
use crate::types::SessionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed timer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    /// Unique session identifier
    pub id: SessionId,

    /// Timer length in minutes
    pub duration: i32,

    /// Catalog ID of the background shown during the session
    pub background: String,

    /// Catalog ID of the soundscape playing during the session
    pub soundscape: String,

    /// When the session finished
    pub completed_at: DateTime<Utc>,
}

impl StudySession {
    /// Record a session as completed now
    pub fn complete(new_session: NewStudySession) -> Self {
        Self::complete_at(new_session, Utc::now())
    }

    /// Record a session with an explicit completion time
    pub fn complete_at(new_session: NewStudySession, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(),
            duration: new_session.duration,
            background: new_session.background,
            soundscape: new_session.soundscape,
            completed_at,
        }
    }
}

/// Data needed to record a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudySession {
    /// Timer length in minutes
    pub duration: i32,

    /// Background catalog ID
    pub background: String,

    /// Soundscape catalog ID
    pub soundscape: String,
}

impl NewStudySession {
    pub fn new(duration: i32, background: impl Into<String>, soundscape: impl Into<String>) -> Self {
        Self {
            duration,
            background: background.into(),
            soundscape: soundscape.into(),
        }
    }

    /// Sessions must have run for at least a minute
    pub fn validate(&self) -> Result<()> {
        if self.duration <= 0 {
            return Err(StudyError::invalid_input(format!(
                "session duration must be positive, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}
