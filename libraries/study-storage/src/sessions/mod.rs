//! Study session history slice

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use study_core::{NewStudySession, SessionId, StudySession};

use crate::error::Result;

/// Backing table for sessions
pub type SessionTable = HashMap<SessionId, StudySession>;

/// All sessions, most recently completed first
pub fn get_all(table: &SessionTable) -> Vec<StudySession> {
    let mut sessions: Vec<StudySession> = table.values().cloned().collect();
    sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    sessions
}

/// Validate and record a session completed at `completed_at`
pub fn create(
    table: &mut SessionTable,
    new_session: NewStudySession,
    completed_at: DateTime<Utc>,
) -> Result<StudySession> {
    new_session.validate()?;

    let session = StudySession::complete_at(new_session, completed_at);
    table.insert(session.id.clone(), session.clone());
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn newest_session_first() {
        let mut table = SessionTable::new();
        let now = Utc::now();
        create(&mut table, NewStudySession::new(25, "library", "rain"), now - Duration::hours(2)).unwrap();
        create(&mut table, NewStudySession::new(50, "space", "none"), now).unwrap();
        create(&mut table, NewStudySession::new(15, "forest", "fire"), now - Duration::hours(1)).unwrap();

        let durations: Vec<_> = get_all(&table).into_iter().map(|s| s.duration).collect();
        assert_eq!(durations, vec![50, 15, 25]);
    }

    #[test]
    fn zero_minute_session_is_rejected() {
        let mut table = SessionTable::new();
        let result = create(&mut table, NewStudySession::new(0, "library", "rain"), Utc::now());
        assert!(result.is_err());
        assert!(table.is_empty());
    }
}
