mod goal;
mod ids;
mod session;

pub use goal::{Goal, GoalPatch, NewGoal};
pub use ids::{GoalId, SessionId};
pub use session::{NewStudySession, StudySession};
