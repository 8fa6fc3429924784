/// Goal domain types
use crate::error::{Result, StudyError};
use crate::types::GoalId;
use serde::{Deserialize, Serialize};

/// A personal goal on the study room's goal list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique goal identifier
    pub id: GoalId,

    /// What the goal says
    pub text: String,

    /// Whether the goal has been ticked off
    pub completed: bool,

    /// Position in the list (ascending)
    pub order: i32,
}

impl Goal {
    /// Create a goal with a freshly generated ID
    pub fn create(new_goal: NewGoal) -> Self {
        Self {
            id: GoalId::generate(),
            text: new_goal.text,
            completed: new_goal.completed,
            order: new_goal.order,
        }
    }

    /// Merge a partial update into this goal
    ///
    /// Only the fields present in the patch change; the ID never does.
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

/// Data needed to create a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    /// What the goal says
    pub text: String,

    /// Initial completion state (default: false)
    #[serde(default)]
    pub completed: bool,

    /// Position in the list
    pub order: i32,
}

impl NewGoal {
    /// Create an open goal at the given position
    pub fn new(text: impl Into<String>, order: i32) -> Self {
        Self {
            text: text.into(),
            completed: false,
            order,
        }
    }

    /// Reject goals without any text
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(StudyError::invalid_input("goal text must not be blank"));
        }
        Ok(())
    }
}

/// Partial update for a goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    /// New text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// New completion state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    /// New position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl GoalPatch {
    /// Patch that only flips the completion state
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Reject a patch that would blank out the goal text
    pub fn validate(&self) -> Result<()> {
        match &self.text {
            Some(text) if text.trim().is_empty() => {
                Err(StudyError::invalid_input("goal text must not be blank"))
            }
            _ => Ok(()),
        }
    }
}
