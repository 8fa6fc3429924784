//! Goal list slice
//!
//! Goals are kept in a map keyed by ID; listing sorts by the user-chosen
//! `order` so the map's iteration order never leaks out.

use std::collections::HashMap;

use study_core::{Goal, GoalId, GoalPatch, NewGoal};

use crate::error::Result;

/// Backing table for goals
pub type GoalTable = HashMap<GoalId, Goal>;

/// All goals, ordered by `order` ascending
pub fn get_all(table: &GoalTable) -> Vec<Goal> {
    let mut goals: Vec<Goal> = table.values().cloned().collect();
    goals.sort_by_key(|goal| goal.order);
    goals
}

/// Get a single goal
pub fn get(table: &GoalTable, id: &GoalId) -> Option<Goal> {
    table.get(id).cloned()
}

/// Validate and insert a new goal
pub fn create(table: &mut GoalTable, new_goal: NewGoal) -> Result<Goal> {
    new_goal.validate()?;

    let goal = Goal::create(new_goal);
    table.insert(goal.id.clone(), goal.clone());
    Ok(goal)
}

/// Merge a patch into an existing goal
///
/// Returns `Ok(None)` when the goal does not exist.
pub fn update(table: &mut GoalTable, id: &GoalId, patch: GoalPatch) -> Result<Option<Goal>> {
    patch.validate()?;

    let Some(goal) = table.get_mut(id) else {
        return Ok(None);
    };
    goal.apply(patch);
    Ok(Some(goal.clone()))
}

/// Remove a goal, returning whether it existed
pub fn delete(table: &mut GoalTable, id: &GoalId) -> bool {
    table.remove(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_sorts_by_order() {
        let mut table = GoalTable::new();
        create(&mut table, NewGoal::new("third", 2)).unwrap();
        create(&mut table, NewGoal::new("first", 0)).unwrap();
        create(&mut table, NewGoal::new("second", 1)).unwrap();

        let texts: Vec<_> = get_all(&table).into_iter().map(|g| g.text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn update_missing_goal_returns_none() {
        let mut table = GoalTable::new();
        let result = update(&mut table, &GoalId::new("missing"), GoalPatch::completed(true));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn blank_goal_is_not_inserted() {
        let mut table = GoalTable::new();
        assert!(create(&mut table, NewGoal::new("  ", 0)).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn delete_reports_existence() {
        let mut table = GoalTable::new();
        let goal = create(&mut table, NewGoal::new("Outline", 0)).unwrap();

        assert!(delete(&mut table, &goal.id));
        assert!(!delete(&mut table, &goal.id));
    }
}
