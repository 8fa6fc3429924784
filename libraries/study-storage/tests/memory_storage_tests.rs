use std::sync::Arc;

use study_core::{GoalId, GoalPatch, NewGoal, NewStudySession, StudyError, StudyStorage};
use study_storage::MemoryStorage;

#[tokio::test]
async fn test_create_and_list_goals() {
    let storage = MemoryStorage::new();

    storage.create_goal(NewGoal::new("Second", 1)).await.unwrap();
    let first = storage.create_goal(NewGoal::new("First", 0)).await.unwrap();

    let goals = storage.get_goals().await.unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, first.id);
    assert!(!goals[0].completed);
}

#[tokio::test]
async fn test_get_goal_by_id() {
    let storage = MemoryStorage::new();
    let goal = storage.create_goal(NewGoal::new("Read", 0)).await.unwrap();

    let found = storage.get_goal(&goal.id).await.unwrap();
    assert_eq!(found, Some(goal));

    let missing = storage.get_goal(&GoalId::new("nope")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_goal_merges_fields() {
    let storage = MemoryStorage::new();
    let goal = storage.create_goal(NewGoal::new("Draft essay", 3)).await.unwrap();

    let updated = storage
        .update_goal(&goal.id, GoalPatch::completed(true))
        .await
        .unwrap()
        .expect("goal exists");

    assert!(updated.completed);
    assert_eq!(updated.text, "Draft essay");
    assert_eq!(updated.order, 3);

    // Stored copy reflects the update
    let stored = storage.get_goal(&goal.id).await.unwrap().unwrap();
    assert!(stored.completed);
}

#[tokio::test]
async fn test_update_missing_goal() {
    let storage = MemoryStorage::new();
    let result = storage
        .update_goal(&GoalId::new("ghost"), GoalPatch::completed(true))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_invalid_goal_is_rejected() {
    let storage = MemoryStorage::new();
    let err = storage.create_goal(NewGoal::new("", 0)).await.unwrap_err();
    assert!(matches!(err, StudyError::InvalidInput(_)));
    assert!(storage.get_goals().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_goal() {
    let storage = MemoryStorage::new();
    let goal = storage.create_goal(NewGoal::new("Tidy desk", 0)).await.unwrap();

    assert!(storage.delete_goal(&goal.id).await.unwrap());
    assert!(!storage.delete_goal(&goal.id).await.unwrap());
    assert!(storage.get_goals().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sessions_newest_first() {
    let storage = MemoryStorage::new();

    let older = storage
        .create_session(NewStudySession::new(25, "library", "rain"))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = storage
        .create_session(NewStudySession::new(50, "forest", "waves"))
        .await
        .unwrap();

    let sessions = storage.get_sessions().await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, newer.id);
    assert_eq!(sessions[1].id, older.id);
    assert!(sessions[0].completed_at >= sessions[1].completed_at);
}

#[tokio::test]
async fn test_concurrent_goal_creation() {
    let storage = Arc::new(MemoryStorage::new());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let storage = Arc::clone(&storage);
            tokio::spawn(async move {
                storage
                    .create_goal(NewGoal::new(format!("Goal {i}"), i))
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let goals = storage.get_goals().await.unwrap();
    assert_eq!(goals.len(), 20);
    assert!(goals.windows(2).all(|w| w[0].order <= w[1].order));
}
