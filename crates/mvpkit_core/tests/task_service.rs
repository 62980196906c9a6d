use mvpkit_core::db::open_db_in_memory;
use mvpkit_core::{
    RepoError, SqliteTaskRepository, TaskFilter, TaskService, TaskStatistics,
    TaskValidationError,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn add_task_persists_active_task() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let task = service.add_task(text("Buy milk"), text("2%")).unwrap();
    let loaded = service.get_task(task.id()).unwrap().unwrap();

    assert_eq!(loaded, task);
    assert!(loaded.is_active());
}

#[test]
fn add_task_rejects_empty_task() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let err = service.add_task(text(""), None).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::EmptyTask)
    ));
    assert!(service.list_tasks(TaskFilter::All).unwrap().is_empty());
}

#[test]
fn update_task_keeps_id_and_completion() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let task = service.add_task(text("draft"), None).unwrap();
    service.complete_task(task.id()).unwrap();

    let updated = service
        .update_task(task.id(), text("final"), text("details"))
        .unwrap();
    assert_eq!(updated.id(), task.id());
    assert!(updated.is_completed());

    let loaded = service.get_task(task.id()).unwrap().unwrap();
    assert_eq!(loaded.title(), Some("final"));
    assert!(loaded.is_completed());
}

#[test]
fn update_missing_task_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let err = service.update_task("nope", text("x"), None).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "nope"));
}

#[test]
fn update_to_empty_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let task = service.add_task(text("keep me"), None).unwrap();
    let err = service.update_task(task.id(), None, text("")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::EmptyTask)
    ));
    assert_eq!(
        service.get_task(task.id()).unwrap().unwrap().title(),
        Some("keep me")
    );
}

#[test]
fn complete_activate_and_clear_flow() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let first = service.add_task(text("first"), None).unwrap();
    let second = service.add_task(text("second"), None).unwrap();
    let third = service.add_task(text("third"), None).unwrap();

    service.complete_task(first.id()).unwrap();
    service.complete_task(second.id()).unwrap();
    service.activate_task(second.id()).unwrap();

    let completed = service.list_tasks(TaskFilter::Completed).unwrap();
    assert_eq!(completed, vec![first.clone()]);

    let active = service.list_tasks(TaskFilter::Active).unwrap();
    assert_eq!(active, vec![second.clone(), third.clone()]);

    assert_eq!(
        service.statistics().unwrap(),
        TaskStatistics {
            active: 2,
            completed: 1
        }
    );

    assert_eq!(service.clear_completed_tasks().unwrap(), 1);
    assert!(service.get_task(first.id()).unwrap().is_none());
    assert_eq!(service.statistics().unwrap().total(), 2);
}

#[test]
fn delete_task_removes_it() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let task = service.add_task(None, text("only description")).unwrap();
    service.delete_task(task.id()).unwrap();

    assert!(service.get_task(task.id()).unwrap().is_none());
    assert!(matches!(
        service.delete_task(task.id()).unwrap_err(),
        RepoError::NotFound(_)
    ));
}
