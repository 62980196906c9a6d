use mvpkit_core::{Task, TaskValidationError};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn hash_of(task: &Task) -> u64 {
    let mut hasher = DefaultHasher::new();
    task.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_task_gets_generated_uuid_and_starts_active() {
    let task = Task::new(text("Buy milk"), text("2%"));

    assert!(!task.id().is_empty());
    let parsed = Uuid::parse_str(task.id()).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
    assert!(!task.is_completed());
    assert!(task.is_active());
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<String> = (0..64)
        .map(|_| Task::new(None, None).id().to_string())
        .collect();
    assert_eq!(ids.len(), 64);
}

#[test]
fn new_with_completed_generates_id_and_keeps_flag() {
    let task = Task::new_with_completed(text("Done already"), None, true);

    assert!(Uuid::parse_str(task.id()).is_ok());
    assert!(task.is_completed());
    assert!(!task.is_active());
}

#[test]
fn fully_explicit_constructor_keeps_all_fields() {
    let task = Task::with_id_and_completed(text("Clean"), text("House"), "id-1", true).unwrap();

    assert_eq!(task.id(), "id-1");
    assert_eq!(task.title(), Some("Clean"));
    assert_eq!(task.description(), Some("House"));
    assert!(task.is_completed());
    assert!(!task.is_active());
}

#[test]
fn explicit_id_constructor_starts_active() {
    let task = Task::with_id(text("Copy"), None, "copied-id").unwrap();

    assert_eq!(task.id(), "copied-id");
    assert!(task.is_active());
}

#[test]
fn explicit_empty_or_blank_id_is_rejected() {
    assert_eq!(
        Task::with_id(text("x"), None, "").unwrap_err(),
        TaskValidationError::EmptyId
    );
    assert_eq!(
        Task::with_id_and_completed(text("x"), None, "   ", true).unwrap_err(),
        TaskValidationError::EmptyId
    );
}

#[test]
fn equality_and_hash_ignore_completion() {
    let active = Task::with_id_and_completed(text("Clean"), text("House"), "id-1", false).unwrap();
    let done = Task::with_id_and_completed(text("Clean"), text("House"), "id-1", true).unwrap();

    assert_eq!(active, done);
    assert_eq!(hash_of(&active), hash_of(&done));
}

#[test]
fn equality_covers_id_title_and_description() {
    let base = Task::with_id(text("Clean"), text("House"), "id-1").unwrap();

    assert_ne!(base, Task::with_id(text("Clean"), text("House"), "id-2").unwrap());
    assert_ne!(base, Task::with_id(text("Wash"), text("House"), "id-1").unwrap());
    assert_ne!(base, Task::with_id(text("Clean"), None, "id-1").unwrap());
}

#[test]
fn is_active_tracks_set_completed() {
    let mut task = Task::new(text("Toggle"), None);

    for completed in [true, true, false, true, false, false] {
        task.set_completed(completed);
        assert_eq!(task.is_completed(), completed);
        assert_eq!(task.is_active(), !task.is_completed());
    }
}

#[test]
fn title_for_list_prefers_non_empty_title() {
    assert_eq!(
        Task::new(text("Buy milk"), text("2%")).title_for_list(),
        Some("Buy milk")
    );
    assert_eq!(Task::new(text(""), text("2%")).title_for_list(), Some("2%"));
    assert_eq!(Task::new(None, text("2%")).title_for_list(), Some("2%"));
    assert_eq!(Task::new(None, None).title_for_list(), None);
}

#[test]
fn is_empty_requires_both_fields_blank() {
    assert!(Task::new(None, text("")).is_empty());
    assert!(Task::new(text(""), None).is_empty());
    assert!(Task::new(None, None).is_empty());
    assert!(!Task::new(text("x"), None).is_empty());
    assert!(!Task::new(None, text("y")).is_empty());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::with_id_and_completed(text("Clean"), None, "id-1", true).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "id-1");
    assert_eq!(json["title"], "Clean");
    assert!(json["description"].is_null());
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
    assert!(decoded.is_completed());
}

#[test]
fn deserialize_rejects_empty_id() {
    let value = serde_json::json!({
        "id": "",
        "title": "bad",
        "description": null,
        "completed": false
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("task id must not be empty"),
        "unexpected error: {err}"
    );
}
