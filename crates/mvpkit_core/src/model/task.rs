//! Task domain model.
//!
//! # Responsibility
//! - Define the to-do record with stable identity and a mutable completion flag.
//! - Provide list-rendering helpers (`title_for_list`, `is_empty`).
//!
//! # Invariants
//! - `id` is never empty, whichever constructor produced the task.
//! - Equality and hashing cover `(id, title, description)` only; two tasks
//!   differing only in `completed` compare equal.
//! - `is_active()` is always `!is_completed()`.
//!
//! # See also
//! - `repo::task_record` for the storage mapping.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier of a task.
///
/// Generated ids are UUID v4 strings; imported ids may use any non-empty text.
pub type TaskId = String;

/// Validation failures for task construction and use-case input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    /// An explicitly supplied id was empty or whitespace-only.
    #[error("task id must not be empty")]
    EmptyId,
    /// Both title and description are absent or empty.
    #[error("task must have a title or a description")]
    EmptyTask,
}

/// One to-do item.
///
/// Storage concerns live in the repository layer; this type stays a plain value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    completed: bool,
}

impl Task {
    /// Creates a new active task with a generated id.
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self::new_with_completed(title, description, false)
    }

    /// Creates an active task reusing an existing id (copy of another task).
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyId` when `id` is empty or whitespace-only.
    pub fn with_id(
        title: Option<String>,
        description: Option<String>,
        id: impl Into<TaskId>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id_and_completed(title, description, id, false)
    }

    /// Creates a task with a generated id and explicit completion state.
    pub fn new_with_completed(
        title: Option<String>,
        description: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            completed,
        }
    }

    /// Fully explicit constructor, used by import and persistence paths.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyId` when `id` is empty or whitespace-only.
    pub fn with_id_and_completed(
        title: Option<String>,
        description: Option<String>,
        id: impl Into<TaskId>,
        completed: bool,
    ) -> Result<Self, TaskValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }

        Ok(Self {
            id,
            title,
            description,
            completed,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the text to show in a list row.
    ///
    /// Falls back to the description when the title is absent or empty.
    pub fn title_for_list(&self) -> Option<&str> {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => Some(title),
            _ => self.description.as_deref(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Returns whether both title and description are absent or empty.
    pub fn is_empty(&self) -> bool {
        is_blank(self.title.as_deref()) && is_blank(self.description.as_deref())
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.description == other.description
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.title.hash(state);
        self.description.hash(state);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task with title {}", self.title.as_deref().unwrap_or("null"))
    }
}

#[derive(Deserialize)]
struct RawTask {
    id: String,
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<RawTask> for Task {
    type Error = TaskValidationError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        Self::with_id_and_completed(raw.title, raw.description, raw.id, raw.completed)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
