//! Mapping between `Task` and its `tasks` table row.
//!
//! # Invariants
//! - `completed` is stored as `0`/`1`; any other value is invalid data.
//! - Converting a record back into a `Task` runs the model's id validation.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, RepoResult};
use rusqlite::Row;

/// Storage shape of one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: i64,
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().map(str::to_string),
            description: task.description().map(str::to_string),
            completed: bool_to_int(task.is_completed()),
        }
    }

    /// Reads a record from a row selected with the `id, title, description, completed` columns.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            completed: row.get("completed")?,
        })
    }

    /// Converts the record into a domain task.
    ///
    /// # Errors
    /// - `RepoError::InvalidData` when `completed` is not `0`/`1` or the id is empty.
    pub fn into_task(self) -> RepoResult<Task> {
        let completed = match self.completed {
            0 => false,
            1 => true,
            other => {
                return Err(RepoError::InvalidData(format!(
                    "invalid completed value `{other}` in tasks.completed"
                )));
            }
        };

        Task::with_id_and_completed(self.title, self.description, self.id, completed).map_err(
            |err| RepoError::InvalidData(format!("invalid task row in tasks.id: {err}")),
        )
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
