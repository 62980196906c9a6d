//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and completion APIs over `tasks` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save_task` is an upsert keyed by task id; creation order is preserved.
//! - Listing order is creation order, ties broken by insertion rowid.
//! - Read paths go through `TaskRecord::into_task` and never mask bad rows.

use crate::db::DbError;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::repo::task_record::{bool_to_int, TaskRecord};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    completed
FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(#[from] TaskValidationError),
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("invalid persisted task data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Completion filter used by list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Returns whether `task` passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.is_active(),
            Self::Completed => task.is_completed(),
        }
    }
}

/// Query options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    pub filter: TaskFilter,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for task persistence.
pub trait TaskRepository {
    fn save_task(&self, task: &Task) -> RepoResult<()>;
    fn get_task(&self, id: &str) -> RepoResult<Option<Task>>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    fn set_completed(&self, id: &str, completed: bool) -> RepoResult<()>;
    fn clear_completed(&self) -> RepoResult<usize>;
    fn delete_task(&self, id: &str) -> RepoResult<()>;
    fn delete_all_tasks(&self) -> RepoResult<usize>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn save_task(&self, task: &Task) -> RepoResult<()> {
        let record = TaskRecord::from_task(task);

        self.conn.execute(
            "INSERT INTO tasks (id, title, description, completed)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                completed = excluded.completed,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                record.id,
                record.title,
                record.description,
                record.completed,
            ],
        )?;

        debug!("event=task_save module=repo status=ok");
        Ok(())
    }

    fn get_task(&self, id: &str) -> RepoResult<Option<Task>> {
        let record = self
            .conn
            .query_row(
                &format!("{TASK_SELECT_SQL} WHERE id = ?1;"),
                [id],
                |row| TaskRecord::from_row(row),
            )
            .optional()?;

        record.map(TaskRecord::into_task).transpose()
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = format!("{TASK_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        match query.filter {
            TaskFilter::All => {}
            TaskFilter::Active => sql.push_str(" AND completed = 0"),
            TaskFilter::Completed => sql.push_str(" AND completed = 1"),
        }

        sql.push_str(" ORDER BY created_at ASC, rowid ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(TaskRecord::from_row(row)?.into_task()?);
        }

        Ok(tasks)
    }

    fn set_completed(&self, id: &str, completed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                completed = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![bool_to_int(completed), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn clear_completed(&self) -> RepoResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE completed = 1;", [])?;
        debug!("event=task_clear_completed module=repo status=ok removed={removed}");
        Ok(removed)
    }

    fn delete_task(&self, id: &str) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn delete_all_tasks(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM tasks;", [])?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::TaskFilter;
    use crate::model::task::Task;

    #[test]
    fn filter_matches_follow_completion_state() {
        let mut task = Task::new(Some("toggle".to_string()), None);

        assert!(TaskFilter::All.matches(&task));
        assert!(TaskFilter::Active.matches(&task));
        assert!(!TaskFilter::Completed.matches(&task));

        task.set_completed(true);
        assert!(TaskFilter::All.matches(&task));
        assert!(!TaskFilter::Active.matches(&task));
        assert!(TaskFilter::Completed.matches(&task));
    }
}
