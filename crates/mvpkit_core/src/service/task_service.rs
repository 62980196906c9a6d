//! Task use-case service.
//!
//! # Responsibility
//! - Provide add/edit/complete/activate/clear entry points for task callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Empty tasks (no title and no description) are never persisted.
//! - Editing a task keeps its id and completion state.
//! - Service layer remains storage-agnostic.

use crate::model::task::{Task, TaskValidationError};
use crate::repo::task_repo::{RepoError, RepoResult, TaskFilter, TaskListQuery, TaskRepository};
use log::info;
use serde::Serialize;

/// Active/completed counters for the statistics view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    pub active: usize,
    pub completed: usize,
}

impl TaskStatistics {
    pub fn total(&self) -> usize {
        self.active + self.completed
    }
}

/// Use-case service wrapper for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and stores a new active task.
    ///
    /// # Errors
    /// - `RepoError::Validation(EmptyTask)` when title and description are both blank.
    pub fn add_task(
        &self,
        title: Option<String>,
        description: Option<String>,
    ) -> RepoResult<Task> {
        let task = Task::new(title, description);
        if task.is_empty() {
            return Err(TaskValidationError::EmptyTask.into());
        }

        self.repo.save_task(&task)?;
        info!("event=task_add module=service status=ok");
        Ok(task)
    }

    /// Replaces title and description of an existing task.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_task(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
    ) -> RepoResult<Task> {
        let existing = self
            .repo
            .get_task(id)?
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        let task =
            Task::with_id_and_completed(title, description, id, existing.is_completed())?;
        if task.is_empty() {
            return Err(TaskValidationError::EmptyTask.into());
        }

        self.repo.save_task(&task)?;
        Ok(task)
    }

    /// Gets one task by id.
    pub fn get_task(&self, id: &str) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists tasks passing `filter`, in creation order.
    pub fn list_tasks(&self, filter: TaskFilter) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks(&TaskListQuery {
            filter,
            ..TaskListQuery::default()
        })
    }

    /// Marks a task completed.
    pub fn complete_task(&self, id: &str) -> RepoResult<()> {
        self.repo.set_completed(id, true)
    }

    /// Marks a task active again.
    pub fn activate_task(&self, id: &str) -> RepoResult<()> {
        self.repo.set_completed(id, false)
    }

    /// Removes all completed tasks and returns how many were removed.
    pub fn clear_completed_tasks(&self) -> RepoResult<usize> {
        let removed = self.repo.clear_completed()?;
        info!("event=task_clear_completed module=service status=ok removed={removed}");
        Ok(removed)
    }

    /// Deletes one task by id.
    pub fn delete_task(&self, id: &str) -> RepoResult<()> {
        self.repo.delete_task(id)
    }

    /// Counts active and completed tasks.
    pub fn statistics(&self) -> RepoResult<TaskStatistics> {
        let tasks = self.repo.list_tasks(&TaskListQuery::default())?;
        let count = |filter: TaskFilter| tasks.iter().filter(|task| filter.matches(task)).count();
        Ok(TaskStatistics {
            active: count(TaskFilter::Active),
            completed: count(TaskFilter::Completed),
        })
    }
}
