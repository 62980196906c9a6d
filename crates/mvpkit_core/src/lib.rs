//! Core domain logic for the mvpkit task and post sample.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod source;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LoggingStatus};
pub use model::post::{Post, PostId};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::task_record::TaskRecord;
pub use repo::task_repo::{
    RepoError, RepoResult, SqliteTaskRepository, TaskFilter, TaskListQuery, TaskRepository,
};
pub use service::task_service::{TaskService, TaskStatistics};
pub use source::memory::InMemoryPostStore;
pub use source::repository::PostRepository;
pub use source::sqlite::SqlitePostStore;
pub use source::{post_stream, DataSource, PostStore, PostStream, SourceError, SourceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
