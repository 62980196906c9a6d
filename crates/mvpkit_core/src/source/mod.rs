//! Post data source contracts and implementations.
//!
//! # Responsibility
//! - Define the read contract every post origin satisfies (`DataSource`).
//! - Define the writable local side used for caching (`PostStore`).
//! - Provide in-memory and SQLite stores plus the caching `PostRepository`.
//!
//! # Invariants
//! - One `get_posts` call resolves exactly once: one ordered collection or one error.
//! - Errors from a backend are surfaced to the caller, never swallowed.
//! - Post order is the order the origin delivered.

use crate::db::DbError;
use crate::model::post::Post;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use thiserror::Error;

pub mod memory;
pub mod repository;
pub mod sqlite;

pub type SourceResult<T> = Result<T, SourceError>;

/// Errors surfaced through a post source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Local SQLite store failure.
    #[error("{0}")]
    Db(Arc<DbError>),
    /// Failure reported by a remote or otherwise opaque backend.
    #[error("remote source error: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
    /// Stored post data could not be decoded.
    #[error("invalid post data: {0}")]
    InvalidData(String),
    /// Lock poisoning or blocking-task join failure.
    #[error("source internal error: {0}")]
    Internal(String),
}

impl SourceError {
    /// Wraps an error raised by a remote backend.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}

impl From<DbError> for SourceError {
    fn from(value: DbError) -> Self {
        Self::Db(Arc::new(value))
    }
}

impl From<rusqlite::Error> for SourceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::from(DbError::Sqlite(value))
    }
}

/// Read contract for any origin of posts (remote API, local cache, test double).
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Retrieves all posts in origin order.
    async fn get_posts(&self) -> SourceResult<Vec<Post>>;
}

/// Writable local post store used as a cache behind a remote source.
#[async_trait]
pub trait PostStore: DataSource {
    /// Replaces every stored post with `posts`, keeping their order.
    async fn replace_posts(&self, posts: &[Post]) -> SourceResult<()>;

    /// Removes every stored post.
    async fn delete_all_posts(&self) -> SourceResult<()>;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Arc<T> {
    async fn get_posts(&self) -> SourceResult<Vec<Post>> {
        (**self).get_posts().await
    }
}

/// Stream view of one `get_posts` call.
pub type PostStream<'a> = BoxStream<'a, SourceResult<Vec<Post>>>;

/// Adapts `source.get_posts()` into a stream.
///
/// The stream yields exactly one item (`Ok(posts)` or `Err`) and then ends.
/// Nothing runs until the stream is first polled.
pub fn post_stream<S>(source: &S) -> PostStream<'_>
where
    S: DataSource + ?Sized,
{
    stream::once(source.get_posts()).boxed()
}
