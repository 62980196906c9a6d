//! In-memory post store.

use crate::model::post::Post;
use crate::source::{DataSource, PostStore, SourceError, SourceResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory post store.
///
/// Clones share the same underlying posts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `posts`.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> SourceError {
    SourceError::Internal(format!("post store lock poisoned: {err}"))
}

#[async_trait]
impl DataSource for InMemoryPostStore {
    async fn get_posts(&self) -> SourceResult<Vec<Post>> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts.clone())
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn replace_posts(&self, posts: &[Post]) -> SourceResult<()> {
        let mut stored = self.posts.write().map_err(poisoned)?;
        *stored = posts.to_vec();
        Ok(())
    }

    async fn delete_all_posts(&self) -> SourceResult<()> {
        self.posts.write().map_err(poisoned)?.clear();
        Ok(())
    }
}
