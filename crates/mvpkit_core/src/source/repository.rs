//! Post repository combining a remote source, a local store and a memory cache.
//!
//! # Responsibility
//! - Serve posts from the cheapest origin that has them.
//! - Write remote results through to the local store and the memory cache.
//!
//! # Invariants
//! - A clean cache is served without touching either source.
//! - After `refresh_posts`, the next load goes to the remote source, even when
//!   the refresh lands while another load is in flight.
//! - Remote failures reach the caller unchanged; no partial results are cached.
//! - `sync_posts` fills the cache only after the local write succeeded.
//! - No lock is held across an `.await`.

use crate::model::post::Post;
use crate::source::{DataSource, PostStore, SourceError, SourceResult};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct CacheState {
    posts: Option<Vec<Post>>,
    dirty: bool,
    /// Bumped by every invalidation; a load only marks the cache clean when
    /// no invalidation happened since it started.
    generation: u64,
}

/// Caching repository over a remote `DataSource` and a local `PostStore`.
pub struct PostRepository<R, L> {
    remote: R,
    local: L,
    cache: RwLock<CacheState>,
}

impl<R, L> PostRepository<R, L>
where
    R: DataSource,
    L: PostStore,
{
    pub fn new(remote: R, local: L) -> Self {
        Self {
            remote,
            local,
            cache: RwLock::new(CacheState::default()),
        }
    }

    /// Forces the next `get_posts` call to fetch from the remote source.
    pub fn refresh_posts(&self) -> SourceResult<()> {
        let mut cache = self.cache.write().map_err(poisoned)?;
        cache.dirty = true;
        cache.generation += 1;
        Ok(())
    }

    /// Drops cached posts from memory and the local store.
    pub async fn clear_posts(&self) -> SourceResult<()> {
        {
            let mut cache = self.cache.write().map_err(poisoned)?;
            cache.posts = None;
            cache.dirty = false;
            cache.generation += 1;
        }
        self.local.delete_all_posts().await
    }

    /// Fetches from the remote source and replaces the local store.
    ///
    /// Unlike `get_posts`, a failed local write is returned to the caller and
    /// the memory cache is left untouched.
    pub async fn sync_posts(&self) -> SourceResult<Vec<Post>> {
        let generation = self.current_generation()?;
        let posts = self.fetch_remote().await?;

        if let Err(err) = self.local.replace_posts(&posts).await {
            error!("event=posts_sync module=repository status=error stage=write error={err}");
            return Err(err);
        }

        self.fill_cache(&posts, generation)?;
        info!("event=posts_sync module=repository status=ok count={}", posts.len());
        Ok(posts)
    }

    /// Returns whether a clean in-memory copy is available.
    pub fn is_cached(&self) -> bool {
        self.cache
            .read()
            .map(|cache| cache.posts.is_some() && !cache.dirty)
            .unwrap_or(false)
    }

    async fn fetch_remote(&self) -> SourceResult<Vec<Post>> {
        self.remote.get_posts().await.inspect_err(|err| {
            error!("event=posts_load module=repository status=error origin=remote error={err}");
        })
    }

    async fn load_from_remote(&self, generation: u64) -> SourceResult<Vec<Post>> {
        let posts = self.fetch_remote().await?;

        if let Err(err) = self.local.replace_posts(&posts).await {
            warn!("event=posts_write_through module=repository status=error error={err}");
        }

        self.fill_cache(&posts, generation)?;
        info!("event=posts_load module=repository status=ok origin=remote count={}", posts.len());
        Ok(posts)
    }

    fn current_generation(&self) -> SourceResult<u64> {
        Ok(self.cache.read().map_err(poisoned)?.generation)
    }

    fn fill_cache(&self, posts: &[Post], generation: u64) -> SourceResult<()> {
        let mut cache = self.cache.write().map_err(poisoned)?;
        cache.posts = Some(posts.to_vec());
        if cache.generation == generation {
            cache.dirty = false;
        }
        Ok(())
    }
}

#[async_trait]
impl<R, L> DataSource for PostRepository<R, L>
where
    R: DataSource,
    L: PostStore,
{
    async fn get_posts(&self) -> SourceResult<Vec<Post>> {
        let (dirty, generation) = {
            let cache = self.cache.read().map_err(poisoned)?;
            if let (Some(posts), false) = (&cache.posts, cache.dirty) {
                debug!(
                    "event=posts_load module=repository status=ok origin=memory count={}",
                    posts.len()
                );
                return Ok(posts.clone());
            }
            (cache.dirty, cache.generation)
        };

        if dirty {
            return self.load_from_remote(generation).await;
        }

        match self.local.get_posts().await {
            Ok(posts) if !posts.is_empty() => {
                self.fill_cache(&posts, generation)?;
                debug!(
                    "event=posts_load module=repository status=ok origin=local count={}",
                    posts.len()
                );
                Ok(posts)
            }
            Ok(_) => self.load_from_remote(generation).await,
            Err(err) => {
                warn!(
                    "event=posts_load module=repository status=fallback origin=local error={err}"
                );
                self.load_from_remote(generation).await
            }
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> SourceError {
    SourceError::Internal(format!("post cache lock poisoned: {err}"))
}
