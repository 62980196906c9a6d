//! SQLite-backed local post store.
//!
//! # Responsibility
//! - Persist the last known post list in the `posts` table.
//! - Run blocking SQLite work off the async executor.
//!
//! # Invariants
//! - `replace_posts` is atomic: readers see the old list or the new one.
//! - `position` mirrors the order posts were handed to `replace_posts`.

use crate::model::post::Post;
use crate::source::{DataSource, PostStore, SourceError, SourceResult};
use async_trait::async_trait;
use log::{debug, error};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

/// Post store over a shared SQLite connection.
#[derive(Clone)]
pub struct SqlitePostStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePostStore {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    async fn run_blocking<F, T>(&self, op: F) -> SourceResult<T>
    where
        F: FnOnce(&mut Connection) -> SourceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|err| SourceError::Internal(format!("connection lock poisoned: {err}")))?;
            op(&mut guard)
        })
        .await
        .map_err(|err| SourceError::Internal(format!("task join error: {err}")))?
    }
}

#[async_trait]
impl DataSource for SqlitePostStore {
    async fn get_posts(&self) -> SourceResult<Vec<Post>> {
        let result = self
            .run_blocking(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, title, body
                     FROM posts
                     ORDER BY position ASC, id ASC;",
                )?;
                let mut rows = stmt.query([])?;
                let mut posts = Vec::new();
                while let Some(row) = rows.next()? {
                    posts.push(parse_post_row(row)?);
                }
                Ok(posts)
            })
            .await;

        match &result {
            Ok(posts) => debug!("event=posts_load module=source status=ok count={}", posts.len()),
            Err(err) => error!("event=posts_load module=source status=error error={err}"),
        }
        result
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn replace_posts(&self, posts: &[Post]) -> SourceResult<()> {
        let posts = posts.to_vec();
        self.run_blocking(move |conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM posts;", [])?;
            {
                let mut stmt = tx.prepare(
                    "INSERT OR REPLACE INTO posts (id, user_id, title, body, position)
                     VALUES (?1, ?2, ?3, ?4, ?5);",
                )?;
                for (position, post) in posts.iter().enumerate() {
                    stmt.execute(params![
                        to_db_int(post.id, "posts.id")?,
                        to_db_int(post.user_id, "posts.user_id")?,
                        post.title.as_str(),
                        post.body.as_str(),
                        to_db_int(position as u64, "posts.position")?,
                    ])?;
                }
            }
            tx.commit()?;
            debug!(
                "event=posts_replace module=source status=ok backend=sqlite count={}",
                posts.len()
            );
            Ok(())
        })
        .await
    }

    async fn delete_all_posts(&self) -> SourceResult<()> {
        self.run_blocking(|conn| {
            conn.execute("DELETE FROM posts;", [])?;
            Ok(())
        })
        .await
    }
}

fn parse_post_row(row: &Row<'_>) -> SourceResult<Post> {
    Ok(Post {
        id: from_db_int(row.get("id")?, "posts.id")?,
        user_id: from_db_int(row.get("user_id")?, "posts.user_id")?,
        title: row.get("title")?,
        body: row.get("body")?,
    })
}

fn to_db_int(value: u64, column: &str) -> SourceResult<i64> {
    i64::try_from(value)
        .map_err(|_| SourceError::InvalidData(format!("value `{value}` out of range for {column}")))
}

fn from_db_int(value: i64, column: &str) -> SourceResult<u64> {
    u64::try_from(value)
        .map_err(|_| SourceError::InvalidData(format!("negative value `{value}` in {column}")))
}
