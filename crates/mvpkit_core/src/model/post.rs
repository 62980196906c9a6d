//! Post domain model.
//!
//! Posts are read-only payloads delivered by a `DataSource`; core never
//! edits them, it only caches and forwards them in source order.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the post feed.
pub type PostId = u64;

/// One blog post as delivered by a post feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    /// Author id on the feed side.
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(
        id: PostId,
        user_id: u64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}
