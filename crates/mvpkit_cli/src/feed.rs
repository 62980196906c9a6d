//! JSON feed file used as the remote post source.

use async_trait::async_trait;
use mvpkit_core::{DataSource, Post, SourceError, SourceResult};
use std::path::PathBuf;

/// Reads posts from a JSON array file on every call.
pub struct JsonFeedSource {
    path: PathBuf,
}

impl JsonFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for JsonFeedSource {
    async fn get_posts(&self) -> SourceResult<Vec<Post>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(SourceError::remote)?;
        serde_json::from_slice(&bytes).map_err(SourceError::remote)
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFeedSource;
    use mvpkit_core::{DataSource, SourceError};
    use std::io::Write;

    #[tokio::test]
    async fn reads_camel_case_feed_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":2,"userId":1,"title":"b","body":"x"}},{{"id":1,"userId":1,"title":"a","body":"y"}}]"#
        )
        .unwrap();

        let posts = JsonFeedSource::new(file.path()).get_posts().await.unwrap();
        assert_eq!(posts.iter().map(|post| post.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(posts[0].user_id, 1);
    }

    #[tokio::test]
    async fn missing_file_is_a_remote_error() {
        let err = JsonFeedSource::new("/nonexistent/feed.json")
            .get_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Remote(_)));
    }
}
