use crate::types::{FeedEntry, Result};
use async_trait::async_trait;

/// Trait for searching a news source by keyword
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name for this source, used in logs
    fn source_name(&self) -> String;

    /// Fetch the raw entries matching `keyword`, in the order the provider returns them
    async fn fetch(&self, keyword: &str) -> Result<Vec<FeedEntry>>;
}

/// Trait for the chat endpoint the digest is posted to
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send one message. A failure never affects later sends.
    async fn send(&self, text: &str) -> Result<()>;
}
