use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A raw item as returned by the feed source, before any date handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    /// Free-form date text exactly as the feed carried it
    pub published: Option<String>,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>, published: Option<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub published_at: DateTime<FixedOffset>,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLine {
    pub source: String,
    pub title: String,
    pub link: String,
}

/// One keyword section of the digest, in feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSection {
    pub topic: String,
    pub lines: Vec<FormattedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub sections: Vec<DigestSection>,
    pub text: String,
    pub has_news: bool,
}

/// Outcome of a single briefing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub has_news: bool,
    pub keywords_searched: usize,
    pub keywords_failed: usize,
    pub entries_kept: usize,
    pub chunks_sent: usize,
    pub chunks_failed: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum BriefingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Fetch failed for '{keyword}': {reason}")]
    FetchFailed { keyword: String, reason: String },

    #[error("Unusable entry: {reason}")]
    EntryParse { reason: String },

    #[error("Delivery failed ({code}): {detail}")]
    Delivery { code: u16, detail: String },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },
}

pub type Result<T> = std::result::Result<T, BriefingError>;
