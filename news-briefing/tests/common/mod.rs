// Shared fakes and helpers for the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use news_briefing::{BriefingError, FeedEntry, FeedSource, Messenger, Result};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration as StdDuration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Paused-clock timers fire on millisecond ticks, so allow a little slack.
pub fn assert_elapsed(actual: StdDuration, expected: StdDuration) {
    assert!(
        actual >= expected && actual < expected + StdDuration::from_millis(10),
        "elapsed {:?}, expected {:?}",
        actual,
        expected
    );
}

/// 2026-10-18 09:00 in Seoul
pub fn seoul_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .and_then(|tz| tz.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).single())
        .expect("valid test timestamp")
}

/// RSS style `pubDate` text for a moment `hours` before `now`.
pub fn published_hours_ago(now: DateTime<FixedOffset>, hours: i64) -> Option<String> {
    Some((now - Duration::hours(hours)).to_rfc2822())
}

pub fn entry(title: &str, link: &str, published: Option<String>) -> FeedEntry {
    FeedEntry::new(title, link, published)
}

/// Feed source answering from a fixed table, recording every keyword asked for.
#[derive(Default)]
pub struct StaticFeedSource {
    responses: HashMap<String, Vec<FeedEntry>>,
    failing: HashSet<String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, keyword: &str, entries: Vec<FeedEntry>) -> Self {
        self.responses.insert(keyword.to_string(), entries);
        self
    }

    pub fn with_failure(mut self, keyword: &str) -> Self {
        self.failing.insert(keyword.to_string());
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn source_name(&self) -> String {
        "Static".to_string()
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<FeedEntry>> {
        self.requested.lock().unwrap().push(keyword.to_string());

        if self.failing.contains(keyword) {
            return Err(BriefingError::HttpStatus {
                status: 503,
                reason: "Service Unavailable".to_string(),
            });
        }
        Ok(self.responses.get(keyword).cloned().unwrap_or_default())
    }
}

/// Messenger that keeps every text it is asked to send.
/// Calls whose index is in `fail_on` are recorded and then rejected.
#[derive(Default, Clone)]
pub struct RecordingMessenger {
    pub sent: Arc<Mutex<Vec<String>>>,
    fail_on: HashSet<usize>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            sent: Arc::default(),
            fail_on: calls.iter().copied().collect(),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        let mut sent = self.sent.lock().unwrap();
        let call = sent.len();
        sent.push(text.to_string());

        if self.fail_on.contains(&call) {
            return Err(BriefingError::Delivery {
                code: 400,
                detail: "Bad Request: can't parse entities".to_string(),
            });
        }
        Ok(())
    }
}
