use crate::config::BriefingConfig;
use crate::types::{BriefingError, FeedEntry, NormalizedEntry, Result};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

/// Zone-less layouts, tried in order after the RFC parsers.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
];

/// Layouts that carry a numeric offset but are neither RFC 2822 nor RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M:%S%z"];

/// Keeps the entries published inside the lookback window.
#[derive(Debug, Clone)]
pub struct RecencyFilter {
    /// `None` when the hour count does not fit a `Duration`
    window: Option<Duration>,
    max_entries: usize,
}

impl RecencyFilter {
    pub fn new(window_hours: i64, max_entries: usize) -> Self {
        let window = Duration::try_hours(window_hours);
        if window.is_none() {
            warn!("Lookback of {} hours is out of range, keeping every dated entry", window_hours);
        }
        Self { window, max_entries }
    }

    pub fn from_config(config: &BriefingConfig) -> Self {
        Self::new(config.window_hours, config.max_entries_per_keyword)
    }

    /// Only the first `max_entries` raw entries are looked at. Entries without a
    /// usable date are dropped one by one; the rest keep their feed order.
    /// A window reaching past the earliest representable date has no cutoff.
    pub fn apply(&self, entries: &[FeedEntry], now: DateTime<FixedOffset>) -> Vec<NormalizedEntry> {
        let cutoff = self.window.and_then(|window| now.checked_sub_signed(window));

        entries
            .iter()
            .take(self.max_entries)
            .filter_map(|entry| match normalize_entry(entry, now.offset()) {
                Ok(normalized) => Some(normalized),
                Err(e) => {
                    debug!("Dropping '{}': {}", entry.title, e);
                    None
                }
            })
            .filter(|entry| cutoff.map_or(true, |cutoff| entry.published_at >= cutoff))
            .collect()
    }
}

pub fn normalize_entry(entry: &FeedEntry, zone: &FixedOffset) -> Result<NormalizedEntry> {
    let published = entry.published.as_deref().ok_or_else(|| BriefingError::EntryParse {
        reason: "no published date".to_string(),
    })?;

    Ok(NormalizedEntry {
        published_at: parse_published(published, zone)?,
        title: entry.title.clone(),
        link: entry.link.clone(),
    })
}

/// Parse free-form feed date text. Dates without zone information are read as
/// wall-clock time in `zone`, which only approximates the feed's real zone.
pub fn parse_published(text: &str, zone: &FixedOffset) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| BriefingError::EntryParse {
            reason: format!("unrecognised date '{}'", text),
        })?;

    naive
        .and_local_timezone(*zone)
        .single()
        .ok_or_else(|| BriefingError::EntryParse {
            reason: format!("ambiguous local date '{}'", text),
        })
}
