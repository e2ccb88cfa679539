use crate::types::{BriefingError, FeedEntry, Result};
use tracing::{debug, info};

/// Turns a fetched feed document into raw [`FeedEntry`] values.
///
/// RSS 2.0 is read with the `rss` crate so `pubDate` keeps its raw text;
/// anything else (Atom, JSON Feed) goes through `feed-rs`, whose already
/// parsed timestamps are written back out as RFC 3339.
pub struct FeedParser;

impl FeedParser {
    pub fn parse_entries(content: &str) -> Result<Vec<FeedEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let entries = match rss::Channel::read_from(content.as_bytes()) {
            Ok(channel) => Self::from_channel(&channel),
            Err(rss_error) => {
                debug!("Not an RSS 2.0 document ({}), trying feed-rs", rss_error);
                let feed = feed_rs::parser::parse(content.as_bytes()).map_err(|e| {
                    BriefingError::Parse(format!("Failed to parse feed: {}; {}", rss_error, e))
                })?;
                Self::from_feed(feed)
            }
        };

        info!("Parsed feed with {} entries", entries.len());
        Ok(entries)
    }

    fn from_channel(channel: &rss::Channel) -> Vec<FeedEntry> {
        channel
            .items()
            .iter()
            .filter_map(|item| {
                let Some(link) = item.link() else {
                    debug!("Skipping item without link: {:?}", item.title());
                    return None;
                };
                Some(FeedEntry {
                    title: item.title().unwrap_or("Untitled").to_string(),
                    link: link.to_string(),
                    published: item.pub_date().map(str::to_string),
                })
            })
            .collect()
    }

    fn from_feed(feed: feed_rs::model::Feed) -> Vec<FeedEntry> {
        feed.entries
            .into_iter()
            .filter_map(|entry| {
                let Some(link) = entry.links.first().map(|l| l.href.clone()) else {
                    debug!("Skipping entry without link: {}", entry.id);
                    return None;
                };
                Some(FeedEntry {
                    title: entry
                        .title
                        .map(|t| t.content)
                        .unwrap_or_else(|| "Untitled".to_string()),
                    link,
                    published: entry.published.or(entry.updated).map(|dt| dt.to_rfc3339()),
                })
            })
            .collect()
    }
}
