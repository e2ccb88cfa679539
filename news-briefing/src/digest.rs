use crate::types::{Digest, DigestSection, FormattedLine};
use chrono::{DateTime, FixedOffset};
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub const DIGEST_TITLE: &str = "📰 *[맞춤 뉴스 브리핑]*";
pub const DIGEST_FOOTER: &str = "------------------\n💡 Google News 기반";
pub const SECTION_MARKER: &str = "📌 #";

/// Builds the digest text out of the per-keyword lines.
pub struct DigestAssembler;

impl DigestAssembler {
    /// Sections follow `topics` order; topics with no lines are left out and a
    /// repeated topic only gets its first section.
    /// Header and footer are always present, `has_news` tells whether anything
    /// sits between them.
    pub fn assemble(
        topics: &[String],
        lines_by_topic: &HashMap<String, Vec<FormattedLine>>,
        run_timestamp: DateTime<FixedOffset>,
        window_hours: i64,
    ) -> Digest {
        let mut text = Self::header(run_timestamp, window_hours);
        let mut sections = Vec::new();
        let mut seen = HashSet::new();

        for topic in topics {
            if !seen.insert(topic.as_str()) {
                continue;
            }
            let Some(lines) = lines_by_topic.get(topic).filter(|lines| !lines.is_empty()) else {
                debug!("No recent articles for '{}'", topic);
                continue;
            };

            text.push_str(&format!("{}{}\n", SECTION_MARKER, topic));
            for line in lines {
                text.push_str(&format!("{}\n", line));
            }
            text.push('\n');

            sections.push(DigestSection {
                topic: topic.clone(),
                lines: lines.clone(),
            });
        }

        text.push_str(DIGEST_FOOTER);

        Digest {
            has_news: !sections.is_empty(),
            sections,
            text,
        }
    }

    fn header(run_timestamp: DateTime<FixedOffset>, window_hours: i64) -> String {
        format!(
            "{}\n📅 {}\n(최근 {}시간 내 기사)\n\n",
            DIGEST_TITLE,
            run_timestamp.format("%Y-%m-%d %H:%M"),
            window_hours
        )
    }
}
