use crate::config::BriefingConfig;
use crate::delivery;
use crate::digest::DigestAssembler;
use crate::formatter::format_entry;
use crate::recency::RecencyFilter;
use crate::traits::{FeedSource, Messenger};
use crate::types::{BriefingError, Digest, FormattedLine, Result, RunReport};
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use tracing::{info, warn};

/// Runs one pass: search every keyword, assemble the digest, deliver it.
pub struct Briefing {
    config: BriefingConfig,
    source: Box<dyn FeedSource>,
    messenger: Box<dyn Messenger>,
    filter: RecencyFilter,
}

impl Briefing {
    pub fn new(config: BriefingConfig, source: Box<dyn FeedSource>, messenger: Box<dyn Messenger>) -> Self {
        let filter = RecencyFilter::from_config(&config);
        Self {
            config,
            source,
            messenger,
            filter,
        }
    }

    pub fn config(&self) -> &BriefingConfig {
        &self.config
    }

    pub async fn run(&self, now: DateTime<FixedOffset>) -> RunReport {
        let mut report = RunReport::default();
        let digest = self.build_digest(now, &mut report).await;
        report.has_news = digest.has_news;

        if !digest.has_news {
            info!("📭 No new articles in the last {} hours", self.config.window_hours);
            return report;
        }

        info!(
            "Delivering digest: {} sections, {} chars",
            digest.sections.len(),
            digest.text.chars().count()
        );

        let results = delivery::deliver(
            &*self.messenger,
            &digest.text,
            self.config.max_chunk_size,
            self.config.chunk_delay,
        )
        .await;

        report.chunks_sent = results.iter().filter(|r| r.is_ok()).count();
        report.chunks_failed = results.len() - report.chunks_sent;
        report
    }

    /// Search every configured keyword once, in order. A keyword whose fetch
    /// fails simply has no section.
    pub async fn build_digest(&self, now: DateTime<FixedOffset>, report: &mut RunReport) -> Digest {
        let mut lines_by_topic: HashMap<String, Vec<FormattedLine>> = HashMap::new();

        let mut keywords: Vec<&String> = Vec::with_capacity(self.config.keywords.len());
        for keyword in &self.config.keywords {
            if keywords.contains(&keyword) {
                warn!("Keyword '{}' is configured twice, searching it once", keyword);
            } else {
                keywords.push(keyword);
            }
        }
        let total = keywords.len();

        for (index, keyword) in keywords.into_iter().enumerate() {
            report.keywords_searched += 1;

            match self.search_keyword(keyword, now).await {
                Ok(lines) => {
                    info!("[{}] {} recent articles", keyword, lines.len());
                    report.entries_kept += lines.len();
                    lines_by_topic.insert(keyword.clone(), lines);
                }
                Err(e) => {
                    report.keywords_failed += 1;
                    warn!("{}", e);
                }
            }

            if index + 1 < total && !self.config.fetch_delay.is_zero() {
                tokio::time::sleep(self.config.fetch_delay).await;
            }
        }

        DigestAssembler::assemble(&self.config.keywords, &lines_by_topic, now, self.config.window_hours)
    }

    async fn search_keyword(&self, keyword: &str, now: DateTime<FixedOffset>) -> Result<Vec<FormattedLine>> {
        let entries = self
            .source
            .fetch(keyword)
            .await
            .map_err(|e| BriefingError::FetchFailed {
                keyword: keyword.to_string(),
                reason: e.to_string(),
            })?;

        Ok(self
            .filter
            .apply(&entries, now)
            .iter()
            .map(format_entry)
            .collect())
    }
}
