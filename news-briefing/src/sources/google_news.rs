use crate::config::FetchConfig;
use crate::parser::FeedParser;
use crate::traits::FeedSource;
use crate::types::{FeedEntry, Result};
use crate::Fetcher;
use async_trait::async_trait;
use tracing::info;
use url::Url;

/// Google News keyword search, read through its RSS endpoint.
pub struct GoogleNewsSource {
    fetcher: Fetcher,
}

impl GoogleNewsSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }

    /// Search URL for `keyword`, e.g.
    /// `https://news.google.com/rss/search?q=...&hl=ko&gl=KR&ceid=KR:ko`
    pub fn search_url(&self, keyword: &str) -> Result<Url> {
        let config = self.fetcher.config();
        let url = Url::parse_with_params(
            &config.search_base_url,
            &[
                ("q", keyword),
                ("hl", config.language.as_str()),
                ("gl", config.region.as_str()),
                ("ceid", config.edition.as_str()),
            ],
        )?;
        Ok(url)
    }
}

#[async_trait]
impl FeedSource for GoogleNewsSource {
    fn source_name(&self) -> String {
        "Google News".to_string()
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<FeedEntry>> {
        info!("Searching {} for '{}'", self.source_name(), keyword);

        let url = self.search_url(keyword)?;
        let content = self.fetcher.fetch_text(url.as_str()).await?;
        FeedParser::parse_entries(&content)
    }
}
