use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const TOKEN_ENV: &str = "NEW_TELEGRAM_TOKEN";
pub const CHAT_ID_ENV: &str = "NEW_CHAT_ID";
pub const KEYWORDS_ENV: &str = "NEWS_KEYWORDS";
pub const WINDOW_HOURS_ENV: &str = "NEWS_WINDOW_HOURS";
pub const MAX_CHUNK_SIZE_ENV: &str = "NEWS_MAX_CHUNK_SIZE";

/// Upper bound for the lookback window, ten years
pub const MAX_WINDOW_HOURS: i64 = 24 * 365 * 10;

/// Topics searched on every run, in digest order.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "전고체 배터리",
    "미국 주식",
    "NVDA 엔비디아",
    "갤럭시 S26",
    "전기차 보조금",
    "파이썬 자동화",
    "코스피 코스닥 시황",
    "국내 주식 특징주",
    "한국 증시 전망",
];

#[derive(Debug, Clone)]
pub struct BriefingConfig {
    pub keywords: Vec<String>,
    pub window_hours: i64,
    pub max_entries_per_keyword: usize,
    pub max_chunk_size: usize,
    /// Pause between two keyword searches
    pub fetch_delay: Duration,
    /// Pause between two delivered chunks
    pub chunk_delay: Duration,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            window_hours: 24,
            max_entries_per_keyword: 10,
            max_chunk_size: 4000,
            fetch_delay: Duration::from_millis(500),
            chunk_delay: Duration::from_secs(1),
        }
    }
}

impl BriefingConfig {
    /// Defaults with the optional `NEWS_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var(KEYWORDS_ENV) {
            let keywords = parse_keywords(&raw);
            if keywords.is_empty() {
                warn!("{} is set but holds no keywords, keeping defaults", KEYWORDS_ENV);
            } else {
                config.keywords = keywords;
            }
        }
        if let Some(hours) = env_number::<i64>(WINDOW_HOURS_ENV) {
            if (1..=MAX_WINDOW_HOURS).contains(&hours) {
                config.window_hours = hours;
            } else {
                warn!(
                    "Ignoring {}={}: must be between 1 and {}",
                    WINDOW_HOURS_ENV, hours, MAX_WINDOW_HOURS
                );
            }
        }
        if let Some(size) = env_number::<usize>(MAX_CHUNK_SIZE_ENV) {
            if size > 0 {
                config.max_chunk_size = size;
            } else {
                warn!("Ignoring {}=0: must be positive", MAX_CHUNK_SIZE_ENV);
            }
        }

        config
    }
}

/// Split a comma separated keyword list, ignoring blank and repeated items.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if keywords.iter().any(|k| k == keyword) {
            warn!("Dropping repeated keyword '{}'", keyword);
            continue;
        }
        keywords.push(keyword.to_string());
    }
    keywords
}

fn env_number<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {}={:?}", name, raw);
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub search_base_url: String,
    pub language: String,
    pub region: String,
    pub edition: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "News-Briefing/1.0".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
            search_base_url: "https://news.google.com/rss/search".to_string(),
            language: "ko".to_string(),
            region: "KR".to_string(),
            edition: "KR:ko".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base_url: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base_url: "https://api.telegram.org".to_string(),
        }
    }
}

impl TelegramConfig {
    pub fn from_env() -> Self {
        Self {
            bot_token: non_empty_env(TOKEN_ENV),
            chat_id: non_empty_env(CHAT_ID_ENV),
            ..Self::default()
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
