pub mod types;
pub mod config;
pub mod traits;
pub mod fetcher;
pub mod parser;
pub mod sources;
pub mod recency;
pub mod formatter;
pub mod digest;
pub mod delivery;
pub mod telegram;
pub mod briefing;

pub use types::*;
pub use config::{BriefingConfig, FetchConfig, TelegramConfig};
pub use traits::{FeedSource, Messenger};
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use sources::GoogleNewsSource;
pub use recency::RecencyFilter;
pub use formatter::format_entry;
pub use digest::DigestAssembler;
pub use delivery::{deliver, split_chunks};
pub use telegram::TelegramMessenger;
pub use briefing::Briefing;
