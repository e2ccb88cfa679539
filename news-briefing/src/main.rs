use chrono::{DateTime, FixedOffset, Local};
use news_briefing::{Briefing, BriefingConfig, FetchConfig, GoogleNewsSource, TelegramConfig, TelegramMessenger};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting news briefing");

    let config = BriefingConfig::from_env();
    let fetch_config = FetchConfig::default();
    let telegram_config = TelegramConfig::from_env();

    let source = GoogleNewsSource::new(fetch_config)?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let messenger = TelegramMessenger::new(client, telegram_config);
    messenger.log_credentials();

    let briefing = Briefing::new(config, Box::new(source), Box::new(messenger));
    info!(
        "Searching {} keywords, last {} hours",
        briefing.config().keywords.len(),
        briefing.config().window_hours
    );

    // Failures are logged inside the run; the exit status stays 0
    let now: DateTime<FixedOffset> = Local::now().into();
    let report = briefing.run(now).await;

    info!(
        "Briefing finished: news={}, keywords failed {}/{}, articles {}, chunks sent {}, chunks failed {}",
        report.has_news,
        report.keywords_failed,
        report.keywords_searched,
        report.entries_kept,
        report.chunks_sent,
        report.chunks_failed
    );
    Ok(())
}
