use crate::config::{TelegramConfig, CHAT_ID_ENV, TOKEN_ENV};
use crate::traits::Messenger;
use crate::types::{BriefingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

/// Telegram Bot API messenger
pub struct TelegramMessenger {
    client: Client,
    config: TelegramConfig,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    description: Option<String>,
}

impl TelegramMessenger {
    pub fn new(client: Client, config: TelegramConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.bot_token.is_some() && self.config.chat_id.is_some()
    }

    /// Log which credentials were found, never the full token.
    pub fn log_credentials(&self) {
        match &self.config.bot_token {
            Some(token) => info!("Bot token loaded: {}...", mask_secret(token)),
            None => warn!("{} is not set", TOKEN_ENV),
        }
        match &self.config.chat_id {
            Some(chat_id) => info!("Chat id loaded: {}", chat_id),
            None => warn!("{} is not set", CHAT_ID_ENV),
        }
    }

    fn endpoint(&self, token: &str) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base_url.trim_end_matches('/'),
            token
        )
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        let Some(token) = self.config.bot_token.as_deref() else {
            return Err(BriefingError::ConfigMissing(TOKEN_ENV));
        };
        let Some(chat_id) = self.config.chat_id.as_deref() else {
            return Err(BriefingError::ConfigMissing(CHAT_ID_ENV));
        };

        let resp = self
            .client
            .post(self.endpoint(token))
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "Markdown",
                "disable_web_page_preview": true
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(delivery_error(status.as_u16(), &body));
        }

        Ok(())
    }
}

/// Error for a rejected `sendMessage`: the API's `description` when the body
/// carries one, otherwise the raw body.
pub fn delivery_error(status: u16, body: &str) -> BriefingError {
    let detail = serde_json::from_str::<ApiResponse>(body)
        .ok()
        .and_then(|r| r.description)
        .unwrap_or_else(|| body.to_string());
    BriefingError::Delivery { code: status, detail }
}

/// First five characters of a secret, for logs.
pub fn mask_secret(secret: &str) -> String {
    secret.chars().take(5).collect()
}
