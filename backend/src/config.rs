use std::net::SocketAddr;
use std::path::PathBuf;

use secrecy::Secret;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Credentials for the bot that receives quiz leads.
///
/// Both values are optional here: a missing token or chat id is reported
/// per request by the relay instead of stopping the server.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: Option<Secret<String>>,
    pub chat_id: Option<String>,
    pub api_url: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl TelegramConfig {
    pub fn new(bot_token: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            bot_token: bot_token.map(Secret::new),
            chat_id,
            api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_complete(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub bind_addr: SocketAddr,
    pub frontend_dist: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut telegram = TelegramConfig::new(get("TELEGRAM_BOT_TOKEN"), get("TELEGRAM_CHAT_ID"));
        if let Some(api_url) = get("TELEGRAM_API_URL") {
            telegram = telegram.with_api_url(api_url);
        }

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("BIND_ADDR '{}' is not a socket address: {}", bind_addr, e))?;

        Ok(Self {
            telegram,
            bind_addr,
            frontend_dist: get("FRONTEND_DIST").map(PathBuf::from),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    /// Logs the settings that are missing. Nothing here is fatal.
    pub fn validate(&self) {
        if self.telegram.bot_token.is_none() {
            tracing::warn!("TELEGRAM_BOT_TOKEN is not set, lead submissions will fail");
        }
        if self.telegram.chat_id.is_none() {
            tracing::warn!("TELEGRAM_CHAT_ID is not set, lead submissions will fail");
        }
        if self.frontend_dist.is_none() {
            tracing::info!("FRONTEND_DIST is not set, serving the API only");
        }
    }
}
