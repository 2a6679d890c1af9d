use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rusty_telegram::api::{BotApi, DEFAULT_SERVER_URL};
use tracing::{debug, instrument};

#[derive(Parser)]
pub struct Opts {
    /// Telegram Bot API token, required by the commands that call the API
    #[clap(long = "bot-token", env = "RUSTY_TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Bot API server, change it to use a local one
    #[clap(
        long = "server-url",
        env = "RUSTY_TELEGRAM_SERVER_URL",
        default_value = DEFAULT_SERVER_URL
    )]
    pub server_url: String,

    /// Bot API request timeout, in seconds
    #[clap(
        long = "timeout-secs",
        env = "RUSTY_TELEGRAM_TIMEOUT_SECS",
        default_value = "10"
    )]
    pub timeout_secs: u64,

    /// Directory to stage remote files in before uploading them
    #[clap(long = "cache-dir", env = "RUSTY_TELEGRAM_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

impl Opts {
    #[instrument(level = "info", skip_all, fields(server_url = self.server_url.as_str()))]
    pub fn connect(self) -> Result<BotApi> {
        let api = BotApi::new(self.token.unwrap_or_default(), Duration::from_secs(self.timeout_secs))
            .context("failed to create the Bot API client")?
            .with_server_url(&self.server_url)
            .context("invalid Bot API server URL")?;
        let api = match self.cache_dir {
            Some(cache_dir) => {
                debug!(?cache_dir, "overriding the cache directory");
                api.with_cache_dir(cache_dir)
            }
            None => api,
        };
        Ok(api)
    }
}
