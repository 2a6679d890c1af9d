use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use serde_with::{serde_as, DurationSeconds};
use url::Url;

use crate::api::BotApi;
use crate::error::{Error, Result};
use crate::input_file::InputFile;
use crate::methods::Method;

/// Long polling.
///
/// https://core.telegram.org/bots/api#getupdates
#[serde_as]
#[derive(Debug, Default, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,

    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl GetUpdates {
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Request timeout that outlasts the long poll.
    fn request_timeout(&self, client_timeout: Duration) -> Duration {
        client_timeout.saturating_add(self.timeout.unwrap_or_default())
    }
}

#[async_trait]
impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";

    /// Waits for the long polling timeout on top of the client timeout.
    async fn call(&self, api: &BotApi) -> Result<Value> {
        api.call_with_timeout(Self::NAME, self, self.request_timeout(api.timeout()))
            .await
    }
}

/// https://core.telegram.org/bots/api#setwebhook
#[derive(Debug, Serialize)]
pub struct SetWebhook {
    pub url: Url,

    /// Public key certificate, attached as a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<InputFile>,
}

impl SetWebhook {
    /// Fails on anything but a valid HTTPS URL.
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|error| Error::InvalidArgument(format!("invalid URL `{}`: {}", url, error)))?;
        if url.scheme() != "https" {
            return Err(Error::InvalidArgument(format!(
                "invalid URL `{}`, it should be an HTTPS URL",
                url,
            )));
        }
        Ok(Self {
            url,
            certificate: None,
        })
    }

    pub fn certificate(mut self, certificate: impl Into<InputFile>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }
}

#[async_trait]
impl Method for SetWebhook {
    const NAME: &'static str = "setWebhook";

    async fn call(&self, api: &BotApi) -> Result<Value> {
        match &self.certificate {
            None => api.call(Self::NAME, self).await,
            Some(certificate) => {
                api.upload(Self::NAME, "certificate", certificate, false, self)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_updates_query() {
        let method = GetUpdates::default()
            .offset(100)
            .timeout(Duration::from_secs(60));
        assert_eq!(
            serde_urlencoded::to_string(&method).unwrap(),
            "offset=100&timeout=60",
        );
        assert_eq!(serde_urlencoded::to_string(GetUpdates::default()).unwrap(), "");
    }

    #[test]
    fn get_updates_request_timeout() {
        let client_timeout = Duration::from_secs(10);
        assert_eq!(
            GetUpdates::default().request_timeout(client_timeout),
            client_timeout,
        );
        assert_eq!(
            GetUpdates::default()
                .timeout(Duration::from_secs(60))
                .request_timeout(client_timeout),
            Duration::from_secs(70),
        );
        assert_eq!(
            GetUpdates::default()
                .timeout(Duration::from_secs(u64::MAX))
                .request_timeout(client_timeout),
            Duration::MAX,
        );
    }

    #[test]
    fn set_webhook_ok() {
        let method = SetWebhook::new("https://example.com/telegram").unwrap();
        assert_eq!(
            serde_urlencoded::to_string(&method).unwrap(),
            "url=https%3A%2F%2Fexample.com%2Ftelegram",
        );
    }

    #[test]
    fn set_webhook_invalid() {
        for url in ["http://example.com", "not a url", "", "ftp://example.com"] {
            assert!(
                matches!(SetWebhook::new(url), Err(Error::InvalidArgument(_))),
                "{}",
                url,
            );
        }
    }
}
