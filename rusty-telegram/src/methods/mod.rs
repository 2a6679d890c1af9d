//! Bot API methods, one struct per method.
//!
//! Required parameters go to `new`, optional ones are set with the builder methods.
//! Unset optional parameters are not sent at all.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

pub use self::chats::*;
pub use self::media::*;
pub use self::messages::*;
pub use self::updates::*;
use crate::api::BotApi;
use crate::error::Result;
use crate::input_file::InputFile;

mod chats;
mod media;
mod messages;
mod updates;

/// Method sent as a query string.
#[async_trait]
pub trait Method: Serialize + Send + Sync {
    const NAME: &'static str;

    async fn call(&self, api: &BotApi) -> Result<Value> {
        api.call(Self::NAME, self).await
    }
}

/// Method that carries a file.
#[async_trait]
pub trait Upload: Serialize + Send + Sync {
    const NAME: &'static str;

    /// Form field of the file.
    const FIELD: &'static str;

    /// Whether media types without a known extension are accepted.
    const ACCEPTS_ANY_MEDIA: bool = false;

    fn input_file(&self) -> &InputFile;

    async fn call(&self, api: &BotApi) -> Result<Value> {
        api.upload(
            Self::NAME,
            Self::FIELD,
            self.input_file(),
            Self::ACCEPTS_ANY_MEDIA,
            self,
        )
        .await
    }
}

/// https://core.telegram.org/bots/api#getme
#[derive(Debug, Default, Serialize)]
pub struct GetMe {}

impl Method for GetMe {
    const NAME: &'static str = "getMe";
}
