use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Bot API response envelope.
///
/// The client returns bodies as they are, this is for callers who want
/// to interpret `ok`, `result` and `error_code` themselves.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Response<T> {
    Ok {
        result: T,
    },
    Err {
        error_code: i64,
        description: String,
    },
}

impl<T: DeserializeOwned> Response<T> {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<T> Response<T> {
    pub fn into_result(self) -> Result<T> {
        self.into()
    }
}

impl<T> From<Response<T>> for Result<T> {
    fn from(response: Response<T>) -> Self {
        match response {
            Response::Ok { result } => Ok(result),
            Response::Err {
                error_code,
                description,
            } => Err(Error::Api {
                code: error_code,
                description,
            }),
        }
    }
}

/// Unique identifier for the target chat or username of the target channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    UniqueId(i64),

    /// In the format `@channelusername`.
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::UniqueId(id)
    }
}

impl From<&str> for ChatId {
    /// Numeric strings are unique identifiers, anything else is a username.
    fn from(s: &str) -> Self {
        s.parse::<i64>()
            .map_or_else(|_| Self::Username(s.to_string()), Self::UniqueId)
    }
}

impl FromStr for ChatId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniqueId(id) => write!(f, "{}", id),
            Self::Username(username) => f.write_str(username),
        }
    }
}

/// https://core.telegram.org/bots/api#formatting-options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    MarkdownV2,
    Markdown,
    HTML,
}

impl FromStr for ParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MarkdownV2" => Ok(Self::MarkdownV2),
            "Markdown" => Ok(Self::Markdown),
            "HTML" => Ok(Self::HTML),
            _ => Err(Error::InvalidArgument(format!("unknown parse mode `{}`", s))),
        }
    }
}

/// https://core.telegram.org/bots/api#sendchataction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
}

impl ChatAction {
    pub const ALL: [Self; 8] = [
        Self::Typing,
        Self::UploadPhoto,
        Self::RecordVideo,
        Self::UploadVideo,
        Self::RecordAudio,
        Self::UploadAudio,
        Self::UploadDocument,
        Self::FindLocation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
        }
    }
}

impl FromStr for ChatAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::ALL.iter().map(|action| action.as_str()).collect();
                Error::InvalidArgument(format!(
                    "invalid chat action `{}`, accepted values: {}",
                    s,
                    accepted.join(", "),
                ))
            })
    }
}

/// https://core.telegram.org/bots/api#file
#[derive(Debug, Deserialize)]
pub struct File {
    pub file_id: String,

    #[serde(default)]
    pub file_size: Option<u64>,

    /// Use [`crate::api::BotApi::download_file`] to get the file.
    #[serde(default)]
    pub file_path: Option<String>,
}
