use serde::Serialize;

use crate::methods::Method;
use crate::models;

/// https://core.telegram.org/bots/api#getuserprofilephotos
#[derive(Debug, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Method for GetUserProfilePhotos {
    const NAME: &'static str = "getUserProfilePhotos";
}

/// Prepares a file for downloading with [`crate::api::BotApi::download_file`].
///
/// https://core.telegram.org/bots/api#getfile
#[derive(Debug, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";
}

/// https://core.telegram.org/bots/api#leavechat
#[derive(Debug, Serialize)]
pub struct LeaveChat {
    pub chat_id: models::ChatId,
}

impl Method for LeaveChat {
    const NAME: &'static str = "leaveChat";
}

/// https://core.telegram.org/bots/api#getchat
#[derive(Debug, Serialize)]
pub struct GetChat {
    pub chat_id: models::ChatId,
}

impl Method for GetChat {
    const NAME: &'static str = "getChat";
}

/// https://core.telegram.org/bots/api#getchatadministrators
#[derive(Debug, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: models::ChatId,
}

impl Method for GetChatAdministrators {
    const NAME: &'static str = "getChatAdministrators";
}

#[derive(Debug, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: models::ChatId,
}

impl Method for GetChatMembersCount {
    const NAME: &'static str = "getChatMembersCount";
}

/// https://core.telegram.org/bots/api#getchatmember
#[derive(Debug, Serialize)]
pub struct GetChatMember {
    pub chat_id: models::ChatId,
    pub user_id: i64,
}

impl Method for GetChatMember {
    const NAME: &'static str = "getChatMember";
}
