use std::time;

use serde::Serialize;
use serde_json::Value;
use serde_with::json::JsonString;
use serde_with::{serde_as, DurationSeconds};

use crate::keyboard::ReplyMarkup;
use crate::methods::Method;
use crate::models;

/// https://core.telegram.org/bots/api#sendmessage
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendMessage {
    pub chat_id: models::ChatId,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<models::ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<models::ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, parse_mode: models::ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn disable_web_page_preview(mut self, disable_web_page_preview: bool) -> Self {
        self.disable_web_page_preview = Some(disable_web_page_preview);
        self
    }

    pub fn reply_to_message_id(mut self, reply_to_message_id: i64) -> Self {
        self.reply_to_message_id = Some(reply_to_message_id);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
}

/// https://core.telegram.org/bots/api#forwardmessage
#[derive(Debug, Serialize)]
pub struct ForwardMessage {
    pub chat_id: models::ChatId,
    pub from_chat_id: models::ChatId,
    pub message_id: i64,
}

impl Method for ForwardMessage {
    const NAME: &'static str = "forwardMessage";
}

#[derive(Debug, Serialize)]
pub struct DeleteMessage {
    pub chat_id: models::ChatId,
    pub message_id: i64,
}

impl Method for DeleteMessage {
    const NAME: &'static str = "deleteMessage";
}

/// https://core.telegram.org/bots/api#editmessagetext
#[serde_as]
#[derive(Debug, Serialize)]
pub struct EditMessageText {
    pub chat_id: models::ChatId,
    pub message_id: i64,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<models::ParseMode>,

    /// Special entities that appear in the text, instead of `parse_mode`.
    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl EditMessageText {
    pub fn new(
        chat_id: impl Into<models::ChatId>,
        message_id: i64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            text: text.into(),
            inline_message_id: None,
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }

    pub fn inline_message_id(mut self, inline_message_id: impl Into<String>) -> Self {
        self.inline_message_id = Some(inline_message_id.into());
        self
    }

    pub fn parse_mode(mut self, parse_mode: models::ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn entities(mut self, entities: Value) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn disable_web_page_preview(mut self, disable_web_page_preview: bool) -> Self {
        self.disable_web_page_preview = Some(disable_web_page_preview);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";
}

/// https://core.telegram.org/bots/api#editmessagereplymarkup
#[serde_as]
#[derive(Debug, Serialize)]
pub struct EditMessageReplyMarkup {
    pub chat_id: models::ChatId,
    pub message_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,

    #[serde_as(as = "JsonString")]
    pub reply_markup: ReplyMarkup,
}

impl EditMessageReplyMarkup {
    pub fn new(
        chat_id: impl Into<models::ChatId>,
        message_id: i64,
        reply_markup: impl Into<ReplyMarkup>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            inline_message_id: None,
            reply_markup: reply_markup.into(),
        }
    }

    pub fn inline_message_id(mut self, inline_message_id: impl Into<String>) -> Self {
        self.inline_message_id = Some(inline_message_id.into());
        self
    }
}

impl Method for EditMessageReplyMarkup {
    const NAME: &'static str = "editMessageReplyMarkup";
}

/// https://core.telegram.org/bots/api#sendlocation
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendLocation {
    pub chat_id: models::ChatId,
    pub latitude: f64,
    pub longitude: f64,

    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<time::Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<models::ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            live_period: None,
            heading: None,
            horizontal_accuracy: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn live_period(mut self, live_period: time::Duration) -> Self {
        self.live_period = Some(live_period);
        self
    }

    pub fn heading(mut self, heading: u16) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn horizontal_accuracy(mut self, horizontal_accuracy: f32) -> Self {
        self.horizontal_accuracy = Some(horizontal_accuracy);
        self
    }

    pub fn reply_to_message_id(mut self, reply_to_message_id: i64) -> Self {
        self.reply_to_message_id = Some(reply_to_message_id);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }
}

impl Method for SendLocation {
    const NAME: &'static str = "sendLocation";
}

/// https://core.telegram.org/bots/api#sendvenue
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendVenue {
    pub chat_id: models::ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVenue {
    pub fn new(
        chat_id: impl Into<models::ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn foursquare_id(mut self, foursquare_id: impl Into<String>) -> Self {
        self.foursquare_id = Some(foursquare_id.into());
        self
    }

    pub fn reply_to_message_id(mut self, reply_to_message_id: i64) -> Self {
        self.reply_to_message_id = Some(reply_to_message_id);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }
}

impl Method for SendVenue {
    const NAME: &'static str = "sendVenue";
}

/// https://core.telegram.org/bots/api#sendcontact
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendContact {
    pub chat_id: models::ChatId,
    pub phone_number: String,
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendContact {
    pub fn new(
        chat_id: impl Into<models::ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn reply_to_message_id(mut self, reply_to_message_id: i64) -> Self {
        self.reply_to_message_id = Some(reply_to_message_id);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }
}

impl Method for SendContact {
    const NAME: &'static str = "sendContact";
}

/// https://core.telegram.org/bots/api#sendchataction
///
/// Parse the action with [`str::parse`] to reject unknown ones.
#[derive(Debug, Serialize)]
pub struct SendChatAction {
    pub chat_id: models::ChatId,
    pub action: models::ChatAction,
}

impl SendChatAction {
    pub fn new(chat_id: impl Into<models::ChatId>, action: models::ChatAction) -> Self {
        Self {
            chat_id: chat_id.into(),
            action,
        }
    }
}

impl Method for SendChatAction {
    const NAME: &'static str = "sendChatAction";
}
