use serde::Serialize;
use serde_with::json::JsonString;
use serde_with::serde_as;

use crate::input_file::InputFile;
use crate::keyboard::ReplyMarkup;
use crate::methods::Upload;
use crate::models;

/// https://core.telegram.org/bots/api#sendphoto
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendPhoto {
    pub chat_id: models::ChatId,
    pub photo: InputFile,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<models::ChatId>, photo: impl Into<InputFile>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: photo.into(),
            caption: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
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

impl Upload for SendPhoto {
    const NAME: &'static str = "sendPhoto";
    const FIELD: &'static str = "photo";

    fn input_file(&self) -> &InputFile {
        &self.photo
    }
}

/// https://core.telegram.org/bots/api#sendaudio
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendAudio {
    pub chat_id: models::ChatId,
    pub audio: InputFile,

    /// In seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAudio {
    pub fn new(chat_id: impl Into<models::ChatId>, audio: impl Into<InputFile>) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio: audio.into(),
            duration: None,
            performer: None,
            title: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

impl Upload for SendAudio {
    const NAME: &'static str = "sendAudio";
    const FIELD: &'static str = "audio";

    fn input_file(&self) -> &InputFile {
        &self.audio
    }
}

/// https://core.telegram.org/bots/api#senddocument
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendDocument {
    pub chat_id: models::ChatId,
    pub document: InputFile,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<models::ChatId>, document: impl Into<InputFile>) -> Self {
        Self {
            chat_id: chat_id.into(),
            document: document.into(),
            caption: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
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

impl Upload for SendDocument {
    const NAME: &'static str = "sendDocument";
    const FIELD: &'static str = "document";
    const ACCEPTS_ANY_MEDIA: bool = true;

    fn input_file(&self) -> &InputFile {
        &self.document
    }
}

/// https://core.telegram.org/bots/api#sendsticker
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendSticker {
    pub chat_id: models::ChatId,
    pub sticker: InputFile,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<models::ChatId>, sticker: impl Into<InputFile>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker: sticker.into(),
            reply_to_message_id: None,
            reply_markup: None,
        }
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

impl Upload for SendSticker {
    const NAME: &'static str = "sendSticker";
    const FIELD: &'static str = "sticker";

    fn input_file(&self) -> &InputFile {
        &self.sticker
    }
}

/// https://core.telegram.org/bots/api#sendvideo
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendVideo {
    pub chat_id: models::ChatId,
    pub video: InputFile,

    /// In seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideo {
    pub fn new(chat_id: impl Into<models::ChatId>, video: impl Into<InputFile>) -> Self {
        Self {
            chat_id: chat_id.into(),
            video: video.into(),
            duration: None,
            caption: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
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

impl Upload for SendVideo {
    const NAME: &'static str = "sendVideo";
    const FIELD: &'static str = "video";

    fn input_file(&self) -> &InputFile {
        &self.video
    }
}

/// https://core.telegram.org/bots/api#sendvoice
#[serde_as]
#[derive(Debug, Serialize)]
pub struct SendVoice {
    pub chat_id: models::ChatId,
    pub voice: InputFile,

    /// In seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde_as(as = "Option<JsonString>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVoice {
    pub fn new(chat_id: impl Into<models::ChatId>, voice: impl Into<InputFile>) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice: voice.into(),
            duration: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
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

impl Upload for SendVoice {
    const NAME: &'static str = "sendVoice";
    const FIELD: &'static str = "voice";

    fn input_file(&self) -> &InputFile {
        &self.voice
    }
}
