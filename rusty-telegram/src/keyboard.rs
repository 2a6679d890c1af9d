//! Reply markup objects and their JSON wire representation.

use serde::Serialize;
use serde_json::Value;

/// https://core.telegram.org/bots/api#replykeyboardmarkup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<String>>,
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
    pub selective: bool,
}

/// Hides the current custom keyboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardHide {
    hide_keyboard: bool,
    pub selective: bool,
}

impl ReplyKeyboardHide {
    pub const fn new(selective: bool) -> Self {
        Self {
            hide_keyboard: true,
            selective,
        }
    }
}

/// https://core.telegram.org/bots/api#forcereply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceReply {
    force_reply: bool,
    pub selective: bool,
}

impl ForceReply {
    pub const fn new(selective: bool) -> Self {
        Self {
            force_reply: true,
            selective,
        }
    }
}

/// Anything accepted by the `reply_markup` parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Keyboard(ReplyKeyboardMarkup),
    Hide(ReplyKeyboardHide),
    ForceReply(ForceReply),

    /// Any other markup, inline keyboards for example.
    Raw(Value),
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardHide> for ReplyMarkup {
    fn from(markup: ReplyKeyboardHide) -> Self {
        Self::Hide(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

impl From<Value> for ReplyMarkup {
    fn from(markup: Value) -> Self {
        Self::Raw(markup)
    }
}

pub fn reply_keyboard_markup<R, B>(
    keyboard: impl IntoIterator<Item = R>,
    resize_keyboard: bool,
    one_time_keyboard: bool,
    selective: bool,
) -> String
where
    R: IntoIterator<Item = B>,
    B: Into<String>,
{
    let keyboard: Vec<Vec<String>> = keyboard
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect();
    to_json(&ReplyKeyboardMarkup {
        keyboard,
        resize_keyboard,
        one_time_keyboard,
        selective,
    })
}

pub fn reply_keyboard_hide(selective: bool) -> String {
    to_json(&ReplyKeyboardHide::new(selective))
}

pub fn force_reply(selective: bool) -> String {
    to_json(&ForceReply::new(selective))
}

fn to_json(markup: &impl Serialize) -> String {
    // Plain structs of strings and booleans always serialize.
    serde_json::to_string(markup).unwrap_or_default()
}
