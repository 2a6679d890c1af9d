use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rusty_telegram::models::{ChatAction, ChatId, ParseMode};
use rusty_telegram_opts::{bot, sentry};

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    #[clap(flatten)]
    pub bot: bot::Opts,

    #[clap(flatten)]
    pub sentry: sentry::Opts,

    #[clap(flatten)]
    pub tracing: rusty_telegram_opts::tracing::Opts,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Tests the bot token
    GetMe,

    /// Receives updates with long polling
    PollUpdates {
        /// Identifier of the first update to be returned
        #[clap(long)]
        offset: Option<i64>,

        /// Maximum number of updates, 1 to 100
        #[clap(long)]
        limit: Option<u8>,

        /// Long polling timeout, in seconds
        #[clap(long = "timeout-secs")]
        timeout_secs: Option<u64>,
    },

    /// Sends a text message
    SendMessage {
        chat_id: ChatId,

        text: String,

        /// `MarkdownV2`, `Markdown` or `HTML`
        #[clap(long)]
        parse_mode: Option<ParseMode>,

        /// Message to reply to
        #[clap(long = "reply-to")]
        reply_to: Option<i64>,
    },

    /// Sends a photo, audio, document, sticker, video or voice message
    SendMedia {
        #[clap(value_enum)]
        kind: MediaKind,

        chat_id: ChatId,

        /// URL or local path, a file ID with `--file-id`
        source: String,

        /// Caption for photos, documents and videos
        #[clap(long)]
        caption: Option<String>,

        /// Treat the source as a file ID of an already uploaded file
        #[clap(long)]
        file_id: bool,
    },

    /// Tells the user that something is happening on the bot's side
    SendChatAction {
        chat_id: ChatId,

        /// `typing`, `upload_photo`, `record_video`, `upload_video`, `record_audio`,
        /// `upload_audio`, `upload_document` or `find_location`
        action: ChatAction,
    },

    /// Sets the HTTPS URL the updates are pushed to
    SetWebhook {
        url: String,

        /// Public key certificate, URL or local path
        #[clap(long)]
        certificate: Option<String>,
    },

    /// Gets basic info about a file
    GetFile { file_id: String },

    /// Downloads a file
    Download { file_id: String, output: PathBuf },

    /// Reads a webhook update from stdin
    ReadUpdate,

    /// Accepts webhook updates over HTTP and prints them
    Listen {
        #[clap(default_value = "0.0.0.0:8080")]
        bind_endpoint: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaKind {
    Photo,
    Audio,
    Document,
    Sticker,
    Video,
    Voice,
}

impl MediaKind {
    pub const fn has_caption(self) -> bool {
        matches!(self, Self::Photo | Self::Document | Self::Video)
    }
}
