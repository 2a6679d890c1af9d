//! Maps the subcommands onto Bot API calls.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use rusty_telegram::api::BotApi;
use rusty_telegram::input_file::InputFile;
use rusty_telegram::methods::{self, Method, Upload};
use rusty_telegram::models;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::opts::{Command, MediaKind};

pub async fn run(api: &BotApi, command: Command) -> Result<Value> {
    let response = match command {
        Command::GetMe => api.get_me().await?,

        Command::PollUpdates {
            offset,
            limit,
            timeout_secs,
        } => {
            let method = methods::GetUpdates {
                offset,
                limit,
                timeout: timeout_secs.map(Duration::from_secs),
            };
            method.call(api).await?
        }

        Command::SendMessage {
            chat_id,
            text,
            parse_mode,
            reply_to,
        } => {
            let mut method = methods::SendMessage::new(chat_id, text);
            method.parse_mode = parse_mode;
            method.reply_to_message_id = reply_to;
            method.call(api).await?
        }

        Command::SendMedia {
            kind,
            chat_id,
            source,
            caption,
            file_id,
        } => {
            let source = if file_id {
                InputFile::file_id(source)
            } else {
                InputFile::from(source)
            };
            send_media(api, kind, chat_id, source, caption).await?
        }

        Command::SendChatAction { chat_id, action } => {
            methods::SendChatAction::new(chat_id, action)
                .call(api)
                .await?
        }

        Command::SetWebhook { url, certificate } => {
            let method = methods::SetWebhook::new(&url)?;
            let method = match certificate {
                Some(certificate) => method.certificate(certificate),
                None => method,
            };
            method.call(api).await?
        }

        Command::GetFile { file_id } => methods::GetFile::new(file_id).call(api).await?,

        Command::Download { file_id, output } => {
            let response = methods::GetFile::new(file_id).call(api).await?;
            let file: models::File = models::Response::from_value(response)?.into_result()?;
            let file_path = file
                .file_path
                .context("the file is not available for download")?;
            let contents = api.download_file(&file_path).await?;
            std::fs::write(&output, &contents)
                .with_context(|| format!("failed to write `{}`", output.display()))?;
            info!(file_path = file_path.as_str(), len = contents.len(), "downloaded");
            json!({
                "file_id": file.file_id,
                "file_path": file_path,
                "output": output,
                "len": contents.len(),
            })
        }

        Command::ReadUpdate | Command::Listen { .. } => {
            bail!("the command does not call the Bot API")
        }
    };
    Ok(response)
}

#[instrument(level = "info", skip_all, fields(kind = ?kind))]
async fn send_media(
    api: &BotApi,
    kind: MediaKind,
    chat_id: models::ChatId,
    source: InputFile,
    caption: Option<String>,
) -> Result<Value> {
    if caption.is_some() && !kind.has_caption() {
        warn!("the media kind has no caption, ignoring it");
    }
    let response = match kind {
        MediaKind::Photo => {
            let mut method = methods::SendPhoto::new(chat_id, source);
            method.caption = caption;
            method.call(api).await?
        }
        MediaKind::Audio => methods::SendAudio::new(chat_id, source).call(api).await?,
        MediaKind::Document => {
            let mut method = methods::SendDocument::new(chat_id, source);
            method.caption = caption;
            method.call(api).await?
        }
        MediaKind::Sticker => methods::SendSticker::new(chat_id, source).call(api).await?,
        MediaKind::Video => {
            let mut method = methods::SendVideo::new(chat_id, source);
            method.caption = caption;
            method.call(api).await?
        }
        MediaKind::Voice => methods::SendVoice::new(chat_id, source).call(api).await?,
    };
    Ok(response)
}
