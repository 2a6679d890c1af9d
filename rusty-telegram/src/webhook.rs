//! Inbound half of the webhook delivery mode.

use std::io::{self, Read};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Result;

/// Reads the update pushed to this process, the request body arrives on standard input.
#[instrument(level = "debug", skip_all)]
pub fn get_webhook_updates() -> Result<Value> {
    read_update(io::stdin().lock())
}

pub fn read_update(mut reader: impl Read) -> Result<Value> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    parse_update(&body)
}

/// Parses a webhook request body, an empty body is [`Value::Null`].
pub fn parse_update(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        debug!("empty update body");
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}
