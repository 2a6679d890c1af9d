//! Receives webhook updates over HTTP.

use anyhow::Result;
use poem::http::StatusCode;
use poem::listener::TcpListener;
use poem::{handler, post, EndpointExt, Route, Server};
use rusty_telegram::webhook;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::middleware::TracingMiddleware;

pub async fn run(bind_endpoint: String) -> Result<()> {
    info!(bind_endpoint = bind_endpoint.as_str(), "listening for updates…");
    let app = Route::new()
        .at("/", post(on_update))
        .with(TracingMiddleware);
    Server::new(TcpListener::bind(bind_endpoint))
        .run(app)
        .await?;
    Ok(())
}

#[handler]
fn on_update(body: Vec<u8>) -> StatusCode {
    match webhook::parse_update(&body) {
        Ok(Value::Null) => {
            debug!("ignoring the empty update");
            StatusCode::NO_CONTENT
        }
        Ok(update) => {
            info!(update_id = ?update.get("update_id"), "👌 received the update");
            println!("{}", update);
            StatusCode::NO_CONTENT
        }
        Err(error) => {
            warn!("🙅 malformed update: {:#}", error);
            StatusCode::BAD_REQUEST
        }
    }
}
