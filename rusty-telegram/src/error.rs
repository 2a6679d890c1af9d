use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Telegram Bot API client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The client cannot be constructed from the supplied settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An argument is rejected before any request is made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A downloaded upload has a media type the method does not accept.
    #[error("unsupported media type `{mime_type}` for `{method}`")]
    UnsupportedMediaType {
        method: &'static str,
        mime_type: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The Bot API answered with `"ok": false`.
    #[error("error {code}: {description}")]
    Api { code: i64, description: String },
}
