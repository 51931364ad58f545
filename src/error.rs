use thiserror::Error;

/// Errors raised while configuring or running a smoke-test session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("unsupported URL scheme `{0}`, expected `ws` or `wss`")]
    Scheme(String),

    #[error("{0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary frame is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
