//! JSON payloads exchanged with the chat endpoint.

use serde::Serialize;
use serde_json::Value;
use tungstenite::Message;

use crate::error::Result;

/// The single message the client sends after connecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Greeting<'a> {
    pub message: &'a str,
}

/// Serializes a greeting to the text sent on the wire.
pub fn encode(greeting: &Greeting<'_>) -> Result<String> {
    Ok(serde_json::to_string(greeting)?)
}

/// Decodes a data frame as JSON.
///
/// Binary frames are decoded as UTF-8 JSON the same way as text frames,
/// rather than being rejected as a browser with `binaryType = "blob"` would.
/// Control frames carry no payload for the log and yield `None`.
pub fn decode(message: Message) -> Result<Option<Value>> {
    match message {
        Message::Text(text) => Ok(Some(serde_json::from_str(text.as_str())?)),
        Message::Binary(data) => {
            let text = std::str::from_utf8(&data)?;
            Ok(Some(serde_json::from_str(text)?))
        }
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) | Message::Frame(_) => Ok(None),
    }
}

/// The shapes the chat endpoint answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerReply<'a> {
    /// `{"response": "..."}`
    Response(&'a str),
    /// `{"error": "..."}`
    Error(&'a str),
    /// Anything else.
    Other,
}

impl<'a> ServerReply<'a> {
    pub fn classify(value: &'a Value) -> Self {
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return ServerReply::Error(error);
        }
        match value.get("response").and_then(Value::as_str) {
            Some(response) => ServerReply::Response(response),
            None => ServerReply::Other,
        }
    }
}
