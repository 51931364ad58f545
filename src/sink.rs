//! Destinations for socket events.

use log::*;
use serde_json::Value;
use tungstenite::protocol::CloseFrame;

use crate::error::Error;
use crate::payload::ServerReply;

/// Receives the events of a session, in the order they happen.
pub trait EventSink {
    /// The handshake completed.
    fn on_open(&mut self);

    /// A data frame was decoded. `value` is exactly what the peer sent.
    fn on_message(&mut self, value: &Value);

    /// Something went wrong: a failed connect, a bad frame or a broken socket.
    fn on_error(&mut self, error: &Error);

    /// The peer started the closing handshake.
    fn on_close(&mut self, _frame: Option<&CloseFrame>) {}
}

/// Writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_open(&mut self) {
        info!("WebSocket connected!");
    }

    fn on_message(&mut self, value: &Value) {
        match ServerReply::classify(value) {
            ServerReply::Error(_) => warn!("Received: {}", value),
            _ => info!("Received: {}", value),
        }
    }

    fn on_error(&mut self, error: &Error) {
        error!("WebSocket error: {}", error);
    }

    fn on_close(&mut self, frame: Option<&CloseFrame>) {
        match frame {
            Some(frame) => info!(
                "WebSocket closed with code {}: {}",
                u16::from(frame.code),
                frame.reason.as_str()
            ),
            None => info!("WebSocket closed"),
        }
    }
}
