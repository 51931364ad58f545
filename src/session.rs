//! The smoke-test session: greet once, then log whatever comes back.

use futures_util::{SinkExt, StreamExt};
use log::*;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::WebSocketStream;
use tungstenite::protocol::{CloseFrame, Message};

use crate::error::Error;
use crate::payload::{self, Greeting};
use crate::sink::EventSink;

/// What happened during a session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionReport {
    /// Whether the handshake completed.
    pub opened: bool,
    /// Frames sent by the client. At most one.
    pub sent: usize,
    /// Data frames decoded and handed to the sink.
    pub received: usize,
    /// Errors handed to the sink.
    pub errors: usize,
    /// Set once the peer starts the closing handshake, with or without a frame.
    pub closed: bool,
    /// The peer's close frame, if it sent a code.
    pub close: Option<CloseFrame>,
}

impl SessionReport {
    pub(crate) fn failed_to_connect() -> Self {
        SessionReport { errors: 1, ..SessionReport::default() }
    }
}

/// Drives an already connected socket until the connection ends.
///
/// The greeting goes out exactly once, right away. Every frame that follows
/// is decoded and reported. A frame that is not JSON is reported as an error
/// and reading continues; a broken socket is reported and ends the session.
/// Nothing is returned as an error: failures only reach the sink.
pub async fn run<S, K>(
    mut stream: WebSocketStream<S>,
    greeting: &Greeting<'_>,
    sink: &mut K,
) -> SessionReport
where
    S: AsyncRead + AsyncWrite + Unpin,
    K: EventSink + ?Sized,
{
    let mut report = SessionReport { opened: true, ..SessionReport::default() };
    sink.on_open();

    let text = match payload::encode(greeting) {
        Ok(text) => text,
        Err(e) => {
            report.errors += 1;
            sink.on_error(&e);
            return report;
        }
    };
    debug!("Sending greeting: {}", text);
    if let Err(e) = stream.send(Message::text(text)).await {
        report.errors += 1;
        sink.on_error(&Error::from(e));
        return report;
    }
    report.sent += 1;

    while let Some(message) = stream.next().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                report.errors += 1;
                sink.on_error(&Error::from(e));
                break;
            }
        };
        trace!("Frame received: {:?}", message);

        // The close reply is flushed on the next read, which then ends the stream.
        if let Message::Close(frame) = message {
            sink.on_close(frame.as_ref());
            report.closed = true;
            report.close = frame;
            continue;
        }

        match payload::decode(message) {
            Ok(Some(value)) => {
                report.received += 1;
                sink.on_message(&value);
            }
            Ok(None) => {}
            Err(e) => {
                report.errors += 1;
                sink.on_error(&e);
            }
        }
    }

    debug!("Session finished: {:?}", report);
    report
}
