#![allow(dead_code)]

use std::future::Future;

use chat_smoke::{Config, Error, EventSink};
use log::*;
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::{accept_async, WebSocketStream};
use tungstenite::protocol::CloseFrame;

/// Collects every event it sees.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub opened: usize,
    pub messages: Vec<Value>,
    pub errors: Vec<String>,
    pub closes: Vec<Option<CloseFrame>>,
}

impl EventSink for RecordingSink {
    fn on_open(&mut self) {
        self.opened += 1;
    }

    fn on_message(&mut self, value: &Value) {
        self.messages.push(value.clone());
    }

    fn on_error(&mut self, error: &Error) {
        info!("Recorded error: {}", error);
        self.errors.push(error.to_string());
    }

    fn on_close(&mut self, frame: Option<&CloseFrame>) {
        self.closes.push(frame.cloned());
    }
}

/// Binds a listener on a free local port and returns its chat URL.
pub async fn listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let address = listener.local_addr().expect("Bound listener has no address");
    (listener, format!("ws://{}/ws/chat/", address))
}

/// Runs a mock chat endpoint that serves exactly one connection with `handler`.
pub async fn endpoint<F, Fut>(handler: F) -> (Config, JoinHandle<Fut::Output>)
where
    F: FnOnce(WebSocketStream<TcpStream>) -> Fut + Send + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    let (listener, url) = listener().await;
    let server = tokio::spawn(async move {
        info!("Waiting on next connection");
        let (connection, _) = listener.accept().await.expect("No connections to accept");
        let stream = accept_async(connection).await.expect("Failed to handshake with connection");
        handler(stream).await
    });
    let config = Config::from_args(vec![url]).expect("Mock endpoint URL is valid");
    (config, server)
}
