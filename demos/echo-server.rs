//! A local stand-in for the chat endpoint.
//!
//! Every text frame is expected to be `{"message": "..."}` and is answered
//! with `{"response": "Echo: ..."}`. Frames that are not JSON get
//! `{"error": "Invalid JSON format"}` back. JSON that is not an object, and
//! binary frames, get `{"error": "Internal server error"}`.
//!
//! You can test the client against it by running:
//!
//!     cargo run --example echo-server 127.0.0.1:8000
//!
//! And then in another window run:
//!
//!     cargo run

use std::env;
use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use log::*;
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tungstenite::{Message, Result};

fn reply_to(text: &str) -> Value {
    let request = match serde_json::from_str::<Value>(text) {
        Ok(request) => request,
        Err(_) => return json!({ "error": "Invalid JSON format" }),
    };
    let request = match request.as_object() {
        Some(request) => request,
        None => {
            error!("Error in chat handler: request is not a JSON object: {}", request);
            return internal_error();
        }
    };
    let message = request.get("message").and_then(Value::as_str).unwrap_or("");
    info!("Received message: {}", message);
    json!({ "response": format!("Echo: {}", message) })
}

/// The reply to one frame, if it gets one.
fn reply(msg: &Message) -> Option<Value> {
    match msg {
        Message::Text(text) => Some(reply_to(text.as_str())),
        Message::Binary(_) => {
            error!("Error in chat handler: binary frames are not supported");
            Some(internal_error())
        }
        _ => None,
    }
}

fn internal_error() -> Value {
    json!({ "error": "Internal server error" })
}

async fn handle_connection(peer: SocketAddr, stream: TcpStream) -> Result<()> {
    let mut ws_stream = tokio_tungstenite::accept_async(stream).await?;
    info!("WebSocket connection established: {}", peer);

    while let Some(msg) = ws_stream.next().await {
        let msg = msg?;
        if let Message::Close(frame) = &msg {
            let code = frame.as_ref().map(|f| u16::from(f.code));
            info!("WebSocket disconnected with code: {:?}", code);
        }
        if let Some(reply) = reply(&msg) {
            ws_stream.send(Message::text(reply.to_string())).await?;
        }
    }

    Ok(())
}

async fn accept_connection(peer: SocketAddr, stream: TcpStream) {
    if let Err(e) = handle_connection(peer, stream).await {
        match e {
            tungstenite::Error::ConnectionClosed | tungstenite::Error::Protocol(_) => (),
            err => error!("Error processing connection: {}", err),
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = env::args().nth(1).unwrap_or_else(|| "127.0.0.1:8000".to_string());
    let listener = TcpListener::bind(&addr).await.expect("Can't listen");
    info!("Listening on: {}", addr);

    while let Ok((stream, _)) = listener.accept().await {
        let peer = stream.peer_addr().expect("connected streams should have a peer address");
        info!("Peer address: {}", peer);

        tokio::spawn(accept_connection(peer, stream));
    }
}
