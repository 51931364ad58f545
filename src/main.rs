//! Connects to a chat WebSocket endpoint, sends one greeting and logs what
//! comes back.
//!
//!     cargo run -- [URL] [MESSAGE]
//!
//! Without arguments the client talks to `ws://localhost:8000/ws/chat/`. Run
//! the `echo-server` example for a local endpoint to test against.

use std::env;

use chat_smoke::{Config, Error, LogSink};
use log::*;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(env::args().skip(1))?;
    let report = chat_smoke::connect_and_run(&config, &mut LogSink).await;
    info!(
        "Done: sent {}, received {}, errors {}",
        report.sent, report.received, report.errors
    );

    Ok(())
}
