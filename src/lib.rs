//! Smoke-test client for a chat WebSocket endpoint.
//!
//! The client connects to the endpoint, sends a single greeting of the form
//! `{"message": "..."}` as soon as the handshake completes, and then logs
//! every JSON frame the endpoint sends back until the connection ends.
//! Socket errors are logged and otherwise ignored; there is no retry and no
//! reconnection.
//!
//! Events are reported through an [`EventSink`]. The binary uses
//! [`LogSink`], which writes through the `log` facade.

#![deny(unused_must_use, unused_mut, unused_imports, unused_import_braces)]

pub use tungstenite;

pub mod config;
mod connect;
mod error;
pub mod payload;
pub mod session;
pub mod sink;

pub use config::Config;
pub use connect::connect_and_run;
pub use error::{Error, Result};
pub use payload::{Greeting, ServerReply};
pub use session::SessionReport;
pub use sink::{EventSink, LogSink};
