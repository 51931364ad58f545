//! Session configuration.
//!
//! The binary takes up to two positional arguments, `[URL] [MESSAGE]`.
//! Whatever is missing falls back to the local chat endpoint and the
//! browser greeting.

use url::Url;

use crate::error::{Error, Result};
use crate::payload::Greeting;

/// Endpoint used when no URL is given.
pub const DEFAULT_URL: &str = "ws://localhost:8000/ws/chat/";

/// Greeting sent when no message is given.
pub const DEFAULT_MESSAGE: &str = "Hello from browser!";

/// Where to connect and what to say once connected.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: Url,
    pub message: String,
}

impl Config {
    /// Validates `url` and builds a configuration around it.
    pub fn new(url: &str, message: impl Into<String>) -> Result<Self> {
        let url = Url::parse(url)?;
        match url.scheme() {
            "ws" | "wss" => {}
            other => return Err(Error::Scheme(other.to_owned())),
        }
        Ok(Config { url, message: message.into() })
    }

    /// Builds a configuration from positional arguments, program name
    /// already stripped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let url = args.next().unwrap_or_else(|| DEFAULT_URL.to_owned());
        let message = args.next().unwrap_or_else(|| DEFAULT_MESSAGE.to_owned());
        Config::new(&url, message)
    }

    pub fn greeting(&self) -> Greeting<'_> {
        Greeting { message: &self.message }
    }
}
