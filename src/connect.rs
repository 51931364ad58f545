//! Connection helper.
use log::*;
use tokio_tungstenite::connect_async;

use crate::config::Config;
use crate::error::Error;
use crate::session::{self, SessionReport};
use crate::sink::EventSink;

/// Connects to the configured endpoint and runs a session on it.
///
/// A connection that cannot be established (refused, unresolvable, failed
/// handshake) is reported to the sink like any other socket error. With the
/// `native-tls` or `rustls-tls-webpki-roots` feature, `wss://` URLs are
/// upgraded to TLS before the handshake.
pub async fn connect_and_run<K>(config: &Config, sink: &mut K) -> SessionReport
where
    K: EventSink + ?Sized,
{
    info!("Connecting to {}", config.url);
    let (stream, response) = match connect_async(config.url.as_str()).await {
        Ok(connected) => connected,
        Err(e) => {
            sink.on_error(&Error::from(e));
            return SessionReport::failed_to_connect();
        }
    };
    debug!("Handshake response status: {}", response.status());

    session::run(stream, &config.greeting(), sink).await
}
