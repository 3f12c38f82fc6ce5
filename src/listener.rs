//! The timed listen cycle: connect, subscribe, print, disconnect

use crate::{
    config::ListenerConfig,
    connection::{self, FeedStream},
    error::{ConnectionError, ListenerError},
    render,
    subscription::SubscriptionRequest,
};
use futures_util::{
    stream::{SplitStream, StreamExt},
    SinkExt,
};
use tokio_tungstenite::tungstenite::Message;

/// Result of a completed listen cycle. Success carries no data; the output
/// of a run is its console lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenOutcome {
    Completed,
}

/// Listener for the pumpportal new-token feed.
///
/// One `listen` call performs one full cycle: connect, send the subscription
/// exactly once, print inbound frames for the configured duration, cancel the
/// read task, and close the connection.
pub struct FeedListener {
    config: ListenerConfig,
}

impl FeedListener {
    pub fn new(config: ListenerConfig) -> Result<Self, ListenerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: ListenerConfig::default(),
        }
    }

    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    /// Run one listen cycle.
    ///
    /// The connection is released on every exit path: a connect or subscribe
    /// failure never leaves a stream behind, and the normal path closes the
    /// write half after the read task has been joined.
    pub async fn listen(&self) -> Result<ListenOutcome, ListenerError> {
        let ws_stream =
            connection::connect(&self.config.endpoint, self.config.connect_timeout).await?;
        let (mut write, read) = ws_stream.split();

        // Subscribe before the read task exists, so the server's first push
        // can never race an unsent subscription.
        let frame = SubscriptionRequest::new_token().to_message()?;
        write
            .send(frame)
            .await
            .map_err(|e| ConnectionError::SubscribeFailed(e.to_string()))?;

        println!(
            "Subscribed to {} for {}s at {}",
            self.config.endpoint,
            self.config.duration.as_secs(),
            render::utc_timestamp()
        );

        let reader = tokio::spawn(read_loop(read));

        tokio::time::sleep(self.config.duration).await;

        // Cancellation interrupts a blocked `next()` promptly; the abort is
        // the expected way out, not a failure.
        reader.abort();
        match reader.await {
            Ok(()) => tracing::debug!("read task finished before cancellation"),
            Err(e) if e.is_cancelled() => tracing::debug!("read task cancelled"),
            Err(e) => tracing::warn!("read task ended abnormally: {}", e),
        }

        if let Err(e) = write.close().await {
            // The peer may already have torn the connection down.
            tracing::debug!("close handshake: {}", e);
        }
        tracing::info!("WebSocket connection disconnected");

        Ok(ListenOutcome::Completed)
    }
}

impl Default for FeedListener {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Consume inbound frames until cancelled or the stream ends.
///
/// Each text frame is printed behind a UTC timestamp; decode failures fall
/// back to raw text inside [`render::format_line`] and never escape here.
async fn read_loop(mut read: SplitStream<FeedStream>) {
    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => {
                println!("{}", render::format_line(&text));
            }
            Ok(Message::Binary(data)) => {
                tracing::debug!("ignoring binary frame of {} bytes", data.len());
            }
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                tracing::debug!("keepalive frame");
            }
            Ok(Message::Close(_)) => {
                tracing::info!("server closed the connection");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                // A dropped connection just ends the loop early; the timed
                // wait in `listen` still governs when the cycle returns.
                tracing::warn!("WebSocket error: {}", e);
                break;
            }
        }
    }
}
