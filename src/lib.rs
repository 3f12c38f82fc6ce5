//! # pumpportal-listener
//!
//! A small client for the pumpportal.fun real-time data feed. It opens a
//! secure WebSocket, subscribes to the new-token event stream, prints each
//! inbound frame behind a UTC timestamp for a fixed duration, then closes
//! the connection.
//!
//! ## Quick Start
//! ```rust,ignore
//! use pumpportal_listener::FeedListener;
//!
//! let listener = FeedListener::with_defaults();
//! listener.listen().await?;
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod listener;
pub mod render;
pub mod subscription;

pub use config::{ListenerConfig, ListenerConfigBuilder, DEFAULT_ENDPOINT};
pub use error::{ConnectionError, ListenerError};
pub use listener::{FeedListener, ListenOutcome};
pub use subscription::SubscriptionRequest;

use tracing_subscriber;

/// Initialize logging for the listener
pub fn init_logging() {
    tracing_subscriber::fmt::init();
}
