//! Error types for the pumpportal listener

use thiserror::Error;

/// Top-level error type for a listen cycle
#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Transport-layer errors: establishing the connection or sending the
/// one-shot subscription. Per-frame decode failures are deliberately not
/// represented here; they degrade to raw-text printing inside the read loop.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("failed to establish connection: {0}")]
    EstablishmentFailed(String),

    #[error("failed to send subscription: {0}")]
    SubscribeFailed(String),

    #[error("connection timeout: {0}")]
    Timeout(String),
}
