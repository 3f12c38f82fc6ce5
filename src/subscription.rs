//! The one-shot subscription message for the new-token stream

use crate::error::ConnectionError;
use serde::{Deserialize, Serialize};
use tokio_tungstenite::tungstenite::Message;

/// Method name registering interest in token-creation events
pub const SUBSCRIBE_NEW_TOKEN: &str = "subscribeNewToken";

/// Control message sent once per connection, before the read loop starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub method: String,
}

impl SubscriptionRequest {
    pub fn new_token() -> Self {
        Self {
            method: SUBSCRIBE_NEW_TOKEN.to_string(),
        }
    }

    /// Serialize into the outbound text frame.
    pub fn to_message(&self) -> Result<Message, ConnectionError> {
        let payload = serde_json::to_string(self)
            .map_err(|e| ConnectionError::SubscribeFailed(e.to_string()))?;
        Ok(Message::Text(payload))
    }
}
