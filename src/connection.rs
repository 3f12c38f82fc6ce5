//! WebSocket connection establishment

use crate::error::ConnectionError;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::sleep;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

/// Stream type returned by [`connect`]
pub type FeedStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Establish a WebSocket connection to `endpoint`, bounded by `timeout`.
///
/// There is no retry here: a failure to connect is terminal for the run.
pub async fn connect(endpoint: &str, timeout: Duration) -> Result<FeedStream, ConnectionError> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConnectionError::EstablishmentFailed(format!("invalid URL: {}", e)))?;

    let connect_future = connect_async(url);
    let timeout_future = sleep(timeout);

    tokio::select! {
        result = connect_future => {
            match result {
                Ok((ws_stream, _)) => {
                    tracing::info!("WebSocket connection established to {}", endpoint);
                    Ok(ws_stream)
                }
                Err(e) => Err(ConnectionError::EstablishmentFailed(e.to_string())),
            }
        }
        _ = timeout_future => {
            Err(ConnectionError::Timeout(format!(
                "no connection to {} within {:?}", endpoint, timeout
            )))
        }
    }
}
