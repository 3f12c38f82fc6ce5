//! Integration tests against a local mock feed server

use futures_util::{SinkExt, StreamExt};
use pumpportal_listener::{
    FeedListener, ListenOutcome, ListenerConfigBuilder, ListenerError,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_test::assert_ok;
use tokio_tungstenite::{accept_async, tungstenite::Message};

/// What the mock server observed over one connection.
#[derive(Debug)]
struct MockServerReport {
    /// First inbound message, captured before the server sends anything
    first_message: Option<String>,
    /// Whether the client initiated a close handshake
    closed: bool,
}

/// Bind a mock feed server on an ephemeral port. After accepting one
/// connection it waits for the first inbound message, pushes `frames`,
/// then drains until the client closes.
async fn spawn_mock_server(frames: Vec<String>) -> (String, JoinHandle<MockServerReport>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let endpoint = format!("ws://{}", addr);

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();

        let first_message = match ws.next().await {
            Some(Ok(Message::Text(text))) => Some(text),
            _ => None,
        };

        for frame in frames {
            if ws.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }

        let mut closed = false;
        while let Some(msg) = ws.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    closed = true;
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }

        MockServerReport {
            first_message,
            closed,
        }
    });

    (endpoint, handle)
}

fn listener_for(endpoint: &str, duration: Duration) -> FeedListener {
    let config = ListenerConfigBuilder::new()
        .endpoint(endpoint)
        .duration(duration)
        .build();
    FeedListener::new(config).unwrap()
}

#[tokio::test]
async fn test_subscribe_sent_first_and_exactly_once() {
    let (endpoint, server) = spawn_mock_server(vec![r#"{"mint":"abc"}"#.to_string()]).await;

    let listener = listener_for(&endpoint, Duration::from_millis(300));
    let outcome = listener.listen().await.unwrap();
    assert_eq!(outcome, ListenOutcome::Completed);

    let report = server.await.unwrap();
    assert_eq!(
        report.first_message.as_deref(),
        Some(r#"{"method":"subscribeNewToken"}"#)
    );
}

#[tokio::test]
async fn test_returns_within_duration_bound() {
    let (endpoint, server) = spawn_mock_server(vec![]).await;

    let duration = Duration::from_millis(400);
    let listener = listener_for(&endpoint, duration);

    let start = Instant::now();
    tokio_test::assert_ok!(listener.listen().await);
    let elapsed = start.elapsed();

    assert!(elapsed >= duration, "returned early: {:?}", elapsed);
    assert!(
        elapsed < duration + Duration::from_secs(2),
        "took too long: {:?}",
        elapsed
    );

    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_closed_after_listen_returns() {
    let (endpoint, server) = spawn_mock_server(vec!["hello world".to_string()]).await;

    let listener = listener_for(&endpoint, Duration::from_millis(300));
    listener.listen().await.unwrap();

    let report = server.await.unwrap();
    assert!(report.closed, "client never closed the connection");
}

#[tokio::test]
async fn test_non_json_frame_does_not_end_run_early() {
    // A malformed frame followed by a valid one; the listener must survive
    // both and still run out the full duration.
    let (endpoint, server) = spawn_mock_server(vec![
        "hello world".to_string(),
        r#"{"mint":"abc","name":"Foo"}"#.to_string(),
    ])
    .await;

    let duration = Duration::from_millis(400);
    let listener = listener_for(&endpoint, duration);

    let start = Instant::now();
    let outcome = listener.listen().await.unwrap();
    assert_eq!(outcome, ListenOutcome::Completed);
    assert!(start.elapsed() >= duration);

    server.await.unwrap();
}

#[tokio::test]
async fn test_server_dropping_early_still_completes() {
    // Server that accepts, reads the subscription, then hangs up without
    // a close handshake. The read loop ends early; the timed wait governs.
    let listener_sock = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("ws://{}", listener_sock.local_addr().unwrap());

    let server = tokio::spawn(async move {
        let (stream, _) = listener_sock.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        let _ = ws.next().await;
        drop(ws);
    });

    let duration = Duration::from_millis(300);
    let listener = listener_for(&endpoint, duration);

    let start = Instant::now();
    let outcome = listener.listen().await.unwrap();
    assert_eq!(outcome, ListenOutcome::Completed);
    assert!(start.elapsed() >= duration);

    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_connection_error() {
    let listener = listener_for("ws://127.0.0.1:1", Duration::from_millis(100));

    let err = listener.listen().await.unwrap_err();
    match &err {
        ListenerError::Connection(_) => {}
        other => panic!("expected connection error, got {}", other),
    }
    assert!(format!("{}", err).starts_with("Connection error: "));
}
