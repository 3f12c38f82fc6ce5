use pumpportal_listener::{init_logging, FeedListener, ListenerError};

#[tokio::main]
async fn main() {
    init_logging();

    let listener = FeedListener::with_defaults();
    match listener.listen().await {
        Ok(_) => {}
        Err(ListenerError::Connection(e)) => println!("Connection error: {}", e),
        Err(e) => println!("{}", e),
    }
}
