use swipe_deck_relay::start_server;

#[tokio::main]
async fn main() {
    start_server().await;
}
