#[tokio::main]
async fn main() {
    review_server::start_server().await;
}
