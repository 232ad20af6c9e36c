#[tokio::main]
async fn main() {
    stayspot_backend::run().await;
}
