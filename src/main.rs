#[tokio::main]
async fn main() {
    if let Err(e) = nelax_lib::run().await {
        tracing::error!("❌ Failed to start NelaX Lite: {e:#}");
        std::process::exit(1);
    }
}
