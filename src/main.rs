use std::error::Error;
use std::time::Duration;

use dotenv::dotenv;
use tokio::time;

use orderfire::client::OrderClient;
use orderfire::generator::generate_order;
use orderfire::logger::setup_logger;

/// Pause between consecutive orders, request latency excluded.
const FIRE_INTERVAL: Duration = Duration::from_millis(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    setup_logger()?;

    let client = OrderClient::new();
    log::info!("firing orders at {}", client.endpoint());

    // One immediate shot, then settle into the fixed cadence. Any send failure
    // bubbles out and kills the process.
    client.send_order(&generate_order()).await?;
    loop {
        time::sleep(FIRE_INTERVAL).await;
        client.send_order(&generate_order()).await?;
    }
}
