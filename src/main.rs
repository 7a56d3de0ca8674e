mod bot;
mod core;
mod errors;
mod util;

use crate::bot::dispatcher::run;
use log::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Bot starting...");

    match run().await {
        Ok(_) => info!("Bot stopped"),
        Err(e) => {
            error!("Failed to start bot: {}", e);
            std::process::exit(1);
        }
    }
}
