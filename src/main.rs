// src/main.rs
use anyhow::Result;
use health_poller::{
    config::{self, PollerConfig},
    logging,
    poller::Poller,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            config::load_config(&path).await?
        }
        None => PollerConfig::default(),
    };

    let mut poller = Poller::new(config, std::io::stdout())?;
    poller.run().await
}
