use std::sync::Arc;

use anyhow::{Error, Result};
use multichannel_notifier::{
    api::run_api_server, clients::log::LogTransport, config::Config, dispatcher::Dispatcher,
    utils::init_tracing,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let dispatcher = Dispatcher::new(Arc::new(LogTransport::new()));

    info!(
        creators = dispatcher.registry().len(),
        "Configuration validated. Dispatcher is ready to start."
    );

    run_api_server(config, dispatcher).await
}
