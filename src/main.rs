use anyhow::Result;
use keyboards::bot::{callback_handler, message_handler};
use keyboards::grid_config::BotConfig;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging; `log` records from the library are bridged in
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting keyboard demo bot");

    let config = Arc::new(BotConfig::from_env()?);
    info!(
        menu_columns = config.menu_columns,
        fill_last_row = config.reflow.fill_last_row,
        "Loaded configuration"
    );

    let bot = Bot::new(config.bot_token.clone());

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
