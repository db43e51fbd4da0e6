use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod config;
mod dialogue;
mod gateways;
mod goals;
mod handlers;
mod models;
mod store;

use crate::bot_state::BotState;
use crate::config::AppConfig;
use crate::gateways::{Gateways, OpenFoodFactsClient, OpenWeatherClient};
use crate::handlers::{command_handler, message_handler};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
enum Command {
    #[command(description = "show the main menu")]
    Start,
    #[command(description = "explain the buttons")]
    Help,
    #[command(description = "abort the current step")]
    Cancel,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting hydration bot...");

    let config = AppConfig::from_env()?;
    log::debug!("Loaded {:?}", config);

    let gateways = Gateways::new(
        Arc::new(OpenWeatherClient::new(config.weather_api_key.clone())),
        Arc::new(OpenFoodFactsClient::new()),
    );
    let state = BotState::new(gateways);

    let bot = Bot::new(config.bot_token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("Could not register bot commands: {}", e);
    }

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler)
        )
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
