#![warn(
    clippy::cognitive_complexity,
    clippy::missing_const_for_fn,
    clippy::option_if_let_else
)]

mod config;
mod errors;
mod handler;
mod structs;

use log::LevelFilter;
use log::{error, info};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use simple_logger::SimpleLogger;

use std::process;
use std::sync::Arc;

use config::Config;
use handler::Handler;
use linkstore::LinkStore;

fn open_store(config: &Config) -> LinkStore {
    match LinkStore::open(&config.store_config()) {
        Ok(store) => {
            info!("sucessfully opened and migrated {:?}", config.db_path);
            store
        }
        Err(why) => {
            error!("Failed to open link store, exiting {why:?}");
            process::exit(-1);
        }
    }
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            // logging isn't up yet, its level comes from the config
            eprintln!("{why}");
            process::exit(-1);
        }
    };

    if let Err(why) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("readlater", config.log_level)
        .with_module_level("linkstore", config.log_level)
        .with_utc_timestamps()
        .init()
    {
        eprintln!("Failed to initialise logging {why}");
        process::exit(-1);
    }

    // the store lives until the client stops, dropping it closes the database
    let store = Arc::new(open_store(&config));

    let intents = GatewayIntents::GUILD_MESSAGES
        .union(GatewayIntents::DIRECT_MESSAGES)
        .union(GatewayIntents::MESSAGE_CONTENT);

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler::new(store))
        .await
    {
        Ok(client) => client,
        Err(why) => {
            error!("Err creating client: {why:?}");
            process::exit(-1);
        }
    };

    // Finally, start a single shard, and start listening to events.
    //
    // Shards will automatically attempt to reconnect, and will perform
    // exponential backoff until it reconnects.
    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}
