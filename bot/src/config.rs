use crate::errors::{Error, Result};

use linkstore::StoreConfig;
use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const DB_VAR: &str = "READLATER_DB";
const BUSY_TIMEOUT_VAR: &str = "READLATER_BUSY_TIMEOUT_MS";
const LOG_VAR: &str = "READLATER_LOG";

const DEFAULT_DB_PATH: &str = "./links_database.db3";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
    // level for the bot and store crates, everything else stays at warn
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{TOKEN_VAR} must be set")))?;

        let db_path = lookup(DB_VAR).map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from);

        let busy_timeout = match lookup(BUSY_TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|why| {
                Error::Config(format!("{BUSY_TIMEOUT_VAR}={raw:?} is not a number: {why}"))
            })?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };

        let log_level = match lookup(LOG_VAR) {
            Some(raw) => LevelFilter::from_str(raw.trim())
                .map_err(|_| Error::Config(format!("{LOG_VAR}={raw:?} is not a log level")))?,
            None => LevelFilter::Debug,
        };

        Ok(Config {
            token,
            db_path,
            busy_timeout: Duration::from_millis(busy_timeout),
            log_level,
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::file(&self.db_path).with_busy_timeout(self.busy_timeout)
    }
}
