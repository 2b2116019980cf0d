//! # Grid Configuration Module
//!
//! Options for the reflow transform and the demo bot's runtime configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

// Defaults for the demo bot menu
pub const DEFAULT_MENU_COLUMNS: usize = 2;
pub const DEFAULT_FILL_LAST_ROW: bool = false;

/// Options accepted by [`crate::grid::reflow`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowOptions {
    /// Size the first row so that the last row comes out exactly full
    #[serde(default)]
    pub fill_last_row: bool,
}

impl ReflowOptions {
    /// Options with `fill_last_row` enabled
    pub fn fill_last_row() -> Self {
        Self {
            fill_last_row: true,
        }
    }
}

/// Runtime configuration for the demo bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub bot_token: String,
    /// Number of columns the menu is flowed into on first display
    pub menu_columns: usize,
    /// Reflow options applied to the initial menu
    pub reflow: ReflowOptions,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            menu_columns: DEFAULT_MENU_COLUMNS,
            reflow: ReflowOptions {
                fill_last_row: DEFAULT_FILL_LAST_ROW,
            },
        }
    }
}

impl BotConfig {
    /// Load configuration from the process environment
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` (required), `MENU_COLUMNS` and
    /// `MENU_FILL_LAST_ROW`. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;
        Self::from_values(
            bot_token,
            env::var("MENU_COLUMNS").ok().as_deref(),
            env::var("MENU_FILL_LAST_ROW").ok().as_deref(),
        )
    }

    /// Build a configuration from raw string values
    ///
    /// Missing optional values fall back to the defaults.
    pub fn from_values(
        bot_token: String,
        menu_columns: Option<&str>,
        fill_last_row: Option<&str>,
    ) -> Result<Self> {
        let menu_columns = match menu_columns {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MENU_COLUMNS is not a number: {raw}"))?,
            None => DEFAULT_MENU_COLUMNS,
        };
        if menu_columns == 0 {
            anyhow::bail!("MENU_COLUMNS must be at least 1");
        }

        let fill_last_row = match fill_last_row {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("MENU_FILL_LAST_ROW is not a boolean: {raw}"))?,
            None => DEFAULT_FILL_LAST_ROW,
        };

        Ok(Self {
            bot_token,
            menu_columns,
            reflow: ReflowOptions { fill_last_row },
        })
    }
}
