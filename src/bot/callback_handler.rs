//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, warn};

use crate::grid_config::BotConfig;
use crate::menu::{MenuLayout, MENU_ITEMS};

// Import UI builder functions
use super::ui_builder::{create_menu_keyboard, format_layout_summary};

/// Handle callback queries from the layout keyboard
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    config: Arc<BotConfig>,
) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    let data = q.data.as_deref().unwrap_or("");
    let layout = match MenuLayout::parse(data) {
        Ok(layout) => layout,
        Err(e) => {
            warn!(user_id = %q.from.id, error = %e, "Ignoring callback with unknown layout");
            bot.answer_callback_query(q.id.clone())
                .text("Unknown layout")
                .await?;
            return Ok(());
        }
    };

    bot.answer_callback_query(q.id.clone()).await?;

    if let Some(msg) = &q.message {
        // Every layout starts from the configured menu so results do not compound
        let base = create_menu_keyboard(MENU_ITEMS, config.menu_columns, config.reflow)?;
        let menu = layout.apply(&base)?;
        debug!(
            user_id = %q.from.id,
            layout = ?layout,
            rows = %format_layout_summary(&menu),
            "Applied menu layout"
        );

        bot.send_message(msg.chat().id, format!("🍽️ Menu ({})", format_layout_summary(&menu)))
            .reply_markup(menu.to_markup())
            .await?;
    }

    Ok(())
}
