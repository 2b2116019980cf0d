//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, info};

use crate::grid_config::BotConfig;
use crate::menu::MENU_ITEMS;

// Import UI builder functions
use super::ui_builder::{create_layout_keyboard, create_menu_keyboard, format_layout_summary};

/// Send the menu keyboard followed by the layout controls
pub async fn send_menu(bot: &Bot, chat_id: ChatId, config: &BotConfig) -> Result<()> {
    let menu = create_menu_keyboard(MENU_ITEMS, config.menu_columns, config.reflow)?;
    let controls = create_layout_keyboard()?;

    debug!(user_id = %chat_id, layout = %format_layout_summary(&menu), "Sending menu");

    bot.send_message(chat_id, format!("🍽️ Menu ({})", format_layout_summary(&menu)))
        .reply_markup(menu.to_markup())
        .await?;
    bot.send_message(chat_id, "Reshape the menu:")
        .reply_markup(controls.to_markup())
        .await?;

    Ok(())
}

async fn handle_text_message(bot: &Bot, msg: &Message, config: &BotConfig) -> Result<()> {
    if let Some(text) = msg.text() {
        debug!(
            user_id = %msg.chat.id,
            message_length = text.len(),
            "Received text message from user"
        );

        if let Some(item) = MENU_ITEMS.iter().find(|item| **item == text.trim()) {
            info!(user_id = %msg.chat.id, item = %item, "User picked a menu item");
            bot.send_message(msg.chat.id, format!("✅ You picked: {item}"))
                .await?;
            return Ok(());
        }

        send_menu(bot, msg.chat.id, config).await?;
    }
    Ok(())
}

async fn handle_unsupported_message(bot: &Bot, msg: &Message) -> Result<()> {
    debug!(user_id = %msg.chat.id, "Received unsupported message type from user");

    bot.send_message(msg.chat.id, "Send any text to open the menu.")
        .await?;
    Ok(())
}

pub async fn message_handler(bot: Bot, msg: Message, config: Arc<BotConfig>) -> Result<()> {
    if msg.text().is_some() {
        handle_text_message(&bot, &msg, &config).await?;
    } else {
        handle_unsupported_message(&bot, &msg).await?;
    }

    Ok(())
}
