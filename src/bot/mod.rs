//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Handles incoming messages and sends the menu
//! - `callback_handler`: Handles layout buttons and re-sends the reshaped menu
//! - `ui_builder`: Creates keyboards and formats messages

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use message_handler::send_menu;
pub use ui_builder::{create_layout_keyboard, create_menu_keyboard, format_layout_summary};
