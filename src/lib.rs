//! # Keyboards
//!
//! Button grid engine for Telegram keyboards: a generic jagged grid builder,
//! the `transpose` and `reflow` transforms that reshape it, and reply and
//! inline keyboard builders for teloxide on top of it.

pub mod bot;
pub mod grid;
pub mod grid_config;
pub mod grid_errors;
pub mod inline_keyboard;
pub mod keyboard;
pub mod menu;
