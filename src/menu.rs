//! Menu layout module for the demo bot.
//!
//! A layout names one reshaping of the menu keyboard and travels through
//! inline-button callback data as `flow:<n>`, `fill:<n>` or `transpose`.

use serde::{Deserialize, Serialize};

use crate::grid_config::ReflowOptions;
use crate::grid_errors::GridError;
use crate::keyboard::Keyboard;

/// Items shown on the demo menu
pub const MENU_ITEMS: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snacks",
    "Drinks",
    "Desserts",
    "Specials",
];

/// Upper bound on the column count accepted from callback data
pub const MAX_LAYOUT_COLUMNS: usize = 8;

/// A reshaping applied to the menu keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuLayout {
    /// Rows of `n` buttons, last row possibly short
    Flow(usize),
    /// Rows of `n` buttons, first row possibly short
    Fill(usize),
    /// Rows and columns swapped
    Transpose,
}

impl MenuLayout {
    /// Parse callback data into a layout
    pub fn parse(data: &str) -> Result<Self, GridError> {
        let data = data.trim();
        if data == "transpose" {
            return Ok(MenuLayout::Transpose);
        }

        let (kind, columns) = data
            .split_once(':')
            .ok_or_else(|| GridError::UnknownLayout(data.to_string()))?;
        let columns: usize = columns
            .parse()
            .map_err(|_| GridError::UnknownLayout(data.to_string()))?;
        if columns == 0 || columns > MAX_LAYOUT_COLUMNS {
            return Err(GridError::UnknownLayout(data.to_string()));
        }

        match kind {
            "flow" => Ok(MenuLayout::Flow(columns)),
            "fill" => Ok(MenuLayout::Fill(columns)),
            _ => Err(GridError::UnknownLayout(data.to_string())),
        }
    }

    /// Callback data that parses back into this layout
    pub fn callback_data(&self) -> String {
        match self {
            MenuLayout::Flow(columns) => format!("flow:{columns}"),
            MenuLayout::Fill(columns) => format!("fill:{columns}"),
            MenuLayout::Transpose => "transpose".to_string(),
        }
    }

    /// Reshape `keyboard` into a new keyboard; the source is left untouched
    pub fn apply(&self, keyboard: &Keyboard) -> Result<Keyboard, GridError> {
        match *self {
            MenuLayout::Flow(columns) => keyboard.to_flowed(columns, ReflowOptions::default()),
            MenuLayout::Fill(columns) => {
                keyboard.to_flowed(columns, ReflowOptions::fill_last_row())
            }
            MenuLayout::Transpose => Ok(keyboard.to_transposed()),
        }
    }
}
