//! UI Builder module for creating keyboards and formatting messages

use crate::grid_config::ReflowOptions;
use crate::grid_errors::GridError;
use crate::inline_keyboard::InlineKeyboard;
use crate::keyboard::Keyboard;
use crate::menu::MenuLayout;

/// Layout choices offered under the menu, with their button labels
const LAYOUT_CHOICES: &[(&str, MenuLayout)] = &[
    ("1 column", MenuLayout::Flow(1)),
    ("2 columns", MenuLayout::Flow(2)),
    ("3 columns", MenuLayout::Flow(3)),
    ("Fill last row", MenuLayout::Fill(3)),
    ("🔄 Transpose", MenuLayout::Transpose),
];

/// Create the reply keyboard holding the menu items
pub fn create_menu_keyboard(
    items: &[&str],
    columns: usize,
    options: ReflowOptions,
) -> Result<Keyboard, GridError> {
    let mut keyboard = Keyboard::from_source([items.iter().copied()]);
    keyboard
        .resized(true)
        .placeholder("Pick a dish category");
    keyboard.to_flowed(columns, options)
}

/// Create the inline keyboard used to switch menu layouts
pub fn create_layout_keyboard() -> Result<InlineKeyboard, GridError> {
    let keyboard = InlineKeyboard::from_source([LAYOUT_CHOICES
        .iter()
        .map(|(label, layout)| (label.to_string(), layout.callback_data()))]);
    keyboard.to_flowed(3, ReflowOptions::default())
}

/// Describe the row sizes of a keyboard, e.g. `3 rows: 3 + 3 + 1`
pub fn format_layout_summary(keyboard: &Keyboard) -> String {
    let rows = keyboard.grid().rows();
    let sizes: Vec<String> = rows.iter().map(|row| row.len().to_string()).collect();

    format!(
        "{} {}: {}",
        rows.len(),
        if rows.len() == 1 { "row" } else { "rows" },
        sizes.join(" + ")
    )
}
