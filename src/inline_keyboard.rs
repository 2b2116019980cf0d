//! # Inline Keyboard Module
//!
//! Fluent builder for inline keyboards (buttons attached to a message) on top
//! of [`ButtonGrid`].

use reqwest::Url;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::grid::ButtonGrid;
use crate::grid_config::ReflowOptions;
use crate::grid_errors::GridError;

/// Values that can stand in for a full [`InlineKeyboardButton`]
///
/// A `(text, data)` pair becomes a callback button.
pub trait IntoInlineButton {
    fn into_inline_button(self) -> InlineKeyboardButton;
}

impl IntoInlineButton for InlineKeyboardButton {
    fn into_inline_button(self) -> InlineKeyboardButton {
        self
    }
}

impl IntoInlineButton for (&str, &str) {
    fn into_inline_button(self) -> InlineKeyboardButton {
        InlineKeyboardButton::callback(self.0, self.1)
    }
}

impl IntoInlineButton for (String, String) {
    fn into_inline_button(self) -> InlineKeyboardButton {
        InlineKeyboardButton::callback(self.0, self.1)
    }
}

/// Inline keyboard builder
///
/// # Examples
///
/// ```rust
/// use keyboards::inline_keyboard::InlineKeyboard;
///
/// let mut keyboard = InlineKeyboard::new();
/// keyboard.text("Confirm", "confirm").text("Cancel", "cancel");
/// let markup = keyboard.to_markup();
/// assert_eq!(markup.inline_keyboard[0].len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineKeyboard {
    grid: ButtonGrid<InlineKeyboardButton>,
}

impl InlineKeyboard {
    /// Create an empty inline keyboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a keyboard from rows of buttons or `(text, data)` pairs
    pub fn from_source<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: IntoInlineButton,
    {
        Self {
            grid: ButtonGrid::from_rows(
                rows.into_iter()
                    .map(|row| row.into_iter().map(IntoInlineButton::into_inline_button)),
            ),
        }
    }

    /// Build a keyboard from an existing grid, copying its rows
    pub fn from_grid(grid: &ButtonGrid<InlineKeyboardButton>) -> Self {
        Self { grid: grid.clone() }
    }

    /// Append buttons to the current row
    pub fn add<I, S>(&mut self, buttons: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: IntoInlineButton,
    {
        self.grid
            .add(buttons.into_iter().map(IntoInlineButton::into_inline_button));
        self
    }

    /// Start a new row with the given buttons
    pub fn row<I, S>(&mut self, buttons: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: IntoInlineButton,
    {
        self.grid
            .row(buttons.into_iter().map(IntoInlineButton::into_inline_button));
        self
    }

    /// Add a callback button carrying `data`
    pub fn text(&mut self, text: impl Into<String>, data: impl Into<String>) -> &mut Self {
        self.grid.push(InlineKeyboardButton::callback(text, data));
        self
    }

    /// Add a button that opens `url`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidUrl`] when `url` does not parse.
    pub fn url(&mut self, text: impl Into<String>, url: &str) -> Result<&mut Self, GridError> {
        let parsed = Url::parse(url).map_err(|e| GridError::InvalidUrl(format!("{url}: {e}")))?;
        self.grid.push(InlineKeyboardButton::url(text, parsed));
        Ok(self)
    }

    /// Add a button that prompts the user to pick a chat and inserts `query`
    pub fn switch_inline(
        &mut self,
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> &mut Self {
        self.grid
            .push(InlineKeyboardButton::switch_inline_query(text, query));
        self
    }

    /// Add a button that inserts `query` into the current chat's input field
    pub fn switch_inline_current(
        &mut self,
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> &mut Self {
        self.grid
            .push(InlineKeyboardButton::switch_inline_query_current_chat(text, query));
        self
    }

    /// Add a payment button; only valid as the first button of an invoice
    pub fn pay(&mut self, text: impl Into<String>) -> &mut Self {
        self.grid.push(InlineKeyboardButton::pay(text));
        self
    }

    /// Copy of this keyboard with the grid replaced by `rows`
    pub fn clone_with<I, R, S>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: IntoInlineButton,
    {
        Self::from_source(rows)
    }

    /// Append copies of every row of each source, in order
    pub fn append<'a, I, G>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a G>,
        G: AsRef<ButtonGrid<InlineKeyboardButton>> + 'a,
    {
        self.grid.append(sources.into_iter().map(G::as_ref));
        self
    }

    /// New keyboard with rows and columns swapped
    pub fn to_transposed(&self) -> Self {
        Self {
            grid: self.grid.to_transposed(),
        }
    }

    /// New keyboard with buttons re-chunked into rows of `columns`
    pub fn to_flowed(&self, columns: usize, options: ReflowOptions) -> Result<Self, GridError> {
        Ok(Self {
            grid: self.grid.to_flowed(columns, options)?,
        })
    }

    /// Borrow the underlying grid
    pub fn grid(&self) -> &ButtonGrid<InlineKeyboardButton> {
        &self.grid
    }

    /// Copy of the finished button rows
    pub fn build(&self) -> Vec<Vec<InlineKeyboardButton>> {
        self.grid.build()
    }

    /// Convert into a teloxide inline markup
    pub fn to_markup(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(self.grid.build())
    }
}

impl AsRef<ButtonGrid<InlineKeyboardButton>> for InlineKeyboard {
    fn as_ref(&self) -> &ButtonGrid<InlineKeyboardButton> {
        &self.grid
    }
}

impl From<InlineKeyboard> for InlineKeyboardMarkup {
    fn from(keyboard: InlineKeyboard) -> Self {
        InlineKeyboardMarkup::new(keyboard.grid.into_rows())
    }
}
