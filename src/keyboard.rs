//! # Reply Keyboard Module
//!
//! Fluent builder for Telegram reply keyboards on top of [`ButtonGrid`].
//!
//! ## Features
//!
//! - Text, contact-request and location-request buttons
//! - Display flags: persistent, selective, one-time, resized, input placeholder
//! - Shorthand construction from plain strings
//! - Transpose and reflow that keep every flag of the source keyboard

use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup};

use crate::grid::ButtonGrid;
use crate::grid_config::ReflowOptions;
use crate::grid_errors::GridError;

/// Values that can stand in for a full [`KeyboardButton`]
///
/// Plain strings become text buttons.
pub trait IntoKeyboardButton {
    fn into_keyboard_button(self) -> KeyboardButton;
}

impl IntoKeyboardButton for KeyboardButton {
    fn into_keyboard_button(self) -> KeyboardButton {
        self
    }
}

impl IntoKeyboardButton for &str {
    fn into_keyboard_button(self) -> KeyboardButton {
        KeyboardButton::new(self)
    }
}

impl IntoKeyboardButton for String {
    fn into_keyboard_button(self) -> KeyboardButton {
        KeyboardButton::new(self)
    }
}

/// Reply keyboard builder
///
/// # Examples
///
/// ```rust
/// use keyboards::keyboard::Keyboard;
///
/// let mut keyboard = Keyboard::new();
/// keyboard.text("Yes").text("No").row(["Maybe"]).resized(true);
/// assert_eq!(keyboard.grid().len_buttons(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyboard {
    grid: ButtonGrid<KeyboardButton>,
    is_persistent: bool,
    selective: bool,
    one_time_keyboard: bool,
    resize_keyboard: bool,
    input_field_placeholder: Option<String>,
}

impl Keyboard {
    /// Create an empty keyboard with all flags off
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a keyboard from rows of buttons or shorthand strings
    pub fn from_source<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: IntoKeyboardButton,
    {
        Self {
            grid: normalize(rows),
            ..Self::default()
        }
    }

    /// Build a keyboard from an existing grid, copying its rows
    pub fn from_grid(grid: &ButtonGrid<KeyboardButton>) -> Self {
        Self {
            grid: grid.clone(),
            ..Self::default()
        }
    }

    /// Append buttons to the current row
    pub fn add<I, S>(&mut self, buttons: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: IntoKeyboardButton,
    {
        self.grid
            .add(buttons.into_iter().map(IntoKeyboardButton::into_keyboard_button));
        self
    }

    /// Start a new row with the given buttons
    pub fn row<I, S>(&mut self, buttons: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: IntoKeyboardButton,
    {
        self.grid
            .row(buttons.into_iter().map(IntoKeyboardButton::into_keyboard_button));
        self
    }

    /// Add a text button to the current row
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.grid.push(KeyboardButton::new(text));
        self
    }

    /// Add a button that shares the user's phone number when pressed
    pub fn request_contact(&mut self, text: impl Into<String>) -> &mut Self {
        self.grid
            .push(KeyboardButton::new(text).request(ButtonRequest::Contact));
        self
    }

    /// Add a button that shares the user's location when pressed
    pub fn request_location(&mut self, text: impl Into<String>) -> &mut Self {
        self.grid
            .push(KeyboardButton::new(text).request(ButtonRequest::Location));
        self
    }

    /// Keep the keyboard shown after the user presses a button
    pub fn persistent(&mut self, value: bool) -> &mut Self {
        self.is_persistent = value;
        self
    }

    /// Show the keyboard only to mentioned users or the replied-to user
    pub fn selected(&mut self, value: bool) -> &mut Self {
        self.selective = value;
        self
    }

    /// Hide the keyboard once a button is used
    pub fn one_time(&mut self, value: bool) -> &mut Self {
        self.one_time_keyboard = value;
        self
    }

    /// Let clients shrink the keyboard to fit its buttons
    pub fn resized(&mut self, value: bool) -> &mut Self {
        self.resize_keyboard = value;
        self
    }

    /// Placeholder shown in the input field while the keyboard is active
    pub fn placeholder(&mut self, text: impl Into<String>) -> &mut Self {
        self.input_field_placeholder = Some(text.into());
        self
    }

    /// Copy of this keyboard with the grid replaced by `rows`
    ///
    /// Every flag is copied; only the grid changes.
    pub fn clone_with<I, R, S>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: IntoKeyboardButton,
    {
        Self {
            grid: normalize(rows),
            input_field_placeholder: self.input_field_placeholder.clone(),
            ..*self
        }
    }

    /// Append copies of every row of each source, in order
    pub fn append<'a, I, G>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a G>,
        G: AsRef<ButtonGrid<KeyboardButton>> + 'a,
    {
        self.grid.append(sources.into_iter().map(G::as_ref));
        self
    }

    /// New keyboard with rows and columns swapped
    pub fn to_transposed(&self) -> Self {
        self.clone_with(self.grid.to_transposed())
    }

    /// New keyboard with buttons re-chunked into rows of `columns`
    pub fn to_flowed(&self, columns: usize, options: ReflowOptions) -> Result<Self, GridError> {
        Ok(self.clone_with(self.grid.to_flowed(columns, options)?))
    }

    /// Borrow the underlying grid
    pub fn grid(&self) -> &ButtonGrid<KeyboardButton> {
        &self.grid
    }

    /// Copy of the finished button rows
    pub fn build(&self) -> Vec<Vec<KeyboardButton>> {
        self.grid.build()
    }

    /// Whether the keyboard stays shown after a button press
    pub fn is_persistent(&self) -> bool {
        self.is_persistent
    }

    /// Whether the keyboard is shown only to targeted users
    pub fn is_selective(&self) -> bool {
        self.selective
    }

    /// Whether the keyboard hides once a button is used
    pub fn is_one_time(&self) -> bool {
        self.one_time_keyboard
    }

    /// Whether clients may shrink the keyboard to fit its buttons
    pub fn is_resized(&self) -> bool {
        self.resize_keyboard
    }

    /// Placeholder shown in the input field, if any
    pub fn input_field_placeholder(&self) -> Option<&str> {
        self.input_field_placeholder.as_deref()
    }

    /// Convert into a teloxide reply markup with the flags applied
    pub fn to_markup(&self) -> KeyboardMarkup {
        let mut markup = KeyboardMarkup::new(self.grid.build());
        if self.is_persistent {
            markup = markup.persistent();
        }
        if self.resize_keyboard {
            markup = markup.resize_keyboard();
        }
        if self.one_time_keyboard {
            markup = markup.one_time_keyboard();
        }
        if self.selective {
            markup = markup.selective();
        }
        if let Some(ref placeholder) = self.input_field_placeholder {
            markup = markup.input_field_placeholder(placeholder.clone());
        }
        markup
    }
}

impl AsRef<ButtonGrid<KeyboardButton>> for Keyboard {
    fn as_ref(&self) -> &ButtonGrid<KeyboardButton> {
        &self.grid
    }
}

impl From<Keyboard> for KeyboardMarkup {
    fn from(keyboard: Keyboard) -> Self {
        keyboard.to_markup()
    }
}

fn normalize<I, R, S>(rows: I) -> ButtonGrid<KeyboardButton>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: IntoKeyboardButton,
{
    ButtonGrid::from_rows(
        rows.into_iter()
            .map(|row| row.into_iter().map(IntoKeyboardButton::into_keyboard_button)),
    )
}
