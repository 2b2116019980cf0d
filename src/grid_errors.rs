//! # Grid Error Types Module
//!
//! Errors reported by the grid transforms, the keyboard builders and the menu
//! layout parser.

/// Custom error types for grid and keyboard operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// `reflow` was asked for rows of zero buttons
    ZeroColumns,
    /// A url button was given a string that is not a valid url
    InvalidUrl(String),
    /// Callback data did not name a known menu layout
    UnknownLayout(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ZeroColumns => write!(f, "Reflow error: column count must be at least 1"),
            GridError::InvalidUrl(msg) => write!(f, "Invalid url: {msg}"),
            GridError::UnknownLayout(msg) => write!(f, "Unknown layout: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}
