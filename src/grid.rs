//! # Button Grid Module
//!
//! This module provides the two-dimensional button grid shared by the reply
//! keyboard and inline keyboard builders, together with the two transforms
//! that reshape it.
//!
//! ## Features
//!
//! - [`ButtonGrid`]: an owned, jagged grid built row by row with `add` and `row`
//! - [`transpose`]: swaps the row and column index of every button
//! - [`reflow`]: re-chunks all buttons in reading order into rows of a fixed width
//!
//! The grid never looks inside its buttons, so any payload type works.
//! Transforms always allocate fresh rows; a result never shares storage with
//! the grid it came from.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::grid_config::ReflowOptions;
use crate::grid_errors::GridError;

/// Jagged grid of buttons, built incrementally
///
/// A new grid holds a single empty row. [`ButtonGrid::add`] appends to the last
/// row and [`ButtonGrid::row`] starts a new one.
///
/// # Examples
///
/// ```rust
/// use keyboards::grid::ButtonGrid;
///
/// let mut grid = ButtonGrid::new();
/// grid.add(["a", "b"]).row(["c"]).add(["d"]);
/// assert_eq!(grid.rows(), &[vec!["a", "b"], vec!["c", "d"]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonGrid<B> {
    rows: Vec<Vec<B>>,
}

impl<B> Default for ButtonGrid<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> ButtonGrid<B> {
    /// Create a grid containing exactly one empty row
    pub fn new() -> Self {
        Self {
            rows: vec![Vec::new()],
        }
    }

    /// Create a grid from any two-dimensional source of buttons
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = B>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        }
    }

    /// Append buttons, in order, to the last row
    pub fn add<I>(&mut self, buttons: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
    {
        // Only a transform of an empty grid leaves no rows behind
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        if let Some(last) = self.rows.last_mut() {
            last.extend(buttons);
        }
        self
    }

    /// Append a single button to the last row
    pub fn push(&mut self, button: B) -> &mut Self {
        self.add(std::iter::once(button))
    }

    /// Start a new row holding exactly the given buttons
    pub fn row<I>(&mut self, buttons: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
    {
        self.rows.push(buttons.into_iter().collect());
        self
    }

    /// Append owned rows to the end of the grid without merging them
    pub fn append_rows<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = B>,
    {
        self.rows
            .extend(rows.into_iter().map(|row| row.into_iter().collect::<Vec<_>>()));
        self
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[Vec<B>] {
        &self.rows
    }

    /// Consume the grid and return its rows
    pub fn into_rows(self) -> Vec<Vec<B>> {
        self.rows
    }

    /// Number of rows, empty rows included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of buttons across all rows
    pub fn len_buttons(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// `true` when the grid holds no buttons at all
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}

impl<B: Clone> ButtonGrid<B> {
    /// Append copies of every row of each source grid, in order
    pub fn append<'a, I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a ButtonGrid<B>>,
        B: 'a,
    {
        for source in sources {
            self.rows.extend(source.rows.iter().cloned());
        }
        self
    }

    /// Copy of the finished rows
    pub fn build(&self) -> Vec<Vec<B>> {
        self.rows.clone()
    }

    /// New grid holding the transpose of this one
    pub fn to_transposed(&self) -> Self {
        Self {
            rows: transpose(self.rows.iter().cloned()),
        }
    }

    /// New grid with all buttons re-chunked into rows of `columns`
    pub fn to_flowed(&self, columns: usize, options: ReflowOptions) -> Result<Self, GridError> {
        Ok(Self {
            rows: reflow(self.rows.iter().cloned(), columns, options)?,
        })
    }
}

impl<B> AsRef<ButtonGrid<B>> for ButtonGrid<B> {
    fn as_ref(&self) -> &ButtonGrid<B> {
        self
    }
}

impl<B> From<Vec<Vec<B>>> for ButtonGrid<B> {
    fn from(rows: Vec<Vec<B>>) -> Self {
        Self { rows }
    }
}

impl<B> From<ButtonGrid<B>> for Vec<Vec<B>> {
    fn from(grid: ButtonGrid<B>) -> Self {
        grid.rows
    }
}

impl<B> IntoIterator for ButtonGrid<B> {
    type Item = Vec<B>;
    type IntoIter = std::vec::IntoIter<Vec<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Transpose a grid: the button at (r, c) moves to (c, r)
///
/// Output rows are created as column indices are first seen, so a ragged input
/// gives a ragged output. Transposing twice only restores rectangular grids.
///
/// # Examples
///
/// ```rust
/// use keyboards::grid::transpose;
///
/// let grid = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e']];
/// assert_eq!(transpose(grid), vec![vec!['a', 'c', 'e'], vec!['b', 'd']]);
/// ```
pub fn transpose<B, I, R>(grid: I) -> Vec<Vec<B>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = B>,
{
    let mut transposed: Vec<Vec<B>> = Vec::new();

    for row in grid {
        for (column, button) in row.into_iter().enumerate() {
            // Column `c` is only reached after column `c - 1` of the same row
            if column == transposed.len() {
                transposed.push(Vec::new());
            }
            transposed[column].push(button);
        }
    }

    trace!("Transposed grid into {} rows", transposed.len());
    transposed
}

/// Re-chunk every button, in reading order, into rows of `columns` buttons
///
/// Original row boundaries are ignored. With `fill_last_row` the first row
/// takes the remainder so that the last row comes out full; a zero remainder
/// gives uniform rows. A grid without buttons reflows to no rows.
///
/// # Errors
///
/// Returns [`GridError::ZeroColumns`] when `columns` is 0.
///
/// # Examples
///
/// ```rust
/// use keyboards::grid::reflow;
/// use keyboards::grid_config::ReflowOptions;
///
/// let grid = vec![vec![1, 2, 3, 4], vec![5]];
/// let flowed = reflow(grid, 2, ReflowOptions::fill_last_row())?;
/// assert_eq!(flowed, vec![vec![1], vec![2, 3], vec![4, 5]]);
/// # Ok::<(), keyboards::grid_errors::GridError>(())
/// ```
pub fn reflow<B, I, R>(
    grid: I,
    columns: usize,
    options: ReflowOptions,
) -> Result<Vec<Vec<B>>, GridError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = B>,
{
    if columns == 0 {
        return Err(GridError::ZeroColumns);
    }

    let buttons: Vec<B> = grid.into_iter().flatten().collect();
    let total = buttons.len();

    let first_row_size = if options.fill_last_row {
        match total % columns {
            0 => columns,
            remainder => remainder,
        }
    } else {
        columns
    };

    debug!(
        "Reflowing {} buttons into rows of {} (first row {})",
        total, columns, first_row_size
    );

    let mut flowed: Vec<Vec<B>> = Vec::with_capacity(total.div_ceil(columns) + 1);
    for button in buttons {
        let capacity = if flowed.len() == 1 { first_row_size } else { columns };
        match flowed.last_mut() {
            Some(current) if current.len() < capacity => current.push(button),
            _ => flowed.push(vec![button]),
        }
    }

    Ok(flowed)
}
