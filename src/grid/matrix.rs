//! Row-major arrangement of a prepared stream.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::text::prepare::PreparedText;

/// Sentinel filling trailing cells when `rows * cols` exceeds the stream.
pub const PAD_CHAR: char = ' ';

/// A row-major character grid built from a prepared letter stream.
///
/// Column-based consumers index the same stream the searchers scan, so a
/// hit at stream position `p` sits at cell `(p / cols, p % cols)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl LetterGrid {
    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, or None outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// The cells of row `r`, or None past the last row.
    pub fn row(&self, r: usize) -> Option<&[char]> {
        if r < self.rows {
            Some(&self.cells[r * self.cols..(r + 1) * self.cols])
        } else {
            None
        }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

/// Arranges the stripped stream into a `rows x cols` grid, row-major,
/// padding trailing cells with [`PAD_CHAR`].
///
/// Dimensions usually come from
/// [`get_grid_factors`](crate::grid::factor::get_grid_factors); any pair
/// large enough to hold the stream is accepted.
pub fn build_matrix(
    prepared: &PreparedText,
    rows: usize,
    cols: usize,
) -> Result<LetterGrid, SearchError> {
    let needed = prepared.len();
    if rows * cols < needed {
        return Err(SearchError::GridTooSmall { rows, cols, needed });
    }

    let mut cells = Vec::with_capacity(rows * cols);
    cells.extend_from_slice(prepared.stripped());
    cells.resize(rows * cols, PAD_CHAR);

    Ok(LetterGrid { rows, cols, cells })
}
