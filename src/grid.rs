//! Grid snapshots: the rows × cols input of the grouper.
//!
//! A grid is row-major, `None` marks an empty cell and `Some(v)` holds an
//! opaque stone value. Row 0 is the first row as given.

use std::fmt;

use crate::constants::{EMPTY_ALT_CHAR, EMPTY_CHAR, ORTHOGONAL};

/// A cell coordinate, `(row, col)`, 0-indexed.
pub type Point = (usize, usize);

/// An owned grid snapshot.
pub type Grid<T> = Vec<Vec<Option<T>>>;

/// The grid is not rectangular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    /// First row whose length differs from row 0
    pub row: usize,
    /// Length of row 0
    pub expected: usize,
    /// Length of the offending row
    pub found: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid is not rectangular: row {} has {} cells, expected {}",
            self.row, self.found, self.expected
        )
    }
}

impl std::error::Error for ShapeError {}

/// Rows and columns of a grid, reading the width off the first row.
///
/// Does not look at the other rows; see [`check_rectangular`].
pub fn dimensions<T>(grid: &[Vec<T>]) -> (usize, usize) {
    match grid.first() {
        Some(row) => (grid.len(), row.len()),
        None => (0, 0),
    }
}

/// Verify every row has the length of row 0 and return `(rows, cols)`.
pub fn check_rectangular<T>(grid: &[Vec<T>]) -> Result<(usize, usize), ShapeError> {
    let (rows, cols) = dimensions(grid);
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != cols {
            return Err(ShapeError {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
    }
    Ok((rows, cols))
}

/// Orthogonal neighbors of `(row, col)` that lie inside a `rows` × `cols` grid.
pub fn neighbors(point: Point, rows: usize, cols: usize) -> impl Iterator<Item = Point> {
    let (row, col) = point;
    ORTHOGONAL.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

/// Parse a text grid.
///
/// One row per non-blank line. Every non-whitespace character is a cell:
/// `.` and `0` are empty, anything else is a stone of that value. Rows are
/// not padded, so ragged input stays ragged and is rejected by the grouper.
pub fn parse_grid(text: &str) -> Grid<char> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    EMPTY_CHAR | EMPTY_ALT_CHAR => None,
                    other => Some(other),
                })
                .collect()
        })
        .collect()
}

/// Render a grid one row per line, cells separated by a space.
pub fn format_grid<T: fmt::Display>(grid: &[Vec<Option<T>>]) -> String {
    let mut out = String::new();
    for row in grid {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(v) => v.to_string(),
                None => EMPTY_CHAR.to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
