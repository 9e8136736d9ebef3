//! Orthogonal group detection.
//!
//! A group is a maximal set of non-empty cells holding the same value and
//! connected through up/down/left/right steps. Capture, liberty thresholds
//! and scoring are built on top of this by the caller; nothing here knows
//! about Go rules.
//!
//! ## Example
//!
//! ```
//! use stone_groups::groups::find_orthogonal_groups;
//!
//! let grid = vec![
//!     vec![Some(1), Some(1)],
//!     vec![None, Some(2)],
//! ];
//! let groups = find_orthogonal_groups(&grid).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].stones(), &[(0, 0), (0, 1)]);
//! assert_eq!(groups[1].stones(), &[(1, 1)]);
//! ```

use std::collections::VecDeque;

pub use crate::grid::{Point, ShapeError};
use crate::grid::{check_rectangular, neighbors};

/// A maximal orthogonally connected set of equal stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<T> {
    value: T,
    /// Sorted ascending (row-major)
    stones: Vec<Point>,
}

impl<T> Group<T> {
    /// The value shared by every stone in the group.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Member coordinates in row-major order.
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Always false for groups returned by [`find_orthogonal_groups`].
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// The first stone reached by the row-major scan.
    pub fn anchor(&self) -> Point {
        self.stones[0]
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.binary_search(&point).is_ok()
    }

    /// Empty cells orthogonally adjacent to the group, sorted and without
    /// duplicates.
    ///
    /// `grid` should be the snapshot the group was computed from; stones
    /// outside it contribute nothing. A ragged grid fails with [`ShapeError`].
    pub fn liberties<U>(&self, grid: &[Vec<Option<U>>]) -> Result<Vec<Point>, ShapeError> {
        let (rows, cols) = check_rectangular(grid)?;
        let mut libs: Vec<Point> = self
            .stones
            .iter()
            .flat_map(|&pt| neighbors(pt, rows, cols))
            .filter(|&(r, c)| grid[r][c].is_none())
            .collect();
        libs.sort_unstable();
        libs.dedup();
        Ok(libs)
    }
}

/// Partition a grid into its orthogonally connected groups.
///
/// Groups come out in the order their anchor is met by a row-major scan;
/// stones inside a group are sorted. Empty cells belong to no group. A grid
/// with no rows, or with empty rows, yields no groups.
///
/// The grid is checked up front: a row whose length differs from the first
/// row's fails with [`ShapeError`] before any cell is examined.
///
/// Runs in O(rows × cols) time and space. The visited scratch is local to
/// the call, so independent snapshots may be grouped concurrently.
pub fn find_orthogonal_groups<T>(grid: &[Vec<Option<T>>]) -> Result<Vec<Group<T>>, ShapeError>
where
    T: Eq + Clone,
{
    let (rows, cols) = check_rectangular(grid)?;
    let mut visited = vec![false; rows * cols];
    let mut queue = VecDeque::new();
    let mut groups = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let idx = row * cols + col;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            let Some(value) = &grid[row][col] else {
                continue;
            };

            let mut stones = Vec::new();
            queue.push_back((row, col));
            while let Some(pt) = queue.pop_front() {
                stones.push(pt);
                for (nr, nc) in neighbors(pt, rows, cols) {
                    let ni = nr * cols + nc;
                    if !visited[ni] && grid[nr][nc].as_ref() == Some(value) {
                        // Mark on discovery so nothing is queued twice
                        visited[ni] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
            stones.sort_unstable();
            groups.push(Group {
                value: value.clone(),
                stones,
            });
        }
    }

    Ok(groups)
}

/// The group containing `point`, or `None` for an empty or off-grid point.
pub fn group_at<T>(grid: &[Vec<Option<T>>], point: Point) -> Result<Option<Group<T>>, ShapeError>
where
    T: Eq + Clone,
{
    let groups = find_orthogonal_groups(grid)?;
    Ok(groups.into_iter().find(|g| g.contains(point)))
}
