//! Stone-groups: orthogonal group detection for Go-like boards.
//!
//! The heart of the crate is [`groups::find_orthogonal_groups`], which
//! partitions a rectangular grid into maximal orthogonally connected regions
//! of equal, non-empty value. Capture, liberty thresholds and scoring are
//! left to the caller.
//!
//! ## Modules
//!
//! - [`constants`] - Board size defaults and neighbor offsets
//! - [`grid`] - Grid snapshots, shape checks and the text grid format
//! - [`groups`] - Group detection
//! - [`board`] - Stone placement with alternating colors
//! - [`session`] - Text command loop around a board
//!
//! ## Example
//!
//! ```
//! use stone_groups::board::{Board, Color};
//!
//! let mut board = Board::new(9);
//! board.place_stone(2, 2).unwrap(); // Black
//! board.place_stone(6, 6).unwrap(); // White
//! board.place_stone(3, 2).unwrap(); // Black
//!
//! let groups = board.groups();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(*groups[0].value(), Color::Black);
//! assert_eq!(groups[0].len(), 2);
//! ```

pub mod board;
pub mod constants;
pub mod grid;
pub mod groups;
pub mod session;
