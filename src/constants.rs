//! Board dimensions, neighbor offsets and display characters.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```
//!
//! The size can still be changed at runtime (`Board::new`, `boardsize`,
//! `--size`); the feature only picks the default.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Largest board a vertex can address (A..Z without I).
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Orthogonal neighbor offsets as `(row, col)` deltas.
/// Order: North, South, West, East
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Display Characters
// =============================================================================

/// Black stone.
pub const BLACK_CHAR: char = 'X';

/// White stone.
pub const WHITE_CHAR: char = 'O';

/// Empty point.
pub const EMPTY_CHAR: char = '.';

/// Alternative empty marker accepted by the text grid parser.
pub const EMPTY_ALT_CHAR: char = '0';

// =============================================================================
// Demo Defaults
// =============================================================================

/// Fraction of points filled with a stone on a random demo board.
pub const DEMO_DENSITY: f64 = 0.6;

/// Seed used by the demo when none is given.
pub const DEMO_SEED: u64 = 42;
