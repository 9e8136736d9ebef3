//! Square Go board: stone storage, turn alternation and vertex notation.
//!
//! The board only places stones. It does not capture, check liberties or
//! enforce ko; callers group the [`Board::grid`] snapshot and apply their
//! own rules.

use std::fmt;

use crate::constants::{BLACK_CHAR, DEFAULT_SIZE, EMPTY_CHAR, MAX_SIZE, WHITE_CHAR};
use crate::grid::Grid;
use crate::groups::{Group, find_orthogonal_groups};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Parse a color argument (`b`, `black`, `w`, `white`, any case).
    pub fn parse(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Color::Black => BLACK_CHAR,
            Color::White => WHITE_CHAR,
        };
        write!(f, "{ch}")
    }
}

/// Why a stone could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// Point lies outside the board
    OutOfBounds { x: usize, y: usize, size: usize },
    /// Point already holds a stone
    Occupied { x: usize, y: usize },
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds { x, y, size } => {
                write!(f, "illegal move: ({x}, {y}) is off the {size}x{size} board")
            }
            PlaceError::Occupied { x, y } => {
                write!(f, "illegal move: ({x}, {y}) is not empty")
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// A square board addressed by `(x, y)`: `x` is the column, `y` the row,
/// `(0, 0)` the top-left corner.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    /// Stones placed so far; even means Black to play
    turn_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            turn_count: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Color of the next stone to be placed.
    pub fn to_play(&self) -> Color {
        if self.turn_count % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Place the stone for the current turn at `(x, y)` and return its color.
    pub fn place_stone(&mut self, x: usize, y: usize) -> Result<Color, PlaceError> {
        if x >= self.size || y >= self.size {
            return Err(PlaceError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        let idx = self.idx(x, y);
        if self.cells[idx].is_some() {
            return Err(PlaceError::Occupied { x, y });
        }
        let color = self.to_play();
        self.cells[idx] = Some(color);
        self.turn_count += 1;
        Ok(color)
    }

    /// Remove every stone and reset the turn counter.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.turn_count = 0;
    }

    /// Scatter stones of both colors over empty points.
    ///
    /// Each empty point receives a stone with probability `density`. The
    /// turn counter is left alone.
    pub fn fill_random(&mut self, rng: &mut fastrand::Rng, density: f64) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            if rng.f64() < density {
                *cell = Some(if rng.bool() { Color::Black } else { Color::White });
            }
        }
    }

    /// Row-major snapshot of the board for the grouper.
    pub fn grid(&self) -> Grid<Color> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Current groups on the board, recomputed from scratch.
    pub fn groups(&self) -> Vec<Group<Color>> {
        find_orthogonal_groups(&self.grid()).expect("board snapshot is square")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                match self.get(x, y) {
                    Some(color) => write!(f, "{color} ")?,
                    None => write!(f, "{EMPTY_CHAR} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a vertex such as `D4` into `(x, y)` on a board of `size`.
///
/// Columns run `A`.. skipping `I`; rows are counted from the bottom, so the
/// top row (`y = 0`) is row `size`. Returns `None` for anything off the board.
pub fn parse_vertex(s: &str, size: usize) -> Option<(usize, usize)> {
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return None;
    }

    // Skip 'I' column (Go convention to avoid confusion with 'J')
    let mut col = (col_char as u8 - b'A') as usize;
    if col_char > 'I' {
        col -= 1;
    }

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if col >= size || row == 0 || row > size {
        return None;
    }
    Some((col, size - row))
}

/// Convert `(x, y)` to a vertex string (e.g. `D4`).
pub fn str_vertex(x: usize, y: usize, size: usize) -> String {
    debug_assert!(size <= MAX_SIZE);

    // Convert column to letter, skipping 'I'
    let mut c = b'A' + x as u8;
    if c >= b'I' {
        c += 1;
    }

    format!("{}{}", c as char, size - y)
}
