//! Line-oriented text session around a [`Board`].
//!
//! Commands and responses follow the Go Text Protocol conventions: an
//! optional numeric id, `=` for success and `?` for failure, and a blank line
//! after every response. Stones alternate colors exactly as on the board, so
//! the color argument of `play` is informational only.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new empty board (1 to 25)
//! - `clear_board` - Remove all stones
//! - `play [color] <vertex>` - Place the next stone
//! - `showboard` - Print the board
//! - `groups` - List every group on the board
//! - `group <vertex>` - Show the group at a vertex and its liberties
//! - `turn` - Stones placed so far and the color to play
//!
//! ## Example
//!
//! ```
//! use stone_groups::session::Session;
//!
//! let mut session = Session::new(3);
//! let input = "play A3\nplay B3\nplay B2\ngroups\nquit\n";
//! let mut output = Vec::new();
//! session.run_io(input.as_bytes(), &mut output).unwrap();
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("X 1 stones: A3"));
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, parse_vertex, str_vertex};
use crate::constants::MAX_SIZE;
use crate::grid::Point;
use crate::groups::{Group, group_at};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "group",
    "groups",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "turn",
    "version",
];

/// Session state.
#[derive(Default)]
pub struct Session {
    board: Board,
}

impl Session {
    /// Create a session on an empty board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run_io(stdin.lock(), io::stdout())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_io<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (1..=MAX_SIZE).contains(&size) => {
                        self.board = Board::new(size);
                        (true, String::new())
                    }
                    Ok(size) => (
                        false,
                        format!("unacceptable size, expected 1 to {MAX_SIZE} (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board.clear();
                (true, String::new())
            }

            "play" => {
                let vertex = match args {
                    [vertex] => vertex,
                    [color, vertex, ..] => {
                        let Some(color) = Color::parse(color) else {
                            return (false, "invalid color".to_string());
                        };
                        if color != self.board.to_play() {
                            eprintln!(
                                "warning: {} requested, playing {} (colors alternate)",
                                color_name(color),
                                color_name(self.board.to_play())
                            );
                        }
                        vertex
                    }
                    [] => return (false, "missing arguments".to_string()),
                };
                let Some((x, y)) = parse_vertex(vertex, self.board.size()) else {
                    return (false, format!("invalid vertex: {vertex}"));
                };
                match self.board.place_stone(x, y) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => {
                let rendered = self.board.to_string();
                let rows: Vec<&str> = rendered.lines().map(str::trim_end).collect();
                (true, format!("\n{}", rows.join("\n")))
            }

            "groups" => {
                let lines: Vec<String> = self
                    .board
                    .groups()
                    .iter()
                    .map(|g| self.describe(g))
                    .collect();
                (true, lines.join("\n"))
            }

            "group" => {
                let Some(vertex) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Some((x, y)) = parse_vertex(vertex, self.board.size()) else {
                    return (false, format!("invalid vertex: {vertex}"));
                };
                let grid = self.board.grid();
                match group_at(&grid, (y, x)) {
                    Ok(Some(group)) => {
                        let libs = match group.liberties(&grid) {
                            Ok(libs) => libs,
                            Err(e) => return (false, e.to_string()),
                        };
                        let response = format!(
                            "{}\nliberties {}: {}",
                            self.describe(&group),
                            libs.len(),
                            self.vertices(&libs)
                        );
                        (true, response.trim_end().to_string())
                    }
                    Ok(None) => (false, format!("no stone at {vertex}")),
                    Err(e) => (false, e.to_string()),
                }
            }

            "turn" => (
                true,
                format!(
                    "{} {}",
                    self.board.turn_count(),
                    color_name(self.board.to_play())
                ),
            ),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn describe(&self, group: &Group<Color>) -> String {
        format!(
            "{} {} stones: {}",
            group.value(),
            group.len(),
            self.vertices(group.stones())
        )
    }

    fn vertices(&self, points: &[Point]) -> String {
        let size = self.board.size();
        points
            .iter()
            .map(|&(row, col)| str_vertex(col, row, size))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_command_keeps_id() {
        let mut session = Session::new(9);
        let mut output = Vec::new();
        session
            .run_io("7 play Z99\n8 group E5\n".as_bytes(), &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "?7 invalid vertex: Z99\n\n?8 no stone at E5\n\n");
    }

    #[test]
    fn test_bare_id_is_skipped() {
        let (id, cmd) = Session::parse_id("42");
        assert_eq!(id, Some(42));
        assert_eq!(cmd, "");

        let mut session = Session::new(9);
        let mut output = Vec::new();
        session.run_io("42\nturn\n".as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "= 0 black\n\n");
    }

    #[test]
    fn test_list_commands_are_all_known() {
        let mut session = Session::new(9);
        let (success, response) = session.execute("list_commands", &[]);
        assert!(success);
        for cmd in response.lines() {
            let (_, known) = session.execute("known_command", &[cmd]);
            assert_eq!(known, "true", "{cmd} should be known");
        }
    }

    #[test]
    fn test_known_command() {
        let mut session = Session::new(9);

        let (success, response) = session.execute("known_command", &["groups"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = session.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut session = Session::new(9);

        let (success, _) = session.execute("boardsize", &["13"]);
        assert!(success);
        assert_eq!(session.board().size(), 13);

        let (success, _) = session.execute("boardsize", &["26"]);
        assert!(!success);
        let (success, _) = session.execute("boardsize", &["0"]);
        assert!(!success);
        let (success, _) = session.execute("boardsize", &["big"]);
        assert!(!success);
        assert_eq!(session.board().size(), 13);
    }

    #[test]
    fn test_play_and_clear() {
        let mut session = Session::new(9);

        let (success, _) = session.execute("play", &["black", "D4"]);
        assert!(success);
        assert_eq!(session.board().turn_count(), 1);

        let (success, response) = session.execute("play", &["D4"]);
        assert!(!success);
        assert!(response.contains("not empty"));

        let (success, _) = session.execute("play", &["Z99"]);
        assert!(!success);
        let (success, _) = session.execute("play", &["purple", "E5"]);
        assert!(!success);

        let (success, _) = session.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(session.board().turn_count(), 0);
    }

    #[test]
    fn test_groups_and_group() {
        let mut session = Session::new(3);
        // Black A3, White C1, Black B3
        session.execute("play", &["A3"]);
        session.execute("play", &["C1"]);
        session.execute("play", &["B3"]);

        let (success, response) = session.execute("groups", &[]);
        assert!(success);
        assert_eq!(response, "X 2 stones: A3 B3\nO 1 stones: C1");

        let (success, response) = session.execute("group", &["B3"]);
        assert!(success);
        assert_eq!(response, "X 2 stones: A3 B3\nliberties 3: C3 A2 B2");

        let (success, response) = session.execute("group", &["B2"]);
        assert!(!success);
        assert_eq!(response, "no stone at B2");
    }

    #[test]
    fn test_turn() {
        let mut session = Session::new(3);
        session.execute("play", &["A1"]);
        let (_, response) = session.execute("turn", &[]);
        assert_eq!(response, "1 white");
    }

    #[test]
    fn test_run_io() {
        let mut session = Session::new(3);
        let input = "# comment\n\n1 play A1\n2 showboard\nbogus\nquit\nplay B1\n";
        let mut output = Vec::new();
        session.run_io(input.as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("=1 \n\n"));
        assert!(text.contains("=2 \n. . .\n. . .\nX . ."));
        assert!(text.contains("? unknown command: bogus"));
        // Nothing after quit is executed
        assert_eq!(session.board().turn_count(), 1);
    }
}
