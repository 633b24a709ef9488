#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::Move,
    config::BOARD_SIZE,
    rules::{apply_move, whose_turn},
    search, Mark,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Interactive console player. Shows the board, offers the engine's move as
/// a suggestion and reads coordinates such as `B2` or `1 1`.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl CliPlayer {
    /// Player reading from stdin and writing to stdout.
    pub fn new() -> Self {
        Self::with_io(Box::new(io::BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    pub fn with_io(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, board: &Board, suggestion: Move) -> io::Result<Option<String>> {
        write_board(&mut self.output, board)?;
        write!(
            self.output,
            "{} to move [{}]: ",
            whose_turn(board),
            coord_to_string(suggestion)
        )?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// `A1`-style name of a move: column letter, then 1-based row.
pub fn coord_to_string(mv: Move) -> String {
    let col = (b'A' + mv.col as u8) as char;
    format!("{}{}", col, mv.row + 1)
}

/// Parse `B2` (column letter, 1-based row) or `1 1` (0-based row and column).
pub fn parse_coord(input: &str) -> Option<Move> {
    let mut parts = input.split_whitespace();
    if let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) {
        let row = r.parse().ok()?;
        let col = c.parse().ok()?;
        return (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Move::new(row, col));
    }
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(Move::new(row - 1, col))
}

fn write_board(out: &mut dyn Write, board: &Board) -> io::Result<()> {
    write!(out, "  ")?;
    for c in 0..BOARD_SIZE {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for (r, row) in board.rows().iter().enumerate() {
        write!(out, "{:2}", r + 1)?;
        for cell in row {
            write!(out, " {}", cell.map_or('.', Mark::to_char))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl Player for CliPlayer {
    fn select_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Option<Move> {
        let suggestion = search::best_move(board)?;
        loop {
            let line = match self.prompt(board, suggestion) {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    log::warn!("console input failed: {}", e);
                    return None;
                }
            };
            if line.is_empty() {
                return Some(suggestion);
            }
            match parse_coord(&line).map(|mv| (mv, apply_move(board, mv))) {
                Some((mv, Ok(_))) => return Some(mv),
                Some((_, Err(e))) => {
                    let _ = writeln!(self.output, "Error: {}", e);
                }
                None => {
                    let _ = writeln!(self.output, "Invalid coordinate");
                }
            }
        }
    }

    fn handle_move(&mut self, mark: Mark, mv: Move, _board: &Board) {
        let _ = writeln!(self.output, "{} played {}", mark, coord_to_string(mv));
    }
}
