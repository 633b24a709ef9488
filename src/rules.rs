//! Pure rule functions over a [`Board`]. None of them mutate their input.

use crate::bitboard::SetBits;
use crate::board::{Board, BB};
use crate::common::{BoardError, Mark, Move};
use crate::config::{BOARD_SIZE, DRAW, MAX_UTILITY, MIN_UTILITY, WIN_LINES};

/// Mark of the player to move: O once X is ahead, X otherwise.
pub fn whose_turn(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Iterator over the empty cells of a board in row-major order.
#[derive(Clone)]
pub struct LegalMoves {
    cells: SetBits<u16, BOARD_SIZE>,
}

impl Iterator for LegalMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.cells.next().map(Move::from)
    }
}

/// All empty cells, scanned row by row. The order decides search tie-breaks.
pub fn legal_moves(board: &Board) -> LegalMoves {
    LegalMoves {
        cells: board.empty_cells().iter_set_bits(),
    }
}

/// Board after the player to move marks `mv`.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, BoardError> {
    if board.get(mv.row, mv.col)?.is_some() {
        return Err(BoardError::IllegalMove {
            row: mv.row,
            col: mv.col,
        });
    }
    board.place(mv, whose_turn(board))
}

fn has_line(cells: BB) -> bool {
    WIN_LINES
        .iter()
        .any(|&line| cells.covers(&BB::from_raw(line)))
}

/// The mark holding a complete row, column or diagonal. X is checked first.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_line(board.marks(mark)))
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Outcome of a terminal board: +1 X won, -1 O won, 0 otherwise.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => MAX_UTILITY,
        Some(Mark::O) => MIN_UTILITY,
        None => DRAW,
    }
}
