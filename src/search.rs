//! Alpha-beta pruned minimax over the full tic-tac-toe game tree.
//!
//! X maximises the utility and O minimises it. Moves are tried in
//! [`legal_moves`] order and only a strictly better value replaces the
//! running best, so ties go to the first move in scan order. Pruning never
//! changes the chosen move, only how many nodes are visited.
//!
//! Recursion depth is bounded by the number of empty cells (at most nine),
//! and every call works on its own copy of the board.

use crate::board::Board;
use crate::common::{Mark, Move};
use crate::config::{MAX_UTILITY, MIN_UTILITY};
use crate::rules::{is_terminal, legal_moves, utility, whose_turn};
use log::debug;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// First optimal move in scan order.
    pub best_move: Move,
    /// Utility guaranteed by optimal play from the searched board.
    pub value: i8,
    /// Nodes visited, the root included.
    pub nodes: u64,
}

/// Optimal move for the player to move, or `None` on a terminal board.
/// A board with a single empty cell returns it without searching.
pub fn best_move(board: &Board) -> Option<Move> {
    if is_terminal(board) {
        return None;
    }
    let mut moves = legal_moves(board);
    let first = moves.next()?;
    if moves.next().is_none() {
        return Some(first);
    }
    solve(board).map(|s| s.best_move)
}

/// Search the whole tree below `board`. `None` on a terminal board.
pub fn solve(board: &Board) -> Option<Solution> {
    if is_terminal(board) {
        return None;
    }
    let mut search = Search { nodes: 0 };
    let (best_move, value) = search.alpha_beta(board, MIN_UTILITY, MAX_UTILITY);
    let best_move = best_move?;
    debug!(
        "solved {:?}: {} to move plays {} for {} ({} nodes)",
        board,
        whose_turn(board),
        best_move,
        value,
        search.nodes
    );
    Some(Solution {
        best_move,
        value,
        nodes: search.nodes,
    })
}

struct Search {
    nodes: u64,
}

impl Search {
    /// Value of `board` within the window `[alpha, beta]`, with the move
    /// achieving it. Terminal boards have no move.
    fn alpha_beta(&mut self, board: &Board, mut alpha: i8, mut beta: i8) -> (Option<Move>, i8) {
        self.nodes += 1;
        if is_terminal(board) {
            return (None, utility(board));
        }

        let mover = whose_turn(board);
        let mut best: Option<(Move, i8)> = None;
        for mv in legal_moves(board) {
            // Moves from `legal_moves` always target an empty cell.
            let Ok(child) = board.place(mv, mover) else {
                continue;
            };
            let (_, value) = self.alpha_beta(&child, alpha, beta);
            match mover {
                Mark::X => {
                    if best.map_or(true, |(_, v)| value > v) {
                        best = Some((mv, value));
                    }
                    alpha = alpha.max(value);
                    if beta <= alpha {
                        break;
                    }
                }
                Mark::O => {
                    if best.map_or(true, |(_, v)| value < v) {
                        best = Some((mv, value));
                    }
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        match best {
            Some((mv, value)) => (Some(mv), value),
            None => (None, utility(board)),
        }
    }
}
