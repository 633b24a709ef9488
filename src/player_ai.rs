use crate::{board::Board, common::Move, rules::legal_moves, search};
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// Perfect player backed by the alpha-beta search.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Option<Move> {
        search::best_move(board)
    }
}

/// Player that picks uniformly among the legal moves.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Move> {
        if crate::rules::is_terminal(board) {
            return None;
        }
        let n = legal_moves(board).count();
        if n == 0 {
            return None;
        }
        legal_moves(board).nth(rng.random_range(0..n))
    }
}
