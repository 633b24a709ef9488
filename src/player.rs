use crate::{board::Board, common::Move, Mark};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose a move for the player to move on `board`. `None` means the
    /// player has nothing to offer (terminal board, or input closed).
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Move>;

    /// Inform the player of a move played by either side.
    fn handle_move(&mut self, _mark: Mark, _mv: Move, _board: &Board) {}
}
