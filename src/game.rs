use crate::{
    board::Board,
    common::{BoardError, GameStatus, Move},
    player::Player,
    rules::{apply_move, is_terminal, whose_turn, winner},
    Mark,
};
use alloc::vec::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;

/// Game driver holding the current board and the moves that led to it.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

/// Summary of a finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub status: GameStatus,
    pub board: Board,
}

impl Game {
    /// Start from the empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an arbitrary position. The history starts empty.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played through this driver, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn to_move(&self) -> Mark {
        whose_turn(&self.board)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = winner(&self.board) {
            GameStatus::Won(mark)
        } else if is_terminal(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Play `mv` for the player to move and report the new status.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        let mark = self.to_move();
        self.board = apply_move(&self.board, mv)?;
        self.history.push(mv);
        debug!("{} plays {}", mark, mv);
        Ok(self.status())
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            moves: self.history.clone(),
            status: self.status(),
            board: self.board,
        }
    }
}

/// Alternate `x` and `o` from `game`'s position until the game ends or a
/// player has no move to offer.
pub fn play_out<'a>(
    game: &mut Game,
    x: &mut (dyn Player + 'a),
    o: &mut (dyn Player + 'a),
    rng: &mut SmallRng,
) -> Result<GameRecord, BoardError> {
    while game.status() == GameStatus::InProgress {
        let player: &mut (dyn Player + 'a) = match game.to_move() {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let Some(mv) = player.select_move(rng, game.board()) else {
            info!("{} resigned", game.to_move());
            break;
        };
        let mark = game.to_move();
        let status = game.play(mv)?;
        x.handle_move(mark, mv, game.board());
        o.handle_move(mark, mv, game.board());
        if let GameStatus::Won(winner) = status {
            info!("{} wins after {} moves", winner, game.history().len());
        }
    }
    Ok(game.record())
}
