//! Commonly used types and utilities for ease of import.

pub use crate::{
    apply_move, best_move, is_terminal, iterate_pagerank, legal_moves, play_out, sample_pagerank,
    utility, whose_turn, winner, AiPlayer, Board, Game, GameStatus, LinkGraph, Mark, Move, Player,
    RandomPlayer, RankConfig,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
