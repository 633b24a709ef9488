use minimax_rank::{
    apply_move, is_terminal, legal_moves, utility, whose_turn, winner, Board, Mark, Move,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Play `plies` random legal moves from the empty board, stopping early at a
/// terminal position.
fn random_board(seed: u64, plies: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        if is_terminal(&board) {
            break;
        }
        let moves: Vec<Move> = legal_moves(&board).collect();
        let mv = moves[rng.random_range(0..moves.len())];
        board = apply_move(&board, mv).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn played_cell_leaves_legal_moves(seed in any::<u64>(), plies in 0..9usize) {
        let board = random_board(seed, plies);
        prop_assume!(!is_terminal(&board));
        for mv in legal_moves(&board) {
            let next = apply_move(&board, mv).unwrap();
            prop_assert!(legal_moves(&next).all(|m| m != mv));
            prop_assert_eq!(legal_moves(&next).count() + 1, legal_moves(&board).count());
            prop_assert_eq!(next.get(mv.row, mv.col).unwrap(), Some(whose_turn(&board)));
            prop_assert!(apply_move(&next, mv).is_err());
        }
    }

    #[test]
    fn mark_counts_stay_balanced(seed in any::<u64>(), plies in 0..=9usize) {
        let board = random_board(seed, plies);
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        prop_assert!(x == o || x == o + 1);
        prop_assert_eq!(x + o + legal_moves(&board).count(), 9);
    }

    #[test]
    fn terminal_utility_matches_winner(seed in any::<u64>()) {
        let board = random_board(seed, 9);
        prop_assert!(is_terminal(&board));
        let value = utility(&board);
        prop_assert!([-1i8, 0, 1].contains(&value));
        let expected = match winner(&board) {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        };
        prop_assert_eq!(value, expected);
        if winner(&board).is_none() {
            prop_assert!(board.is_full());
        }
    }

    #[test]
    fn board_text_roundtrip(seed in any::<u64>(), plies in 0..=9usize) {
        let board = random_board(seed, plies);
        let parsed: Board = board.to_string().parse().unwrap();
        prop_assert_eq!(parsed, board);
    }
}
