#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};

    use minimax_rank::{coord_to_string, parse_coord, Board, CliPlayer, Move, Player};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Writer that keeps what was written so the test can inspect it.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn player(input: &str) -> (CliPlayer, Captured) {
        let out = Captured::default();
        let player = CliPlayer::with_io(
            Box::new(Cursor::new(input.as_bytes().to_vec())),
            Box::new(out.clone()),
        );
        (player, out)
    }

    #[test]
    fn test_parse_coord_forms() {
        assert_eq!(parse_coord("A1"), Some(Move::new(0, 0)));
        assert_eq!(parse_coord("c2"), Some(Move::new(1, 2)));
        assert_eq!(parse_coord("2 1"), Some(Move::new(2, 1)));
        assert_eq!(parse_coord("D1"), None);
        assert_eq!(parse_coord("A4"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("3 0"), None);
        assert_eq!(parse_coord(""), None);
        assert_eq!(coord_to_string(Move::new(2, 1)), "B3");
    }

    #[test]
    fn test_reads_move_after_rejecting_bad_input() {
        let board: Board = "X../.../...".parse().unwrap();
        let (mut p, out) = player("zz\nA1\nB2\n");
        let mut rng = SmallRng::seed_from_u64(12345);
        assert_eq!(p.select_move(&mut rng, &board), Some(Move::new(1, 1)));
        let text = out.text();
        assert!(text.contains("Invalid coordinate"));
        assert!(text.contains("already occupied"));
    }

    #[test]
    fn test_empty_line_takes_suggestion() {
        let board: Board = "XO./XO./...".parse().unwrap();
        let (mut p, out) = player("\n");
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(p.select_move(&mut rng, &board), Some(Move::new(2, 0)));
        assert!(out.text().contains("[A3]"));
    }

    #[test]
    fn test_closed_input_resigns() {
        let (mut p, _) = player("");
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(p.select_move(&mut rng, &Board::new()), None);
    }
}
