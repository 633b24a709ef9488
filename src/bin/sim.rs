use minimax_rank::{init_logging, play_out, AiPlayer, Game, GameStatus, Mark, RandomPlayer};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 10,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ai = AiPlayer::new();
    let mut random = RandomPlayer::new();
    let (mut ai_wins, mut random_wins, mut draws) = (0usize, 0usize, 0usize);

    for i in 0..games {
        // AI takes X in even games and O in odd ones.
        let ai_mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        let mut game = Game::new();
        let record = match ai_mark {
            Mark::X => play_out(&mut game, &mut ai, &mut random, &mut rng)?,
            Mark::O => play_out(&mut game, &mut random, &mut ai, &mut rng)?,
        };
        match record.status {
            GameStatus::Won(mark) if mark == ai_mark => ai_wins += 1,
            GameStatus::Won(_) => random_wins += 1,
            _ => draws += 1,
        }
    }

    let result = json!({
        "games": games,
        "ai_wins": ai_wins,
        "random_wins": random_wins,
        "draws": draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
