#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minimax_rank::{
    init_logging, iterate_pagerank, play_out, sample_pagerank, solve, AiPlayer, Board, CliPlayer,
    Game, GameStatus, LinkGraph, Player, RandomPlayer, RankConfig,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
    Random,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game of tic-tac-toe in the console.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        x: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Ai)]
        o: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print the optimal move for a position such as `XO./XO./...`.
    Solve { board: String },
    /// Rank the pages of a JSON link map `{ "page": ["link", ...] }`.
    Rank {
        corpus: PathBuf,
        #[arg(long, default_value_t = minimax_rank::DAMPING)]
        damping: f64,
        #[arg(long, default_value_t = minimax_rank::SAMPLES)]
        samples: usize,
        #[arg(long, default_value_t = minimax_rank::CONVERGENCE_THRESHOLD)]
        threshold: f64,
        #[arg(long, help = "Fix RNG seed for reproducible sampling")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (run will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Ai => Box::new(AiPlayer::new()),
        PlayerType::Random => Box::new(RandomPlayer::new()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { x, o, seed } => {
            let mut rng = seeded_rng(seed);
            let mut px = make_player(x);
            let mut po = make_player(o);
            let mut game = Game::new();
            let record = play_out(&mut game, px.as_mut(), po.as_mut(), &mut rng)?;
            println!("{}", record.board);
            match record.status {
                GameStatus::Won(mark) => println!("{} wins.", mark),
                GameStatus::Draw => println!("Draw."),
                GameStatus::InProgress => println!("Game abandoned."),
            }
        }
        Commands::Solve { board } => {
            let board: Board = board.parse()?;
            println!("{}", board);
            match solve(&board) {
                Some(solution) => println!(
                    "Best move: {} (value {}, {} nodes searched)",
                    solution.best_move, solution.value, solution.nodes
                ),
                None => println!("Game over, utility {}", minimax_rank::utility(&board)),
            }
        }
        Commands::Rank {
            corpus,
            damping,
            samples,
            threshold,
            seed,
        } => {
            let text = std::fs::read_to_string(&corpus)?;
            let pages: BTreeMap<String, Vec<String>> = serde_json::from_str(&text)?;
            let graph = LinkGraph::from_links(pages);
            let config = RankConfig {
                damping,
                samples,
                threshold,
                ..RankConfig::default()
            };
            let mut rng = seeded_rng(seed);

            let ranks = sample_pagerank(&graph, &config, &mut rng)?;
            println!("PageRank Results from Sampling (n = {})", config.samples);
            for (page, rank) in &ranks {
                println!("  {}: {:.4}", page, rank);
            }

            let ranks = iterate_pagerank(&graph, &config)?;
            println!("PageRank Results from Iteration");
            for (page, rank) in &ranks {
                println!("  {}: {:.4}", page, rank);
            }
        }
    }
    Ok(())
}
