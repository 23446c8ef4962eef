mod match_runner;
mod settings;

use clap::Parser;
use match_runner::run_series;
use settings::MatchSettings;
use tictactoe_engine::{SessionRng, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_arena")]
struct Args {
    /// Path to the YAML settings file.
    #[arg(long, default_value = "arena.yaml")]
    config: String,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    x_difficulty: Option<String>,

    #[arg(long)]
    o_difficulty: Option<String>,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let mut settings = MatchSettings::load(&args.config)?;
    if let Some(games) = args.games {
        settings.games = games;
    }
    if let Some(x_difficulty) = args.x_difficulty {
        settings.x_difficulty = x_difficulty;
    }
    if let Some(o_difficulty) = args.o_difficulty {
        settings.o_difficulty = o_difficulty;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    settings.validate()?;

    let mut rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Running {} games: X={} O={} seed={}",
        settings.games,
        settings.x_difficulty,
        settings.o_difficulty,
        rng.seed()
    );

    let result = run_series(
        settings.games,
        settings.x_difficulty()?,
        settings.o_difficulty()?,
        &mut rng,
    )?;

    log!(
        "Series finished: X wins {}, O wins {}, draws {}",
        result.x_wins,
        result.o_wins,
        result.draws
    );

    Ok(())
}
