use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, ControllerKind, GameConfig, GameResult, Lineup, MatchSummary};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays three-player checkers: Red and Blue are automated stand-ins for the
/// human players, Green is played by the search.
#[derive(Parser)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 10)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Search depth of the green player
    #[arg(short, long)]
    depth: Option<i32>,

    /// End a game after this many turns
    #[arg(long)]
    max_turns: Option<usize>,

    /// Search the full tree instead of using alpha-beta pruning
    #[arg(long, default_value_t = false)]
    no_pruning: bool,

    /// How the red player picks moves
    #[arg(long, value_enum)]
    red: Option<ControllerKind>,

    /// How the blue player picks moves
    #[arg(long, value_enum)]
    blue: Option<ControllerKind>,

    /// Print the final tally as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    /// The config file (or the defaults), with command line flags taking precedence.
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }
        if self.no_pruning {
            config.pruning = false;
        }
        if let Some(red) = self.red {
            config.red = red;
        }
        if let Some(blue) = self.blue {
            config.blue = blue;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = args.game_config()?;
    debug!(?config);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut summary = MatchSummary::new();
    for game_idx in 0..args.num_games {
        let mut lineup = Lineup::from_config(&config, &mut rng);
        let result = play_game(&mut lineup, &config)?;
        match &result {
            GameResult::Won { color } => info!(game_idx, winner = %color, "Game over"),
            GameResult::TurnLimit { pieces } => {
                info!(game_idx, ?pieces, "Turn limit reached")
            }
            GameResult::Stalemate => info!(game_idx, "Stalemate"),
            GameResult::IllegalMoveByPlayer { color, err } => {
                info!(game_idx, player = %color, "Illegal move by player");
                let mut err_dyn = err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
            }
        }
        summary.record(&result);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        eprintln!("{}", summary);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
