//! Headless autoplay runner (default binary).
//!
//! Plays seeded games with a simple policy and prints one JSON summary per
//! game on stdout. No rendering, no persistence.

use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use twofortyeight::autoplay::{play, Policy};
use twofortyeight::core::{EngineConfig, GameState, RandSource, ReductionRule, SimpleRng};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Auto-play sliding-tile merge games and report the results"
)]
struct Cli {
    /// Base seed; game `i` uses `seed + i`
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Stop a game after this many moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u32>,

    /// Move-selection policy
    #[arg(long, value_enum, default_value_t = Policy::Corner)]
    policy: Policy,

    /// Reduction rule: `disabled` or `halve-max-edge`
    /// (overrides `TWENTY48_REDUCTION_RULE`)
    #[arg(long, value_name = "RULE")]
    reduction: Option<String>,

    /// Log the final grid of every game
    #[arg(long)]
    show_grid: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match cli.reduction.as_deref() {
        Some(raw) => EngineConfig::new(
            ReductionRule::from_str(raw).ok_or_else(|| anyhow!("unknown reduction rule {raw:?}"))?,
        ),
        None => EngineConfig::from_env(),
    };
    info!(
        "playing {} game(s), policy {:?}, reduction {}",
        cli.games,
        cli.policy,
        config.reduction.as_str()
    );

    let mut total_score = 0u64;
    let mut best_tile = 0;
    for i in 0..cli.games {
        let seed = cli.seed.wrapping_add(i as u64);
        let mut game = GameState::with_source(config, RandSource::seeded(seed));
        let mut policy_rng = SimpleRng::new(seed as u32);

        let summary = play(i, &mut game, cli.policy, &mut policy_rng, cli.max_moves);
        if cli.show_grid {
            info!("game {i} final grid:\n{}", summary.snapshot.grid);
        }

        total_score += summary.score;
        best_tile = best_tile.max(summary.snapshot.best_tile);
        println!("{}", serde_json::to_string(&summary)?);
    }

    if cli.games > 0 {
        info!(
            "done: mean score {:.1}, best tile {}",
            total_score as f64 / cli.games as f64,
            best_tile
        );
    }
    Ok(())
}
