use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Duration;

use train_board::simulation::{FrameBuffer, Game, GameConfig, SimRng, TrackGraph};

#[derive(Parser)]
#[command(name = "train_board")]
#[command(about = "Headless runner for the LED train board")]
struct Cli {
    /// Number of game ticks to run
    #[arg(long, default_value = "1000")]
    ticks: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between ticks in milliseconds (the physical board uses 30-50)
    #[arg(long, default_value = "0")]
    period_ms: u64,

    /// Cargo appears on an empty platform once in this many ticks on average
    #[arg(long, default_value = "800")]
    spawn_odds: u16,

    /// Print the board every N ticks, 0 to only print the final state
    #[arg(long, default_value = "250")]
    report_every: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run_headless(&cli)
}

/// Run the game without hardware, drawing the LED frame to the terminal
fn run_headless(cli: &Cli) -> Result<()> {
    println!("Running train board in headless mode...");
    println!("Ticks: {}, Period: {}ms", cli.ticks, cli.period_ms);
    println!();

    let rng = match cli.seed {
        Some(seed) => SimRng::new_with_seed(seed),
        None => SimRng::from_entropy(),
    };
    let config = GameConfig {
        spawn_odds: cli.spawn_odds,
        ..GameConfig::default()
    };
    let graph = TrackGraph::board()?;

    let mut game = Game::new(config, graph, FrameBuffer::new(), rng)?;
    game.setup().context("Game setup failed")?;

    for tick in 1..=cli.ticks {
        if game.is_over() {
            game.restart();
        }
        game.tick();

        if cli.report_every > 0 && tick % cli.report_every == 0 {
            println!("--- After tick {} ---", tick);
            game.print_summary();
            game.draw_board();
        }

        if cli.period_ms > 0 {
            std::thread::sleep(Duration::from_millis(cli.period_ms));
        }
    }

    println!("=== Final State ===");
    game.print_summary();
    game.draw_board();

    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks run: {}", game.ticks());
    info!("Cargo loaded: {}", game.cargo_loaded());
    info!("Trains: {}", game.trains().len());
    info!(
        "Cars on board: {}",
        game.trains().iter().map(|train| train.len()).sum::<usize>()
    );
    info!(
        "Platforms waiting: {}/{}",
        game.platforms().iter().filter(|p| p.has_cargo()).count(),
        game.platforms().len()
    );
    Ok(())
}
