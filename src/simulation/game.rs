//! The game dispatcher that ties everything together
//!
//! Owns the track graph, the trains, the platforms and the board hardware.
//! One `tick` advances every train, rolls every platform for cargo and then
//! hands waiting cargo to any train standing beside it.

use anyhow::{Context, Result};
use log::{info, warn};

use super::board::{DigitSink, FrameBuffer, LedSink, BOARD_COLUMNS};
use super::config::GameConfig;
use super::game_state::GameState;
use super::platform::Platform;
use super::random::RandomSource;
use super::track::TrackGraph;
use super::train::Train;
use super::types::CellId;

/// A game on one board
pub struct Game<H, R>
where
    H: LedSink + DigitSink,
    R: RandomSource,
{
    config: GameConfig,
    graph: TrackGraph,
    hardware: H,
    rng: R,
    state: GameState,
    trains: Vec<Train>,
    platforms: Vec<Platform>,
}

impl<H, R> Game<H, R>
where
    H: LedSink + DigitSink,
    R: RandomSource,
{
    /// Build a game; the configuration is checked against the graph here
    pub fn new(config: GameConfig, graph: TrackGraph, hardware: H, rng: R) -> Result<Self> {
        config
            .validate(&graph)
            .context("Game configuration does not fit the track")?;

        Ok(Self {
            config,
            graph,
            hardware,
            rng,
            state: GameState::new(),
            trains: Vec::new(),
            platforms: Vec::new(),
        })
    }

    /// Blank the board and wire up the platforms. Leaves the game over.
    pub fn setup(&mut self) -> Result<()> {
        info!("Game setup...");

        for index in 0..self.graph.len() {
            self.hardware.set_led(CellId(index as u8), 0);
        }
        self.hardware.clear();

        self.trains.clear();
        self.platforms = self
            .config
            .platforms
            .iter()
            .map(|&cell| {
                Platform::from_graph(&self.graph, cell)
                    .map(|platform| platform.with_spawn_odds(self.config.spawn_odds))
            })
            .collect::<Result<Vec<_>>>()
            .context("Failed to wire platforms")?;

        self.state = GameState::new();

        info!(
            "Track: {} cells, {} track cells, {} platforms, {} network(s)",
            self.graph.len(),
            self.graph.track_cell_count(),
            self.platforms.len(),
            self.graph.component_count()
        );
        Ok(())
    }

    /// Put the configured trains back on the board and start running
    pub fn restart(&mut self) {
        for train in &mut self.trains {
            train.clear(&mut self.hardware);
        }
        self.trains.clear();

        for platform in &mut self.platforms {
            if platform.has_cargo() {
                platform.load_cargo();
                self.hardware.set_led(platform.platform_cell(), 0);
            }
        }

        for (index, layout) in self.config.trains.iter().enumerate() {
            let mut train = Train::new();
            train.init(
                layout.start,
                layout.engine_cargo,
                &mut self.rng,
                &mut self.hardware,
            );
            for &cargo in &layout.cars {
                if !train.add_car(cargo, &self.graph, &mut self.hardware) {
                    warn!("Train {} could not couple another car", index);
                }
            }
            self.trains.push(train);
        }

        self.state.start();
        self.hardware.display_number(self.state.display_value());

        info!("Game restarted with {} trains", self.trains.len());
    }

    /// Run one step of the game; does nothing while the game is over
    pub fn tick(&mut self) {
        if self.state.is_over {
            return;
        }
        self.state.update();

        for train in &mut self.trains {
            train.advance(&self.graph, &mut self.rng, &mut self.hardware);
        }

        for platform in &mut self.platforms {
            platform.tick(&mut self.rng, &mut self.hardware);
        }

        self.load_waiting_cargo();
    }

    /// Hand cargo to trains whose engine stands beside a laden platform.
    /// A platform is empty after its first pickup, so later trains in the
    /// same tick find nothing there.
    fn load_waiting_cargo(&mut self) {
        for (train_index, train) in self.trains.iter().enumerate() {
            let Some(front) = train.front() else {
                continue;
            };
            for platform in &mut self.platforms {
                if platform.track_cell() != front || !platform.has_cargo() {
                    continue;
                }
                platform.load_cargo();
                self.hardware.set_led(platform.platform_cell(), 0);
                let total = self.state.record_pickup();
                self.hardware.display_number(self.state.display_value());
                info!(
                    "Train {} loaded cargo at platform {} (total {})",
                    train_index,
                    platform.platform_cell(),
                    total
                );
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    pub fn cargo_loaded(&self) -> u32 {
        self.state.cargo_loaded
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn graph(&self) -> &TrackGraph {
        &self.graph
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn trains_mut(&mut self) -> &mut [Train] {
        &mut self.trains
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platforms_mut(&mut self) -> &mut [Platform] {
        &mut self.platforms
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Fewest moves from a train's engine to any platform holding cargo
    pub fn hops_to_cargo(&self, train_index: usize) -> Option<usize> {
        let front = self.trains.get(train_index)?.front()?;
        self.platforms
            .iter()
            .filter(|platform| platform.has_cargo())
            .filter_map(|platform| self.graph.hops_between(front, platform.track_cell()))
            .min()
    }

    /// Print a summary of the game state
    pub fn print_summary(&self) {
        println!("=== Train Board Summary ===");
        println!("{}", self.state.summary());
        println!();

        println!("--- Trains ---");
        for (index, train) in self.trains.iter().enumerate() {
            let cargo: Vec<u8> = train.cars().iter().map(|car| car.cargo.0).collect();
            let front = train
                .front()
                .map(|cell| cell.to_string())
                .unwrap_or_else(|| "-".to_string());
            let to_cargo = self
                .hops_to_cargo(index)
                .map(|hops| format!("{} hops", hops))
                .unwrap_or_else(|| "none waiting".to_string());
            println!(
                "  Train {}: front={}, cars={}, speed={}, exit={:?}, cargo={:?}, nearest cargo: {}",
                index,
                front,
                train.len(),
                train.speed(),
                train.direction(),
                cargo,
                to_cargo
            );
        }

        println!("--- Platforms ---");
        let laden: Vec<String> = self
            .platforms
            .iter()
            .filter(|platform| platform.has_cargo())
            .map(|platform| platform.platform_cell().to_string())
            .collect();
        println!(
            "  Laden: {}/{} [{}]",
            laden.len(),
            self.platforms.len(),
            laden.join(", ")
        );
    }
}

impl<R: RandomSource> Game<FrameBuffer, R> {
    /// Draw the LED matrix in the terminal
    pub fn draw_board(&self) {
        println!("\n=== Board ===");
        println!("Legend: #=loaded car, o=empty car, p=cargo waiting, .=dark");
        println!("{}", "-".repeat(BOARD_COLUMNS));
        for row in self.hardware.render_rows() {
            println!("{}", row);
        }
        match self.hardware.digits() {
            Some(value) => println!("Display: {:03}", value),
            None => println!("Display: ---"),
        }
        println!();
    }
}
