//! Game configuration
//!
//! Where trains start on restart and how often platforms fill.

use anyhow::{bail, Result};

use super::layout::PLATFORM_CELLS;
use super::platform::DEFAULT_SPAWN_ODDS;
use super::track::TrackGraph;
use super::train::MAX_CARS;
use super::types::{Cargo, CellId};

/// Starting layout of one train
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainConfig {
    pub start: CellId,
    pub engine_cargo: Cargo,
    /// Cars coupled behind the engine, front to back
    pub cars: Vec<Cargo>,
}

impl TrainConfig {
    pub fn new(start: u8, engine_cargo: u8, cars: &[u8]) -> Self {
        Self {
            start: CellId(start),
            engine_cargo: Cargo(engine_cargo),
            cars: cars.iter().map(|&c| Cargo(c)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub trains: Vec<TrainConfig>,
    /// Cells wired up as platforms on setup
    pub platforms: Vec<CellId>,
    pub spawn_odds: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            trains: vec![
                TrainConfig::new(0, 1, &[0, 0]),
                TrainConfig::new(143, 1, &[1, 0, 0]),
            ],
            platforms: PLATFORM_CELLS.iter().map(|&cell| CellId(cell)).collect(),
            spawn_odds: DEFAULT_SPAWN_ODDS,
        }
    }
}

impl GameConfig {
    /// Check the configuration against a loaded track graph
    pub fn validate(&self, graph: &TrackGraph) -> Result<()> {
        if self.spawn_odds == 0 {
            bail!("Spawn odds must be at least 1");
        }
        for &cell in &self.platforms {
            if !graph.is_platform(cell) {
                bail!("Cell {} is listed as a platform but is not one", cell);
            }
        }
        let mut listed = self.platforms.clone();
        listed.sort();
        listed.dedup();
        if listed != graph.platform_cells() {
            bail!(
                "Platform list names {} cells, the track has {} platforms",
                listed.len(),
                graph.platform_cells().len()
            );
        }
        for (index, train) in self.trains.iter().enumerate() {
            if !graph.contains(train.start) {
                bail!("Train {} starts at {}, which is not on the board", index, train.start);
            }
            if graph.is_platform(train.start) {
                bail!("Train {} starts on platform cell {}", index, train.start);
            }
            if graph.cell(train.start).is_some_and(|cell| cell.links().next().is_none()) {
                bail!("Train {} starts on unwired cell {}", index, train.start);
            }
            if train.cars.len() + 1 > MAX_CARS {
                bail!(
                    "Train {} has {} cars, at most {} fit",
                    index,
                    train.cars.len() + 1,
                    MAX_CARS
                );
            }
        }
        Ok(())
    }
}
