//! Localization configuration.
//!
//! Plain serialisable structs. The `Default` of each is the reference experiment: a 4 by 16 maze with 21 obstacles,
//! a perfect sensor, 40 observations per run and a sweep over five sensor error rates.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Direction};

/// Obstacles of the reference maze, zero based (row, col).
pub const REFERENCE_OBSTACLES: [(usize, usize); 21] = [
    (0, 4), (0, 10), (0, 14),
    (1, 0), (1, 1), (1, 4), (1, 6), (1, 7), (1, 9), (1, 11), (1, 13), (1, 14), (1, 15),
    (2, 0), (2, 4), (2, 6), (2, 13), (2, 14),
    (3, 2), (3, 6), (3, 11),
];

/// State of the reference maze that is never used as a start.
///
/// It is the free cell at (0, 15), boxed in by obstacles, so it has no neighbours.
pub const REFERENCE_RESERVED_STATE: usize = 12;

/// Grid layout and sensor geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Cells which are not states
    pub obstacles: Vec<Cell>,
    /// Directions probed for neighbours and reported by the sensor
    pub directions: Vec<Direction>,
    /// State excluded from random starts, and allowed to have no neighbours
    pub reserved_state: Option<usize>,
}

impl GridConfig {
    /// An obstacle free grid sensing all four directions, with no reserved state.
    pub fn open(rows: usize, cols: usize) -> Self {
        GridConfig {
            rows,
            cols,
            obstacles: vec![],
            directions: Direction::ALL.to_vec(),
            reserved_state: None,
        }
    }

    pub fn with_obstacles<I: IntoIterator<Item = (usize, usize)>>(mut self, obstacles: I) -> Self {
        self.obstacles = obstacles.into_iter().map(|(row, col)| Cell::new(row, col)).collect();
        self
    }

    pub fn with_reserved_state(mut self, reserved_state: Option<usize>) -> Self {
        self.reserved_state = reserved_state;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::open(4, 16)
            .with_obstacles(REFERENCE_OBSTACLES.iter().copied())
            .with_reserved_state(Some(REFERENCE_RESERVED_STATE))
    }
}

/// Sensor error rate and run length of a localization agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Probability of each direction bit of a reading being flipped
    pub error_rate: f64,
    /// Observations per run
    pub steps: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            error_rate: 0.,
            steps: 40,
        }
    }
}

/// A sweep of repeated runs over several sensor error rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub grid: GridConfig,
    pub error_rates: Vec<f64>,
    /// Runs averaged for each error rate
    pub runs: usize,
    pub steps: usize,
    /// Seed of the world's random source, entropy when absent
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            grid: GridConfig::default(),
            error_rates: vec![0., 0.02, 0.05, 0.1, 0.2],
            runs: 300,
            steps: 40,
            seed: None,
        }
    }
}
