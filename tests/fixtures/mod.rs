//! Grids and environments shared by the tests.
//!
//! The plus shaped maze has no two states with the same open directions, so a perfect sensor identifies the true
//! state exactly. The open 4 by 4 grid does not: edge cells and interior cells share their open directions.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use bayes_localize::grid::Adjacency;
use bayes_localize::models::Environment;
use bayes_localize::{DirectionSet, GridConfig, GridWorld, Result};

/// A 3 by 3 grid with the corners blocked.
///
/// States: 0 (0,1) top, 1 (1,0) left, 2 (1,1) centre, 3 (1,2) right, 4 (2,1) bottom.
pub fn plus_maze() -> GridConfig {
    GridConfig::open(3, 3).with_obstacles(vec![(0, 0), (0, 2), (2, 0), (2, 2)])
}

pub fn seeded_world(config: &GridConfig, seed: u64) -> GridWorld {
    GridWorld::with_rng(config, Box::new(StdRng::seed_from_u64(seed))).unwrap()
}

pub fn sum(v: impl IntoIterator<Item = f64>) -> f64 {
    v.into_iter().sum()
}

/// A world whose sensor always reports every direction closed.
pub struct BlindWorld(pub GridWorld);

impl Environment for BlindWorld {
    fn num_states(&self) -> usize {
        self.0.num_states()
    }

    fn adjacency(&self) -> &Adjacency {
        self.0.adjacency()
    }

    fn directions(&self) -> DirectionSet {
        self.0.directions()
    }

    fn reserved_state(&self) -> Option<usize> {
        self.0.reserved_state()
    }

    fn reset(&mut self) {
        self.0.reset()
    }

    fn advance_and_sense(&mut self, error_rate: f64) -> Result<DirectionSet> {
        self.0.advance_and_sense(error_rate)?;
        Ok(DirectionSet::empty())
    }

    fn localization_error(&self, estimated: usize) -> Result<usize> {
        self.0.localization_error(estimated)
    }

    fn path_accuracy(&self, path: &[usize]) -> Result<f64> {
        self.0.path_accuracy(path)
    }
}
