//! Grid world simulation.
//!
//! The ground truth a localization agent is scored against. An agent walks the free cells of a grid at random,
//! moving each time slice to one of its neighbours with equal probability. Its sensor reports the open directions
//! around it, each direction independently flipped with probability equal to the sensor error rate.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_core::RngCore;
use rand_distr::Bernoulli;
use tracing::{debug, trace};

use crate::config::GridConfig;
use crate::error::{LocalizeError, Result};
use crate::grid::{Adjacency, DirectionSet, Grid};
use crate::models::{check_probability, Environment};

/// A grid with obstacles and a randomly walking agent.
pub struct GridWorld {
    grid: Grid,
    reserved_state: Option<usize>,
    rng: Box<dyn RngCore>,
    /// True state
    state: usize,
    /// True states visited since reset, the current state last
    trajectory: Vec<usize>,
    time_step: usize,
}

impl GridWorld {
    /// Creates a world whose random walk is seeded from system entropy.
    pub fn new(config: &GridConfig) -> Result<GridWorld> {
        GridWorld::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    /// Creates a world whose random walk is drawn from `rng`.
    pub fn with_rng(config: &GridConfig, rng: Box<dyn RngCore>) -> Result<GridWorld> {
        let grid = Grid::new(config)?;
        let num_states = grid.num_states();

        if let Some(reserved) = config.reserved_state {
            if reserved >= num_states {
                return Err(LocalizeError::ReservedStateOutOfRange { state: reserved, num_states });
            }
            if num_states == 1 {
                return Err(LocalizeError::NoStartState);
            }
        }
        // A walk can only reach the reserved state through a neighbour, so it may be isolated
        if let Some(isolated) = grid.isolated_states().find(|s| Some(*s) != config.reserved_state) {
            return Err(LocalizeError::IsolatedState(isolated));
        }

        let mut world = GridWorld {
            grid,
            reserved_state: config.reserved_state,
            rng,
            state: 0,
            trajectory: vec![],
            time_step: 0,
        };
        world.reset();
        Ok(world)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The true state.
    pub fn state(&self) -> usize {
        self.state
    }

    pub fn trajectory(&self) -> &[usize] {
        &self.trajectory
    }

    pub fn time_step(&self) -> usize {
        self.time_step
    }

    /// Uniformly random state other than the reserved state.
    fn start_state(&mut self) -> usize {
        let n = self.grid.num_states();
        match self.reserved_state {
            Some(reserved) => {
                let s = self.rng.gen_range(0..n - 1);
                if s >= reserved {
                    s + 1
                } else {
                    s
                }
            }
            None => self.rng.gen_range(0..n),
        }
    }

    /// Uniformly random neighbour of the true state.
    fn next_state(&mut self) -> Result<usize> {
        let neighbours: Vec<usize> = self.grid.neighbours(self.state)?.states().collect();
        neighbours
            .choose(&mut self.rng)
            .copied()
            .ok_or(LocalizeError::IsolatedState(self.state))
    }

    /// A sensor reading at the true state.
    fn sense(&mut self, flip: &Bernoulli) -> Result<DirectionSet> {
        let open = self.grid.neighbours(self.state)?.directions();
        let mut reading = open;
        for dir in self.grid.directions().iter() {
            if self.rng.sample(flip) {
                reading.toggle(dir);
            }
        }
        trace!(state = self.state, ?open, ?reading, "sensed");
        Ok(reading)
    }
}

impl Environment for GridWorld {
    fn num_states(&self) -> usize {
        self.grid.num_states()
    }

    fn adjacency(&self) -> &Adjacency {
        self.grid.adjacency()
    }

    fn directions(&self) -> DirectionSet {
        self.grid.directions()
    }

    fn reserved_state(&self) -> Option<usize> {
        self.reserved_state
    }

    fn reset(&mut self) {
        self.state = self.start_state();
        self.time_step = 0;
        self.trajectory.clear();
        self.trajectory.push(self.state);
        debug!(start = self.state, "world reset");
    }

    fn advance_and_sense(&mut self, error_rate: f64) -> Result<DirectionSet> {
        let flip = Bernoulli::new(check_probability(error_rate)?)
            .map_err(|_| LocalizeError::InvalidErrorRate(error_rate))?;

        self.state = self.next_state()?;
        self.trajectory.push(self.state);
        self.time_step += 1;

        self.sense(&flip)
    }

    fn localization_error(&self, estimated: usize) -> Result<usize> {
        let truth = self.grid.cell(self.state)?;
        let estimate = self.grid.cell(estimated)?;
        Ok(truth.manhattan(&estimate))
    }

    fn path_accuracy(&self, path: &[usize]) -> Result<f64> {
        if path.len() != self.trajectory.len() {
            return Err(LocalizeError::PathLengthMismatch {
                expected: self.trajectory.len(),
                actual: path.len(),
            });
        }
        let correct = path.iter().zip(self.trajectory.iter()).filter(|(p, t)| p == t).count();
        Ok(correct as f64 / self.trajectory.len() as f64)
    }
}
