//! Localization agent.
//!
//! Estimates where it is in an [`Environment`] from the environment's noisy sensor readings alone.
//! Each time slice the agent takes one reading, filters its belief with the forward algorithm, extends its Viterbi
//! trellis and scores both estimates against the ground truth.
//!
//! The transition model is derived once, from the environment the agent is built on.
//!
//! [`Environment`]: ../models/trait.Environment.html

use na::DVector;
use nalgebra as na;
use tracing::{debug, info, warn};

use crate::config::AgentConfig;
use crate::error::{LocalizeError, Result};
use crate::estimators::forward::BeliefState;
use crate::estimators::viterbi::Trellis;
use crate::models::{DiscreteFilter, Environment, Estimator, ObservationModel, SensorModel, TransitionModel};
use crate::world::GridWorld;

/// Scores recorded each time slice of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    /// Manhattan distance from the most likely state to the true state
    pub localization_error: Vec<usize>,
    /// Fraction of the decoded path which agrees with the true trajectory
    pub path_accuracy: Vec<f64>,
}

impl Metrics {
    pub fn len(&self) -> usize {
        self.localization_error.len()
    }

    pub fn is_empty(&self) -> bool {
        self.localization_error.is_empty()
    }

    fn clear(&mut self) {
        self.localization_error.clear();
        self.path_accuracy.clear();
    }
}

/// An HMM localization agent.
pub struct LocalizationAgent<E: Environment = GridWorld> {
    world: E,
    transition: TransitionModel,
    sensor: SensorModel,
    steps: usize,
    time_slice: usize,
    belief: BeliefState,
    trellis: Trellis,
    metrics: Metrics,
}

impl<E: Environment> LocalizationAgent<E> {
    pub fn new(world: E, config: &AgentConfig) -> Result<Self> {
        let sensor = SensorModel::new(config.error_rate, world.directions())?;
        if config.steps == 0 {
            return Err(LocalizeError::ZeroSteps);
        }
        let transition = TransitionModel::from_adjacency(world.adjacency(), world.reserved_state())?;
        let n = world.num_states();

        debug!(num_states = n, error_rate = config.error_rate, steps = config.steps, "localization agent");
        Ok(LocalizationAgent {
            world,
            transition,
            sensor,
            steps: config.steps,
            time_slice: 0,
            belief: BeliefState::new_uniform(n),
            trellis: Trellis::new_uniform(n),
            metrics: Metrics::default(),
        })
    }

    /// Forget all observations. The environment is not reset.
    pub fn reset(&mut self) {
        self.time_slice = 0;
        self.belief.reset();
        self.trellis.reset();
        self.metrics.clear();
    }

    /// One time slice: observe, filter, decode and score.
    pub fn step(&mut self) -> Result<()> {
        let evidence = self.world.advance_and_sense(self.sensor.error_rate)?;
        self.time_slice += 1;
        let obs = self.sensor.observe(&evidence, self.world.adjacency());

        if let Err(e) = self.filter(&obs) {
            warn!(time_slice = self.time_slice, ?evidence, error = %e, "observation eliminated every state");
            return Err(e);
        }

        let most_likely = self.belief.state();
        let path = self.trellis.decode();
        let localization_error = self.world.localization_error(most_likely)?;
        let path_accuracy = self.world.path_accuracy(&path)?;
        debug!(time_slice = self.time_slice, ?evidence, most_likely, localization_error, path_accuracy, "step");

        self.metrics.localization_error.push(localization_error);
        self.metrics.path_accuracy.push(path_accuracy);
        Ok(())
    }

    fn filter(&mut self, obs: &ObservationModel) -> Result<()> {
        self.belief.update(&self.transition, obs)?;
        self.trellis.update(&self.transition, obs)
    }

    /// Run for the step budget, recording metrics for each time slice.
    pub fn run(&mut self) -> Result<&Metrics> {
        for _ in 0..self.steps {
            self.step()?;
        }

        info!(
            time_slice = self.time_slice,
            final_localization_error = ?self.metrics.localization_error.last().copied(),
            final_path_accuracy = ?self.metrics.path_accuracy.last().copied(),
            "run complete"
        );
        Ok(&self.metrics)
    }

    /// Probability of each state given the readings so far.
    pub fn belief(&self) -> &DVector<f64> {
        &self.belief.f
    }

    /// Most likely state given the readings so far.
    pub fn most_likely_state(&self) -> usize {
        self.belief.state()
    }

    pub fn trellis(&self) -> &Trellis {
        &self.trellis
    }

    /// Most likely path given the readings so far.
    pub fn decode(&self) -> Vec<usize> {
        self.trellis.decode()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn transition(&self) -> &TransitionModel {
        &self.transition
    }

    pub fn sensor(&self) -> &SensorModel {
        &self.sensor
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn time_slice(&self) -> usize {
        self.time_slice
    }

    pub fn world(&self) -> &E {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut E {
        &mut self.world
    }

    pub fn into_world(self) -> E {
        self.world
    }
}
