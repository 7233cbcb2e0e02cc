#![allow(non_snake_case)]

//! Hidden Markov localization models.
//!
//! The transition and observation models of the grid HMM are represented as structs.
//! The operations of the discrete estimators and of the environment they localize in are defined as traits.

use na::{DMatrix, DVector};
use nalgebra as na;
use tracing::debug;

use crate::error::{LocalizeError, Result};
use crate::grid::{Adjacency, DirectionSet};

/// A discrete state estimator.
pub trait Estimator {
    /// The estimator's most likely state.
    fn state(&self) -> usize;
}

/// A discrete Bayesian filter.
///
/// Advances its estimate by one time slice, through the transition model and then the observation.
pub trait DiscreteFilter {
    fn update(&mut self, pred: &TransitionModel, obs: &ObservationModel) -> Result<()>;
}

/// The world a localization agent observes.
///
/// Owns the ground truth: the true state, its trajectory and the sensor which reports on it.
pub trait Environment {
    fn num_states(&self) -> usize;

    /// Immutable adjacency relation of the state space.
    fn adjacency(&self) -> &Adjacency;

    /// Directions reported by the sensor.
    fn directions(&self) -> DirectionSet;

    /// A state never used as a start, allowed to have no neighbours.
    fn reserved_state(&self) -> Option<usize>;

    /// Restart the ground truth from a new random start state.
    fn reset(&mut self);

    /// Move the true state one random step and return a sensor reading in which each direction is flipped with
    /// probability `error_rate`.
    fn advance_and_sense(&mut self, error_rate: f64) -> Result<DirectionSet>;

    /// Manhattan distance from the true state to an estimated state.
    fn localization_error(&self, estimated: usize) -> Result<usize>;

    /// Fraction of time slices at which an estimated path agrees with the true trajectory.
    fn path_accuracy(&self, path: &[usize]) -> Result<f64>;
}

/// Integer power with `power(a, 0) == 1` for every `a`, including zero.
pub fn power(base: f64, exp: usize) -> f64 {
    if exp == 0 {
        return 1.;
    }
    num_traits::pow(base, exp)
}

/// Checks a probability is in [0,1].
/// NaN values are never a probability.
pub fn check_probability(p: f64) -> Result<f64> {
    if (0. ..=1.).contains(&p) {
        Ok(p)
    } else {
        Err(LocalizeError::InvalidErrorRate(p))
    }
}

/// Transition model.
///
/// A uniform random walk over the adjacency graph: `Tx[(i, j)] = 1/deg(i)` when j neighbours i.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionModel {
    /// State transition matrix, row stochastic
    pub Tx: DMatrix<f64>,
}

impl TransitionModel {
    /// Creates the transition model of a random walk over an adjacency relation.
    ///
    /// A state without neighbours has no outgoing probability and is rejected, unless it is the `reserved` state.
    /// The reserved state's row is left zero.
    pub fn from_adjacency(adjacency: &Adjacency, reserved: Option<usize>) -> Result<Self> {
        let n = adjacency.len();
        let mut Tx = DMatrix::zeros(n, n);
        for (i, neighbours) in adjacency.iter().enumerate() {
            let degree = neighbours.degree();
            if degree == 0 {
                if reserved == Some(i) {
                    continue;
                }
                return Err(LocalizeError::IsolatedState(i));
            }
            let p = 1. / degree as f64;
            for j in neighbours.states() {
                Tx[(i, j)] = p;
            }
        }

        debug!(num_states = n, "built transition model");
        Ok(TransitionModel { Tx })
    }

    pub fn num_states(&self) -> usize {
        self.Tx.nrows()
    }
}

/// Observation model.
///
/// Diagonal matrix of the likelihood of one sensor reading in each state.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationModel {
    pub Ox: DMatrix<f64>,
}

impl ObservationModel {
    pub fn from_likelihood(likelihood: &DVector<f64>) -> Self {
        ObservationModel {
            Ox: DMatrix::from_diagonal(likelihood),
        }
    }

    pub fn likelihood(&self, state: usize) -> f64 {
        self.Ox[(state, state)]
    }
}

/// Sensor model.
///
/// Each sensed direction is an independent binary sensor reporting whether the way is open.
/// A sensor is wrong with probability `error_rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorModel {
    pub error_rate: f64,
    /// Sensed directions
    pub directions: DirectionSet,
}

impl SensorModel {
    pub fn new(error_rate: f64, directions: DirectionSet) -> Result<Self> {
        check_probability(error_rate)?;
        Ok(SensorModel { error_rate, directions })
    }

    /// Likelihood of a reading which disagrees with the true open directions on `discrepancy` sensors.
    ///
    /// `(1 - e)^(k - d) * e^d` for k sensors. Maximal, `(1 - e)^k`, when the reading agrees exactly.
    pub fn likelihood(&self, discrepancy: usize) -> f64 {
        let k = self.directions.len();
        let e = self.error_rate;
        power(1. - e, k.saturating_sub(discrepancy)) * power(e, discrepancy)
    }

    /// Disagreement of a reading with the true open directions of a state.
    pub fn discrepancy(&self, evidence: &DirectionSet, open: &DirectionSet) -> usize {
        evidence
            .intersection(&self.directions)
            .discrepancy(&open.intersection(&self.directions))
    }

    /// The observation model of a reading over all states.
    pub fn observe(&self, evidence: &DirectionSet, adjacency: &Adjacency) -> ObservationModel {
        let likelihood = DVector::from_iterator(
            adjacency.len(),
            adjacency
                .iter()
                .map(|n| self.likelihood(self.discrepancy(evidence, &n.directions()))),
        );
        ObservationModel::from_likelihood(&likelihood)
    }
}
