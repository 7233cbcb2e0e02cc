//! Forward algorithm state estimation.
//!
//! A discrete Bayesian estimator that represents its knowledge of the system as a belief, the probability of each
//! state given the observations so far.
//!
//! Each time slice the belief is propagated through the transition model, weighted by the likelihood of the
//! observation and normalised: `f = O.T'.f / sum`.

use na::DVector;
use nalgebra as na;

use crate::error::Result;
use crate::estimators::{argmax, normalise};
use crate::models::{DiscreteFilter, Estimator, ObservationModel, TransitionModel};

/// Belief State.
///
/// Probability distribution over all states.
#[derive(Debug, PartialEq, Clone)]
pub struct BeliefState {
    /// Probability of each state, sums to one
    pub f: DVector<f64>,
}

impl BeliefState {
    /// A belief with every state equally likely.
    pub fn new_uniform(num_states: usize) -> BeliefState {
        BeliefState {
            f: DVector::from_element(num_states, 1. / num_states as f64),
        }
    }

    pub fn reset(&mut self) {
        let n = self.f.nrows();
        self.f.fill(1. / n as f64);
    }
}

impl Estimator for BeliefState {
    fn state(&self) -> usize {
        argmax(&self.f)
    }
}

impl DiscreteFilter for BeliefState {
    fn update(&mut self, pred: &TransitionModel, obs: &ObservationModel) -> Result<()> {
        // Probability mass flows from each source along its row of T, so the prediction is T'.f
        let predicted = pred.Tx.tr_mul(&self.f);
        let f = &obs.Ox * predicted;
        self.f = normalise(f, "belief")?;

        Ok(())
    }
}
