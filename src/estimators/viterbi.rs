//! Viterbi path estimation.
//!
//! The most likely sequence of states given the observations so far is decoded from a trellis.
//! Each slice of the trellis holds, for every state, the probability of the best path ending in that state and the
//! state that path came from in the previous slice.
//!
//! The trellis is append only. A slice is computed in full from the previous, normalised and then appended; it is
//! never modified afterwards. Parents are plain indices into the previous slice.

use na::DVector;
use nalgebra as na;

use crate::error::Result;
use crate::estimators::{argmax, normalise};
use crate::models::{DiscreteFilter, Estimator, ObservationModel, TransitionModel};

/// One time slice of a trellis.
#[derive(Debug, PartialEq, Clone)]
pub struct TrellisSlice {
    /// Normalised probability of the best path ending in each state
    pub prob: DVector<f64>,
    /// Previous state on that path, none in the first slice
    pub parent: Vec<Option<usize>>,
}

/// Viterbi trellis, indexed by time slice.
#[derive(Debug, PartialEq, Clone)]
pub struct Trellis {
    slices: Vec<TrellisSlice>,
}

impl Trellis {
    /// A trellis of a single slice with every state equally likely and no parents.
    pub fn new_uniform(num_states: usize) -> Trellis {
        Trellis {
            slices: vec![TrellisSlice {
                prob: DVector::from_element(num_states, 1. / num_states as f64),
                parent: vec![None; num_states],
            }],
        }
    }

    pub fn reset(&mut self) {
        self.slices.truncate(1);
    }

    pub fn slices(&self) -> &[TrellisSlice] {
        &self.slices
    }

    /// Number of slices, one more than the time slices observed.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn last(&self) -> &TrellisSlice {
        &self.slices[self.slices.len() - 1]
    }

    /// The most likely path, in time order, one state for each slice.
    ///
    /// Starts at the most likely state of the last slice and follows the parents back to the first.
    pub fn decode(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.slices.len());
        let mut state = Some(argmax(&self.last().prob));
        for slice in self.slices.iter().rev() {
            let s = match state {
                Some(s) => s,
                None => break,
            };
            path.push(s);
            state = slice.parent[s];
        }
        path.reverse();
        path
    }
}

impl Estimator for Trellis {
    fn state(&self) -> usize {
        argmax(&self.last().prob)
    }
}

impl DiscreteFilter for Trellis {
    fn update(&mut self, pred: &TransitionModel, obs: &ObservationModel) -> Result<()> {
        let m = &self.last().prob;
        let n = m.nrows();
        let mut prob = DVector::zeros(n);
        let mut parent = vec![None; n];

        for j in 0..n {
            // Best predecessor, the first when products are equal
            let mut best_p = pred.Tx[(0, j)] * m[0];
            let mut best_i = 0;
            for i in 1..n {
                let p = pred.Tx[(i, j)] * m[i];
                if p > best_p {
                    best_p = p;
                    best_i = i;
                }
            }
            prob[j] = best_p * obs.likelihood(j);
            parent[j] = Some(best_i);
        }

        let prob = normalise(prob, "viterbi slice")?;
        self.slices.push(TrellisSlice { prob, parent });

        Ok(())
    }
}
