//! A collection of discrete Bayesian state estimators.

pub mod forward;
pub mod viterbi;
pub mod metropolis;

use na::DVector;
use nalgebra as na;

use crate::error::{LocalizeError, Result};

/// Index of the largest element, the first one when several are equal.
pub fn argmax(v: &DVector<f64>) -> usize {
    let mut best = 0;
    for (i, x) in v.iter().enumerate() {
        if *x > v[best] {
            best = i;
        }
    }
    best
}

/**
 * Scales a vector of probabilities to sum to one.
 * A sum which is zero, or not a number, leaves nothing to normalise.
 */
pub fn normalise(mut v: DVector<f64>, what: &'static str) -> Result<DVector<f64>> {
    let sum = v.sum();
    if !(sum > 0.) || !sum.is_finite() {
        return Err(LocalizeError::Degenerate(what));
    }
    v /= sum;
    Ok(v)
}
