//! Metropolis-Hastings sampling.
//!
//! Draws a Markov chain from a one dimensional density known only up to a constant.
//! Candidates come from a Gaussian random walk, which is symmetric, so a candidate `x'` is accepted with probability
//! `min(1, p(x') / p(x))`.
//!
//! Independent of the localization models.

use rand::Rng;
use rand_core::RngCore;
use rand_distr::Normal;

use crate::error::{LocalizeError, Result};

/// A sampled chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// The initial value followed by each sample
    pub samples: Vec<f64>,
    /// Number of candidates accepted
    pub accepted: usize,
}

impl Chain {
    /// Fraction of candidates accepted.
    pub fn acceptance_rate(&self) -> f64 {
        let draws = self.samples.len().saturating_sub(1);
        if draws == 0 {
            return 0.;
        }
        self.accepted as f64 / draws as f64
    }

    /// Counts of samples in `bins` equal width bins over [lo, hi). Samples outside are not counted.
    pub fn histogram(&self, lo: f64, hi: f64, bins: usize) -> Vec<usize> {
        let mut counts = vec![0; bins];
        if bins == 0 {
            return counts;
        }
        let width = (hi - lo) / bins as f64;
        for x in self.samples.iter().filter(|x| **x >= lo && **x < hi) {
            let b = ((x - lo) / width) as usize;
            counts[b.min(bins - 1)] += 1;
        }
        counts
    }
}

/// Random walk Metropolis-Hastings sampler.
pub struct MetropolisHastings<F: Fn(f64) -> f64> {
    target: F,
    proposal: Normal<f64>,
    rng: Box<dyn RngCore>,
}

impl<F: Fn(f64) -> f64> MetropolisHastings<F> {
    /// A sampler of the unnormalised density `target` with proposal standard deviation `sigma`.
    pub fn new(target: F, sigma: f64, rng: Box<dyn RngCore>) -> Result<Self> {
        if !(sigma > 0.) || !sigma.is_finite() {
            return Err(LocalizeError::InvalidSampler("proposal sigma must be positive and finite"));
        }
        let proposal = Normal::new(0., sigma).map_err(|_| LocalizeError::InvalidSampler("bad proposal"))?;
        Ok(MetropolisHastings { target, proposal, rng })
    }

    /// Draw `n` samples from a chain starting at `init`.
    pub fn sample(&mut self, init: f64, n: usize) -> Result<Chain> {
        let mut p_prev = (self.target)(init);
        if !(p_prev > 0.) {
            return Err(LocalizeError::InvalidSampler("target density not positive at the initial value"));
        }

        let mut samples = Vec::with_capacity(n + 1);
        samples.push(init);
        let mut x_prev = init;
        let mut accepted = 0;
        for _ in 0..n {
            let step: f64 = self.rng.sample(self.proposal);
            let x_cand = x_prev + step;
            let p_cand = (self.target)(x_cand);
            let acceptance = if p_cand > 0. { (p_cand / p_prev).min(1.) } else { 0. };
            let u: f64 = self.rng.gen();
            if u < acceptance {
                x_prev = x_cand;
                p_prev = p_cand;
                accepted += 1;
            }
            samples.push(x_prev);
        }

        Ok(Chain { samples, accepted })
    }
}

/// A multimodal density on the real line, `exp(-x^4) * (2 + sin(5x) + sin(-2x^2))`.
pub fn multimodal_density(x: f64) -> f64 {
    (-x.powi(4)).exp() * (2. + (5. * x).sin() + (-2. * x * x).sin())
}
