//! Error rate sweeps.
//!
//! Repeats localization runs for each of several sensor error rates and averages the per time slice metrics.
//! One world is shared by every run and reset between them.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::RngCore;
use tracing::info;

use crate::agent::LocalizationAgent;
use crate::config::{AgentConfig, ExperimentConfig};
use crate::error::{LocalizeError, Result};
use crate::models::Environment;
use crate::world::GridWorld;

/// Metrics averaged over the runs at one error rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCurve {
    pub error_rate: f64,
    /// Mean localization error of each time slice
    pub localization_error: Vec<f64>,
    /// Mean path accuracy of each time slice
    pub path_accuracy: Vec<f64>,
}

/// Run a sweep, one curve for each error rate in order.
pub fn sweep(config: &ExperimentConfig) -> Result<Vec<SweepCurve>> {
    if config.runs == 0 {
        return Err(LocalizeError::ZeroRuns);
    }
    let rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };
    let mut world = GridWorld::with_rng(&config.grid, rng)?;

    let mut curves = Vec::with_capacity(config.error_rates.len());
    for &error_rate in config.error_rates.iter() {
        let agent_config = AgentConfig { error_rate, steps: config.steps };
        let mut agent = LocalizationAgent::new(world, &agent_config)?;
        let mut localization_error = vec![0.; config.steps];
        let mut path_accuracy = vec![0.; config.steps];

        for _ in 0..config.runs {
            agent.world_mut().reset();
            agent.reset();
            let metrics = agent.run()?;
            for (sum, e) in localization_error.iter_mut().zip(metrics.localization_error.iter()) {
                *sum += *e as f64;
            }
            for (sum, a) in path_accuracy.iter_mut().zip(metrics.path_accuracy.iter()) {
                *sum += *a;
            }
        }

        let runs = config.runs as f64;
        localization_error.iter_mut().for_each(|e| *e /= runs);
        path_accuracy.iter_mut().for_each(|a| *a /= runs);
        info!(
            error_rate,
            runs = config.runs,
            final_localization_error = ?localization_error.last(),
            final_path_accuracy = ?path_accuracy.last(),
            "swept error rate"
        );

        curves.push(SweepCurve { error_rate, localization_error, path_accuracy });
        world = agent.into_world();
    }

    Ok(curves)
}
