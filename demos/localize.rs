//! Localization of a randomly walking agent in the reference maze.
//!
//! A single run with a noisy sensor, printing the score of each observation.

use bayes_localize::{AgentConfig, GridConfig, GridWorld, LocalizationAgent};
use tracing_subscriber::EnvFilter;

fn main() -> bayes_localize::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // The reference maze, 4 by 16 with 21 obstacles
    let world = GridWorld::new(&GridConfig::default())?;
    // Each direction sensor is wrong one time in twenty
    let config = AgentConfig { error_rate: 0.05, steps: 40 };
    let mut agent = LocalizationAgent::new(world, &config)?;

    let metrics = agent.run()?;
    println!("{:>4} {:>9} {:>9}", "t", "loc err", "path acc");
    for (t, (e, a)) in metrics.localization_error.iter().zip(metrics.path_accuracy.iter()).enumerate() {
        println!("{:>4} {:>9} {:>9.3}", t + 1, e, a);
    }
    println!("true path    {:?}", agent.world().trajectory());
    println!("decoded path {:?}", agent.decode());
    Ok(())
}
