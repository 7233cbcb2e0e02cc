//! Average localization performance against sensor error rate.
//!
//! Prints one column for each error rate, one row for each observation.

use bayes_localize::experiment::{self, SweepCurve};
use bayes_localize::ExperimentConfig;
use tracing_subscriber::EnvFilter;

fn print_table(title: &str, curves: &[SweepCurve], steps: usize, metric: impl Fn(&SweepCurve) -> &[f64]) {
    println!("{}", title);
    print!("{:>4}", "t");
    for c in curves.iter() {
        print!(" {:>8}", c.error_rate);
    }
    println!();
    for t in 0..steps {
        print!("{:>4}", t + 1);
        for c in curves.iter() {
            print!(" {:>8.3}", metric(c)[t]);
        }
        println!();
    }
    println!();
}

fn main() -> bayes_localize::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ExperimentConfig { seed: Some(2020), ..ExperimentConfig::default() };
    let curves = experiment::sweep(&config)?;

    print_table("Path accuracy", &curves, config.steps, |c| c.path_accuracy.as_slice());
    print_table("Localization error", &curves, config.steps, |c| c.localization_error.as_slice());
    Ok(())
}
