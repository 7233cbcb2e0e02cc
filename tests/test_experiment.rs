//! Test error rate sweeps and configuration.

use bayes_localize::experiment::sweep;
use bayes_localize::{AgentConfig, Direction, ExperimentConfig, GridConfig, LocalizeError};

mod fixtures;
use fixtures::plus_maze;

fn small_sweep(grid: GridConfig, error_rates: Vec<f64>) -> ExperimentConfig {
    ExperimentConfig {
        grid,
        error_rates,
        runs: 5,
        steps: 6,
        seed: Some(2020),
    }
}

#[test]
fn test_sweep_curves() {
    let config = small_sweep(GridConfig::default(), vec![0., 0.05, 0.2]);
    let curves = sweep(&config).unwrap();
    assert_eq!(curves.len(), 3);
    for (curve, rate) in curves.iter().zip(config.error_rates.iter()) {
        assert_eq!(curve.error_rate, *rate);
        assert_eq!(curve.localization_error.len(), 6);
        assert_eq!(curve.path_accuracy.len(), 6);
        assert!(curve.path_accuracy.iter().all(|a| (0. ..=1.).contains(a)));
        assert!(curve.localization_error.iter().all(|e| *e >= 0.));
    }
}

#[test]
fn test_sweep_perfect_sensor() {
    let curves = sweep(&small_sweep(plus_maze(), vec![0.])).unwrap();
    assert_eq!(curves[0].localization_error, vec![0.; 6]);
    for (t, a) in curves[0].path_accuracy.iter().enumerate() {
        let t = t + 1;
        assert!(*a >= t as f64 / (t + 1) as f64);
    }
}

#[test]
fn test_sweep_reproducible() {
    let config = small_sweep(GridConfig::open(4, 4), vec![0.1]);
    assert_eq!(sweep(&config).unwrap(), sweep(&config).unwrap());
}

#[test]
fn test_sweep_invalid() {
    let mut config = small_sweep(GridConfig::open(4, 4), vec![0.1]);
    config.runs = 0;
    assert_eq!(sweep(&config), Err(LocalizeError::ZeroRuns));

    let config = small_sweep(GridConfig::open(4, 4), vec![0.1, 2.]);
    assert_eq!(sweep(&config), Err(LocalizeError::InvalidErrorRate(2.)));
}

#[test]
fn test_default_configs() {
    let experiment = ExperimentConfig::default();
    assert_eq!(experiment.error_rates, vec![0., 0.02, 0.05, 0.1, 0.2]);
    assert_eq!((experiment.runs, experiment.steps), (300, 40));
    assert_eq!(experiment.grid, GridConfig::default());
    assert_eq!(experiment.grid.obstacles.len(), 21);
    assert_eq!(experiment.grid.reserved_state, Some(12));
    assert_eq!(experiment.grid.directions, Direction::ALL.to_vec());

    assert_eq!(AgentConfig::default(), AgentConfig { error_rate: 0., steps: 40 });
}

#[test]
fn test_config_json() {
    let json = r#"{
        "rows": 3,
        "cols": 3,
        "obstacles": [{"row": 0, "col": 0}, {"row": 0, "col": 2}, {"row": 2, "col": 0}, {"row": 2, "col": 2}],
        "directions": ["North", "South", "East", "West"],
        "reserved_state": null
    }"#;
    let grid: GridConfig = serde_json::from_str(json).unwrap();
    assert_eq!(grid, plus_maze());

    let agent: AgentConfig = serde_json::from_str(r#"{"error_rate": 0.05, "steps": 12}"#).unwrap();
    assert_eq!(agent, AgentConfig { error_rate: 0.05, steps: 12 });

    let experiment = ExperimentConfig::default();
    let text = serde_json::to_string(&experiment).unwrap();
    assert_eq!(serde_json::from_str::<ExperimentConfig>(&text).unwrap(), experiment);
}
