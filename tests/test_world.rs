//! Test the ground truth simulation: random walk, sensor readings and scoring.

use bayes_localize::config::REFERENCE_RESERVED_STATE;
use bayes_localize::models::Environment;
use bayes_localize::{Cell, DirectionSet, GridConfig, GridWorld, LocalizeError};

mod fixtures;
use fixtures::seeded_world;

#[test]
fn test_reset() {
    let mut world = seeded_world(&GridConfig::open(4, 4), 1);
    assert_eq!(world.trajectory(), &[world.state()]);
    assert_eq!(world.time_step(), 0);

    world.advance_and_sense(0.).unwrap();
    world.advance_and_sense(0.).unwrap();
    assert_eq!(world.trajectory().len(), 3);
    assert_eq!(world.time_step(), 2);

    world.reset();
    assert_eq!(world.trajectory(), &[world.state()]);
    assert_eq!(world.time_step(), 0);
}

#[test]
fn test_never_starts_reserved() {
    let mut world = seeded_world(&GridConfig::default(), 2);
    let mut starts = std::collections::HashSet::new();
    for _ in 0..2000 {
        world.reset();
        assert_ne!(world.state(), REFERENCE_RESERVED_STATE);
        starts.insert(world.state());
    }
    // Every other state is a possible start
    assert_eq!(starts.len(), world.num_states() - 1);
}

#[test]
fn test_random_walk() {
    let mut world = seeded_world(&GridConfig::default(), 3);
    for _ in 0..200 {
        world.advance_and_sense(0.05).unwrap();
    }
    let trajectory = world.trajectory();
    assert_eq!(trajectory.len(), 201);
    for w in trajectory.windows(2) {
        let moved = world.grid().neighbours(w[0]).unwrap().states().any(|n| n == w[1]);
        assert!(moved, "{} is not a neighbour of {}", w[1], w[0]);
        // The boxed in state can not be entered
        assert_ne!(w[1], REFERENCE_RESERVED_STATE);
    }
}

#[test]
fn test_perfect_and_inverted_sensor() {
    let mut world = seeded_world(&GridConfig::default(), 4);
    for _ in 0..50 {
        let reading = world.advance_and_sense(0.).unwrap();
        let open = world.grid().neighbours(world.state()).unwrap().directions();
        assert_eq!(reading, open);

        let reading = world.advance_and_sense(1.).unwrap();
        let open = world.grid().neighbours(world.state()).unwrap().directions();
        assert_eq!(reading, open.symmetric_difference(&DirectionSet::all()));
    }
}

#[test]
fn test_noisy_sensor_flip_rate() {
    let mut world = seeded_world(&GridConfig::open(4, 4), 5);
    let (readings, error_rate) = (4000, 0.2);
    let mut flips = 0;
    for _ in 0..readings {
        let reading = world.advance_and_sense(error_rate).unwrap();
        let open = world.grid().neighbours(world.state()).unwrap().directions();
        flips += reading.discrepancy(&open);
    }
    let rate = flips as f64 / (4 * readings) as f64;
    assert!((rate - error_rate).abs() < 0.02, "flip rate {}", rate);
}

#[test]
fn test_invalid_error_rate() {
    let mut world = seeded_world(&GridConfig::open(4, 4), 6);
    assert_eq!(world.advance_and_sense(1.5), Err(LocalizeError::InvalidErrorRate(1.5)));
    assert!(world.advance_and_sense(f64::NAN).is_err());
    // The world does not move
    assert_eq!(world.trajectory().len(), 1);
}

#[test]
fn test_localization_error() {
    let mut world = seeded_world(&GridConfig::open(4, 4), 7);
    world.advance_and_sense(0.).unwrap();
    let truth = world.state();
    assert_eq!(world.localization_error(truth).unwrap(), 0);

    let cell = world.grid().cell(truth).unwrap();
    let far = Cell::new(3 - cell.row, 3 - cell.col);
    let far_state = world.grid().state_of(&far).unwrap();
    assert_eq!(world.localization_error(far_state).unwrap(), cell.manhattan(&far));

    assert_eq!(
        world.localization_error(16),
        Err(LocalizeError::StateOutOfRange { state: 16, num_states: 16 })
    );
}

#[test]
fn test_path_accuracy() {
    let mut world = seeded_world(&GridConfig::open(4, 4), 8);
    for _ in 0..3 {
        world.advance_and_sense(0.).unwrap();
    }
    let truth = world.trajectory().to_vec();
    assert_eq!(world.path_accuracy(&truth).unwrap(), 1.);

    // Wrong at one of four time slices
    let mut path = truth.clone();
    path[1] = if truth[1] == 0 { 15 } else { 0 };
    assert_eq!(world.path_accuracy(&path).unwrap(), 0.75);

    assert_eq!(
        world.path_accuracy(&truth[..3]),
        Err(LocalizeError::PathLengthMismatch { expected: 4, actual: 3 })
    );
}

#[test]
fn test_invalid_worlds() {
    let reserved_out_of_range = GridConfig::open(2, 2).with_reserved_state(Some(4));
    assert_eq!(
        GridWorld::new(&reserved_out_of_range).err(),
        Some(LocalizeError::ReservedStateOutOfRange { state: 4, num_states: 4 })
    );

    assert_eq!(GridWorld::new(&GridConfig::open(1, 1)).err(), Some(LocalizeError::IsolatedState(0)));
    assert_eq!(
        GridWorld::new(&GridConfig::open(1, 1).with_reserved_state(Some(0))).err(),
        Some(LocalizeError::NoStartState)
    );

    // Without its reservation the boxed in cell of the reference maze is an error
    assert_eq!(
        GridWorld::new(&GridConfig::default().with_reserved_state(None)).err(),
        Some(LocalizeError::IsolatedState(REFERENCE_RESERVED_STATE))
    );
}
