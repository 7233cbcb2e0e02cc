//! Error types for localization.
//!
//! Every failure is fatal at the boundary where it is detected: model construction or the offending step.

use thiserror::Error;

/// Errors that can occur while building or running a localization model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocalizeError {
    /// Sensor error rate outside [0,1]
    #[error("error rate {0} is not a probability in [0,1]")]
    InvalidErrorRate(f64),

    /// A run must take at least one step
    #[error("step budget must be positive")]
    ZeroSteps,

    /// A sweep must average at least one run
    #[error("run count must be positive")]
    ZeroRuns,

    /// Every cell of the grid is an obstacle
    #[error("grid {rows}x{cols} has no free cells")]
    NoFreeCells { rows: usize, cols: usize },

    /// Obstacle lies outside the grid
    #[error("obstacle ({row}, {col}) outside grid {rows}x{cols}")]
    ObstacleOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The sensed direction set is unusable
    #[error("invalid direction set: {0}")]
    InvalidDirections(&'static str),

    /// Reserved start state is not a state of the grid
    #[error("reserved state {state} out of range for {num_states} states")]
    ReservedStateOutOfRange { state: usize, num_states: usize },

    /// Excluding the reserved state leaves nowhere to start
    #[error("no start state available once the reserved state is excluded")]
    NoStartState,

    /// A free cell with no free neighbours cannot take part in a random walk
    #[error("state {0} has no neighbours")]
    IsolatedState(usize),

    /// State index does not belong to the state space
    #[error("state {state} out of range for {num_states} states")]
    StateOutOfRange { state: usize, num_states: usize },

    /// Decoded path and ground truth must grow in lockstep
    #[error("path length {actual} does not match trajectory length {expected}")]
    PathLengthMismatch { expected: usize, actual: usize },

    /// Normalisation found no probability mass left
    #[error("{0} has zero probability mass")]
    Degenerate(&'static str),

    /// Sampler configuration error
    #[error("invalid sampler: {0}")]
    InvalidSampler(&'static str),
}

/// Result type alias for localization operations.
pub type Result<T> = std::result::Result<T, LocalizeError>;
