//! Bayes+Localize, Hidden Markov Model localization on a grid.
//!
//! An agent walks at random over the free cells of a grid with obstacles. It cannot see where it is; all it has is a
//! sensor which reports, for each compass direction, whether the way is open. Each of those reports is wrong with
//! a fixed probability, the sensor error rate.
//!
//! The free cells are the states of a Hidden Markov Model. The transition model is a uniform random walk over the
//! grid graph, the observation model is the likelihood of a sensor reading given the open directions of a state.
//! Two estimators run on the model:
//!  - the forward algorithm filters a belief, the probability of each state given the readings so far;
//!  - the Viterbi algorithm decodes the single most likely sequence of states.
//!
//! Estimates are scored against the simulated ground truth: the Manhattan distance from the most likely state to
//! the true state, and the fraction of the decoded path which agrees with the true trajectory.
//!
//! The models are structs in [`models`], the operations common to the estimators are traits.
//! An independent Metropolis-Hastings sampler is provided in [`estimators::metropolis`].
//!
//! # Licensing
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction,
//! including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
//! and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NON INFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
//! WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod agent;
pub mod config;
pub mod error;
pub mod estimators;
pub mod experiment;
pub mod grid;
pub mod models;
pub mod world;

pub use agent::{LocalizationAgent, Metrics};
pub use config::{AgentConfig, ExperimentConfig, GridConfig};
pub use error::{LocalizeError, Result};
pub use grid::{Cell, Direction, DirectionSet, Grid};
pub use world::GridWorld;
