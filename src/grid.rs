//! Grid state space.
//!
//! The free cells of a grid, those which are not obstacles, are the states of the localization model.
//! States are numbered densely in row major order. Each state has a set of neighbours, one for each sensed direction
//! in which the adjacent cell is inside the grid and free.

use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GridConfig;
use crate::error::{LocalizeError, Result};

/// Compass direction of a move or a sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The canonical directions, in probing order.
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// (row, col) offset of a one cell move. North decreases the row.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }

    fn label(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

/// A set of directions.
///
/// Used both for the true open directions of a state and for a (possibly corrupted) sensor reading.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub fn empty() -> Self {
        DirectionSet(0)
    }

    pub fn all() -> Self {
        Direction::ALL.iter().copied().collect()
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    /// Add the direction when absent, remove it when present.
    pub fn toggle(&mut self, dir: Direction) {
        self.0 ^= dir.bit();
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn intersection(&self, other: &DirectionSet) -> DirectionSet {
        DirectionSet(self.0 & other.0)
    }

    pub fn symmetric_difference(&self, other: &DirectionSet) -> DirectionSet {
        DirectionSet(self.0 ^ other.0)
    }

    /// Number of directions on which two readings disagree, the size of their symmetric difference.
    pub fn discrepancy(&self, other: &DirectionSet) -> usize {
        self.symmetric_difference(other).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.iter().copied().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Direction::label)).finish()
    }
}

/// Grid cell coordinates, zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// L1 distance between cells.
    pub fn manhattan(&self, other: &Cell) -> usize {
        let dr = if self.row > other.row { self.row - other.row } else { other.row - self.row };
        let dc = if self.col > other.col { self.col - other.col } else { other.col - self.col };
        dr + dc
    }

    fn step(&self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        let row = (self.row as isize).checked_add(dr)?;
        let col = (self.col as isize).checked_add(dc)?;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }
}

/// Neighbours of one state, at most one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbours([Option<usize>; 4]);

impl Neighbours {
    pub fn get(&self, dir: Direction) -> Option<usize> {
        self.0[dir as usize]
    }

    /// (direction, neighbouring state) pairs in probing order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |d| self.get(*d).map(|s| (*d, s)))
    }

    pub fn states(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(_, s)| s)
    }

    /// The directions in which a neighbour exists.
    pub fn directions(&self) -> DirectionSet {
        self.iter().map(|(d, _)| d).collect()
    }

    pub fn degree(&self) -> usize {
        self.0.iter().filter(|n| n.is_some()).count()
    }
}

/// Adjacency relation of a state space. Indexed by state.
pub type Adjacency = [Neighbours];

/// The state space of a grid with obstacles.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Sensed directions
    directions: DirectionSet,
    /// State to cell
    cells: Vec<Cell>,
    /// Row major cell to state
    states: Vec<Option<usize>>,
    adjacency: Vec<Neighbours>,
}

impl Grid {
    /// Build the state space and adjacency from a grid layout.
    pub fn new(config: &GridConfig) -> Result<Grid> {
        let (rows, cols) = (config.rows, config.cols);
        if config.directions.is_empty() {
            return Err(LocalizeError::InvalidDirections("no directions"));
        }
        let directions: DirectionSet = config.directions.iter().copied().collect();
        if directions.len() != config.directions.len() {
            return Err(LocalizeError::InvalidDirections("duplicate direction"));
        }

        let mut obstacle = vec![false; rows * cols];
        for o in config.obstacles.iter() {
            if o.row >= rows || o.col >= cols {
                return Err(LocalizeError::ObstacleOutOfBounds { row: o.row, col: o.col, rows, cols });
            }
            obstacle[o.row * cols + o.col] = true;
        }

        // Dense numbering in row major order
        let mut cells = Vec::new();
        let mut states = vec![None; rows * cols];
        for row in 0..rows {
            for col in 0..cols {
                if !obstacle[row * cols + col] {
                    states[row * cols + col] = Some(cells.len());
                    cells.push(Cell::new(row, col));
                }
            }
        }
        if cells.is_empty() {
            return Err(LocalizeError::NoFreeCells { rows, cols });
        }

        let mut grid = Grid { rows, cols, directions, cells, states, adjacency: vec![] };
        let adjacency: Vec<Neighbours> = grid
            .cells
            .iter()
            .map(|cell| {
                let mut n = Neighbours::default();
                for dir in directions.iter() {
                    n.0[dir as usize] = cell.step(dir).and_then(|c| grid.state_of(&c));
                }
                n
            })
            .collect();
        grid.adjacency = adjacency;

        debug!(rows, cols, num_states = grid.num_states(), "built grid state space");
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_states(&self) -> usize {
        self.cells.len()
    }

    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn neighbours(&self, state: usize) -> Result<&Neighbours> {
        self.adjacency.get(state).ok_or(LocalizeError::StateOutOfRange { state, num_states: self.num_states() })
    }

    pub fn cell(&self, state: usize) -> Result<Cell> {
        self.cells.get(state).copied().ok_or(LocalizeError::StateOutOfRange { state, num_states: self.num_states() })
    }

    /// The state of a cell, none for obstacles and cells outside the grid.
    pub fn state_of(&self, cell: &Cell) -> Option<usize> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        self.states[cell.row * self.cols + cell.col]
    }

    /// States with no neighbours.
    pub fn isolated_states(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.iter().enumerate().filter(|(_, n)| n.degree() == 0).map(|(s, _)| s)
    }
}
