//! World configuration.

use crate::{error::Error, grid::Grid, life::Life};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to populate the first generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fill {
    /// All cells dead.
    Empty,
    /// Each cell is alive with probability `1/n`.
    OneIn(u32),
    /// Each cell is alive with probability `p/100`.
    Percent(u32),
}

/// World configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width of the grid.
    pub width: usize,

    /// Height of the grid.
    pub height: usize,

    /// How to populate the first generation.
    pub fill: Fill,

    /// Seed of the random number generator.
    ///
    /// `None` means seeding from the system entropy,
    /// so every run is different.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 20,
            height: 20,
            fill: Fill::OneIn(10),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets how to populate the first generation.
    pub fn set_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_rng_seed<T: Into<Option<u64>>>(mut self, rng_seed: T) -> Self {
        self.rng_seed = rng_seed.into();
        self
    }

    /// Creates the first generation.
    pub fn grid(&self) -> Result<Grid, Error> {
        let mut grid = Grid::new(self.width, self.height)?;
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match self.fill {
            Fill::Empty => (),
            Fill::OneIn(n) => grid.seed(&mut rng, n)?,
            Fill::Percent(p) => grid.rand_init(&mut rng, p),
        }
        debug!(
            "created {}x{} grid with {} living cells ({:?})",
            self.width,
            self.height,
            grid.cell_count(),
            self.fill
        );
        Ok(grid)
    }

    /// Creates a new simulation from the configuration.
    pub fn life(&self) -> Result<Life, Error> {
        self.grid().map(Life::new)
    }
}
