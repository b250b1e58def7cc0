//! The simulation driver.

use crate::{
    error::Error,
    grid::{write_next_generation, Grid},
};
use log::trace;

/// Runs the simulation on two grids of the same size.
///
/// One grid holds the current generation; the other is the scratch space
/// the next generation is written into. After each step they trade places,
/// so no matrix is allocated after construction.
#[derive(Clone, Debug)]
pub struct Life {
    grids: [Grid; 2],

    /// Index of the current grid in `grids`.
    current: usize,

    /// Number of steps since the first generation.
    generation: u64,
}

impl Life {
    /// Starts a simulation from `grid`.
    pub fn new(grid: Grid) -> Self {
        let scratch = Grid {
            width: grid.width,
            height: grid.height,
            cells: vec![false; grid.cells.len()].into_boxed_slice(),
        };
        Life {
            grids: [grid, scratch],
            current: 0,
            generation: 0,
        }
    }

    /// The current generation.
    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    /// Sets a cell of the current generation.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), Error> {
        self.grids[self.current].set(x, y, alive)
    }

    /// Number of steps since the first generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances one generation and returns the new current grid.
    pub fn advance(&mut self) -> &Grid {
        let [first, second] = &mut self.grids;
        let (source, destination) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        write_next_generation(source, destination);
        self.current ^= 1;
        self.generation += 1;
        trace!(
            "generation {}: {} living cells",
            self.generation,
            self.current().cell_count()
        );
        self.current()
    }

    /// Ends the simulation, keeping the current generation.
    pub fn into_grid(self) -> Grid {
        let [first, second] = self.grids;
        if self.current == 0 {
            first
        } else {
            second
        }
    }
}
