//! Conway's Game of Life on a bounded grid.
//!
//! Cells outside the grid are dead; there is no wraparound.
//! The simulation keeps two grids and swaps them after each generation.

mod config;
mod error;
mod grid;
mod life;
mod save;

pub use config::{Config, Fill};
pub use error::Error;
pub use grid::{next_generation, Grid, ALIVE_GLYPH, DEAD_GLYPH};
pub use life::Life;
