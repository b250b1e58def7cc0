//! The grid.

use crate::error::Error;
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// Offsets of the eight neighbors of a cell.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How a living cell is displayed.
pub const ALIVE_GLYPH: &str = "◼️";
/// How a dead cell is displayed.
pub const DEAD_GLYPH: &str = "◻️";

/// A bounded rectangular grid of cells.
///
/// Cells outside the grid are always considered dead.
/// There is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    pub(crate) width: usize,

    /// Number of rows.
    pub(crate) height: usize,

    /// The states of all cells, row by row.
    ///
    /// The cell at `(x, y)` is at index `y * width + x`,
    /// so the matrix can never be jagged.
    pub(crate) cells: Box<[bool]>,
}

impl Grid {
    /// Creates a grid where all cells are dead.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::NonPositiveError);
        }
        let len = width
            .checked_mul(height)
            .ok_or(Error::TooLarge(width, height))?;
        Ok(Grid {
            width,
            height,
            cells: vec![false; len].into_boxed_slice(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), Error> {
        let i = self.index(x, y).ok_or(Error::SetCellError(x, y))?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks` panics on a zero chunk size; a 0 x 0 grid has no rows anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Sets every dead cell alive with probability `1 / denominator`.
    ///
    /// Each cell draws a number uniformly from `0..denominator`
    /// and becomes alive when it hits `1`, or `0` when the denominator is `1`.
    ///
    /// Living cells are never killed, so seeding twice accumulates
    /// rather than re-randomizing the grid.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, denominator: u32) -> Result<(), Error> {
        if denominator == 0 {
            return Err(Error::NonPositiveError);
        }
        let threshold = if denominator == 1 { 0 } else { 1 };
        for cell in self.cells.iter_mut() {
            if rng.gen_range(0..denominator) == threshold {
                *cell = true;
            }
        }
        Ok(())
    }

    /// Sets every dead cell alive with probability `percent / 100`.
    ///
    /// Percentages above `100` are treated as `100`.
    /// Like [`seed`](Self::seed), living cells are left alone.
    pub fn rand_init<R: Rng + ?Sized>(&mut self, rng: &mut R, percent: u32) {
        let percent = percent.min(100);
        for cell in self.cells.iter_mut() {
            if rng.gen_range(0..100) < percent {
                *cell = true;
            }
        }
    }

    /// Number of living cells among the eight neighbors of `(x, y)`.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for &(dx, dy) in NEIGHBORHOOD.iter() {
            let nx = x.checked_add_signed(dx);
            let ny = y.checked_add_signed(dy);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                if self.get(nx, ny) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }

    /// The state of `(x, y)` in the next generation, under the rule B3/S23.
    pub fn next_cell_state(&self, x: usize, y: usize) -> bool {
        let n = self.neighbor_count(x, y);
        match self.get(x, y) {
            Some(true) => n > 1 && n < 4,
            _ => n == 3,
        }
    }

    /// Renders the grid with [`ALIVE_GLYPH`] and [`DEAD_GLYPH`].
    ///
    /// Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Computes the next generation of `source` into `destination`.
///
/// `source` is not modified. Fails without writing anything
/// if the two grids have different sizes.
pub fn next_generation(source: &Grid, destination: &mut Grid) -> Result<(), Error> {
    if source.size() != destination.size() {
        return Err(Error::SizeMismatch(source.size(), destination.size()));
    }
    write_next_generation(source, destination);
    Ok(())
}

/// Same as [`next_generation`], for callers that already know
/// both grids have the same size.
pub(crate) fn write_next_generation(source: &Grid, destination: &mut Grid) {
    debug_assert_eq!(source.size(), destination.size());
    for y in 0..source.height {
        for x in 0..source.width {
            destination.cells[y * source.width + x] = source.next_cell_state(x, y);
        }
    }
}

/// One line per row, each ending with a newline.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
