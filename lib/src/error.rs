//! All kinds of errors in this crate.

use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Width / height / denominator should be positive.
    NonPositiveError,
    /// A {0}x{1} grid has too many cells.
    TooLarge(usize, usize),
    /// Unable to set cell at ({0}, {1}).
    SetCellError(usize, usize),
    /// Grids of different sizes: {0:?} and {1:?}.
    SizeMismatch((usize, usize), (usize, usize)),
    /// Inconsistent grid dimensions: line {line} has length {found}, expected {expected}.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid character {found:#04x} at line {line}, column {column}.
    InvalidChar {
        line: usize,
        column: usize,
        found: u8,
    },
    /// I/O error: {0}
    Io(#[from] io::Error),
}
