//! Saves and loads the grid.
//!
//! The format is plain text: `1` for a living cell, `0` for a dead cell,
//! one line per row. Rows are separated by `\n`, without a trailing newline.

use crate::{error::Error, grid::Grid};
use log::debug;
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

impl Grid {
    /// Writes the grid to `writer`.
    ///
    /// Nothing is buffered here; if writing fails part-way,
    /// the rows already written stay written.
    pub fn write_state<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let mut line = Vec::with_capacity(self.width);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            line.clear();
            line.extend(row.iter().map(|&alive| if alive { b'1' } else { b'0' }));
            writer.write_all(&line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads a grid from `reader`.
    ///
    /// The first line fixes the width, counted in bytes.
    /// Empty input gives a `0 x 0` grid.
    pub fn read_state<R: BufRead>(reader: R) -> Result<Grid, Error> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (i, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(line.as_slice());
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(Error::InconsistentWidth {
                    line: i + 1,
                    expected,
                    found: line.len(),
                });
            }
            for (j, &byte) in line.iter().enumerate() {
                match byte {
                    b'1' => cells.push(true),
                    b'0' => cells.push(false),
                    found => {
                        return Err(Error::InvalidChar {
                            line: i + 1,
                            column: j + 1,
                            found,
                        })
                    }
                }
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        // A file of empty lines has rows but no columns.
        let height = if width == 0 { 0 } else { height };
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Saves the grid to a file, creating or truncating it.
    pub fn save_state<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        self.write_state(&mut file)?;
        debug!(
            "saved {}x{} grid to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    /// Reads a grid saved in a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let grid = Grid::read_state(BufReader::new(file))?;
        debug!(
            "loaded {}x{} grid from {}",
            grid.width,
            grid.height,
            path.display()
        );
        Ok(grid)
    }

    /// Replaces this grid with the one saved in a file.
    ///
    /// On failure the grid is left unchanged.
    pub fn load_state<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        *self = Grid::load(path)?;
        Ok(())
    }
}

/// Parses the saved format.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::read_state(s.as_bytes())
    }
}
