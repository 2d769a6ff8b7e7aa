//! # Game Map
//!
//! Fixed-size 2D grid of cells, addressed by `(row, col)`.
//!
//! ## Layout
//!
//! Cells are stored row-major in one contiguous `Vec`:
//!
//! ```text
//! index = row * width + col
//! ```
//!
//! Row 0 is the **bottom** of the world; higher rows are higher up. The map
//! itself knows nothing about strata, that lives in the generator.
//!
//! The grid is never resized after creation.

use crate::cell::Cell;
use crate::error::{MapError, MapResult};

/// Fixed `height x width` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMap {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl GameMap {
    /// Creates a map filled with empty cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the grid
    /// cannot be allocated.
    pub fn new(height: usize, width: usize) -> MapResult<Self> {
        let mut cells = allocate(height, width)?;
        cells.resize(height * width, Cell::default());
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Builds a map by calling `fill(row, col)` for every coordinate, row 0 first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the grid
    /// cannot be allocated.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut fill: impl FnMut(usize, usize) -> Cell,
    ) -> MapResult<Self> {
        let mut cells = allocate(height, width)?;
        for row in 0..height {
            for col in 0..width {
                cells.push(fill(row, col));
            }
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a map has at least one cell.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `(row, col)` is inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> MapResult<usize> {
        if self.contains(row, col) {
            Ok(row * self.width + col)
        } else {
            Err(MapError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the grid.
    pub fn get_at(&self, row: usize, col: usize) -> MapResult<&Cell> {
        let index = self.index(row, col)?;
        Ok(&self.cells[index])
    }

    /// Gets the cell at `(row, col)` mutably.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the grid.
    pub fn get_at_mut(&mut self, row: usize, col: usize) -> MapResult<&mut Cell> {
        let index = self.index(row, col)?;
        Ok(&mut self.cells[index])
    }

    /// Replaces the cell at `(row, col)`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the grid; the map is left untouched.
    pub fn set_at(&mut self, row: usize, col: usize, cell: Cell) -> MapResult<Cell> {
        let index = self.index(row, col)?;
        Ok(std::mem::replace(&mut self.cells[index], cell))
    }

    /// Returns one full row.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `row >= height`.
    pub fn row(&self, row: usize) -> MapResult<&[Cell]> {
        let start = self.index(row, 0)?;
        Ok(&self.cells[start..start + self.width])
    }

    /// Iterates over rows from bottom (row 0) to top.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator {
        self.cells.chunks_exact(self.width)
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / width, i % width), cell))
    }
}

/// Reserves exactly `height * width` cells without ever aborting on size.
fn allocate(height: usize, width: usize) -> MapResult<Vec<Cell>> {
    let invalid = MapError::InvalidDimensions { height, width };
    if height == 0 || width == 0 {
        return Err(invalid);
    }
    let len = height.checked_mul(width).ok_or_else(|| invalid.clone())?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| invalid)?;
    Ok(cells)
}
