use std::fmt;

use crate::error::GridError;

/// Side length of the standard board.
pub const SIZE: usize = 4;

/// Largest tile a grid may hold. Two of these never merge, so every value
/// produced by a move still fits in a `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// Board contents, stored row-major. Every cell is 0 (empty) or a power of
/// two between 2 and [`MAX_TILE`].
///
/// A `Grid` is a plain value: operations hand back a new grid, so "before"
/// and "after" can always be compared with `==`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize = SIZE> {
    cells: [[u32; N]; N],
}

pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

impl<const N: usize> Grid<N> {
    pub const EMPTY: Self = Self { cells: [[0; N]; N] };

    pub fn from_rows(rows: [[u32; N]; N]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            if let Some((col, &value)) = cells
                .iter()
                .enumerate()
                .find(|&(_, &value)| !is_valid_tile(value))
            {
                return Err(GridError::InvalidTile { row, col, value });
            }
        }

        Ok(Self { cells: rows })
    }

    /// Callers must already hold rows that satisfy the tile invariant, e.g.
    /// rows produced by rotating or sliding a valid grid.
    pub(crate) const fn from_rows_unchecked(rows: [[u32; N]; N]) -> Self {
        Self { cells: rows }
    }

    pub const fn rows(&self) -> &[[u32; N]; N] {
        &self.cells
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below `N`.
    pub const fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &value)| value == 0)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&value| value == 0).count()
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&value| u64::from(value)).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub(crate) fn with_tile(mut self, row: usize, col: usize, value: u32) -> Self {
        debug_assert!(is_valid_tile(value));

        self.cells[row][col] = value;
        self
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &value in row {
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{value:>6}")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
