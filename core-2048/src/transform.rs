use crate::{direction::Direction, grid::Grid};

/// `rotated[c][N - 1 - r] = grid[r][c]`
pub fn rotate_clockwise<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    let cells = grid.rows();
    let mut rotated = [[0; N]; N];

    for (r, row) in cells.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            rotated[c][N - 1 - r] = value;
        }
    }

    Grid::from_rows_unchecked(rotated)
}

/// `rotated[N - 1 - c][r] = grid[r][c]`
pub fn rotate_counter_clockwise<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    let cells = grid.rows();
    let mut rotated = [[0; N]; N];

    for (r, row) in cells.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            rotated[N - 1 - c][r] = value;
        }
    }

    Grid::from_rows_unchecked(rotated)
}

pub fn rotate_half<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    rotate_clockwise(&rotate_clockwise(grid))
}

/// Rotates `grid` so that a move in `direction` becomes a move to the left.
pub fn to_canonical<const N: usize>(grid: &Grid<N>, direction: Direction) -> Grid<N> {
    match direction {
        Direction::Left => *grid,
        Direction::Right => rotate_half(grid),
        Direction::Up => rotate_counter_clockwise(grid),
        Direction::Down => rotate_clockwise(grid),
    }
}

/// Inverse of [`to_canonical`] for the same `direction`.
pub fn from_canonical<const N: usize>(grid: &Grid<N>, direction: Direction) -> Grid<N> {
    match direction {
        Direction::Left => *grid,
        Direction::Right => rotate_half(grid),
        Direction::Up => rotate_clockwise(grid),
        Direction::Down => rotate_counter_clockwise(grid),
    }
}
