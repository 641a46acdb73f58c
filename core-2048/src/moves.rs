use crate::{
    direction::Direction,
    grid::{Grid, SIZE},
    merge, transform,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult<const N: usize = SIZE> {
    pub grid: Grid<N>,
    /// Whether `grid` differs from the grid the move was applied to.
    pub changed: bool,
}

fn do_move<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    let rows = *grid.rows();

    Grid::from_rows_unchecked(rows.map(merge::slide_row))
}

pub fn apply<const N: usize>(grid: &Grid<N>, direction: Direction) -> MoveResult<N> {
    let canonical = transform::to_canonical(grid, direction);

    let new_grid = transform::from_canonical(&do_move(&canonical), direction);

    MoveResult {
        grid: new_grid,
        changed: new_grid != *grid,
    }
}

pub fn can_move<const N: usize>(grid: &Grid<N>, direction: Direction) -> bool {
    apply(grid, direction).changed
}
