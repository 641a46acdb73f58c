use crate::{grid::Grid, merge::can_merge};

/// Whether no move can change `grid`: it has no empty cell and no two
/// orthogonally adjacent cells can merge.
///
/// Only holds while tiles merge exclusively with equal neighbours.
pub fn is_terminal<const N: usize>(grid: &Grid<N>) -> bool {
    let cells = grid.rows();

    for row in 0..N {
        for col in 0..N {
            let value = cells[row][col];

            if value == 0 {
                return false;
            }

            if col + 1 < N && can_merge(value, cells[row][col + 1]) {
                return false;
            }

            if row + 1 < N && can_merge(value, cells[row + 1][col]) {
                return false;
            }
        }
    }

    true
}
