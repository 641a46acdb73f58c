use log::trace;
use rand::Rng;

use crate::grid::Grid;

/// Places a 2 (probability 0.9) or a 4 in a uniformly chosen empty cell.
///
/// A single draw picks both the cell and the value. A full grid is returned
/// as is, without touching `rng`.
pub fn spawn_tile<const N: usize>(rng: &mut impl Rng, grid: &Grid<N>) -> Grid<N> {
    let slot_count = grid.empty_count();

    if slot_count > 0 {
        let rand = rng.gen_range(0..(slot_count * 10));

        let slot_idx = rand / 10;
        let value = if rand % 10 == 0 { 4 } else { 2 };

        match grid.empty_cells().nth(slot_idx) {
            Some((row, col)) => {
                trace!("spawned {value} at ({row}, {col})");

                grid.with_tile(row, col, value)
            }
            None => *grid,
        }
    } else {
        *grid
    }
}
