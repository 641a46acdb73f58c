//! Row algorithm for the canonical "slide left" move.

use crate::grid::MAX_TILE;

/// Whether two neighbouring cells combine. Tiles at [`MAX_TILE`] are final.
pub const fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Moves every non-zero tile to the left, keeping their order.
pub fn compact<const N: usize>(row: [u32; N]) -> [u32; N] {
    let mut compacted = [0; N];

    for (slot, value) in compacted
        .iter_mut()
        .zip(row.into_iter().filter(|&value| value != 0))
    {
        *slot = value;
    }

    compacted
}

/// Single left-to-right pass combining adjacent equal pairs. A cell that was
/// produced by a merge is skipped, so tiles never merge twice in one move.
pub fn merge<const N: usize>(mut row: [u32; N]) -> [u32; N] {
    let mut i = 0;

    while i + 1 < N {
        if can_merge(row[i], row[i + 1]) {
            row[i] *= 2;
            row[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }

    row
}

pub fn slide_row<const N: usize>(row: [u32; N]) -> [u32; N] {
    compact(merge(compact(row)))
}
