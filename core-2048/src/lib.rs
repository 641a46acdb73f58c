//! Sliding-tile puzzle engine.
//!
//! Every move is reduced to a single canonical case, "slide toward the left
//! edge": the grid is rotated so the requested direction points left, each
//! row is compacted and merged, and the result is rotated back.
//!
//! ```
//! use core_2048::{moves, Direction, Grid};
//!
//! let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let result = moves::apply(&grid, Direction::Left);
//!
//! assert!(result.changed);
//! assert_eq!(result.grid.rows()[0], [4, 0, 0, 0]);
//! ```

pub mod direction;
pub mod error;
pub mod game;
pub mod grid;
pub mod merge;
pub mod moves;
pub mod spawn;
pub mod terminal;
pub mod transform;

pub use direction::Direction;
pub use error::{GridError, ParseDirectionError};
pub use game::{GameController, GameState};
pub use grid::{Grid, MAX_TILE, SIZE};
pub use moves::MoveResult;
