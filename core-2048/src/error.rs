use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell held something other than 0 or a power of two >= 2.
    #[error("invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised direction {0:?}")]
pub struct ParseDirectionError(pub String);
