use std::{fmt, str::FromStr};

use crate::error::ParseDirectionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [Self::Up, Self::Right, Self::Down, Self::Left].into_iter()
    }

    /// Maps a touch gesture's displacement (screen coordinates, y grows
    /// downwards) to a direction. The dominant axis wins and ties go to the
    /// horizontal axis. A gesture that did not move is not a swipe.
    pub fn from_swipe(dx: f64, dy: f64) -> Option<Self> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let direction = if dx.abs() >= dy.abs() {
            if dx > 0.0 {
                Self::Right
            } else {
                Self::Left
            }
        } else if dy > 0.0 {
            Self::Down
        } else {
            Self::Up
        };

        Some(direction)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };

        f.write_str(name)
    }
}

/// Accepts plain names and browser key names (`ArrowUp` etc.), ignoring case.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Ok(Self::Up),
            "right" | "arrowright" => Ok(Self::Right),
            "down" | "arrowdown" => Ok(Self::Down),
            "left" | "arrowleft" => Ok(Self::Left),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}
