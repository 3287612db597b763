//! various types that are shared between the board, the connectivity oracle and the generator
use serde::{Deserialize, Serialize};
use std::fmt;

/// The raw value held by a single grid cell
pub type CellValue = i32;

/// value of a cell that is open (passable, available for building)
pub const OPEN: CellValue = 0;

/// value written for a built cell. Any positive value counts as built
pub const BUILT: CellValue = 1;

/// value of a transient "visited" mark. Nothing in this crate writes it to a store,
/// the oracle keeps its marks on the side
pub const MARKED: CellValue = -1;

/// A coordinate on the board, `0 <= x < width` and `0 <= y < height` when in bounds
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// makes a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Classification of a raw [CellValue]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// the cell can be walked through or built on
    Open,
    /// the cell is a permanent obstacle
    Built,
    /// the cell carries a traversal mark
    Marked,
}

impl CellState {
    /// classify a raw cell value
    pub fn from_value(value: CellValue) -> Self {
        match value {
            OPEN => CellState::Open,
            v if v > 0 => CellState::Built,
            _ => CellState::Marked,
        }
    }
}

/// A rectangular store of cell values addressed by [Position].
///
/// `get` and `set` treat out of bounds access as a programming error and panic.
/// Use `try_get` when a position may fall off the board.
pub trait GridStore {
    /// number of columns
    fn width(&self) -> u32;

    /// number of rows
    fn height(&self) -> u32;

    /// read the value at a position, panics if the position is out of bounds
    fn get(&self, pos: Position) -> CellValue;

    /// overwrite the value at a position, panics if the position is out of bounds
    fn set(&mut self, pos: Position, value: CellValue);

    /// is the position on the board
    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width() && (pos.y as u32) < self.height()
    }

    /// read the value at a position, `None` when it is off the board
    fn try_get(&self, pos: Position) -> Option<CellValue> {
        if self.in_bounds(pos) {
            Some(self.get(pos))
        } else {
            None
        }
    }

    /// classify the cell at a position, panics if the position is out of bounds
    fn cell_state(&self, pos: Position) -> CellState {
        CellState::from_value(self.get(pos))
    }

    /// true if the position is on the board and open
    fn is_open(&self, pos: Position) -> bool {
        self.try_get(pos) == Some(OPEN)
    }

    /// every position on the board, x outer and y inner
    fn positions(&self) -> Box<dyn Iterator<Item = Position>> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        Box::new((0..width).flat_map(move |x| (0..height).map(move |y| Position { x, y })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state_from_value() {
        assert_eq!(CellState::from_value(OPEN), CellState::Open);
        assert_eq!(CellState::from_value(BUILT), CellState::Built);
        assert_eq!(CellState::from_value(7), CellState::Built);
        assert_eq!(CellState::from_value(MARKED), CellState::Marked);
    }

    #[test]
    fn test_position_display_and_order() {
        assert_eq!(Position::new(-1, 3).to_string(), "(-1, 3)");
        assert_eq!(Position::default(), Position::new(0, 0));
        assert!(Position::new(0, 5) < Position::new(1, 0));
    }
}
