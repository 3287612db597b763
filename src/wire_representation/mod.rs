//! types to move boards in and out of json
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::GameBoard;
use crate::types::CellValue;

/// Serializable snapshot of a board. `cells[x][y]` holds the value at `(x, y)`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// number of columns
    pub width: u32,
    /// number of rows
    pub height: u32,
    /// cell values, one inner vec per column
    pub cells: Vec<Vec<CellValue>>,
}

impl BoardSnapshot {
    /// rebuilds a board from this snapshot, checking that the declared size matches the cells
    pub fn into_board(self) -> Result<GameBoard, Box<dyn Error>> {
        if self.cells.len() != self.width as usize {
            return Err(format!(
                "snapshot declares width {} but has {} columns",
                self.width,
                self.cells.len()
            )
            .into());
        }
        if let Some(column) = self.cells.iter().find(|c| c.len() != self.height as usize) {
            return Err(format!(
                "snapshot declares height {} but a column has {} cells",
                self.height,
                column.len()
            )
            .into());
        }
        GameBoard::from_columns(self.cells)
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} board", self.width, self.height)?;
        for i in 0..self.height as usize {
            let y = self.height as usize - i - 1;
            for column in self.cells.iter() {
                write!(f, "{:>3}", column.get(y).copied().unwrap_or_default())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridStore, Position, BUILT};

    #[test]
    fn test_snapshot_fixture_into_board() {
        let fixture = include_str!("../../fixtures/split_column.json");
        let snapshot: BoardSnapshot =
            serde_json::from_str(fixture).expect("the json literal is valid");
        let board = snapshot.into_board().expect("the fixture is rectangular");
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        for y in 0..3 {
            assert_eq!(board.get(Position::new(1, y)), BUILT);
        }
    }

    #[test]
    fn test_snapshot_rejects_mismatched_size() {
        let snapshot = BoardSnapshot {
            width: 2,
            height: 2,
            cells: vec![vec![0, 0]],
        };
        assert!(snapshot.into_board().is_err());

        let snapshot = BoardSnapshot {
            width: 1,
            height: 2,
            cells: vec![vec![0, 0, 0]],
        };
        assert!(snapshot.into_board().is_err());
    }

    #[test]
    fn test_board_to_snapshot() {
        let mut board = GameBoard::new(2, 3);
        board.set(Position::new(1, 2), BUILT);
        let snapshot = board.to_snapshot();
        assert_eq!(snapshot.cells, vec![vec![0, 0, 0], vec![0, 0, 1]]);
        eprintln!("{}", snapshot);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_board().unwrap(), board);
    }
}
