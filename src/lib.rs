#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Procedural wall generation for 2-D game boards.
//!
//! A board is a grid of open and built cells. The [generator::GameBoardGenerator] turns open
//! cells into walls, chains of built cells of an exact length, while guaranteeing that every
//! open cell can still reach every other open cell through its eight neighbors. The guarantee
//! is enforced by the [connectivity::ConnectivityOracle], which can also be used on its own
//! to validate a board after edits.
//!
//! ```
//! use gameboard_generator::board::GameBoard;
//! use gameboard_generator::generator::GameBoardGenerator;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let board = GameBoard::standard();
//! let mut gen = GameBoardGenerator::new(board);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let placed = gen.generate_walls(5, 6, &mut rng);
//! assert_eq!(gen.count_open_squares(), 200 - placed * 6);
//! assert!(gen.is_graph_connected());
//! ```

use std::error::Error;

use board::GameBoard;
use wire_representation::BoardSnapshot;

pub mod board;
pub mod connectivity;
pub mod generator;
pub mod types;
pub mod wire_representation;

/// Loads a board from a json fixture in the [BoardSnapshot] format
pub fn board_fixture(board_fixture: &str) -> Result<GameBoard, Box<dyn Error>> {
    let snapshot: BoardSnapshot = serde_json::from_str(board_fixture)?;
    snapshot.into_board()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridStore;

    #[test]
    fn test_board_fixture() {
        let board = board_fixture(include_str!("../fixtures/ring.json")).unwrap();
        assert_eq!(board.width(), 5);
        assert!(board_fixture("{\"width\": 1}").is_err());
    }
}
