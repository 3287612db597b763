//! A dense board that stores one [CellValue] per cell
//!
//! Cells are stored row-major (`y * width + x`). The board is the default [GridStore] the
//! generator runs on, but anything implementing [GridStore] will do.
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::types::{CellState, CellValue, GridStore, Position, BUILT, OPEN};
use crate::wire_representation::BoardSnapshot;

/// Width and height of a board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// number of columns
    pub width: u32,
    /// number of rows
    pub height: u32,
}

impl Dimensions {
    /// the 10 by 20 board the generator is usually run on
    pub const STANDARD: Dimensions = Dimensions {
        width: 10,
        height: 20,
    };

    /// number of cells covered
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A board of open and built cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameBoard {
    cells: Vec<CellValue>,
    dimensions: Dimensions,
}

impl GameBoard {
    /// makes a board `width` columns wide and `height` rows tall with every cell open
    pub fn new(width: u32, height: u32) -> Self {
        let dimensions = Dimensions { width, height };
        GameBoard {
            cells: vec![OPEN; dimensions.area()],
            dimensions,
        }
    }

    /// an open board of [Dimensions::STANDARD] size
    pub fn standard() -> Self {
        GameBoard::new(Dimensions::STANDARD.width, Dimensions::STANDARD.height)
    }

    /// the dimensions of this board
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// reopens every cell
    pub fn reset(&mut self) {
        self.cells = vec![OPEN; self.dimensions.area()];
    }

    /// replaces the dimensions of this board, every cell of the new board is open
    pub fn resize(&mut self, width: u32, height: u32) {
        self.dimensions = Dimensions { width, height };
        self.reset();
    }

    /// captures this board in its wire representation
    pub fn to_snapshot(&self) -> BoardSnapshot {
        let cells = (0..self.width() as i32)
            .map(|x| {
                (0..self.height() as i32)
                    .map(|y| self.get(Position { x, y }))
                    .collect()
            })
            .collect();
        BoardSnapshot {
            width: self.width(),
            height: self.height(),
            cells,
        }
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {} is outside the {}x{} board",
            pos,
            self.width(),
            self.height()
        );
        pos.y as usize * self.width() as usize + pos.x as usize
    }

    /// builds a board from columns of cell values, addressed as `columns[x][y]`
    pub fn from_columns(columns: Vec<Vec<CellValue>>) -> Result<Self, Box<dyn Error>> {
        let width = columns.len();
        let height = columns.first().map(|c| c.len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err("a board needs at least one cell".into());
        }
        if let Some(x) = columns.iter().position(|c| c.len() != height) {
            return Err(format!(
                "column {} has {} cells, expected {}",
                x,
                columns[x].len(),
                height
            )
            .into());
        }

        let mut board = GameBoard::new(width as u32, height as u32);
        for (x, column) in columns.into_iter().enumerate() {
            for (y, value) in column.into_iter().enumerate() {
                board.set(Position::new(x as i32, y as i32), value);
            }
        }
        Ok(board)
    }
}

impl GridStore for GameBoard {
    fn width(&self) -> u32 {
        self.dimensions.width
    }

    fn height(&self) -> u32 {
        self.dimensions.height
    }

    fn get(&self, pos: Position) -> CellValue {
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Position, value: CellValue) {
        let idx = self.index(pos);
        self.cells[idx] = value;
    }
}

/// prints the board with y pointing up, `.` for open cells and `#` for built ones
impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height() {
            let y = (self.height() - i - 1) as i32;
            for x in 0..self.width() as i32 {
                match self.cell_state(Position { x, y }) {
                    CellState::Open => write!(f, ".")?,
                    CellState::Built => write!(f, "#")?,
                    CellState::Marked => write!(f, "*")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// parses the format written by `Display`, the last line is `y = 0`
impl FromStr for GameBoard {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);

        let mut columns = vec![Vec::with_capacity(height); width];
        for (i, row) in rows.iter().rev().enumerate() {
            if row.chars().count() != width {
                return Err(format!("row {} is not {} cells wide", height - i - 1, width).into());
            }
            for (x, c) in row.chars().enumerate() {
                let value = match c {
                    '.' => OPEN,
                    '#' => BUILT,
                    other => return Err(format!("unexpected cell '{}'", other).into()),
                };
                columns[x].push(value);
            }
        }
        GameBoard::from_columns(columns)
    }
}
