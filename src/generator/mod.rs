//! Randomized wall placement that keeps the open cells of a board connected
//!
//! A wall is a chain of cells, each touching the previous one (diagonals included), that
//! gets turned from open to built in one go. Walls are grown by randomized depth first
//! search with backtracking: every cell added to the chain is checked with the
//! [ConnectivityOracle] and rejected if it would split the open region. A wall is either
//! placed at exactly the requested length or not placed at all.
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::connectivity::{neighbors, ConnectivityOracle};
use crate::types::{GridStore, Position, BUILT, OPEN};

/// one cell of a wall under construction, along with the neighbors still left to try from it
#[derive(Debug)]
struct Frame {
    cell: Position,
    untried: Vec<Position>,
}

/// Places walls on a board it owns.
#[derive(Debug, Clone)]
pub struct GameBoardGenerator<G: GridStore> {
    board: G,
    oracle: ConnectivityOracle,
}

impl<G: GridStore> GameBoardGenerator<G> {
    /// makes a generator for the given board
    pub fn new(board: G) -> Self {
        GameBoardGenerator {
            board,
            oracle: ConnectivityOracle::new(),
        }
    }

    /// the board walls are placed on
    pub fn board(&self) -> &G {
        &self.board
    }

    /// mutable access to the board, for edits made outside of the generator
    pub fn board_mut(&mut self) -> &mut G {
        &mut self.board
    }

    /// gives the board back
    pub fn into_board(self) -> G {
        self.board
    }

    /// the oracle used to validate placements
    pub fn oracle(&self) -> &ConnectivityOracle {
        &self.oracle
    }

    /// see [ConnectivityOracle::is_graph_connected]
    pub fn is_graph_connected(&mut self) -> bool {
        self.oracle.is_graph_connected(&self.board)
    }

    /// see [ConnectivityOracle::is_graph_root_open]
    pub fn is_graph_root_open(&self) -> bool {
        self.oracle.is_graph_root_open(&self.board)
    }

    /// builds a wall of `length` cells starting from a random open cell. Returns false, and
    /// leaves the board untouched, if no such wall could be placed from that cell or if the
    /// board has no open cells.
    pub fn generate_wall<R: Rng + ?Sized>(&mut self, length: usize, rng: &mut R) -> bool {
        match self.choose_random_square(rng) {
            Some(start) => {
                debug!("generating wall of length {} from {}", length, start);
                self.build(start, length, rng)
            }
            None => {
                debug!("no open cells left for a wall of length {}", length);
                false
            }
        }
    }

    /// calls [GameBoardGenerator::generate_wall] `count` times, returning how many walls
    /// were placed
    pub fn generate_walls<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        length: usize,
        rng: &mut R,
    ) -> usize {
        (0..count)
            .filter(|_| self.generate_wall(length, rng))
            .count()
    }

    /// builds a wall of exactly `depth` cells starting at `parent`, each cell touching the
    /// one before it. The open cells stay connected after every cell added.
    ///
    /// Returns false if no such wall exists, in which case the board is left exactly as it
    /// was. Also returns false without touching the board when `depth` is zero, `parent` is
    /// not open, or `depth` is larger than the number of open cells.
    pub fn build<R: Rng + ?Sized>(&mut self, parent: Position, depth: usize, rng: &mut R) -> bool {
        if depth == 0 || !self.board.is_open(parent) {
            return false;
        }
        if depth > self.count_open_squares() {
            debug!("wall of length {} cannot fit on the open cells", depth);
            return false;
        }
        if !self.try_place(parent) {
            return false;
        }
        if depth == 1 {
            return true;
        }

        let mut wall = Vec::with_capacity(depth);
        wall.push(Frame {
            cell: parent,
            untried: self.get_neighbors_random_order(parent, rng),
        });
        while let Some(frame) = wall.last_mut() {
            match frame.untried.pop() {
                Some(next) => {
                    if !self.try_place(next) {
                        continue;
                    }
                    if wall.len() + 1 == depth {
                        trace!("wall of length {} completed at {}", depth, next);
                        return true;
                    }
                    let untried = self.get_neighbors_random_order(next, rng);
                    wall.push(Frame {
                        cell: next,
                        untried,
                    });
                }
                None => {
                    let cell = frame.cell;
                    trace!("backtracking from {}", cell);
                    self.board.set(cell, OPEN);
                    wall.pop();
                }
            }
        }
        debug!("no wall of length {} starting at {}", depth, parent);
        false
    }

    /// the open neighbors of `square` in a random order
    pub fn get_neighbors_random_order<R: Rng + ?Sized>(
        &self,
        square: Position,
        rng: &mut R,
    ) -> Vec<Position> {
        let mut neighbors = neighbors(&self.board, square);
        neighbors.shuffle(rng);
        neighbors
    }

    /// a uniformly random open cell, `None` if every cell is built
    pub fn choose_random_square<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let open = self.get_open_squares();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.gen_range(0..open.len())])
    }

    /// number of open cells
    pub fn count_open_squares(&self) -> usize {
        self.board
            .positions()
            .filter(|p| self.board.is_open(*p))
            .count()
    }

    /// every open cell, x outer and y inner
    pub fn get_open_squares(&self) -> Vec<Position> {
        self.board
            .positions()
            .filter(|p| self.board.is_open(*p))
            .collect()
    }

    // builds `cell` if it is open and doing so keeps the open cells connected
    fn try_place(&mut self, cell: Position) -> bool {
        if !self.board.is_open(cell) {
            return false;
        }
        self.board.set(cell, BUILT);
        if !self.oracle.is_graph_connected(&self.board) {
            trace!("building {} would disconnect the board", cell);
            self.board.set(cell, OPEN);
            return false;
        }
        true
    }
}
