//! Reachability checks over the open cells of a grid
//!
//! Two open cells are connected when they touch, diagonals included. The
//! [ConnectivityOracle] answers whether every open cell of a grid belongs to a single
//! connected region by sweeping breadth first from a cached root cell.
use std::collections::VecDeque;

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::types::{GridStore, Position};

/// returns the open cells of the 3x3 block centered on `pos`, in x-major order.
///
/// Cells off the board are skipped. The center is a candidate like any other cell, so it is
/// returned when it is open.
pub fn neighbors<G: GridStore + ?Sized>(grid: &G, pos: Position) -> Vec<Position> {
    (pos.x - 1..=pos.x + 1)
        .cartesian_product(pos.y - 1..=pos.y + 1)
        .map(|(x, y)| Position { x, y })
        .filter(|p| grid.is_open(*p))
        .collect()
}

/// Decides whether all open cells of a grid are mutually reachable.
///
/// The oracle never writes to the grid. Visited cells are tracked in a set owned by the
/// oracle which is reused between sweeps.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityOracle {
    root: Position,
    // dimensions of the grid the root was last checked against
    root_dimensions: Option<(u32, u32)>,
    marks: FxHashSet<Position>,
}

impl ConnectivityOracle {
    /// makes an oracle rooted at `(0, 0)`
    pub fn new() -> Self {
        Self::default()
    }

    /// the cell the next sweep starts from
    pub fn root(&self) -> Position {
        self.root
    }

    /// forget the cached root, the next check starts looking from `(0, 0)` again
    pub fn invalidate_root(&mut self) {
        self.root = Position::default();
        self.root_dimensions = None;
    }

    /// true iff every open cell can reach every other open cell. A grid with no open cells
    /// is connected.
    pub fn is_graph_connected<G: GridStore + ?Sized>(&mut self, grid: &G) -> bool {
        self.pick_root(grid);
        if !self.is_graph_root_open(grid) {
            return true;
        }
        self.mark_connected(grid);
        let connected = self.verify_marks(grid);
        self.un_mark();
        connected
    }

    /// true iff the cached root is on the grid and open
    pub fn is_graph_root_open<G: GridStore + ?Sized>(&self, grid: &G) -> bool {
        grid.is_open(self.root)
    }

    /// moves the root to the first open cell (x outer, y inner) if the current one is
    /// no longer open. If nothing is open the root stays where it is.
    pub fn pick_root<G: GridStore + ?Sized>(&mut self, grid: &G) {
        self.sync_dimensions(grid);
        if self.is_graph_root_open(grid) {
            return;
        }
        if let Some(root) = grid.positions().find(|p| grid.is_open(*p)) {
            trace!("connectivity root moved from {} to {}", self.root, root);
            self.root = root;
        }
    }

    /// marks every open cell reachable from the root
    pub fn mark_connected<G: GridStore + ?Sized>(&mut self, grid: &G) {
        self.sync_dimensions(grid);
        // marks left behind by a sweep that was never un-marked
        self.marks.clear();

        let mut queue = VecDeque::new();
        self.marks.insert(self.root);
        queue.push_back(self.root);
        while let Some(current) = queue.pop_front() {
            for next in neighbors(grid, current) {
                if self.marks.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        trace!("sweep from {} marked {} cells", self.root, self.marks.len());
    }

    /// false as soon as an open cell is found that the last sweep did not reach
    pub fn verify_marks<G: GridStore + ?Sized>(&self, grid: &G) -> bool {
        grid.positions().all(|p| !grid.is_open(p) || self.marks.contains(&p))
    }

    /// drops all marks
    pub fn un_mark(&mut self) {
        self.marks.clear();
    }

    /// true if the last sweep reached this cell and it has not been un-marked since
    pub fn is_marked(&self, pos: Position) -> bool {
        self.marks.contains(&pos)
    }

    fn sync_dimensions<G: GridStore + ?Sized>(&mut self, grid: &G) {
        let dimensions = (grid.width(), grid.height());
        if self.root_dimensions != Some(dimensions) {
            if self.root_dimensions.is_some() {
                debug!(
                    "grid resized to {}x{}, invalidating root {}",
                    dimensions.0, dimensions.1, self.root
                );
                self.invalidate_root();
            }
            self.root_dimensions = Some(dimensions);
        }
    }
}
