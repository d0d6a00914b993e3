//! Next-generation evaluation over a bounded grid.
//!
//! A step never writes while it reads: [`next_generation`] evaluates every
//! cell against the current [`GridState`] and returns a buffer of
//! [`Change`]s, which [`apply`] then commits in one batch.

mod index;

use crate::{Bounds, GridState, Pos2};
use rayon::prelude::*;

/// A single entry of a grid diff, used both to commit a generation and to
/// tell a display what to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// The cell became alive
    Paint(Pos2),
    /// The cell became dead
    Clear(Pos2),
    /// Every cell was cleared; the background should be redrawn over these bounds
    Background(Bounds),
}
impl Change {
    #[inline]
    fn from_state(pos: Pos2, alive: bool) -> Self {
        if alive {
            Self::Paint(pos)
        } else {
            Self::Clear(pos)
        }
    }
}

/// Whether a cell is alive in the next generation
///
/// `neighbors` above 8 is impossible for a Moore neighborhood and is treated as 8.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    let neighbors = usize::from(neighbors).min(index::MAX_NEIGHBORS);
    index::get_rule_table()[usize::from(alive)][neighbors]
}

fn evaluate(grid: &GridState, pos: Pos2) -> Option<Change> {
    let alive = grid.get(pos);
    let next = next_state(alive, grid.count_live_neighbors(pos));
    (next != alive).then(|| Change::from_state(pos, next))
}

/// Computes the changes that turn `grid` into its next generation
///
/// Only cells inside `bounds` are evaluated; anything outside is left alone.
/// The result is row-major ordered.
pub fn next_generation(grid: &GridState, bounds: Bounds) -> Vec<Change> {
    bounds.iter().filter_map(|pos| evaluate(grid, pos)).collect()
}

/// Same as [`next_generation`], with rows evaluated on the rayon thread pool
pub fn next_generation_parallel(grid: &GridState, bounds: Bounds) -> Vec<Change> {
    let columns = bounds.columns();

    // each row reads the same snapshot, so rows can be evaluated independently
    // and concatenated in order afterwards
    let rows: Vec<Vec<Change>> = bounds
        .rows()
        .into_par_iter()
        .map(|y| {
            columns
                .clone()
                .filter_map(|x| evaluate(grid, Pos2::new(x, y)))
                .collect()
        })
        .collect();

    rows.concat()
}

/// Commits a buffer of changes to the grid
pub fn apply(grid: &mut GridState, changes: &[Change]) {
    for &change in changes {
        match change {
            Change::Paint(pos) => {
                grid.set(pos, true);
            }
            Change::Clear(pos) => {
                grid.set(pos, false);
            }
            Change::Background(_) => grid.clear(),
        }
    }
}
