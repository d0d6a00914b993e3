use crate::Pos2;
use std::collections::BTreeSet;

/// Liveness of every cell on the grid
///
/// Only alive cells are stored; any coordinate that was never set (or was
/// set dead) reads as dead. The set is ordered row-major, same as [`Pos2`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    alive: BTreeSet<Pos2>,
}

impl GridState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_alive<I: IntoIterator<Item = Pos2>>(alive: I) -> Self {
        Self {
            alive: alive.into_iter().collect(),
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos2) -> bool {
        self.alive.contains(&pos)
    }

    /// Sets the liveness of a cell, returning whether its state changed
    ///
    /// Bounds are not checked here; callers filter coordinates first.
    pub fn set(&mut self, pos: Pos2, alive: bool) -> bool {
        if alive {
            self.alive.insert(pos)
        } else {
            self.alive.remove(&pos)
        }
    }

    /// Number of alive cells in the Moore neighborhood of `pos`, in `0..=8`
    pub fn count_live_neighbors(&self, pos: Pos2) -> u8 {
        pos.neighbors().filter(|&n| self.get(n)).count() as u8
    }

    pub fn clear(&mut self) {
        self.alive.clear();
    }

    /// Alive cells in row-major order
    #[inline]
    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.alive.iter().copied()
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2::new(x, y)
    }

    #[test]
    fn unset_cells_are_dead() {
        let grid = GridState::new();

        assert!(!grid.get(pos(0, 0)));
        assert!(!grid.get(pos(i32::MAX, i32::MIN)));
    }

    #[test]
    fn set_reports_changes() {
        let mut grid = GridState::new();

        assert!(grid.set(pos(1, 2), true));
        assert!(!grid.set(pos(1, 2), true));
        assert!(grid.get(pos(1, 2)));
        assert!(grid.set(pos(1, 2), false));
        assert!(!grid.set(pos(1, 2), false));
        assert!(grid.is_empty());
    }

    #[test]
    fn setting_one_cell_leaves_others_dead() {
        let mut grid = GridState::new();
        grid.set(pos(0, 0), true);

        assert!(grid.get(pos(0, 0)));
        assert!(!grid.get(pos(1, 0)));
        assert!(!grid.get(pos(0, -1)));
    }

    #[test]
    fn counts_full_neighborhood() {
        let mut grid = GridState::new();
        for n in pos(0, 0).neighbors() {
            grid.set(n, true);
        }

        assert_eq!(grid.count_live_neighbors(pos(0, 0)), 8);
        // the center itself is never counted
        grid.set(pos(0, 0), true);
        assert_eq!(grid.count_live_neighbors(pos(0, 0)), 8);
        // corner cell sees the center plus two edge cells
        assert_eq!(grid.count_live_neighbors(pos(1, 1)), 3);
    }

    #[test]
    fn neighbors_do_not_wrap() {
        let grid = GridState::from_alive([pos(-12, 0), pos(12, 0)]);

        assert_eq!(grid.count_live_neighbors(pos(12, 0)), 0);
        assert_eq!(grid.count_live_neighbors(pos(13, 0)), 1);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = GridState::from_alive([pos(0, 0), pos(3, 4), pos(-7, 2)]);
        grid.clear();

        assert_eq!(grid.alive_count(), 0);
        assert!(!grid.get(pos(3, 4)));
    }

    #[test]
    fn alive_is_sorted() {
        let grid = GridState::from_alive([pos(5, 1), pos(-1, 1), pos(9, -2)]);
        let alive: Vec<Pos2> = grid.alive().collect();

        assert_eq!(alive, vec![pos(9, -2), pos(-1, 1), pos(5, 1)]);
    }

    #[test]
    fn counting_at_the_integer_edges_does_not_wrap() {
        let grid = GridState::from_alive([
            pos(i32::MIN, 0),
            pos(i32::MAX - 1, 1),
            pos(i32::MAX, i32::MAX),
        ]);

        assert_eq!(grid.count_live_neighbors(pos(i32::MAX, 0)), 1);
        assert_eq!(grid.count_live_neighbors(pos(i32::MIN, 1)), 1);
        assert_eq!(grid.count_live_neighbors(pos(i32::MIN, i32::MIN)), 0);
        assert_eq!(grid.count_live_neighbors(pos(i32::MAX - 1, i32::MAX)), 1);
    }
}
