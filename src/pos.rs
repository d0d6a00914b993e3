use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

/// Offsets of the Moore neighborhood, clockwise from north:
/// N, NE, E, SE, S, SW, W, NW
///
/// The grid's y axis grows upward, so north is `y + 1`.
pub const MOORE_OFFSETS: [Pos2; 8] = [
    Pos2::new(0, 1),
    Pos2::new(1, 1),
    Pos2::new(1, 0),
    Pos2::new(1, -1),
    Pos2::new(0, -1),
    Pos2::new(-1, -1),
    Pos2::new(-1, 0),
    Pos2::new(-1, 1),
];

/// A single cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Adds `rhs`, returning `None` if either axis overflows
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }

    /// The coordinates surrounding this one, in [`MOORE_OFFSETS`] order
    ///
    /// No wrapping is applied, so neighbors of an edge cell may fall outside
    /// of any bounds the caller cares about. Neighbors past the `i32` range
    /// do not exist and are skipped.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Pos2> {
        MOORE_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare y first, then x
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl std::fmt::Display for Pos2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Pos2::new(3, 1), Pos2::new(-2, 1), Pos2::new(5, -4)];
        cells.sort();

        assert_eq!(
            cells,
            vec![Pos2::new(5, -4), Pos2::new(-2, 1), Pos2::new(3, 1)]
        );
    }

    #[test]
    fn neighbors_are_the_eight_surrounding_cells() {
        let center = Pos2::new(10, -3);
        let neighbors: HashSet<Pos2> = center.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        assert!(
            neighbors
                .iter()
                .all(|n| (n.x - center.x).abs() <= 1 && (n.y - center.y).abs() <= 1)
        );
    }

    #[test]
    fn neighbors_start_north_and_go_clockwise() {
        let mut neighbors = Pos2::zero().neighbors();

        assert_eq!(neighbors.next(), Some(Pos2::new(0, 1)));
        assert_eq!(neighbors.next(), Some(Pos2::new(1, 1)));
        assert_eq!(neighbors.last(), Some(Pos2::new(-1, 1)));
    }

    #[test]
    fn neighbors_past_the_integer_range_are_skipped() {
        assert_eq!(Pos2::new(i32::MAX, 0).neighbors().count(), 5);
        assert_eq!(Pos2::new(i32::MIN, i32::MIN).neighbors().count(), 3);
        assert!(
            Pos2::new(i32::MAX, i32::MIN)
                .neighbors()
                .all(|n| n.x >= i32::MAX - 1 && n.y <= i32::MIN + 1)
        );
    }
}
