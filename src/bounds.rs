use crate::Pos2;
use std::ops::Range;

/// Configured grid dimensions, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}
impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Grows (or shrinks, for a negative `delta`) both axes, never going below one cell
    pub fn grow(self, delta: i32) -> Self {
        Self {
            width: self.width.saturating_add_signed(delta).max(1),
            height: self.height.saturating_add_signed(delta).max(1),
        }
    }
}
impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The rectangle of cells that are simulated and paintable
///
/// Bounds are centered on the origin: `min` is `(-floor(w/2), -floor(h/2))`
/// and `max` is `min + (w, h)`. Both axes are half-open, so `max` itself is
/// never inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    min: Pos2,
    max: Pos2,
}
impl Bounds {
    pub fn from_size(size: Size) -> Self {
        let w = i32::try_from(size.width).unwrap_or(i32::MAX);
        let h = i32::try_from(size.height).unwrap_or(i32::MAX);
        let min = Pos2::new(-(w / 2), -(h / 2));
        let max = Pos2::new(min.x.saturating_add(w), min.y.saturating_add(h));
        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> Pos2 {
        self.min
    }
    #[inline]
    pub fn max(&self) -> Pos2 {
        self.max
    }

    #[inline]
    pub fn size(&self) -> Size {
        let diff = self.max - self.min;
        Size::new(diff.x as u32, diff.y as u32)
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.size().area()
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        self.columns().contains(&pos.x) && self.rows().contains(&pos.y)
    }

    /// The y-values covered by these bounds
    #[inline]
    pub fn rows(&self) -> Range<i32> {
        self.min.y..self.max.y
    }
    /// The x-values covered by these bounds
    #[inline]
    pub fn columns(&self) -> Range<i32> {
        self.min.x..self.max.x
    }

    /// Every cell inside the bounds, row by row (y outer, x inner), both ascending
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + use<> {
        let columns = self.columns();
        self.rows()
            .flat_map(move |y| columns.clone().map(move |x| Pos2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_size_is_centered() {
        let bounds = Bounds::from_size(Size::new(25, 25));

        assert_eq!(bounds.min(), Pos2::new(-12, -12));
        assert_eq!(bounds.max(), Pos2::new(13, 13));
        assert_eq!(bounds.size(), Size::new(25, 25));
    }

    #[test]
    fn even_size_leans_positive() {
        let bounds = Bounds::from_size(Size::new(4, 6));

        assert_eq!(bounds.min(), Pos2::new(-2, -3));
        assert_eq!(bounds.max(), Pos2::new(2, 3));
    }

    #[test]
    fn max_is_excluded() {
        let bounds = Bounds::from_size(Size::new(3, 3));

        assert!(bounds.contains(Pos2::new(-1, -1)));
        assert!(bounds.contains(Pos2::new(1, 1)));
        assert!(!bounds.contains(Pos2::new(2, 0)));
        assert!(!bounds.contains(Pos2::new(0, 2)));
        assert!(!bounds.contains(Pos2::new(-2, 0)));
    }

    #[test]
    fn iter_is_row_major_and_covers_area() {
        let bounds = Bounds::from_size(Size::new(3, 2));
        let cells: Vec<Pos2> = bounds.iter().collect();

        assert_eq!(cells.len(), bounds.area());
        assert_eq!(cells.first(), Some(&Pos2::new(-1, -1)));
        assert_eq!(cells.last(), Some(&Pos2::new(1, 0)));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_size_has_no_cells() {
        let bounds = Bounds::from_size(Size::new(0, 5));

        assert_eq!(bounds.iter().count(), 0);
        assert!(!bounds.contains(Pos2::zero()));
    }

    #[test]
    fn grow_never_reaches_zero() {
        assert_eq!(Size::new(3, 8).grow(-4), Size::new(1, 4));
        assert_eq!(Size::new(3, 8).grow(2), Size::new(5, 10));
    }
}
