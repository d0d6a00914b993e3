use crate::{Bounds, GridState, Pos2};

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = '·';

/// A text rendering of the part of a grid covered by some bounds
///
/// Rows are written top (highest y) to bottom, one line each, without a
/// trailing newline.
pub struct GridView<'a> {
    bounds: Bounds,
    grid: &'a GridState,
}
impl<'a> GridView<'a> {
    pub fn new(grid: &'a GridState, bounds: Bounds) -> Self {
        Self { bounds, grid }
    }

    /// Alive cells that fall inside the viewed bounds
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.grid.alive().filter(|&pos| self.bounds.contains(pos))
    }
}

impl std::fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, y) in self.bounds.rows().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for x in self.bounds.columns() {
                let glyph = if self.grid.get(Pos2::new(x, y)) {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
