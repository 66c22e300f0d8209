use pathviz_core::{Grid, Point, Range};

/// What the A* engine needs to know about the map it searches.
pub trait Terrain {
    /// Rectangle of valid positions.
    fn bounds(&self) -> Range;

    /// Whether `p` blocks movement. Only called for in-bounds points.
    fn is_wall(&self, p: Point) -> bool;
}

impl Terrain for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_wall(&self, p: Point) -> bool {
        Grid::is_wall(self, p)
    }
}
