use pathviz_core::Point;

use crate::config::SearchConfig;
use crate::distance::{DIAGONAL_COST, ORTHOGONAL_COST};
use crate::traits::Terrain;

/// A single move on the grid.
///
/// The order of [`Direction::ORTHOGONAL`] and [`Direction::ALL`] is the
/// order in which neighbours enter the open list, which decides ties.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// Up, right, down, left.
    pub const ORTHOGONAL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The orthogonal moves followed by the diagonal ones, clockwise.
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// The moves permitted by `config`.
    #[inline]
    pub fn allowed(config: &SearchConfig) -> &'static [Direction] {
        if config.allow_diagonal {
            &Self::ALL
        } else {
            &Self::ORTHOGONAL
        }
    }

    /// Offset as `(dx, dy)`. Y grows down.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
            Self::West => Point::new(-1, 0),
            Self::NorthEast => Point::new(1, -1),
            Self::SouthEast => Point::new(1, 1),
            Self::SouthWest => Point::new(-1, 1),
            Self::NorthWest => Point::new(-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }

    /// Movement cost in fixed-point units.
    #[inline]
    pub const fn cost(self) -> i32 {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }
}

/// A candidate move produced by [`Neighbors::passable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub pos: Point,
    pub dir: Direction,
}

impl Step {
    #[inline]
    pub fn cost(&self) -> i32 {
        self.dir.cost()
    }
}

/// Cached neighbor computation helper.
///
/// Enumerates the moves out of a cell that stay in bounds, avoid walls, and
/// respect the corner-cutting rule, reusing one buffer across calls.
#[derive(Clone, Debug)]
pub struct Neighbors {
    buf: Vec<Step>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Moves out of `p` that land on an in-bounds, non-wall cell, in
    /// [`Direction`] order.
    ///
    /// With `prevent_corner_cutting`, a diagonal move is dropped when both
    /// the cell beside `p` horizontally and the cell beside `p` vertically
    /// (in the direction of the move) are walls.
    pub fn passable<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        p: Point,
        config: &SearchConfig,
    ) -> &[Step] {
        self.buf.clear();
        let bounds = terrain.bounds();
        for &dir in Direction::allowed(config) {
            let d = dir.delta();
            let n = p + d;
            if !bounds.contains(n) || terrain.is_wall(n) {
                continue;
            }
            if dir.is_diagonal()
                && config.prevent_corner_cutting
                && terrain.is_wall(p.shift(d.x, 0))
                && terrain.is_wall(p.shift(0, d.y))
            {
                continue;
            }
            self.buf.push(Step { pos: n, dir });
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Grid;

    fn positions(steps: &[Step]) -> Vec<Point> {
        steps.iter().map(|s| s.pos).collect()
    }

    #[test]
    fn costs() {
        assert_eq!(Direction::East.cost(), 10);
        assert_eq!(Direction::SouthWest.cost(), 14);
        assert_eq!(Direction::ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }

    #[test]
    fn orthogonal_order_and_bounds() {
        let g = Grid::new(3, 3).unwrap();
        let mut nb = Neighbors::new();
        let steps = nb.passable(&g, Point::new(1, 1), &SearchConfig::orthogonal());
        assert_eq!(
            positions(steps),
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
        let steps = nb.passable(&g, Point::new(0, 0), &SearchConfig::orthogonal());
        assert_eq!(positions(steps), vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn walls_are_skipped() {
        let g: Grid = "
            .#.
            ...
            .#.
        "
        .parse()
        .unwrap();
        let mut nb = Neighbors::new();
        let steps = nb.passable(&g, Point::new(1, 1), &SearchConfig::diagonal(false));
        assert_eq!(steps.len(), 6);
        assert!(!positions(steps).contains(&Point::new(1, 0)));
        assert!(!positions(steps).contains(&Point::new(1, 2)));
    }

    #[test]
    fn corner_cutting_needs_both_flanks() {
        let g: Grid = "
            .#.
            #..
            ...
        "
        .parse()
        .unwrap();
        let mut nb = Neighbors::new();
        let from = Point::new(0, 0);

        let steps = nb.passable(&g, from, &SearchConfig::diagonal(true));
        assert!(steps.is_empty());

        let steps = nb.passable(&g, from, &SearchConfig::diagonal(false));
        assert_eq!(positions(steps), vec![Point::new(1, 1)]);
        assert_eq!(steps[0].dir, Direction::SouthEast);

        // One open flank is enough to allow the diagonal.
        let g: Grid = "
            ...
            #..
            ...
        "
        .parse()
        .unwrap();
        let steps = nb.passable(&g, from, &SearchConfig::diagonal(true));
        assert_eq!(positions(steps), vec![Point::new(1, 0), Point::new(1, 1)]);
    }
}
