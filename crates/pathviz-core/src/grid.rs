//! The [`Grid`] type — a fixed-size occupancy map of [`CellKind`]s.
//!
//! Cells are stored row-major in a flat buffer (index = y·width + x). Paint
//! operations never fail: out-of-bounds coordinates and placements that
//! would break the endpoint rules are silently ignored and reported as
//! "unchanged" so callers can skip a redraw.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Default grid width.
pub const DEFAULT_WIDTH: i32 = 20;
/// Default grid height.
pub const DEFAULT_HEIGHT: i32 = 20;
/// Largest cell count [`Grid::new`] and [`Grid::resize`] accept.
pub const MAX_CELLS: usize = 1 << 24;

// ---------------------------------------------------------------------------
// GridLimits
// ---------------------------------------------------------------------------

/// Size bounds an input layer may apply before calling [`Grid::resize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLimits {
    pub min: i32,
    pub max: i32,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self { min: 2, max: 100 }
    }
}

impl GridLimits {
    /// Clamp a requested size into `[min, max]` on both axes.
    pub fn clamp(&self, width: i32, height: i32) -> (i32, i32) {
        (
            width.clamp(self.min, self.max),
            height.clamp(self.min, self.max),
        )
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D grid of [`CellKind`]s.
///
/// At most one [`CellKind::Start`] and one [`CellKind::End`] exist at any
/// time; [`set_cell`](Grid::set_cell) enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Grid {
    /// Create a new grid of the given dimensions, all cells empty.
    ///
    /// Fails with [`GridError::InvalidDimension`] if either dimension is
    /// zero or negative, or if the grid would hold more than [`MAX_CELLS`].
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self::empty(width, height))
    }

    fn empty(width: i32, height: i32) -> Self {
        Self {
            cells: vec![CellKind::Empty; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a constructed grid; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Inverse of [`index`](Grid::index). `idx` must be below [`len`](Grid::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is an in-bounds wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p) == Some(CellKind::Wall)
    }

    /// Paint `kind` at `(x, y)` and report whether the grid changed.
    ///
    /// - Out-of-bounds coordinates are ignored.
    /// - [`CellKind::Empty`] erases, like [`erase_cell`](Grid::erase_cell).
    /// - Any other kind only paints onto an empty cell.
    /// - Painting Start or End first removes the existing cell of that kind.
    pub fn set_cell(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        let Some(i) = self.index(Point::new(x, y)) else {
            return false;
        };
        if kind.is_empty() {
            return self.erase_index(i);
        }
        if !self.cells[i].is_empty() {
            return false;
        }
        if kind.is_endpoint() {
            self.remove_kind(kind);
        }
        self.cells[i] = kind;
        true
    }

    /// Reset the cell at `(x, y)` to empty. Returns whether it changed.
    pub fn erase_cell(&mut self, x: i32, y: i32) -> bool {
        match self.index(Point::new(x, y)) {
            Some(i) => self.erase_index(i),
            None => false,
        }
    }

    fn erase_index(&mut self, i: usize) -> bool {
        let was = std::mem::take(&mut self.cells[i]);
        !was.is_empty()
    }

    fn remove_kind(&mut self, kind: CellKind) {
        for c in self.cells.iter_mut().filter(|c| **c == kind) {
            *c = CellKind::Empty;
        }
    }

    /// First cell of `kind` in row-major order.
    pub fn find_cell_of_kind(&self, kind: CellKind) -> Option<Point> {
        self.cells
            .iter()
            .position(|&c| c == kind)
            .map(|i| self.point(i))
    }

    /// Position of the Start cell, if painted.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.find_cell_of_kind(CellKind::Start)
    }

    /// Position of the End cell, if painted.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.find_cell_of_kind(CellKind::End)
    }

    /// Count how many cells are of `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Reset every cell to empty, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(CellKind::Empty);
    }

    /// Reallocate to `width × height`, keeping every cell that lies inside
    /// both the old and the new bounds. New area is empty.
    ///
    /// Invalid dimensions leave the grid untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GridError> {
        check_dimensions(width, height)?;
        if width == self.width && height == self.height {
            return Ok(());
        }
        let mut next = Self::empty(width, height);
        let keep = self.bounds().intersect(next.bounds());
        for p in keep.iter() {
            if let (Some(si), Some(di)) = (self.index(p), next.index(p)) {
                next.cells[di] = self.cells[si];
            }
        }
        log::debug!(
            "grid resized {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        *self = next;
        Ok(())
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.point(i), c))
    }
}

/// Validate a size and return its cell count.
fn check_dimensions(width: i32, height: i32) -> Result<usize, GridError> {
    let invalid = GridError::InvalidDimension { width, height };
    if width <= 0 || height <= 0 {
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or(invalid)
}

/// Wire form of [`Grid`]; checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let len = check_dimensions(raw.width, raw.height)?;
        if raw.cells.len() != len {
            return Err(GridError::CellCount {
                len: raw.cells.len(),
                width: raw.width,
                height: raw.height,
            });
        }
        let grid = Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        };
        for kind in [CellKind::Start, CellKind::End] {
            if grid.count(kind) > 1 {
                return Err(GridError::DuplicateEndpoint(kind));
            }
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Text map format
// ---------------------------------------------------------------------------

impl fmt::Display for Grid {
    /// One line per row using [`CellKind::glyph`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a text map such as
    ///
    /// ```text
    /// S.#..
    /// ..#.E
    /// ```
    ///
    /// Leading and trailing whitespace on each row is ignored.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let height = rows.len() as i32;
        let mut grid = Grid::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(GridError::InconsistentSize(s.to_string()));
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = CellKind::from_glyph(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                if kind.is_endpoint() && grid.count(kind) > 0 {
                    return Err(GridError::DuplicateEndpoint(kind));
                }
                grid.set_cell(pos.x, pos.y, kind);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn grid(w: i32, h: i32) -> Grid {
        Grid::new(w, h).unwrap()
    }

    #[test]
    fn new_and_size() {
        let g = grid(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.len(), 50);
        assert_eq!(g.count(CellKind::Empty), 50);
        assert_eq!(Grid::default().size(), Point::new(20, 20));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(3, -1).is_err());
        let mut g = grid(3, 3);
        g.set_cell(1, 1, CellKind::Wall);
        assert!(g.resize(-2, 5).is_err());
        assert_eq!(g.size(), Point::new(3, 3));
        assert!(g.is_wall(Point::new(1, 1)));
    }

    #[test]
    fn rejects_oversized_dimensions() {
        assert_eq!(
            Grid::new(i32::MAX, i32::MAX),
            Err(GridError::InvalidDimension {
                width: i32::MAX,
                height: i32::MAX
            })
        );
        assert!(Grid::new(70_000, 70_000).is_err());
        assert!(Grid::new(4097, 4096).is_err());
        let mut g: Grid = "S.\n.E".parse().unwrap();
        assert!(g.resize(i32::MAX, 2).is_err());
        assert_eq!(g.to_string(), "S.\n.E");
    }

    #[test]
    fn index_round_trip() {
        let g = grid(7, 3);
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.index(Point::new(7, 0)), None);
        assert_eq!(g.index(Point::new(0, -1)), None);
    }

    #[test]
    fn set_cell_out_of_bounds_is_noop() {
        let mut g = grid(4, 4);
        assert!(!g.set_cell(4, 0, CellKind::Wall));
        assert!(!g.set_cell(-1, 2, CellKind::Start));
        assert!(!g.erase_cell(0, 9));
        assert_eq!(g.count(CellKind::Empty), 16);
    }

    #[test]
    fn wall_does_not_overwrite_occupied_cells() {
        let mut g = grid(4, 4);
        assert!(g.set_cell(0, 0, CellKind::Start));
        assert!(g.set_cell(1, 0, CellKind::End));
        assert!(g.set_cell(2, 0, CellKind::Wall));
        assert!(!g.set_cell(0, 0, CellKind::Wall));
        assert!(!g.set_cell(1, 0, CellKind::Wall));
        assert!(!g.set_cell(2, 0, CellKind::Wall));
        assert_eq!(g.at(Point::new(0, 0)), Some(CellKind::Start));
        assert_eq!(g.at(Point::new(1, 0)), Some(CellKind::End));
    }

    #[test]
    fn endpoint_moves_instead_of_duplicating() {
        let mut g = grid(4, 4);
        assert!(g.set_cell(0, 0, CellKind::Start));
        assert!(g.set_cell(3, 3, CellKind::Start));
        assert_eq!(g.count(CellKind::Start), 1);
        assert_eq!(g.start(), Some(Point::new(3, 3)));
        // Occupied targets are left alone, and the old Start survives.
        g.set_cell(1, 1, CellKind::Wall);
        assert!(!g.set_cell(1, 1, CellKind::Start));
        assert!(!g.set_cell(3, 3, CellKind::Start));
        assert_eq!(g.start(), Some(Point::new(3, 3)));
    }

    #[test]
    fn erase_reports_change() {
        let mut g = grid(3, 3);
        g.set_cell(1, 2, CellKind::End);
        assert!(g.erase_cell(1, 2));
        assert!(!g.erase_cell(1, 2));
        assert_eq!(g.end(), None);
        g.set_cell(0, 0, CellKind::Wall);
        assert!(g.set_cell(0, 0, CellKind::Empty));
        assert_eq!(g.at(Point::ZERO), Some(CellKind::Empty));
    }

    #[test]
    fn find_cell_is_row_major() {
        let mut g = grid(4, 4);
        g.set_cell(3, 0, CellKind::Wall);
        g.set_cell(0, 1, CellKind::Wall);
        assert_eq!(g.find_cell_of_kind(CellKind::Wall), Some(Point::new(3, 0)));
        assert_eq!(g.find_cell_of_kind(CellKind::End), None);
    }

    #[test]
    fn clear_keeps_size() {
        let mut g: Grid = "S#\n#E".parse().unwrap();
        g.clear();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.count(CellKind::Empty), 4);
    }

    #[test]
    fn resize_copies_overlap_and_zero_fills() {
        let mut g: Grid = "
            S..
            .#.
            ..E
        "
        .parse()
        .unwrap();
        g.resize(5, 2).unwrap();
        assert_eq!(g.to_string(), "S....\n.#...");
        assert_eq!(g.end(), None);
        g.resize(2, 4).unwrap();
        assert_eq!(g.to_string(), "S.\n.#\n..\n..");
    }

    #[test]
    fn resize_up_and_back_preserves_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (w, h) = (rng.random_range(1..12), rng.random_range(1..12));
            let mut g = grid(w, h);
            for _ in 0..(w * h / 2) {
                let kind = match rng.random_range(0..4u32) {
                    0 => CellKind::Start,
                    1 => CellKind::End,
                    _ => CellKind::Wall,
                };
                g.set_cell(rng.random_range(0..w), rng.random_range(0..h), kind);
            }
            let before = g.clone();
            g.resize(w + rng.random_range(0..6), h + rng.random_range(0..6))
                .unwrap();
            g.resize(w, h).unwrap();
            assert_eq!(g, before);
        }
    }

    #[test]
    fn random_paints_keep_single_endpoints() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = grid(8, 6);
        for _ in 0..2000 {
            let x = rng.random_range(-1..9);
            let y = rng.random_range(-1..7);
            match rng.random_range(0..5u32) {
                0 => g.set_cell(x, y, CellKind::Start),
                1 => g.set_cell(x, y, CellKind::End),
                2 => g.set_cell(x, y, CellKind::Wall),
                3 => g.set_cell(x, y, CellKind::Empty),
                _ => g.erase_cell(x, y),
            };
            assert!(g.count(CellKind::Start) <= 1);
            assert!(g.count(CellKind::End) <= 1);
        }
    }

    #[test]
    fn parse_and_display() {
        let text = "S.#..\n..#.E";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.size(), Point::new(5, 2));
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(4, 1)));
        assert_eq!(g.count(CellKind::Wall), 2);
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "..\n...".parse::<Grid>(),
            Err(GridError::InconsistentSize(_))
        ));
        assert_eq!(
            "..\n.x".parse::<Grid>(),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
        assert_eq!(
            "S.S".parse::<Grid>(),
            Err(GridError::DuplicateEndpoint(CellKind::Start))
        );
        assert!(matches!(
            "".parse::<Grid>(),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn limits_clamp() {
        let lim = GridLimits::default();
        assert_eq!(lim.clamp(0, 500), (2, 100));
        assert_eq!(lim.clamp(20, 30), (20, 30));
    }
}
