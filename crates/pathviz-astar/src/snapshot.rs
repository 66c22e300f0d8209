//! What a renderer receives after each search: open list, closed cells and
//! the path found so far.

use pathviz_core::{Point, Range};

/// How far a search has progressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Start or end is not painted; nothing was searched.
    #[default]
    Idle,
    /// The expansion budget ran out before the search terminated.
    Running,
    /// The goal was reached.
    Found,
    /// The open list emptied without reaching the goal.
    Unreachable,
}

impl SearchStatus {
    /// Whether further expansions would change nothing.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Found | Self::Unreachable)
    }
}

/// An open-list entry as seen by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenEntry {
    pub pos: Point,
    pub g: i32,
    pub h: i32,
}

// ---------------------------------------------------------------------------
// ClosedMask
// ---------------------------------------------------------------------------

/// Closed-set membership for every cell of the searched range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedMask {
    rng: Range,
    bits: Vec<bool>,
}

impl ClosedMask {
    pub(crate) fn new(rng: Range, bits: Vec<bool>) -> Self {
        debug_assert_eq!(rng.len(), bits.len());
        Self { rng, bits }
    }

    /// Whether `p` is closed. Points outside the range are not.
    pub fn contains(&self, p: Point) -> bool {
        if !self.rng.contains(p) {
            return false;
        }
        let w = self.rng.width() as usize;
        let i = (p.y - self.rng.min.y) as usize * w + (p.x - self.rng.min.x) as usize;
        self.bits.get(i).copied().unwrap_or(false)
    }

    /// Closed positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.rng
            .iter()
            .zip(self.bits.iter())
            .filter_map(|(p, &b)| b.then_some(p))
    }

    /// Number of closed cells.
    pub fn len(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.contains(&true)
    }

    /// Whether every cell closed here is also closed in `other`.
    pub fn is_subset(&self, other: &ClosedMask) -> bool {
        self.iter().all(|p| other.contains(p))
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The state of a search at the point it stopped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub(crate) open: Vec<OpenEntry>,
    pub(crate) closed: ClosedMask,
    pub(crate) path: Vec<Point>,
    pub(crate) cost: Option<i32>,
    pub(crate) status: SearchStatus,
    pub(crate) expansions: usize,
}

impl Snapshot {
    /// The result for a grid without a start or an end.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Open nodes in scan order at the moment the search stopped.
    #[inline]
    pub fn open_list(&self) -> &[OpenEntry] {
        &self.open
    }

    #[inline]
    pub fn closed(&self) -> &ClosedMask {
        &self.closed
    }

    /// Path from the first step after the start through the goal. Empty
    /// until the goal is reached.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Total g-cost of [`path`](Self::path), once found.
    #[inline]
    pub fn path_cost(&self) -> Option<i32> {
        self.cost
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of main-loop expansions that produced this snapshot.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty() && self.path.is_empty()
    }

    /// Whether `p` is on the open list.
    pub fn is_open(&self, p: Point) -> bool {
        self.open.iter().any(|e| e.pos == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_mask_queries() {
        let rng = Range::sized(3, 2);
        let mask = ClosedMask::new(rng, vec![true, false, false, false, true, true]);
        assert!(mask.contains(Point::new(0, 0)));
        assert!(mask.contains(Point::new(2, 1)));
        assert!(!mask.contains(Point::new(1, 0)));
        assert!(!mask.contains(Point::new(9, 9)));
        assert_eq!(mask.len(), 3);
        assert_eq!(
            mask.iter().collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)]
        );

        let fewer = ClosedMask::new(rng, vec![true, false, false, false, false, true]);
        assert!(fewer.is_subset(&mask));
        assert!(!mask.is_subset(&fewer));
    }

    #[test]
    fn empty_snapshot() {
        let s = Snapshot::empty();
        assert!(s.is_empty());
        assert_eq!(s.status(), SearchStatus::Idle);
        assert_eq!(s.path_cost(), None);
        assert!(s.closed().is_empty());
    }
}
