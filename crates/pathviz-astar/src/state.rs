use pathviz_core::{Point, Range};

/// Bookkeeping for one cell reached by a search.
///
/// `parent` is the flat index of the cell this one was reached from; the
/// chain of parents only ever points back toward the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    pub parent: Option<usize>,
    pub g: i32,
    pub h: i32,
}

impl SearchNode {
    /// `g + h`, the expansion priority.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            pos: Point::ZERO,
            parent: None,
            g: 0,
            h: 0,
        }
    }
}

/// Where a cell stands in the current search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeStatus {
    #[default]
    Unseen,
    Open,
    Closed,
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Open list, closed set and node arena of one A* run.
///
/// Nodes live in a flat arena indexed like the grid. The open list keeps
/// arena indices in insertion order; that order is what the lowest-f scan
/// walks, so it decides ties.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    nodes: Vec<SearchNode>,
    status: Vec<NodeStatus>,
    open: Vec<usize>,
}

impl SearchState {
    /// Create an empty state covering `rng`.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![SearchNode::default(); len],
            status: vec![NodeStatus::Unseen; len],
            open: Vec::new(),
        }
    }

    /// The rectangle this state covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    // -----------------------------------------------------------------------
    // Open / closed
    // -----------------------------------------------------------------------

    #[inline]
    pub fn status(&self, idx: usize) -> NodeStatus {
        self.status[idx]
    }

    #[inline]
    pub fn is_closed(&self, idx: usize) -> bool {
        self.status[idx] == NodeStatus::Closed
    }

    /// The node stored for `idx`, if the cell has been reached.
    pub fn node(&self, idx: usize) -> Option<&SearchNode> {
        match self.status[idx] {
            NodeStatus::Unseen => None,
            _ => Some(&self.nodes[idx]),
        }
    }

    /// The open node for `idx`, if the cell is currently open.
    pub fn open_node(&self, idx: usize) -> Option<&SearchNode> {
        match self.status[idx] {
            NodeStatus::Open => Some(&self.nodes[idx]),
            _ => None,
        }
    }

    /// Put `node` on the open list at `idx`.
    ///
    /// A cell that is already open keeps its place in the scan order and
    /// only has its node replaced. Closed cells are never reopened.
    pub fn push_open(&mut self, idx: usize, node: SearchNode) {
        match self.status[idx] {
            NodeStatus::Closed => {}
            NodeStatus::Open => self.nodes[idx] = node,
            NodeStatus::Unseen => {
                self.nodes[idx] = node;
                self.status[idx] = NodeStatus::Open;
                self.open.push(idx);
            }
        }
    }

    /// Remove and return the open cell with the lowest f.
    ///
    /// The scan accepts a candidate whose f is less than *or equal to* the
    /// best seen so far, so among ties the one scanned last wins.
    pub fn take_lowest_f(&mut self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (k, &idx) in self.open.iter().enumerate() {
            let f = self.nodes[idx].f();
            if best.is_none_or(|(_, bf)| f <= bf) {
                best = Some((k, f));
            }
        }
        let (k, _) = best?;
        Some(self.open.remove(k))
    }

    /// Mark `idx` as finalized and return its node.
    #[inline]
    pub fn close(&mut self, idx: usize) -> SearchNode {
        self.status[idx] = NodeStatus::Closed;
        self.nodes[idx]
    }

    /// Number of open cells.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Open nodes in scan order.
    pub fn open_nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.open.iter().map(|&i| &self.nodes[i])
    }

    /// Closed flags for every cell, row-major.
    pub(crate) fn closed_bits(&self) -> Vec<bool> {
        self.status
            .iter()
            .map(|&s| s == NodeStatus::Closed)
            .collect()
    }

    /// Walk parent links back from `idx`, returning the positions from the
    /// first step after the start through `idx`.
    pub fn path_to(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while let Some(parent) = self.nodes[ci].parent {
            path.push(self.nodes[ci].pos);
            ci = parent;
        }
        path.reverse();
        path
    }
}
