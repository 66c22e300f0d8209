//! Steppable A* search.
//!
//! [`search`] runs a fresh search up to an expansion budget and returns a
//! [`Snapshot`]. [`Search`] is the same algorithm held open between calls so
//! an animation can advance it one tick at a time; `k` calls to
//! [`Search::step`] leave it in exactly the state `search(.., Limited(k))`
//! reports.

use pathviz_core::{Grid, Point};

use crate::config::{SearchConfig, StepBudget};
use crate::distance::heuristic;
use crate::neighbors::Neighbors;
use crate::snapshot::{ClosedMask, OpenEntry, SearchStatus, Snapshot};
use crate::state::{SearchNode, SearchState};
use crate::traits::Terrain;

/// Run A* from `start` to `end` for at most `budget` expansions.
///
/// A missing (or out-of-bounds) `start` or `end` yields
/// [`Snapshot::empty`]. Every call starts from scratch; the result depends
/// only on the arguments.
pub fn search<T: Terrain + ?Sized>(
    terrain: &T,
    start: Option<Point>,
    end: Option<Point>,
    config: SearchConfig,
    budget: StepBudget,
) -> Snapshot {
    let (Some(start), Some(end)) = (start, end) else {
        return Snapshot::empty();
    };
    match Search::new(terrain, start, end, config) {
        Some(mut s) => {
            s.run(terrain, budget);
            s.snapshot()
        }
        None => Snapshot::empty(),
    }
}

/// [`search`] with the endpoints taken from the painted Start and End cells.
pub fn search_grid(grid: &Grid, config: SearchConfig, budget: StepBudget) -> Snapshot {
    search(grid, grid.start(), grid.end(), config, budget)
}

/// Result of a single [`Search::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was expanded and the search goes on.
    Expanded(Point),
    /// The search had already terminated; nothing happened.
    Finished(SearchStatus),
    /// This step closed the goal.
    Found,
    /// This step emptied the open list.
    Exhausted,
}

/// An A* run that can be advanced incrementally.
///
/// The search does not own its terrain: pass the same map to every
/// [`step`](Search::step). Changing the map invalidates the search.
#[derive(Clone, Debug)]
pub struct Search {
    state: SearchState,
    nbuf: Neighbors,
    config: SearchConfig,
    goal: Point,
    goal_idx: usize,
    expansions: usize,
    status: SearchStatus,
    path: Vec<Point>,
}

impl Search {
    /// Seed a search with the start node on the open list.
    ///
    /// Returns `None` if either endpoint lies outside `terrain`.
    pub fn new<T: Terrain + ?Sized>(
        terrain: &T,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Option<Self> {
        let mut state = SearchState::new(terrain.bounds());
        let start_idx = state.idx(start)?;
        let goal_idx = state.idx(goal)?;
        state.push_open(
            start_idx,
            SearchNode {
                pos: start,
                parent: None,
                g: 0,
                h: heuristic(start, goal),
            },
        );
        Some(Self {
            state,
            nbuf: Neighbors::new(),
            config,
            goal,
            goal_idx,
            expansions: 0,
            status: SearchStatus::Running,
            path: Vec::new(),
        })
    }

    /// Expand the open node with the lowest f.
    pub fn step<T: Terrain + ?Sized>(&mut self, terrain: &T) -> StepOutcome {
        if self.status.is_finished() {
            return StepOutcome::Finished(self.status);
        }
        let Some(ci) = self.state.take_lowest_f() else {
            self.status = SearchStatus::Unreachable;
            return StepOutcome::Exhausted;
        };
        let current = self.state.close(ci);
        self.expansions += 1;
        log::trace!(
            "expand {} g={} h={} (#{})",
            current.pos,
            current.g,
            current.h,
            self.expansions
        );

        if ci == self.goal_idx {
            self.path = self.state.path_to(ci);
            self.status = SearchStatus::Found;
            log::debug!(
                "goal {} reached after {} expansions, cost {}",
                self.goal,
                self.expansions,
                current.g
            );
            return StepOutcome::Found;
        }

        for step in self.nbuf.passable(terrain, current.pos, &self.config) {
            let Some(ni) = self.state.idx(step.pos) else {
                continue;
            };
            if self.state.is_closed(ni) {
                continue;
            }
            let g = current.g + step.cost();
            if let Some(existing) = self.state.open_node(ni) {
                if existing.g <= g {
                    continue;
                }
            }
            self.state.push_open(
                ni,
                SearchNode {
                    pos: step.pos,
                    parent: Some(ci),
                    g,
                    h: heuristic(step.pos, self.goal),
                },
            );
        }

        if self.state.open_len() == 0 {
            self.status = SearchStatus::Unreachable;
            log::debug!(
                "goal {} unreachable after {} expansions",
                self.goal,
                self.expansions
            );
            return StepOutcome::Exhausted;
        }
        StepOutcome::Expanded(current.pos)
    }

    /// Step until the search terminates or `budget` expansions have run in
    /// total.
    pub fn run<T: Terrain + ?Sized>(&mut self, terrain: &T, budget: StepBudget) -> SearchStatus {
        while !self.status.is_finished() && budget.allows(self.expansions) {
            self.step(terrain);
        }
        self.status
    }

    /// Expansions performed so far.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Package the current state for a renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            open: self
                .state
                .open_nodes()
                .map(|n| OpenEntry {
                    pos: n.pos,
                    g: n.g,
                    h: n.h,
                })
                .collect(),
            closed: ClosedMask::new(self.state.range(), self.state.closed_bits()),
            path: self.path.clone(),
            cost: match self.status {
                SearchStatus::Found => self.state.node(self.goal_idx).map(|n| n.g),
                _ => None,
            },
            status: self.status,
            expansions: self.expansions,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let g: Grid = "S.#\n...\n#.E".parse().unwrap();
        let snap = search_grid(&g, SearchConfig::diagonal(true), StepBudget::Limited(3));
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
