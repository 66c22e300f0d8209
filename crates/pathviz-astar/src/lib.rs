//! Steppable A* search for grid pathfinding visualizers.
//!
//! The engine searches a [`Terrain`] (usually a painted
//! [`Grid`](pathviz_core::Grid)) from a start cell to an end cell and stops
//! after a fixed number of expansions, returning a [`Snapshot`] of the open
//! list, the closed cells and any path found. Raising the budget frame by
//! frame animates the search.
//!
//! - [`search`] / [`search_grid`] — one-shot search, a pure function of its
//!   inputs.
//! - [`Search`] — the same search advanced incrementally.
//! - [`StepController`] — turns timer ticks into an expansion budget.
//! - [`Session`] — grid, settings and animation in one place, reusing the
//!   previous frame's search when nothing relevant changed.
//!
//! Costs are fixed-point: an orthogonal step costs 10, a diagonal step 14,
//! and the heuristic is 10 × Manhattan distance.

mod astar;
mod config;
mod controller;
mod distance;
mod neighbors;
mod session;
mod snapshot;
mod state;
mod traits;

pub use astar::{Search, StepOutcome, search, search_grid};
pub use config::{AnimationConfig, SearchConfig, StepBudget};
pub use controller::StepController;
pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, heuristic, manhattan};
pub use neighbors::{Direction, Neighbors, Step};
pub use session::Session;
pub use snapshot::{ClosedMask, OpenEntry, SearchStatus, Snapshot};
pub use state::{NodeStatus, SearchNode, SearchState};
pub use traits::Terrain;
