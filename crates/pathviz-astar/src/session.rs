//! A painted grid, its search settings and its animation, kept together.
//!
//! [`Session`] is the single owner an input layer talks to. Paint
//! operations bump a generation counter; the next [`snapshot`] rebuilds the
//! search only when the grid, the settings or a shrinking budget require it,
//! and otherwise advances the search it already has.
//!
//! [`snapshot`]: Session::snapshot

use pathviz_core::{CellKind, Grid, GridError, Point};

use crate::astar::Search;
use crate::config::{AnimationConfig, SearchConfig, StepBudget};
use crate::controller::StepController;
use crate::snapshot::Snapshot;

#[derive(Clone, Debug)]
struct CachedSearch {
    generation: u64,
    search: Search,
}

/// Grid + search configuration + animation state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    grid: Grid,
    config: SearchConfig,
    controller: StepController,
    generation: u64,
    cache: Option<CachedSearch>,
}

impl Session {
    pub fn new(grid: Grid, config: SearchConfig, animation: AnimationConfig) -> Self {
        Self {
            grid,
            config,
            controller: StepController::new(animation),
            generation: 0,
            cache: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    // -----------------------------------------------------------------------
    // Grid edits
    // -----------------------------------------------------------------------

    /// Paint `kind` at `(x, y)`; see [`Grid::set_cell`].
    pub fn paint(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        let changed = self.grid.set_cell(x, y, kind);
        if changed {
            self.touch();
        }
        changed
    }

    /// Erase the cell at `(x, y)`; see [`Grid::erase_cell`].
    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        let changed = self.grid.erase_cell(x, y);
        if changed {
            self.touch();
        }
        changed
    }

    /// Resize the grid; see [`Grid::resize`].
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GridError> {
        if self.grid.size() == Point::new(width, height) {
            return Ok(());
        }
        self.grid.resize(width, height)?;
        self.touch();
        Ok(())
    }

    /// Erase every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.touch();
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        if config != self.config {
            self.config = config;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.controller
            .sync_endpoints(self.grid.start().is_some(), self.grid.end().is_some());
    }

    // -----------------------------------------------------------------------
    // Animation
    // -----------------------------------------------------------------------

    pub fn set_animation(&mut self, animation: AnimationConfig) {
        self.controller.set_config(animation);
    }

    /// Advance by one timer tick.
    pub fn tick(&mut self) -> StepBudget {
        self.controller.tick()
    }

    /// Advance by one expansion.
    pub fn step(&mut self) -> StepBudget {
        self.controller.step()
    }

    /// Restart the animation from zero expansions.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// The search result for the current grid, settings and budget.
    ///
    /// Equal to [`search`](crate::search) called with the same inputs.
    pub fn snapshot(&mut self) -> Snapshot {
        let (start, end) = (self.grid.start(), self.grid.end());
        self.controller
            .sync_endpoints(start.is_some(), end.is_some());
        let (Some(start), Some(end)) = (start, end) else {
            self.cache = None;
            return Snapshot::empty();
        };
        let budget = self.controller.budget();

        let reusable = self.cache.as_ref().is_some_and(|c| {
            c.generation == self.generation && budget.covers(c.search.expansions())
        });
        if !reusable {
            self.cache = Search::new(&self.grid, start, end, self.config).map(|search| {
                CachedSearch {
                    generation: self.generation,
                    search,
                }
            });
        }

        match self.cache.as_mut() {
            Some(c) => {
                c.search.run(&self.grid, budget);
                c.search.snapshot()
            }
            None => Snapshot::empty(),
        }
    }
}
