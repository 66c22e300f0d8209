//! **pathviz-core** — grid model for the pathfinding visualizer.
//!
//! This crate provides the types shared by the search engine and any
//! rendering front end: geometry primitives, the [`CellKind`] occupancy enum,
//! and the paintable [`Grid`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, GridLimits, MAX_CELLS};
