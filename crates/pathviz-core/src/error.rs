//! Errors raised while building or parsing a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::cell::CellKind;
use crate::geom::Point;

/// Errors that can occur when constructing, resizing or parsing a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero, negative, or too large.
    #[error("invalid grid dimension {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Rows of a text map have different widths.
    #[error("map rows have inconsistent widths:\n{0}")]
    InconsistentSize(String),

    /// A character outside the map alphabet was found.
    #[error("map contains invalid rune {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },

    /// A cell buffer does not match the grid's dimensions.
    #[error("cell buffer holds {len} cells, expected {width}x{height}")]
    CellCount { len: usize, width: i32, height: i32 },

    /// A map holds more than one Start or End.
    #[error("map contains more than one {0:?} cell")]
    DuplicateEndpoint(CellKind),
}
