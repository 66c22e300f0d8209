use pathviz_core::Point;

/// Cost of a horizontal or vertical step, in fixed-point units.
pub const ORTHOGONAL_COST: i32 = 10;
/// Cost of a diagonal step (≈ 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A* heuristic: Manhattan distance scaled by the orthogonal step cost.
///
/// Used unchanged when diagonal moves are enabled, where it can
/// overestimate.
#[inline]
pub fn heuristic(from: Point, goal: Point) -> i32 {
    ORTHOGONAL_COST * manhattan(from, goal)
}
