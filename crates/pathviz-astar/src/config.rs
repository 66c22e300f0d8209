//! Search and animation settings supplied by the front end.

/// Movement rules for a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Allow the four diagonal moves in addition to the orthogonal ones.
    pub allow_diagonal: bool,
    /// Forbid a diagonal move when both cells flanking it are walls.
    pub prevent_corner_cutting: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: false,
            prevent_corner_cutting: true,
        }
    }
}

impl SearchConfig {
    /// Orthogonal moves only.
    pub const fn orthogonal() -> Self {
        Self {
            allow_diagonal: false,
            prevent_corner_cutting: true,
        }
    }

    /// Eight-way movement.
    pub const fn diagonal(prevent_corner_cutting: bool) -> Self {
        Self {
            allow_diagonal: true,
            prevent_corner_cutting,
        }
    }
}

/// Upper bound on the number of main-loop expansions of one search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepBudget {
    Limited(usize),
    Unbounded,
}

impl Default for StepBudget {
    fn default() -> Self {
        Self::Limited(0)
    }
}

impl From<usize> for StepBudget {
    fn from(n: usize) -> Self {
        Self::Limited(n)
    }
}

impl StepBudget {
    /// Whether one more expansion is allowed after `done` have run.
    #[inline]
    pub fn allows(self, done: usize) -> bool {
        match self {
            Self::Limited(n) => done < n,
            Self::Unbounded => true,
        }
    }

    /// Whether a search that already ran `done` expansions fits within
    /// this budget.
    #[inline]
    pub fn covers(self, done: usize) -> bool {
        match self {
            Self::Limited(n) => done <= n,
            Self::Unbounded => true,
        }
    }
}

/// Animation pacing for [`StepController`](crate::StepController).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// Expansions added per timer tick.
    pub rate: usize,
    /// Skip the animation and always run to completion.
    pub instant: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rate: 1,
            instant: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_limits() {
        let b = StepBudget::from(2);
        assert!(b.allows(0));
        assert!(b.allows(1));
        assert!(!b.allows(2));
        assert!(b.covers(2));
        assert!(!b.covers(3));
        assert!(StepBudget::Unbounded.allows(usize::MAX - 1));
        assert_eq!(StepBudget::default(), StepBudget::Limited(0));
    }
}
