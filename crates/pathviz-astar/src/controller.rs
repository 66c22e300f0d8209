use crate::config::{AnimationConfig, StepBudget};

/// Turns timer ticks and manual steps into an expansion budget.
///
/// The budget starts at zero (only start and end are shown), grows by
/// [`AnimationConfig::rate`] per tick and by one per manual step, and drops
/// back to zero on [`reset`](Self::reset) or when an endpoint disappears.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepController {
    config: AnimationConfig,
    steps: usize,
}

impl StepController {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config, steps: 0 }
    }

    #[inline]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Change pacing. The current step count is kept.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Expansions requested so far, ignoring [`AnimationConfig::instant`].
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The budget to hand to the engine.
    pub fn budget(&self) -> StepBudget {
        if self.config.instant {
            StepBudget::Unbounded
        } else {
            StepBudget::Limited(self.steps)
        }
    }

    /// Advance by one timer tick.
    pub fn tick(&mut self) -> StepBudget {
        self.steps = self.steps.saturating_add(self.config.rate);
        self.budget()
    }

    /// Advance by exactly one expansion.
    pub fn step(&mut self) -> StepBudget {
        self.steps = self.steps.saturating_add(1);
        self.budget()
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }

    /// Reset when the start or the end is missing. Returns whether a reset
    /// happened.
    pub fn sync_endpoints(&mut self, has_start: bool, has_end: bool) -> bool {
        if (has_start && has_end) || self.steps == 0 {
            return false;
        }
        log::debug!("endpoint missing, animation reset from step {}", self.steps);
        self.steps = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_accumulate_rate() {
        let mut c = StepController::new(AnimationConfig {
            rate: 3,
            instant: false,
        });
        assert_eq!(c.budget(), StepBudget::Limited(0));
        assert_eq!(c.tick(), StepBudget::Limited(3));
        assert_eq!(c.tick(), StepBudget::Limited(6));
        assert_eq!(c.step(), StepBudget::Limited(7));
        c.reset();
        assert_eq!(c.budget(), StepBudget::Limited(0));
    }

    #[test]
    fn instant_is_unbounded() {
        let mut c = StepController::new(AnimationConfig {
            rate: 1,
            instant: true,
        });
        assert_eq!(c.budget(), StepBudget::Unbounded);
        c.tick();
        assert_eq!(c.steps(), 1);
        c.set_config(AnimationConfig::default());
        assert_eq!(c.budget(), StepBudget::Limited(1));
    }

    #[test]
    fn missing_endpoint_resets() {
        let mut c = StepController::default();
        c.set_config(AnimationConfig::default());
        c.tick();
        c.tick();
        assert!(!c.sync_endpoints(true, true));
        assert_eq!(c.steps(), 2);
        assert!(c.sync_endpoints(true, false));
        assert_eq!(c.steps(), 0);
        assert!(!c.sync_endpoints(false, false));
    }
}
