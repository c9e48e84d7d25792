use crate::arm::Arm;
use crate::error::{BanditError, Result};
use crate::policy::{Policy, choose_best, greedy_probabilities};

/// Optimistic initial value policy
///
/// Always exploits the current best estimate. Exploration comes from seeding
/// every arm's estimate with an optimistic value when the policy is bound to
/// its arms: all arms start tied for best and get visited in turn until their
/// estimates fall to realistic levels.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimisticInitialValue {
    initial_value: f64,
}

impl OptimisticInitialValue {
    /// Creates a new policy seeding arms with `initial_value`
    ///
    /// The value should sit above any plausible true mean; otherwise the
    /// policy degrades to plain greedy selection.
    pub fn new(initial_value: f64) -> Result<Self> {
        if !initial_value.is_finite() {
            return Err(BanditError::InvalidParameter {
                message: format!("initial value must be finite, got {}", initial_value),
            });
        }
        Ok(Self { initial_value })
    }

    /// Gets the optimistic seed value
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }
}

impl<A: Arm> Policy<A> for OptimisticInitialValue {
    fn bind(&self, arms: &mut [A]) {
        tracing::debug!(
            initial_value = self.initial_value,
            arms = arms.len(),
            "seeding optimistic estimates"
        );
        for arm in arms.iter_mut() {
            arm.seed_estimate(self.initial_value);
        }
    }

    fn choose(&self, arms: &[A], rng: &mut dyn rand::RngCore) -> Option<usize> {
        choose_best(arms, rng)
    }

    fn selection_probabilities(&self, arms: &[A]) -> Vec<f64> {
        greedy_probabilities(arms)
    }
}
