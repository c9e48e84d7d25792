use rand::Rng;

use crate::arm::Arm;
use crate::error::{BanditError, Result};
use crate::policy::{Policy, choose_best, greedy_probabilities};

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
#[derive(Clone, Debug, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

fn validate_epsilon(epsilon: f64) -> Result<()> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(())
    } else {
        Err(BanditError::InvalidParameter {
            message: format!("epsilon must be between 0 and 1, got {}", epsilon),
        })
    }
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    pub fn new(epsilon: f64) -> Result<Self> {
        validate_epsilon(epsilon)?;
        Ok(Self { epsilon })
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sets the epsilon value
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        validate_epsilon(epsilon)?;
        self.epsilon = epsilon;
        Ok(())
    }
}

impl<A: Arm> Policy<A> for EpsilonGreedy {
    fn choose(&self, arms: &[A], rng: &mut dyn rand::RngCore) -> Option<usize> {
        if arms.is_empty() {
            return None;
        }

        // Explore with probability epsilon
        let r: f64 = rng.random_range(0.0..1.0);
        if r < self.epsilon {
            Some(rng.random_range(0..arms.len()))
        } else {
            choose_best(arms, rng)
        }
    }

    fn selection_probabilities(&self, arms: &[A]) -> Vec<f64> {
        let explore = self.epsilon / arms.len() as f64;
        greedy_probabilities(arms)
            .into_iter()
            .map(|p| explore + (1.0 - self.epsilon) * p)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::fixtures::arms;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_out_of_range_epsilon() {
        assert!(EpsilonGreedy::new(-0.01).is_err());
        assert!(EpsilonGreedy::new(1.01).is_err());
        assert!(EpsilonGreedy::new(f64::NAN).is_err());
        assert!(EpsilonGreedy::new(0.0).is_ok());
        assert!(EpsilonGreedy::new(1.0).is_ok());
    }

    #[test]
    fn test_getters_setters() {
        let mut policy = EpsilonGreedy::new(0.5).unwrap();
        assert_eq!(policy.epsilon(), 0.5);

        policy.set_epsilon(0.3).unwrap();
        assert_eq!(policy.epsilon(), 0.3);

        assert!(policy.set_epsilon(2.0).is_err());
        assert_eq!(policy.epsilon(), 0.3);
    }

    #[test]
    fn test_empty_arms() {
        let policy = EpsilonGreedy::new(0.5).unwrap();
        let arms = arms(&[]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        assert_eq!(policy.choose(&arms, &mut rng), None);
    }

    #[test]
    fn test_pure_exploitation() {
        let policy = EpsilonGreedy::new(0.0).unwrap();
        let arms = arms(&[0.5, 0.9, 0.3]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(policy.choose(&arms, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_pure_exploitation_breaks_ties_among_best() {
        let policy = EpsilonGreedy::new(0.0).unwrap();
        let arms = arms(&[2.0, 0.1, 2.0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let choice = policy.choose(&arms, &mut rng).unwrap();
            assert_ne!(choice, 1);
        }
    }

    #[test]
    fn test_pure_exploration_ignores_estimates() {
        let policy = EpsilonGreedy::new(1.0).unwrap();
        let arms = arms(&[10.0, 0.0, -5.0, 3.0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let n = 20_000;

        let mut counts = [0usize; 4];
        for _ in 0..n {
            counts[policy.choose(&arms, &mut rng).unwrap()] += 1;
        }

        for count in counts {
            assert_abs_diff_eq!(count as f64 / n as f64, 0.25, epsilon = 0.02);
        }
    }

    #[test]
    fn test_selection_probabilities() {
        let policy = EpsilonGreedy::new(0.2).unwrap();
        let arms = arms(&[0.3, 0.9, 0.1]);
        let probabilities = policy.selection_probabilities(&arms);

        assert_abs_diff_eq!(probabilities[1], 0.8 + 0.2 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(probabilities[0], 0.2 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(probabilities[2], 0.2 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_distribution_matches_probabilities() {
        let policy = EpsilonGreedy::new(0.3).unwrap();
        let arms = arms(&[0.25, 0.85, 0.15]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(123);
        let n = 10_000;

        let mut counts = [0usize; 3];
        for _ in 0..n {
            counts[policy.choose(&arms, &mut rng).unwrap()] += 1;
        }

        // "1" should be selected approximately 70% + 10% = 80% of the time
        let expected = policy.selection_probabilities(&arms);
        for (count, p) in counts.iter().zip(expected) {
            assert_abs_diff_eq!(*count as f64 / n as f64, p, epsilon = 0.02);
        }
    }
}
