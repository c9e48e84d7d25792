//! Policy trait definition and the shared best-arm selection procedure

use rand::prelude::*;

use crate::arm::Arm;

/// Arm selection strategy
///
/// Policies are stateless with respect to learning: every statistic lives in
/// the arms, and a policy recomputes its decision from the current estimates
/// on each call.
///
/// The trait takes `dyn rand::RngCore` rather than a generic generator so
/// that `Box<dyn Policy<A>>` can be used for configured runs.
pub trait Policy<A: Arm> {
    /// Prepare a freshly attached arm collection before the first choice.
    fn bind(&self, _arms: &mut [A]) {}

    /// Select the index of an arm to pull
    ///
    /// # Returns
    /// The selected index, or None if no arms are available
    fn choose(&self, arms: &[A], rng: &mut dyn rand::RngCore) -> Option<usize>;

    /// Probability that [`Policy::choose`] returns each arm, given the
    /// current estimates
    fn selection_probabilities(&self, arms: &[A]) -> Vec<f64>;
}

impl<A, P> Policy<A> for Box<P>
where
    A: Arm,
    P: Policy<A> + ?Sized,
{
    fn bind(&self, arms: &mut [A]) {
        (**self).bind(arms)
    }

    fn choose(&self, arms: &[A], rng: &mut dyn rand::RngCore) -> Option<usize> {
        (**self).choose(arms, rng)
    }

    fn selection_probabilities(&self, arms: &[A]) -> Vec<f64> {
        (**self).selection_probabilities(arms)
    }
}

/// Indices of every arm whose estimate equals the maximum estimate.
///
/// The running maximum starts at negative infinity, so arms with negative
/// estimates remain selectable. NaN estimates never qualify; if no arm
/// qualifies at all, every arm is returned.
pub fn best_arms<A: Arm>(arms: &[A]) -> Vec<usize> {
    let max = arms
        .iter()
        .map(Arm::estimate)
        .fold(f64::NEG_INFINITY, |max, x| if x > max { x } else { max });

    let best: Vec<usize> = arms
        .iter()
        .enumerate()
        .filter(|(_, arm)| arm.estimate() == max)
        .map(|(i, _)| i)
        .collect();

    if best.is_empty() {
        (0..arms.len()).collect()
    } else {
        best
    }
}

/// Pick the best arm, breaking ties uniformly at random.
///
/// A unique best arm is returned without consuming a random draw.
pub fn choose_best<A: Arm>(arms: &[A], rng: &mut dyn rand::RngCore) -> Option<usize> {
    let best = best_arms(arms);
    match best.as_slice() {
        [] => None,
        [only] => Some(*only),
        tied => tied.choose(rng).copied(),
    }
}

/// Selection probabilities of the greedy part of a policy: uniform over the
/// tied best arms, zero elsewhere.
pub(crate) fn greedy_probabilities<A: Arm>(arms: &[A]) -> Vec<f64> {
    let mut probabilities = vec![0.0; arms.len()];
    if arms.is_empty() {
        return probabilities;
    }

    let best = best_arms(arms);
    let share = 1.0 / best.len() as f64;
    for i in best {
        probabilities[i] = share;
    }
    probabilities
}
