use indexmap::IndexSet;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arm::{Arm, ArmId, RewardSource};
use crate::error::{BanditError, Result};
use crate::policies::{EpsilonGreedy, OptimisticInitialValue};
use crate::policy::Policy;

/// A multi-armed bandit run
///
/// The `Bandit` owns the ordered arm collection, the selection policy, and the
/// random stream of a single run. Arms are addressed by their position in the
/// collection; ids are kept alongside for lookups and reporting.
///
/// Runs that execute in parallel must each get their own `Bandit`.
#[derive(Clone, Debug)]
pub struct Bandit<P, A = RewardSource, R = StdRng> {
    arms: Vec<A>,
    ids: IndexSet<ArmId>,
    policy: P,
    rng: R,
}

impl<P, A, R> Bandit<P, A, R>
where
    P: Policy<A>,
    A: Arm,
    R: rand::RngCore,
{
    /// Creates a new bandit with the given arms, policy and random generator
    ///
    /// The policy is bound to the arms before this returns, so any seeding it
    /// performs is in place before the first call to [`Bandit::choose`].
    pub fn new<I>(arms: I, policy: P, rng: R) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
    {
        let mut arms: Vec<A> = arms.into_iter().collect();

        if arms.is_empty() {
            return Err(BanditError::NoArmsAvailable);
        }

        let mut ids = IndexSet::with_capacity(arms.len());
        for arm in &arms {
            if !ids.insert(arm.id().clone()) {
                return Err(BanditError::ArmAlreadyExists {
                    id: arm.id().to_string(),
                });
            }
        }

        policy.bind(&mut arms);
        tracing::debug!(arms = arms.len(), "bandit created");

        Ok(Self {
            arms,
            ids,
            policy,
            rng,
        })
    }

    /// Select the index of the arm to pull this turn
    pub fn choose(&mut self) -> Result<usize> {
        self.policy
            .choose(&self.arms, &mut self.rng)
            .ok_or(BanditError::NoArmsAvailable)
    }

    /// Draw a reward from the arm at `index`
    pub fn sample(&mut self, index: usize) -> Result<f64> {
        let arm = self.arms.get(index).ok_or(BanditError::ArmIndexOutOfRange {
            index,
            len: self.arms.len(),
        })?;
        Ok(arm.sample(&mut self.rng))
    }

    /// Feed an observed reward back to the arm at `index`
    pub fn update(&mut self, index: usize, reward: f64) -> Result<()> {
        let len = self.arms.len();
        let arm = self
            .arms
            .get_mut(index)
            .ok_or(BanditError::ArmIndexOutOfRange { index, len })?;
        arm.update(reward);
        Ok(())
    }

    /// Gets the arms in collection order
    pub fn arms(&self) -> &[A] {
        &self.arms
    }

    /// Gets the arm at `index`
    pub fn arm(&self, index: usize) -> Option<&A> {
        self.arms.get(index)
    }

    /// Finds the index of the arm with the given id
    pub fn index_of(&self, id: &ArmId) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    /// Gets a reference to the policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Current estimate of every arm, in collection order
    pub fn estimates(&self) -> Vec<f64> {
        self.arms.iter().map(Arm::estimate).collect()
    }

    /// Probability that the next [`Bandit::choose`] returns each arm
    pub fn selection_probabilities(&self) -> Vec<f64> {
        self.policy.selection_probabilities(&self.arms)
    }

    /// Forget every observation and bind the policy again.
    ///
    /// The random stream is not rewound.
    pub fn reset(&mut self) {
        for arm in self.arms.iter_mut() {
            arm.reset();
        }
        self.policy.bind(&mut self.arms);
    }
}

// Convenience constructors for the two policies with a seeded generator
impl Bandit<EpsilonGreedy> {
    /// Create an epsilon-greedy bandit
    pub fn epsilon_greedy<I>(arms: I, epsilon: f64, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = RewardSource>,
    {
        Self::new(
            arms,
            EpsilonGreedy::new(epsilon)?,
            StdRng::seed_from_u64(seed),
        )
    }
}

impl Bandit<OptimisticInitialValue> {
    /// Create an optimistic initial value bandit
    pub fn optimistic<I>(arms: I, initial_value: f64, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = RewardSource>,
    {
        Self::new(
            arms,
            OptimisticInitialValue::new(initial_value)?,
            StdRng::seed_from_u64(seed),
        )
    }
}
