//! Arms (reward sources) for multi-armed bandit simulations.
//!
//! An arm hides a true reward distribution from the agent and keeps a running
//! estimate of its mean reward. Policies only ever look at the estimate
//! through the [`Arm`] trait, so they can be exercised against any arm
//! representation.

use std::fmt;

use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{BanditError, Result};

/// Opaque identifier of an arm.
///
/// Identifiers can be created from integers or strings using the `From` trait.
///
/// # Examples
///
/// ```
/// use banditlab::ArmId;
///
/// let int_arm = ArmId::from(42);
/// let named_arm = ArmId::from("left lever");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArmId {
    /// Integer identifier
    Int(i64),
    /// Named identifier
    Name(String),
}

impl fmt::Display for ArmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmId::Int(i) => write!(f, "{}", i),
            ArmId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ArmId {
    fn from(value: i64) -> Self {
        ArmId::Int(value)
    }
}

impl From<i32> for ArmId {
    fn from(value: i32) -> Self {
        ArmId::Int(value as i64)
    }
}

impl From<usize> for ArmId {
    fn from(value: usize) -> Self {
        ArmId::Int(value as i64)
    }
}

impl From<String> for ArmId {
    fn from(value: String) -> Self {
        ArmId::Name(value)
    }
}

impl From<&str> for ArmId {
    fn from(value: &str) -> Self {
        ArmId::Name(value.to_string())
    }
}

impl From<&String> for ArmId {
    fn from(value: &String) -> Self {
        ArmId::Name(value.clone())
    }
}

/// Capability interface of a single arm.
///
/// Arms own their statistics. Policies read [`Arm::estimate`] and nothing
/// else; the driver calls [`Arm::sample`] and [`Arm::update`] once per turn.
pub trait Arm {
    /// Identifier of this arm
    fn id(&self) -> &ArmId;

    /// Running estimate of the mean reward
    fn estimate(&self) -> f64;

    /// Number of observed rewards folded into the estimate
    fn pulls(&self) -> u64;

    /// Draw one reward from the arm's true distribution.
    ///
    /// Does not change the estimate or the pull count.
    fn sample(&self, rng: &mut dyn rand::RngCore) -> f64;

    /// Fold an observed reward into the running estimate.
    fn update(&mut self, reward: f64);

    /// Overwrite the estimate without counting an observation.
    fn seed_estimate(&mut self, value: f64);

    /// Forget every observation.
    fn reset(&mut self);
}

/// An arm whose rewards follow a normal distribution.
///
/// # Examples
///
/// ```
/// use banditlab::{Arm, RewardSource};
/// use rand::SeedableRng;
///
/// let mut arm = RewardSource::new(6.0, 2.0, "a").unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///
/// let reward = arm.sample(&mut rng);
/// arm.update(reward);
/// assert_eq!(arm.pulls(), 1);
/// assert_eq!(arm.estimate(), reward);
/// ```
#[derive(Clone, Debug)]
pub struct RewardSource {
    id: ArmId,
    true_mean: f64,
    true_std_dev: f64,
    distribution: Normal<f64>,
    pulls: u64,
    estimate: f64,
}

impl RewardSource {
    /// Creates an arm with the given true mean and standard deviation.
    ///
    /// Fails with [`BanditError::InvalidParameter`] if the mean is not finite
    /// or the standard deviation is negative or not finite.
    pub fn new(true_mean: f64, true_std_dev: f64, id: impl Into<ArmId>) -> Result<Self> {
        if !true_mean.is_finite() {
            return Err(BanditError::InvalidParameter {
                message: format!("true mean must be finite, got {}", true_mean),
            });
        }
        if !true_std_dev.is_finite() || true_std_dev < 0.0 {
            return Err(BanditError::InvalidParameter {
                message: format!(
                    "standard deviation must be finite and non-negative, got {}",
                    true_std_dev
                ),
            });
        }

        let distribution =
            Normal::new(true_mean, true_std_dev).map_err(|e| BanditError::InvalidParameter {
                message: e.to_string(),
            })?;

        Ok(Self {
            id: id.into(),
            true_mean,
            true_std_dev,
            distribution,
            pulls: 0,
            estimate: 0.0,
        })
    }

    /// Gets the mean of the hidden reward distribution
    pub fn true_mean(&self) -> f64 {
        self.true_mean
    }

    /// Gets the standard deviation of the hidden reward distribution
    pub fn true_std_dev(&self) -> f64 {
        self.true_std_dev
    }
}

impl Arm for RewardSource {
    fn id(&self) -> &ArmId {
        &self.id
    }

    fn estimate(&self) -> f64 {
        self.estimate
    }

    fn pulls(&self) -> u64 {
        self.pulls
    }

    fn sample(&self, rng: &mut dyn rand::RngCore) -> f64 {
        self.distribution.sample(rng)
    }

    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        let n = self.pulls as f64;
        // Incremental mean: at n = 1 the previous estimate (or seed) is discarded.
        self.estimate = self.estimate * (1.0 - 1.0 / n) + reward * (1.0 / n);
    }

    fn seed_estimate(&mut self, value: f64) {
        self.estimate = value;
    }

    fn reset(&mut self) {
        self.pulls = 0;
        self.estimate = 0.0;
    }
}
