//! Serde-backed description of a simulation run.
//!
//! ```
//! use banditlab::SimulationConfig;
//!
//! let config = SimulationConfig::from_json(r#"{
//!     "arms": [
//!         { "id": "a", "mean": 1.0, "std_dev": 0.5 },
//!         { "id": "b", "mean": 2.0, "std_dev": 0.5 }
//!     ],
//!     "policy": { "kind": "epsilon_greedy", "epsilon": 0.1 },
//!     "turns": 100,
//!     "seed": 7
//! }"#).unwrap();
//!
//! let mut bandit = config.build().unwrap();
//! let history = bandit.run(config.turns).unwrap();
//! assert_eq!(history.len(), 100);
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::arm::{ArmId, RewardSource};
use crate::bandit::Bandit;
use crate::error::{BanditError, Result};
use crate::policies::{EpsilonGreedy, OptimisticInitialValue};
use crate::policy::Policy;

/// A bandit whose policy was chosen at runtime
pub type ConfiguredBandit = Bandit<Box<dyn Policy<RewardSource>>>;

/// True reward distribution of one arm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    pub id: ArmId,
    pub mean: f64,
    pub std_dev: f64,
}

/// Selection policy of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    EpsilonGreedy { epsilon: f64 },
    OptimisticInitialValue { initial_value: f64 },
}

impl PolicyConfig {
    fn build(&self) -> Result<Box<dyn Policy<RewardSource>>> {
        let policy: Box<dyn Policy<RewardSource>> = match self {
            PolicyConfig::EpsilonGreedy { epsilon } => Box::new(EpsilonGreedy::new(*epsilon)?),
            PolicyConfig::OptimisticInitialValue { initial_value } => {
                Box::new(OptimisticInitialValue::new(*initial_value)?)
            }
        };
        Ok(policy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub arms: Vec<ArmConfig>,
    pub policy: PolicyConfig,
    pub turns: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    /// Four arms with means 6, 5, 3 and 3 under a 10% epsilon-greedy policy.
    fn default() -> Self {
        let arms = [(6.0, 2.0), (5.0, 2.5), (3.0, 2.0), (3.0, 1.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (mean, std_dev))| ArmConfig {
                id: ArmId::from(i + 1),
                mean,
                std_dev,
            })
            .collect();

        Self {
            arms,
            policy: PolicyConfig::EpsilonGreedy { epsilon: 0.1 },
            turns: 500,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BanditError::Config {
            message: e.to_string(),
        })
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BanditError::Config {
            message: e.to_string(),
        })
    }

    /// Build the arms, policy and seeded generator described by this config
    pub fn build(&self) -> Result<ConfiguredBandit> {
        let arms = self
            .arms
            .iter()
            .map(|arm| RewardSource::new(arm.mean, arm.std_dev, arm.id.clone()))
            .collect::<Result<Vec<_>>>()?;

        Bandit::new(arms, self.policy.build()?, StdRng::seed_from_u64(self.seed))
    }
}
