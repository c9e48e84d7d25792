//! banditlab: multi-armed bandit simulations.
//!
//! A set of arms hides normal reward distributions from the agent. Each arm
//! keeps an incremental estimate of its mean reward, and a selection policy
//! trades exploring arms against exploiting the arm currently believed best.
//!
//! # Quick Start
//!
//! ```
//! use banditlab::{Bandit, RewardSource};
//!
//! let arms = vec![
//!     RewardSource::new(6.0, 2.0, "1").unwrap(),
//!     RewardSource::new(5.0, 2.5, "2").unwrap(),
//!     RewardSource::new(3.0, 2.0, "3").unwrap(),
//! ];
//!
//! // Explore 10% of the time, seeded for reproducibility
//! let mut bandit = Bandit::epsilon_greedy(arms, 0.1, 42).unwrap();
//!
//! // One turn by hand
//! let arm = bandit.choose().unwrap();
//! let reward = bandit.sample(arm).unwrap();
//! bandit.update(arm, reward).unwrap();
//!
//! // Or let the driver do it
//! let history = bandit.run(100).unwrap();
//! assert_eq!(history.len(), 100);
//! ```

mod arm;
mod bandit;
mod config;
mod error;
pub mod policies;
pub mod policy;
mod simulation;

// Re-export main types
pub use arm::{Arm, ArmId, RewardSource};
pub use bandit::Bandit;
pub use config::{ArmConfig, ConfiguredBandit, PolicyConfig, SimulationConfig};
pub use error::{BanditError, Result};
pub use simulation::{ArmReport, RunSummary, Turn};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{EpsilonGreedy, OptimisticInitialValue};
    pub use crate::policy::Policy;
    pub use crate::{Arm, ArmId, Bandit, BanditError, Result, RewardSource};
}
