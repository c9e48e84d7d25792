//! Arm selection policies
//!
//! Both policies share the best-arm procedure in [`crate::policy`] and differ
//! only in where their exploration comes from.

mod epsilon_greedy;
mod optimistic;

pub use epsilon_greedy::EpsilonGreedy;
pub use optimistic::OptimisticInitialValue;
