//! Turn-by-turn driver for bandit runs.
//!
//! Each turn chooses an arm, samples its reward and feeds the reward back,
//! in that order, before the next turn starts.

use serde::Serialize;

use crate::arm::{Arm, ArmId};
use crate::bandit::Bandit;
use crate::error::Result;
use crate::policy::Policy;

/// Outcome of a single turn
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Turn {
    /// Zero-based turn number within the run
    pub turn: usize,
    /// Index of the arm that was pulled
    pub arm: usize,
    /// Reward observed from the arm
    pub reward: f64,
}

impl<P, A, R> Bandit<P, A, R>
where
    P: Policy<A>,
    A: Arm,
    R: rand::RngCore,
{
    /// Play one turn: choose an arm, sample it and update its estimate.
    ///
    /// `turn` is only used to label the returned record.
    pub fn step(&mut self, turn: usize) -> Result<Turn> {
        let arm = self.choose()?;
        let reward = self.sample(arm)?;
        self.update(arm, reward)?;

        tracing::trace!(turn, arm, reward, "turn played");
        Ok(Turn { turn, arm, reward })
    }

    /// Play `turns` consecutive turns
    pub fn run(&mut self, turns: usize) -> Result<Vec<Turn>> {
        let history = (0..turns)
            .map(|turn| self.step(turn))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(turns, "run finished");
        Ok(history)
    }
}

/// Per-arm statistics at the end of a run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmReport {
    pub id: ArmId,
    pub pulls: u64,
    pub estimate: f64,
    /// Number of turns in the summarised history that pulled this arm
    pub selections: usize,
}

/// Summary of a run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub turns: usize,
    pub total_reward: f64,
    pub arms: Vec<ArmReport>,
}

impl RunSummary {
    /// Summarise `history` against the current state of `bandit`'s arms
    pub fn new<P, A, R>(bandit: &Bandit<P, A, R>, history: &[Turn]) -> Self
    where
        P: Policy<A>,
        A: Arm,
        R: rand::RngCore,
    {
        let mut selections = vec![0usize; bandit.arms().len()];
        for turn in history {
            if let Some(count) = selections.get_mut(turn.arm) {
                *count += 1;
            }
        }

        let arms = bandit
            .arms()
            .iter()
            .zip(selections)
            .map(|(arm, selections)| ArmReport {
                id: arm.id().clone(),
                pulls: arm.pulls(),
                estimate: arm.estimate(),
                selections,
            })
            .collect();

        Self {
            turns: history.len(),
            total_reward: history.iter().map(|t| t.reward).sum(),
            arms,
        }
    }

    /// Mean reward per turn, or 0 for an empty history
    pub fn average_reward(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.total_reward / self.turns as f64
        }
    }

    /// The most frequently selected arm
    pub fn most_selected(&self) -> Option<&ArmReport> {
        self.arms.iter().max_by_key(|report| report.selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::RewardSource;
    use approx::assert_abs_diff_eq;

    fn classic_arms() -> Vec<RewardSource> {
        vec![
            RewardSource::new(6.0, 2.0, "1").unwrap(),
            RewardSource::new(5.0, 2.5, "2").unwrap(),
            RewardSource::new(3.0, 2.0, "3").unwrap(),
            RewardSource::new(3.0, 1.0, "4").unwrap(),
        ]
    }

    #[test]
    fn test_step_updates_chosen_arm() {
        let mut bandit = Bandit::epsilon_greedy(classic_arms(), 0.1, 42).unwrap();
        let turn = bandit.step(0).unwrap();

        let arm = bandit.arm(turn.arm).unwrap();
        assert_eq!(arm.pulls(), 1);
        assert_eq!(arm.estimate(), turn.reward);
        let total_pulls: u64 = bandit.arms().iter().map(|a| a.pulls()).sum();
        assert_eq!(total_pulls, 1);
    }

    #[test]
    fn test_run_pull_counts_match_history() {
        let mut bandit = Bandit::epsilon_greedy(classic_arms(), 0.1, 7).unwrap();
        let history = bandit.run(300).unwrap();
        assert_eq!(history.len(), 300);
        assert!(history.iter().enumerate().all(|(i, t)| t.turn == i));

        let summary = RunSummary::new(&bandit, &history);
        for report in &summary.arms {
            assert_eq!(report.pulls, report.selections as u64);
        }
        assert_eq!(summary.turns, 300);
    }

    #[test]
    fn test_estimates_are_means_of_history() {
        let mut bandit = Bandit::optimistic(classic_arms(), 10.0, 3).unwrap();
        let history = bandit.run(200).unwrap();

        for (index, arm) in bandit.arms().iter().enumerate() {
            let rewards: Vec<f64> = history
                .iter()
                .filter(|t| t.arm == index)
                .map(|t| t.reward)
                .collect();
            if rewards.is_empty() {
                assert_eq!(arm.estimate(), 10.0);
            } else {
                let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
                assert_abs_diff_eq!(arm.estimate(), mean, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut bandit = Bandit::epsilon_greedy(classic_arms(), 0.5, 1).unwrap();
        let history = bandit.run(50).unwrap();
        let summary = RunSummary::new(&bandit, &history);

        let total: f64 = history.iter().map(|t| t.reward).sum();
        assert_abs_diff_eq!(summary.total_reward, total, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.average_reward(), total / 50.0, epsilon = 1e-12);
        assert!(summary.most_selected().is_some());
    }

    #[test]
    fn test_empty_summary() {
        let bandit = Bandit::epsilon_greedy(classic_arms(), 0.1, 1).unwrap();
        let summary = RunSummary::new(&bandit, &[]);
        assert_eq!(summary.average_reward(), 0.0);
        assert!(summary.arms.iter().all(|r| r.selections == 0));
    }
}
