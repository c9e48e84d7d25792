//! Runs both policies on the same four-arm problem and prints what they learned.
//!
//! Set `RUST_LOG=banditlab=debug` to see construction and seeding events.

use banditlab::{PolicyConfig, RunSummary, SimulationConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("banditlab: Epsilon-Greedy vs Optimistic Initial Value\n");
    println!("{}", "=".repeat(60));

    let base = SimulationConfig::default();
    println!("True arm distributions:");
    for arm in &base.arms {
        println!("  {}: mean {:.1}, std dev {:.1}", arm.id, arm.mean, arm.std_dev);
    }

    let policies = [
        ("Epsilon-Greedy (0.1)", PolicyConfig::EpsilonGreedy { epsilon: 0.1 }),
        (
            "Optimistic Initial Value (10)",
            PolicyConfig::OptimisticInitialValue {
                initial_value: 10.0,
            },
        ),
    ];

    for (name, policy) in policies {
        println!("\n{}", name);
        println!("{}", "-".repeat(name.len()));

        let config = SimulationConfig {
            policy,
            ..base.clone()
        };

        let mut bandit = match config.build() {
            Ok(bandit) => bandit,
            Err(e) => {
                eprintln!("  invalid configuration: {}", e);
                continue;
            }
        };

        let history = match bandit.run(config.turns) {
            Ok(history) => history,
            Err(e) => {
                eprintln!("  run failed: {}", e);
                continue;
            }
        };

        let summary = RunSummary::new(&bandit, &history);
        println!(
            "  Total reward: {:.1} over {} turns (average {:.3})",
            summary.total_reward,
            summary.turns,
            summary.average_reward()
        );
        for report in &summary.arms {
            println!(
                "    {}: {} pulls, estimate {:.3}",
                report.id, report.pulls, report.estimate
            );
        }
        if let Some(best) = summary.most_selected() {
            println!("  Most selected arm: {}", best.id);
        }
    }
}
