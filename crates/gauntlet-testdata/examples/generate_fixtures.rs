//! Example: generate a week of adversarial activity and print the YAML
//! interchange document.
//!
//! Run with: cargo run -p gauntlet-testdata --example generate_fixtures

use gauntlet_testdata::{summarize, DaySimulator, SimulatorConfig};

fn main() -> anyhow::Result<()> {
    // Fixed seed so the example prints the same document every run.
    let config = SimulatorConfig::default().with_seed(42);
    let days = DaySimulator::new(config).generate(7);

    println!("{}", summarize(&days));
    println!();
    println!("{}", serde_yaml::to_string(&days)?);

    Ok(())
}
