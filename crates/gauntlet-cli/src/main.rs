//! CLI for adversarial account-fixture generation.

use anyhow::Result;
use clap::Parser;
use gauntlet_cli::{pipeline, OutputPaths};
use gauntlet_testdata::SimulatorConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gauntlet")]
#[command(about = "Generate adversarial signup/login fixtures and compile them to Rust data")]
struct Args {
    /// Number of days to simulate
    days: u32,

    /// Random seed for reproducible output (defaults to wall-clock time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path for the YAML interchange document
    #[arg(long, default_value = "db.yaml")]
    yaml_out: PathBuf,

    /// Path for the generated Rust source
    #[arg(long, default_value = "generated_data.rs")]
    rust_out: PathBuf,

    /// Quiet mode (no summary output)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SimulatorConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let paths = OutputPaths {
        yaml: args.yaml_out,
        rust: args.rust_out,
    };

    let report = pipeline::run(args.days, config, &paths)?;

    if !args.quiet {
        println!("{}", report.summary);
        println!("Interchange: {}", paths.yaml.display());
        println!("Rust source: {}", paths.rust.display());
    }

    Ok(())
}
