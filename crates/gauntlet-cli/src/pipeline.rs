//! The simulate → interchange → codegen pipeline.

use crate::errors::CliError;
use gauntlet_codegen::RustEmitter;
use gauntlet_testdata::{summarize, DaySimulator, SimulatorConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the two artifacts land.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// YAML interchange document.
    pub yaml: PathBuf,
    /// Generated Rust source.
    pub rust: PathBuf,
}

impl OutputPaths {
    /// Default artifact names (`db.yaml`, `generated_data.rs`) under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            yaml: dir.join("db.yaml"),
            rust: dir.join("generated_data.rs"),
        }
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunReport {
    /// Number of days simulated.
    pub days: u32,
    /// Human-readable summary of the generated activity.
    pub summary: String,
}

/// Simulate `days` of activity, persist the interchange document, and emit
/// the compiled-in Rust fixture source.
///
/// Both artifacts are rendered fully in memory before either file is
/// written, so a failing run commits no partial output.
pub fn run(days: u32, config: SimulatorConfig, paths: &OutputPaths) -> Result<RunReport, CliError> {
    let snapshots = DaySimulator::new(config).generate(days);

    let yaml = serde_yaml::to_string(&snapshots)
        .map_err(|source| CliError::InterchangeSerialize { source })?;
    let rust = RustEmitter::new().render_document(&yaml)?;

    write_artifact(&paths.yaml, &yaml)?;
    write_artifact(&paths.rust, &rust)?;

    Ok(RunReport {
        days,
        summary: summarize(&snapshots),
    })
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}
