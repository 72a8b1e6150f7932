//! End-to-end test for the simulate → interchange → codegen pipeline.

use gauntlet_cli::{pipeline, OutputPaths};
use gauntlet_testdata::{DaySnapshot, SimulatorConfig};
use tempfile::TempDir;

fn seeded_config() -> SimulatorConfig {
    SimulatorConfig::default().with_seed(20240817)
}

#[test]
fn test_pipeline_writes_both_artifacts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let paths = OutputPaths::in_dir(dir.path());

    let report = pipeline::run(4, seeded_config(), &paths)?;
    assert_eq!(report.days, 4);
    assert!(report.summary.starts_with("Generated 4 days"));

    // The interchange document round-trips to valid snapshots with the
    // simulation invariants intact.
    let yaml = std::fs::read_to_string(&paths.yaml)?;
    let days: Vec<DaySnapshot> = serde_yaml::from_str(&yaml)?;
    assert_eq!(days.len(), 4);
    assert_eq!(days[0].logins, None);
    for (i, pair) in days.windows(2).enumerate() {
        assert_eq!(pair[0].day, i as u32 + 1);
        assert_eq!(pair[1].login_count(), pair[0].signup_count() / 2);
    }

    // The generated source defines the fixture entry point and one record
    // literal per day.
    let rust = std::fs::read_to_string(&paths.rust)?;
    assert!(rust.starts_with("// Auto-generated from YAML data"));
    assert!(rust.contains("pub fn get_days_data() -> Vec<DayData>"));
    assert_eq!(rust.matches("DayData {").count(), 4);

    Ok(())
}

#[test]
fn test_zero_days_yields_empty_literal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let paths = OutputPaths::in_dir(dir.path());

    pipeline::run(0, seeded_config(), &paths)?;

    let rust = std::fs::read_to_string(&paths.rust)?;
    assert!(rust.contains("vec![\n    ]"));
    assert!(!rust.contains("DayData {"));

    Ok(())
}

#[test]
fn test_adversarial_payloads_survive_to_source() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let paths = OutputPaths::in_dir(dir.path());

    // Enough days that the fixed pools are well covered.
    pipeline::run(30, seeded_config(), &paths)?;

    let rust = std::fs::read_to_string(&paths.rust)?;
    // Payloads pass through unsanitized; only literal-breaking characters
    // get escaped, and none of the pool values contain those.
    assert!(rust.contains("../../../../etc/passwd"));
    assert!(rust.contains("<script>alert('pwned')</script>"));
    assert!(rust.contains("oscar@@doubleatsign.com"));

    Ok(())
}
