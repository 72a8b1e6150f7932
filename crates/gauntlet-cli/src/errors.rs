use gauntlet_codegen::CodegenError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to serialize day snapshots to YAML:\n  {source}")]
    InterchangeSerialize {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to compile interchange data to Rust source:\n  {source}")]
    Codegen {
        #[from]
        source: CodegenError,
    },

    #[error("Failed to write {path}:\n  {source}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
