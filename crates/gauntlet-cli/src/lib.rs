//! Library surface for the gauntlet CLI, exposed so the pipeline can be
//! exercised from integration tests without spawning the binary.

pub mod errors;
pub mod pipeline;

pub use errors::CliError;
pub use pipeline::{run, OutputPaths, RunReport};
