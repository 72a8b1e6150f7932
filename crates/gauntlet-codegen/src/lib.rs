//! Compiles gauntlet interchange documents into literal Rust data.
//!
//! The simulator writes its day snapshots to a YAML interchange document;
//! this crate turns that document into a Rust source file defining
//! `get_days_data() -> Vec<DayData>`, so the downstream test harness
//! compiles the fixtures straight in with no runtime parsing step.
//!
//! Adversarial payloads are transmitted faithfully: only the five
//! characters Rust string literals require (`\`, `"`, newline, carriage
//! return, tab) are escaped, everything else passes through byte-for-byte.
//!
//! ```rust
//! use gauntlet_codegen::RustEmitter;
//!
//! let yaml = "- day: 1\n  signups:\n  - id: 1\n    username: alice\n    password: hunter2\n";
//! let source = RustEmitter::new().render_document(yaml)?;
//! assert!(source.contains("pub fn get_days_data()"));
//! # Ok::<(), gauntlet_codegen::CodegenError>(())
//! ```

pub mod emit;
pub mod error;
pub mod escape;
pub mod interchange;

// Re-export main types for convenience
pub use emit::RustEmitter;
pub use error::CodegenError;
pub use escape::escape_rust_string;
pub use interchange::{parse_document, RawDay, RawEntry};
