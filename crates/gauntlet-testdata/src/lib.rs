//! Adversarial test data generation for gauntlet.
//!
//! This crate simulates multi-day account activity (signups and logins) for
//! exercising a downstream user-account service. The generated values are
//! structurally malicious on purpose: oversized strings, injection payloads,
//! empty and degenerate fields, non-ASCII content. Nothing is validated or
//! sanitized.
//!
//! Each simulated day carries a fresh signup batch and a login batch sampled
//! from the *previous* day's signups, so the data has realistic temporal
//! correlation while staying cheap to generate.
//!
//! # Quick Start
//!
//! ```rust
//! use gauntlet_testdata::{DaySimulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::default().with_seed(42);
//! let days = DaySimulator::new(config).generate(7);
//!
//! assert_eq!(days.len(), 7);
//! assert!(days[0].logins.is_none()); // no prior day to log in from
//! ```
//!
//! By default the RNG is seeded from wall-clock time and runs are not
//! reproducible; fix the seed with [`SimulatorConfig::with_seed`] when
//! determinism matters (tests, bisecting a bad fixture).

pub mod model;
pub mod pools;
pub mod simulator;

// Re-export main types for convenience
pub use model::{summarize, DaySnapshot, UserEntry};
pub use simulator::{DaySimulator, SimulatorConfig};
