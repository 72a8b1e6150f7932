//! Data model for simulated account activity.

use serde::{Deserialize, Serialize};

/// One signup or login action.
///
/// Values are deliberately hostile: usernames and passwords come from fixed
/// adversarial catalogs and may contain path traversal sequences, markup,
/// control characters, or nothing at all. No validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Per-batch sequence number, starting at 1. Not an account identifier:
    /// signup and login batches count independently, and counters restart
    /// every day.
    pub id: u32,
    /// Username; arbitrary bytes, never validated.
    pub username: String,
    /// Password; may be empty or very long.
    pub password: String,
    /// Email address. Present on signup entries, always absent on login
    /// entries, even when the originating signup carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One simulated day of signup and login activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// 1-based day number, strictly increasing with no gaps.
    pub day: u32,
    /// Accounts created this day. `None` means no signup batch occurred,
    /// which is distinct from an empty batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signups: Option<Vec<UserEntry>>,
    /// Logins this day, drawn from the previous day's signups. Day 1 has no
    /// prior pool, so its login batch is always `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logins: Option<Vec<UserEntry>>,
}

impl DaySnapshot {
    /// Number of signup entries (0 when the batch is absent).
    pub fn signup_count(&self) -> usize {
        self.signups.as_ref().map_or(0, Vec::len)
    }

    /// Number of login entries (0 when the batch is absent).
    pub fn login_count(&self) -> usize {
        self.logins.as_ref().map_or(0, Vec::len)
    }
}

/// One-line summary of a generated run, for CLI output.
pub fn summarize(days: &[DaySnapshot]) -> String {
    let signups: usize = days.iter().map(DaySnapshot::signup_count).sum();
    let logins: usize = days.iter().map(DaySnapshot::login_count).sum();
    format!(
        "Generated {} days: {} signups, {} logins",
        days.len(),
        signups,
        logins
    )
}
