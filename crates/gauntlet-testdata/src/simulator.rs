//! Day-by-day activity simulator.

use crate::model::{DaySnapshot, UserEntry};
use crate::pools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for the day simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// RNG seed. `None` seeds from wall-clock time, so runs are not
    /// reproducible; pass an explicit seed for deterministic output.
    pub seed: Option<u64>,
    /// Inclusive range of signup batch sizes per day.
    pub signup_batch_size: (u32, u32),
    /// Usernames are prefixed with a random integer in `1..=username_salt_max`.
    pub username_salt_max: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            signup_batch_size: (6, 11),
            username_salt_max: 10_000,
        }
    }
}

impl SimulatorConfig {
    /// Fix the RNG seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the inclusive signup batch size range.
    pub fn with_signup_batch_size(mut self, min: u32, max: u32) -> Self {
        self.signup_batch_size = (min, max);
        self
    }
}

/// Generates an ordered sequence of [`DaySnapshot`]s.
///
/// Each day produces a fresh signup batch drawn from the adversarial pools
/// and a login batch sampled, without replacement, from the previous day's
/// signups. The simulation is a fold over `(day, previous signup batch)`;
/// no state is carried anywhere else.
pub struct DaySimulator {
    config: SimulatorConfig,
}

impl DaySimulator {
    /// Create a simulator with the given configuration.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Generate exactly `days` snapshots, day numbers `1..=days`.
    ///
    /// `days = 0` yields an empty sequence.
    pub fn generate(&self, days: u32) -> Vec<DaySnapshot> {
        let mut rng = self.rng();
        let mut snapshots = Vec::with_capacity(days as usize);
        let mut prev_signups: Vec<UserEntry> = Vec::new();

        for day in 1..=days {
            let snapshot = self.simulate_day(day, &prev_signups, &mut rng);
            prev_signups = snapshot.signups.clone().unwrap_or_default();
            snapshots.push(snapshot);
        }

        snapshots
    }

    /// Simulate a single day given the previous day's signup batch.
    ///
    /// Pure in `(day, prev_signups)` apart from RNG draws, so individual
    /// days can be exercised in isolation.
    pub fn simulate_day(
        &self,
        day: u32,
        prev_signups: &[UserEntry],
        rng: &mut StdRng,
    ) -> DaySnapshot {
        let logins = self.sample_logins(prev_signups, rng);
        let signups = self.generate_signups(rng);

        DaySnapshot {
            day,
            signups: Some(signups),
            // An empty sample is an absent batch, not an empty one.
            logins: if logins.is_empty() { None } else { Some(logins) },
        }
    }

    /// Sample `floor(pool / 2)` logins from the previous day's signups,
    /// without replacement. Emails are dropped; ids restart at 1.
    fn sample_logins(&self, prev_signups: &[UserEntry], rng: &mut StdRng) -> Vec<UserEntry> {
        let count = prev_signups.len() / 2;
        let mut pool: Vec<&UserEntry> = prev_signups.iter().collect();
        let mut logins = Vec::with_capacity(count);

        for i in 0..count {
            let picked = pool.remove(rng.gen_range(0..pool.len()));
            logins.push(UserEntry {
                id: i as u32 + 1,
                username: picked.username.clone(),
                password: picked.password.clone(),
                email: None,
            });
        }

        logins
    }

    /// Generate a fresh signup batch, independent of any prior day.
    fn generate_signups(&self, rng: &mut StdRng) -> Vec<UserEntry> {
        let (min, max) = self.config.signup_batch_size;
        let count = rng.gen_range(min..=max);

        (1..=count)
            .map(|id| UserEntry {
                id,
                username: format!(
                    "{}{}",
                    rng.gen_range(1..=self.config.username_salt_max),
                    pick(pools::USERNAMES, rng)
                ),
                password: pick(pools::PASSWORDS, rng).to_string(),
                email: Some(pick(pools::EMAILS, rng).to_string()),
            })
            .collect()
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(wall_clock_seed()),
        }
    }
}

/// Uniform choice from a fixed catalog.
fn pick<'a>(pool: &[&'a str], rng: &mut StdRng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> DaySimulator {
        DaySimulator::new(SimulatorConfig::default().with_seed(seed))
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(seeded(1).generate(0).is_empty());
    }

    #[test]
    fn test_day_numbers_are_sequential() {
        let days = seeded(7).generate(10);
        assert_eq!(days.len(), 10);
        for (i, snapshot) in days.iter().enumerate() {
            assert_eq!(snapshot.day, i as u32 + 1);
        }
    }

    #[test]
    fn test_day_one_has_no_logins() {
        let days = seeded(3).generate(1);
        assert_eq!(days[0].logins, None);
        assert!(days[0].signup_count() >= 6);
        assert!(days[0].signup_count() <= 11);
    }

    #[test]
    fn test_login_count_is_half_of_prior_signups() {
        let days = seeded(42).generate(8);
        for pair in days.windows(2) {
            assert_eq!(pair[1].login_count(), pair[0].signup_count() / 2);
        }
    }

    #[test]
    fn test_logins_drawn_from_prior_day_without_replacement() {
        let days = seeded(99).generate(5);
        for pair in days.windows(2) {
            let prior: HashSet<(&str, &str)> = pair[0]
                .signups
                .as_ref()
                .expect("signups always present")
                .iter()
                .map(|u| (u.username.as_str(), u.password.as_str()))
                .collect();

            let mut seen = HashSet::new();
            for login in pair[1].logins.as_deref().unwrap_or(&[]) {
                let account = (login.username.as_str(), login.password.as_str());
                assert!(prior.contains(&account), "login not from prior signups");
                assert!(seen.insert(account), "account sampled twice in one day");
            }
        }
    }

    #[test]
    fn test_logins_never_carry_email() {
        let days = seeded(5).generate(6);
        for snapshot in &days {
            for login in snapshot.logins.as_deref().unwrap_or(&[]) {
                assert_eq!(login.email, None);
            }
        }
    }

    #[test]
    fn test_signup_emails_come_from_the_pool() {
        let days = seeded(11).generate(4);
        for snapshot in &days {
            for signup in snapshot.signups.as_deref().unwrap_or(&[]) {
                let email = signup.email.as_deref().expect("signups carry email");
                assert!(pools::EMAILS.contains(&email));
            }
        }
    }

    #[test]
    fn test_batch_ids_restart_at_one() {
        let days = seeded(23).generate(3);
        for snapshot in &days {
            for batch in [&snapshot.signups, &snapshot.logins] {
                if let Some(entries) = batch {
                    for (i, entry) in entries.iter().enumerate() {
                        assert_eq!(entry.id, i as u32 + 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_usernames_are_salted_pool_values() {
        let days = seeded(17).generate(2);
        for signup in days[0].signups.as_deref().unwrap_or(&[]) {
            let suffix_matches = pools::USERNAMES
                .iter()
                .any(|seed| signup.username.ends_with(seed));
            assert!(suffix_matches, "username {:?} not pool-derived", signup.username);
            // Salt prefix is a bare integer.
            let digits: String = signup
                .username
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            let salt: u32 = digits.parse().expect("salt prefix");
            assert!((1..=10_000).contains(&salt));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = seeded(1234).generate(6);
        let b = seeded(1234).generate(6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_odd_pool_floors_the_login_count() {
        let config = SimulatorConfig::default().with_seed(8).with_signup_batch_size(7, 7);
        let days = DaySimulator::new(config).generate(2);
        assert_eq!(days[0].signup_count(), 7);
        assert_eq!(days[1].login_count(), 3);
    }
}
