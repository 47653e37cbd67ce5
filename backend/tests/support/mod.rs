//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use school_compare::db::LocalRepository;
use school_compare::models::{
    Availability, Coordinates, Metric, SchoolDetails, SimilarSchool, UnavailableReason, Urn,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Path of the sample dataset shipped with the crate.
pub fn sample_dataset_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/schools.json")
}

/// Repository loaded from the sample dataset.
pub fn sample_repository() -> LocalRepository {
    LocalRepository::load_from_file(sample_dataset_path()).expect("sample dataset loads")
}

/// A peer school with the attributes the comparison pipeline reads.
pub fn peer(
    urn: u32,
    name: &str,
    region: Option<&str>,
    local_authority: Option<&str>,
    attainment8: Option<f64>,
) -> SimilarSchool {
    let mut details = SchoolDetails::new(Urn::new(urn), name);
    details.region = Availability::from_option(region.map(str::to_string));
    details.urban_rural = Availability::Available("Urban city and town".to_string());
    details.local_authority = Availability::from_option(local_authority.map(str::to_string));
    details.coordinates = Availability::Available(Coordinates::new(
        51.0 + f64::from(urn % 100) / 100.0,
        -1.0,
    ));
    let attainment8 = match attainment8 {
        Some(value) => Availability::Available(value),
        None => Availability::Unavailable(UnavailableReason::Suppressed),
    };
    details.measures.set(Metric::Attainment8, attainment8);
    SimilarSchool::from(&details)
}
