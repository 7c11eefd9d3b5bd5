//! Numerical runtime sanity checks
//!
//! The active backend is selected at compile time through feature flags, with
//! a CPU fallback when no accelerator feature (or a conflicting combination)
//! is enabled.

use crate::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::env;

/// Environment variable that overrides the compiled backend
///
/// Setting it to "cpu" pins runtime initialization to the CPU, which is the
/// escape hatch for continuous-integration hosts without accelerators.
pub const PLATFORM_ENV: &str = "POLARITY_PLATFORM";

/// Backend identifiers the sanity check recognizes
pub const KNOWN_PLATFORMS: [&str; 3] = ["cpu", "gpu", "tpu"];

#[cfg(all(feature = "gpu", not(feature = "tpu")))]
mod backend_impl {
    pub const PLATFORM: &str = "gpu";
}

#[cfg(all(feature = "tpu", not(feature = "gpu")))]
mod backend_impl {
    pub const PLATFORM: &str = "tpu";
}

// CPU fallback, also used when conflicting accelerator features are enabled
#[cfg(not(any(
    all(feature = "gpu", not(feature = "tpu")),
    all(feature = "tpu", not(feature = "gpu"))
)))]
mod backend_impl {
    pub const PLATFORM: &str = "cpu";
}

/// Identifier of the backend the runtime would currently use
///
/// The [`PLATFORM_ENV`] override takes precedence over the compiled backend.
pub fn detect() -> String {
    env::var(PLATFORM_ENV).unwrap_or_else(|_| backend_impl::PLATFORM.to_owned())
}

/// Assert that a backend identifier is one of the recognized platforms
///
/// Returns the identifier unchanged on success and fails loudly otherwise.
pub fn check_platform(platform: &str) -> Result<&str> {
    if !KNOWN_PLATFORMS.contains(&platform) {
        log::error!("Unknown device: {platform}");
        anyhow::bail!("unknown device: {platform}");
    }
    Ok(platform)
}

/// Pin subsequent runtime initialization to the CPU
pub fn pin_to_cpu() {
    env::set_var(PLATFORM_ENV, "cpu");
}

/// Split a seeded generator into independent child generators
///
/// Children are derived by drawing one seed per child from the parent state.
pub fn split(rng: &mut StdRng, count: usize) -> Vec<StdRng> {
    (0..count).map(|_| StdRng::seed_from_u64(rng.gen())).collect()
}

/// Smoke-test the random number machinery
///
/// Seeds a generator, splits it into ten substates and draws one value from
/// each. Nothing is checked beyond the absence of a crash.
pub fn split_smoke_test() {
    log::info!("Seeding the root generator");
    let mut key = StdRng::seed_from_u64(0);
    log::info!("Splitting the root generator");
    let mut subs = split(&mut key, 10);
    for sub in &mut subs {
        let _: u64 = sub.gen();
    }
    log::info!("All good!");
}
