//! Core type aliases, constants, and runtime utilities for ismcts.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the ismcts workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index of a player, in `0..players`.
pub type Player = usize;
/// Terminal rewards, accumulated scores, and exploration constants.
pub type Utility = f64;
/// Selection probabilities assigned by stochastic tree policies.
pub type Probability = f64;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Default UCB exploration bias, suited to payoffs on [0, 1].
pub const EXPLORATION: Utility = 0.7;
/// Default number of search iterations per decision.
pub const ITERATIONS: usize = 1000;
/// Floor for selection probabilities so importance weights stay finite.
pub const POLICY_MIN: Probability = 1e-6;

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================
/// Iteration count budget, e.g. `ISMCTS_ITERATIONS=5000`.
pub const ENV_ITERATIONS: &str = "ISMCTS_ITERATIONS";
/// Wall-clock budget, e.g. `ISMCTS_DURATION=250ms`.
pub const ENV_DURATION: &str = "ISMCTS_DURATION";
/// Worker thread count for parallel execution, e.g. `ISMCTS_THREADS=8`.
pub const ENV_THREADS: &str = "ISMCTS_THREADS";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Default worker count for parallel execution.
/// Reads `ISMCTS_THREADS` if set to a positive integer, otherwise
/// falls back to the number of logical cores.
pub fn threads() -> usize {
    std::env::var(ENV_THREADS)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or_else(num_cpus::get)
        .max(1)
}

/// Parse duration string like "250ms", "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(num) = s.strip_suffix("ms") {
        return num.parse::<u64>().ok().map(std::time::Duration::from_millis);
    }
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}

/// Initialize terminal logging at INFO, or DEBUG when `verbose` is set.
/// Subsequent calls are ignored.
#[cfg(feature = "logging")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::debug!("logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn durations_with_units() {
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration(" 5m "), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }

    #[test]
    fn durations_malformed() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("ms"), None);
        assert_eq!(parse_duration("10x"), None);
        assert_eq!(parse_duration("fast"), None);
    }

    #[test]
    #[cfg(feature = "logging")]
    fn logger_initializes_once() {
        log(false);
        log(true);
        log::info!("logger ready");
    }

    #[test]
    fn threads_positive() {
        assert!(threads() >= 1);
    }
}
