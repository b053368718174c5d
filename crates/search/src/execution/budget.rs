use ismcts_core::ENV_DURATION;
use ismcts_core::ENV_ITERATIONS;
use ismcts_core::ITERATIONS;
use std::time::Duration;

/// How much search to spend on one decision.
///
/// Either a number of iterations or a wall-clock duration, never both.
/// Durations are checked between iterations, so a started iteration
/// always finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    Count(usize),
    Time(Duration),
}

impl Default for Budget {
    fn default() -> Self {
        Self::Count(ITERATIONS)
    }
}

impl From<usize> for Budget {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<Duration> for Budget {
    fn from(time: Duration) -> Self {
        Self::Time(time)
    }
}

impl Budget {
    /// Iterations in count mode, zero in time mode.
    pub fn count(&self) -> usize {
        match self {
            Self::Count(n) => *n,
            Self::Time(_) => 0,
        }
    }
    /// Duration in time mode, zero in count mode.
    pub fn time(&self) -> Duration {
        match self {
            Self::Count(_) => Duration::ZERO,
            Self::Time(t) => *t,
        }
    }
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Count(n) => *n > 0,
            Self::Time(t) => !t.is_zero(),
        }
    }
    /// Share of worker `part` out of `parts`. Counts split as evenly as
    /// possible with the remainder going to the first workers; every
    /// worker gets the full duration.
    pub fn split(&self, parts: usize, part: usize) -> Self {
        assert!(part < parts, "worker {} out of {}", part, parts);
        match self {
            Self::Count(n) => Self::Count(n / parts + usize::from(part < n % parts)),
            Self::Time(t) => Self::Time(*t),
        }
    }
    /// Parse "5000" as a count, or "250ms", "30s", "5m", "2h", "1d" as a
    /// duration. Zero and malformed input yield None.
    pub fn parse(s: &str) -> Option<Self> {
        let budget = match ismcts_core::parse_duration(s) {
            Some(time) => Some(Self::Time(time)),
            None => s.trim().parse::<usize>().ok().map(Self::Count),
        };
        budget.filter(Self::is_positive)
    }
    /// Budget from `ISMCTS_ITERATIONS`, else `ISMCTS_DURATION`.
    pub fn from_env() -> Option<Self> {
        let count = std::env::var(ENV_ITERATIONS)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(Self::Count);
        let time = || {
            std::env::var(ENV_DURATION)
                .ok()
                .and_then(|s| ismcts_core::parse_duration(&s))
                .map(Self::Time)
        };
        count.filter(Self::is_positive).or_else(|| time().filter(Self::is_positive))
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{} iterations", n),
            Self::Time(t) => write!(f, "{:?}", t),
        }
    }
}
