use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Counters for one decision's search.
/// Iterations are counted by workers as they finish; nodes are counted
/// once the forests are collected.
#[derive(Debug)]
pub struct Metrics {
    iterations: AtomicUsize,
    nodes: AtomicUsize,
    start: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            iterations: AtomicUsize::new(0),
            nodes: AtomicUsize::new(0),
            start: Instant::now(),
        }
    }
}

impl Metrics {
    pub fn inc_iterations(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }
    pub fn add_nodes(&self, n: usize) {
        self.nodes.fetch_add(n, Ordering::Relaxed);
    }
    pub fn iterations(&self) -> usize {
        self.iterations.load(Ordering::Relaxed)
    }
    pub fn nodes(&self) -> usize {
        self.nodes.load(Ordering::Relaxed)
    }
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
    /// Aligned columns with iteration throughput.
    pub fn format(&self) -> String {
        let rate = self.iterations() as f64 / self.elapsed().as_secs_f64().max(1e-9);
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("iters {}", self.iterations()),
            format!("nodes {}", self.nodes()),
            format!("time {:.1?}", self.elapsed()),
            format!("I/sec {:.1}", rate),
        )
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = Metrics::default();
        (0..5).for_each(|_| metrics.inc_iterations());
        metrics.add_nodes(12);
        metrics.add_nodes(3);
        assert_eq!(metrics.iterations(), 5);
        assert_eq!(metrics.nodes(), 15);
        assert!(metrics.to_string().starts_with("iters 5"));
    }
}
