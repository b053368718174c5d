use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Iterations left to hand out to workers sharing a count budget.
#[derive(Debug)]
pub struct Countdown(AtomicUsize);

impl Countdown {
    pub fn new(count: usize) -> Self {
        Self(AtomicUsize::new(count))
    }
    /// Claim up to `chunk` iterations, returning how many were granted.
    /// Zero means the budget is spent.
    pub fn take(&self, chunk: usize) -> usize {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| {
                (left > 0).then(|| left - left.min(chunk))
            })
            .map(|left| left.min(chunk))
            .unwrap_or(0)
    }
    pub fn remaining(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_never_exceed_total() {
        let countdown = Countdown::new(10);
        assert_eq!(countdown.take(4), 4);
        assert_eq!(countdown.take(4), 4);
        assert_eq!(countdown.take(4), 2);
        assert_eq!(countdown.take(4), 0);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn concurrent_claims_exact() {
        let countdown = Countdown::new(10_000);
        let claimed = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    loop {
                        match countdown.take(1) {
                            0 => break,
                            n => claimed.fetch_add(n, Ordering::Relaxed),
                        };
                    }
                });
            }
        });
        assert_eq!(claimed.load(Ordering::Relaxed), 10_000);
    }
}
