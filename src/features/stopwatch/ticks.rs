//! Tick sources that drive the stopwatch.
//!
//! The stopwatch never reads the clock itself. It asks its tick source how
//! many fixed-period ticks have become due since the last poll, so tests
//! can substitute [`ManualTicks`] and get fully deterministic elapsed time.

use std::time::{Duration, Instant};

/// Something that reports elapsed fixed-period ticks.
pub trait TickSource {
    /// Discard anything accrued so far and start counting from now.
    fn restart(&mut self);

    /// Number of ticks that became due since the last call (or restart).
    fn due_ticks(&mut self) -> u64;
}

/// Wall-clock ticks at a fixed period.
///
/// Any remainder shorter than one period is carried over to the next poll,
/// so the tick count stays proportional to wall-clock time no matter how
/// irregularly it is polled.
#[derive(Debug, Clone)]
pub struct IntervalTicks {
    period: Duration,
    anchor: Instant,
}

impl IntervalTicks {
    /// Ticks every `period`. A zero period is treated as one nanosecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_nanos(1)),
            anchor: Instant::now(),
        }
    }

    /// Ticks every `ms` milliseconds.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// The tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTicks {
    fn restart(&mut self) {
        self.anchor = Instant::now();
    }

    fn due_ticks(&mut self) -> u64 {
        let period_ns = self.period.as_nanos();
        let ticks = self.anchor.elapsed().as_nanos() / period_ns;
        if ticks > 0 {
            let advance = u64::try_from(ticks * period_ns).unwrap_or(u64::MAX);
            self.anchor += Duration::from_nanos(advance);
        }
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}

/// Ticks pushed by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    pending: u64,
}

impl ManualTicks {
    /// A source with no ticks pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: 0 }
    }

    /// Make `n` more ticks due.
    pub fn push(&mut self, n: u64) {
        self.pending = self.pending.saturating_add(n);
    }
}

impl TickSource for ManualTicks {
    fn restart(&mut self) {
        self.pending = 0;
    }

    fn due_ticks(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ticks_drain() {
        let mut ticks = ManualTicks::new();
        ticks.push(3);
        ticks.push(2);
        assert_eq!(ticks.due_ticks(), 5);
        assert_eq!(ticks.due_ticks(), 0);
    }

    #[test]
    fn test_manual_restart_discards() {
        let mut ticks = ManualTicks::new();
        ticks.push(7);
        ticks.restart();
        assert_eq!(ticks.due_ticks(), 0);
    }

    #[test]
    fn test_interval_ticks_follow_wall_clock() {
        let mut ticks = IntervalTicks::from_millis(5);
        std::thread::sleep(Duration::from_millis(30));
        let first = ticks.due_ticks();
        assert!(first >= 6, "expected at least 6 ticks, got {first}");

        // Remainder carried: an immediate second poll reports nothing new.
        assert!(ticks.due_ticks() <= 1);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let ticks = IntervalTicks::new(Duration::ZERO);
        assert_eq!(ticks.period(), Duration::from_nanos(1));
    }
}
