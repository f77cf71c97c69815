//! Per-tick timing metrics.

/// Wall-clock timings for the most recent tick, in microseconds.
///
/// Collected on every `step()` with plain [`std::time::Instant`]
/// differencing. All phases of the tick are covered, so
/// `sense_us + decide_us + apply_us <= total_us` up to rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Time spent assembling percepts.
    pub sense_us: u64,
    /// Time spent inside policy `decide()` calls.
    pub decide_us: u64,
    /// Time spent in the transition function and scoreboard settle.
    pub apply_us: u64,
    /// Total time for the whole tick.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.sense_us + m.decide_us + m.apply_us, 0);
    }
}
