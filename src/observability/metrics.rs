use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::domain::{Decision, EvaluationResult};

/// Metrics registry for the application.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total evaluations performed
    pub evaluations_total: AtomicU64,

    /// Evaluations by outcome
    pub outcome_award_full: AtomicU64,
    pub outcome_award_partial: AtomicU64,
    pub outcome_review: AtomicU64,
    pub outcome_reject: AtomicU64,
    pub outcome_no_match: AtomicU64,

    /// Requests refused before evaluation (bad facts)
    pub invalid_requests_total: AtomicU64,

    /// Evaluation latency buckets (microseconds)
    pub latency_under_10us: AtomicU64,
    pub latency_10_100us: AtomicU64,
    pub latency_100us_1ms: AtomicU64,
    pub latency_over_1ms: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        MetricsRegistry::default()
    }

    /// Record an evaluation outcome.
    pub fn record_outcome(&self, result: &EvaluationResult) {
        self.evaluations_total.fetch_add(1, Ordering::Relaxed);

        let counter = match result.decision() {
            Some(Decision::AwardFull) => &self.outcome_award_full,
            Some(Decision::AwardPartial) => &self.outcome_award_partial,
            Some(Decision::Review) => &self.outcome_review,
            Some(Decision::Reject) => &self.outcome_reject,
            None => &self.outcome_no_match,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request whose facts failed validation.
    pub fn record_invalid_request(&self) {
        self.invalid_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record evaluation latency.
    pub fn record_latency(&self, start: Instant) {
        let micros = start.elapsed().as_micros() as u64;

        let bucket = if micros < 10 {
            &self.latency_under_10us
        } else if micros < 100 {
            &self.latency_10_100us
        } else if micros < 1000 {
            &self.latency_100us_1ms
        } else {
            &self.latency_over_1ms
        };
        bucket.fetch_add(1, Ordering::Relaxed);
    }

    /// Cumulative latency counts for the `le` buckets, smallest bound first.
    pub fn latency_buckets(&self) -> [u64; 4] {
        let mut cumulative = [0u64; 4];
        let mut running = 0u64;
        for (slot, counter) in cumulative.iter_mut().zip([
            &self.latency_under_10us,
            &self.latency_10_100us,
            &self.latency_100us_1ms,
            &self.latency_over_1ms,
        ]) {
            running += counter.load(Ordering::Relaxed);
            *slot = running;
        }
        cumulative
    }

    /// Export metrics in Prometheus format.
    pub fn to_prometheus(&self) -> String {
        let [le_10us, le_100us, le_1ms, le_inf] = self.latency_buckets();

        format!(
            r#"# HELP scholarship_evaluations_total Total number of evaluations
# TYPE scholarship_evaluations_total counter
scholarship_evaluations_total {}

# HELP scholarship_outcomes Evaluations by outcome
# TYPE scholarship_outcomes counter
scholarship_outcomes{{outcome="award_full"}} {}
scholarship_outcomes{{outcome="award_partial"}} {}
scholarship_outcomes{{outcome="review"}} {}
scholarship_outcomes{{outcome="reject"}} {}
scholarship_outcomes{{outcome="no_match"}} {}

# HELP scholarship_invalid_requests_total Requests rejected before evaluation
# TYPE scholarship_invalid_requests_total counter
scholarship_invalid_requests_total {}

# HELP scholarship_evaluation_latency_bucket Evaluation latency histogram
# TYPE scholarship_evaluation_latency_bucket counter
scholarship_evaluation_latency_bucket{{le="0.00001"}} {}
scholarship_evaluation_latency_bucket{{le="0.0001"}} {}
scholarship_evaluation_latency_bucket{{le="0.001"}} {}
scholarship_evaluation_latency_bucket{{le="+Inf"}} {}
"#,
            self.evaluations_total.load(Ordering::Relaxed),
            self.outcome_award_full.load(Ordering::Relaxed),
            self.outcome_award_partial.load(Ordering::Relaxed),
            self.outcome_review.load(Ordering::Relaxed),
            self.outcome_reject.load(Ordering::Relaxed),
            self.outcome_no_match.load(Ordering::Relaxed),
            self.invalid_requests_total.load(Ordering::Relaxed),
            le_10us,
            le_100us,
            le_1ms,
            le_inf,
        )
    }
}

/// Guard for timing operations.
pub struct TimingGuard<'a> {
    registry: &'a MetricsRegistry,
    start: Instant,
}

impl<'a> TimingGuard<'a> {
    pub fn new(registry: &'a MetricsRegistry) -> Self {
        TimingGuard {
            registry,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for TimingGuard<'a> {
    fn drop(&mut self) {
        self.registry.record_latency(self.start);
    }
}
