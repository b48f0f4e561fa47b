use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

use crate::errors::{NotesApiError, NotesApiResult};

pub struct Telemetry;

impl Telemetry {
    /// Installs the global Prometheus recorder and returns the render handle.
    pub fn install_prometheus() -> NotesApiResult<PrometheusHandle> {
        PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| NotesApiError::Configuration(format!("metrics recorder: {e}")))
    }

    pub fn record_outcome(outcome: &str) {
        counter!("notes_requests_total", "outcome" => outcome.to_string()).increment(1);
    }

    pub fn record_sentences(count: usize) {
        counter!("notes_sentences_total").increment(count as u64);
    }

    pub fn record_latency(duration_ms: f64) {
        histogram!("notes_generation_duration_ms").record(duration_ms);
    }
}

pub struct RequestTimer {
    start: Instant
}

impl RequestTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now()
        }
    }

    pub fn finish(self) -> f64 {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        Telemetry::record_latency(duration);
        duration
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        Telemetry::record_outcome("success");
        Telemetry::record_sentences(3);
        let elapsed = RequestTimer::new().finish();
        assert!(elapsed >= 0.0);
    }
}
