//! Pipeline metrics and observability module.
//!
//! Counts how often each fallback path of the multilingual pipeline is taken,
//! so a degrading translation backend shows up in numbers rather than only in
//! log lines.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Process-wide pipeline counters.
pub struct PipelineMetrics {
    /// Calls to the multilingual entry point
    requests: AtomicUsize,

    /// Detections that fell back to English
    detections_defaulted: AtomicUsize,

    /// Translations answered from the literal phrase table
    literal_mappings: AtomicUsize,

    /// Calls made to the external translator
    translator_calls: AtomicUsize,

    /// External translator calls that failed
    translator_failures: AtomicUsize,

    /// Translations rejected by the quality gate
    quality_rejections: AtomicUsize,

    /// Grammar runs that fell back to spelling out the input
    grammar_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<PipelineMetrics> = OnceLock::new();

impl PipelineMetrics {
    fn new() -> Self {
        Self {
            requests: AtomicUsize::new(0),
            detections_defaulted: AtomicUsize::new(0),
            literal_mappings: AtomicUsize::new(0),
            translator_calls: AtomicUsize::new(0),
            translator_failures: AtomicUsize::new(0),
            quality_rejections: AtomicUsize::new(0),
            grammar_fallbacks: AtomicUsize::new(0),
        }
    }

    /// Get the global pipeline metrics instance.
    pub fn global() -> &'static PipelineMetrics {
        METRICS.get_or_init(PipelineMetrics::new)
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detection_defaulted(&self) {
        self.detections_defaulted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_literal_mapping(&self) {
        self.literal_mappings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translator_call(&self) {
        self.translator_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translator_failure(&self) {
        self.translator_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_quality_rejection(&self) {
        self.quality_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_grammar_fallback(&self) {
        self.grammar_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of all counters with derived rates.
    pub fn report(&self) -> MetricsReport {
        let calls = self.translator_calls.load(Ordering::Relaxed);
        let failures = self.translator_failures.load(Ordering::Relaxed);
        let rejections = self.quality_rejections.load(Ordering::Relaxed);

        let translator_success_rate = if calls > 0 {
            (calls.saturating_sub(failures) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };
        let succeeded = calls.saturating_sub(failures);
        let quality_rejection_rate = if succeeded > 0 {
            (rejections as f64 / succeeded as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            requests: self.requests.load(Ordering::Relaxed),
            detections_defaulted: self.detections_defaulted.load(Ordering::Relaxed),
            literal_mappings: self.literal_mappings.load(Ordering::Relaxed),
            translator_calls: calls,
            translator_failures: failures,
            translator_success_rate,
            quality_rejections: rejections,
            quality_rejection_rate,
            grammar_fallbacks: self.grammar_fallbacks.load(Ordering::Relaxed),
        }
    }
}

/// Metrics report containing current pipeline statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub requests: usize,
    pub detections_defaulted: usize,
    pub literal_mappings: usize,
    pub translator_calls: usize,
    pub translator_failures: usize,

    /// Share of translator calls that returned text, as a percentage (0-100)
    pub translator_success_rate: f64,

    pub quality_rejections: usize,

    /// Share of returned translations the quality gate rejected (0-100)
    pub quality_rejection_rate: f64,

    pub grammar_fallbacks: usize,
}
