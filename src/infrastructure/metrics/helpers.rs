//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{
    AUTH_FAILURES_TOTAL, GENERATIONS_TOTAL, GENERATION_REPLACEMENTS, LOGINS_TOTAL,
    TEMPLATE_OPERATIONS_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording template store metrics
pub struct TemplateMetrics;

impl TemplateMetrics {
    pub fn record(operation: &str) {
        TEMPLATE_OPERATIONS_TOTAL
            .with_label_values(&[operation])
            .inc();
    }
}

/// Helper struct for recording generation metrics
pub struct GenerationMetrics;

impl GenerationMetrics {
    pub fn record(replacements: usize) {
        GENERATIONS_TOTAL.inc();
        GENERATION_REPLACEMENTS.observe(replacements as f64);
    }
}

/// Helper struct for recording auth metrics
pub struct AuthMetrics;

impl AuthMetrics {
    pub fn record_login() {
        LOGINS_TOTAL.inc();
    }

    pub fn record_failure(reason: &str) {
        AUTH_FAILURES_TOTAL.with_label_values(&[reason]).inc();
    }
}
