//! Prometheus metrics for the template service.
//!
//! - Template store operations by kind
//! - Generation requests and how many placeholders they filled
//! - Logins and authentication failures by reason

mod helpers;

pub use helpers::{encode_metrics, AuthMetrics, GenerationMetrics, TemplateMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "tmpl";

lazy_static! {
    // ============================================================================
    // Template Store Metrics
    // ============================================================================

    /// Template store operations by kind (list, get, create, update, delete)
    pub static ref TEMPLATE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_template_operations_total", METRIC_PREFIX),
        "Total template store operations",
        &["operation"]
    ).unwrap();

    // ============================================================================
    // Generation Metrics
    // ============================================================================

    /// Total generation requests served
    pub static ref GENERATIONS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_generations_total", METRIC_PREFIX),
        "Total HTML generation requests"
    ).unwrap();

    /// Placeholders applied per generation
    pub static ref GENERATION_REPLACEMENTS: Histogram = register_histogram!(
        format!("{}_generation_replacements", METRIC_PREFIX),
        "Distribution of placeholders applied per generation",
        vec![0.0, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0]
    ).unwrap();

    // ============================================================================
    // Auth Metrics
    // ============================================================================

    /// Successful logins
    pub static ref LOGINS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_logins_total", METRIC_PREFIX),
        "Total successful logins"
    ).unwrap();

    /// Authentication failures by reason
    pub static ref AUTH_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_auth_failures_total", METRIC_PREFIX),
        "Total authentication failures",
        &["reason"]
    ).unwrap();
}
