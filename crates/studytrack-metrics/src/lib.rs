//! Metrics collection and Prometheus exporter for studytrack.
//!
//! This module provides metrics instrumentation for the studytrack server,
//! including signup/login outcomes, mark submissions, and resource lookups.

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize Prometheus metrics exporter.
///
/// Starts an HTTP server on the given address to expose metrics.
/// Returns an error message if binding fails.
pub fn init_prometheus(listen: &str) -> Result<(), String> {
    let addr: SocketAddr = listen
        .parse()
        .map_err(|e| format!("invalid metrics listen address: {e}"))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("failed to install prometheus exporter: {e}"))?;

    Ok(())
}

// ============================================================================
// Metric Names
// ============================================================================

/// Total number of accounts created.
pub const SIGNUPS_TOTAL: &str = "studytrack_signups_total";
/// Total number of successful logins.
pub const LOGIN_SUCCESS_TOTAL: &str = "studytrack_login_success_total";
/// Total number of failed logins.
pub const LOGIN_FAILURE_TOTAL: &str = "studytrack_login_failure_total";
/// Total number of mark submission events stored.
pub const MARKS_SUBMITTED_TOTAL: &str = "studytrack_marks_submitted_total";
/// Total number of mark records deleted.
pub const MARKS_DELETED_TOTAL: &str = "studytrack_marks_deleted_total";
/// Total number of outbound resource lookups attempted.
pub const RESOURCE_LOOKUPS_TOTAL: &str = "studytrack_resource_lookups_total";
/// Total number of failed outbound resource lookups.
pub const RESOURCE_LOOKUP_ERRORS_TOTAL: &str = "studytrack_resource_lookup_errors_total";

// ============================================================================
// Metric Recording Functions
// ============================================================================

/// Record a new account created.
#[inline]
pub fn record_signup() {
    counter!(SIGNUPS_TOTAL).increment(1);
}

/// Record a successful login.
#[inline]
pub fn record_login_success() {
    counter!(LOGIN_SUCCESS_TOTAL).increment(1);
}

/// Record a failed login.
#[inline]
pub fn record_login_failure() {
    counter!(LOGIN_FAILURE_TOTAL).increment(1);
}

/// Record a stored mark submission.
#[inline]
pub fn record_marks_submitted() {
    counter!(MARKS_SUBMITTED_TOTAL).increment(1);
}

/// Record a deleted mark record.
#[inline]
pub fn record_marks_deleted() {
    counter!(MARKS_DELETED_TOTAL).increment(1);
}

/// Record an outbound resource lookup attempt.
#[inline]
pub fn record_resource_lookup() {
    counter!(RESOURCE_LOOKUPS_TOTAL).increment(1);
}

/// Record a failed outbound resource lookup.
#[inline]
pub fn record_resource_lookup_error() {
    counter!(RESOURCE_LOOKUP_ERRORS_TOTAL).increment(1);
}
