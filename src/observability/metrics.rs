//! Routing metrics.
//!
//! # Metrics
//! - `router_lookups_total` (counter): lookups by `outcome` (`matched`, `not_found`)
//! - `router_registrations_total` (counter): registrations by `method`
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   every call is a no-op
//! - The host decides whether and how to export

/// Count one lookup.
pub fn record_lookup(outcome: &'static str) {
    ::metrics::counter!("router_lookups_total", "outcome" => outcome).increment(1);
}

/// Count one registration.
pub fn record_registration(method: &str) {
    ::metrics::counter!("router_registrations_total", "method" => method.to_string()).increment(1);
}
