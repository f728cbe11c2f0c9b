//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (register, lookup)
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (registration and lookup counters)
//! ```
//!
//! # Design Decisions
//! - Lookup events are `trace` level; registrations are `debug`
//! - Counters are cheap and need no recorder to be safe to call

pub mod logging;
pub mod metrics;
