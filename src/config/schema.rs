//! Route table schema definitions.
//!
//! This module defines the declarative route table accepted by the loader.
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::Params;

/// Root of a route table file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteTable {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// What a lookup reports when nothing matches.
    pub not_found: NotFoundConfig,

    /// Route definitions, registered in file order.
    pub routes: Vec<RouteConfig>,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier reported on match.
    pub name: String,

    /// HTTP method (e.g., "GET").
    pub method: String,

    /// Path pattern; `:name` segments capture parameters.
    pub path: String,
}

/// Not-found fallback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotFoundConfig {
    /// Name reported when no route matches.
    pub name: String,
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            name: "not_found".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error, off).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// What a route table router returns for every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutcome {
    /// Matched route name, or the not-found name.
    pub route: String,
    /// Whether a registered route matched.
    pub matched: bool,
    /// Captured parameters (empty when not matched).
    pub params: Params,
}
