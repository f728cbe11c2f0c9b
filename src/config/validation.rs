//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route pattern against the registration rules
//! - Detect duplicate names and duplicate `(method, path)` pairs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTable → Result<(), Vec<ValidationError>>
//! - Structural conflicts between patterns surface when the router is built

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::RouteTable;
use crate::routing::{validate_route, RouteError};

/// A single semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Route at `index` has an empty name.
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    /// Two routes share a name.
    #[error("route name {name:?} is used more than once")]
    DuplicateName { name: String },

    /// Two routes share method and path.
    #[error("route {method} {path} is defined more than once")]
    DuplicateRoute { method: String, path: String },

    /// The pattern would be rejected at registration.
    #[error("route {name:?}: {source}")]
    InvalidRoute {
        name: String,
        #[source]
        source: RouteError,
    },

    /// Log level is not a recognized level.
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Validate a parsed route table.
pub fn validate_config(table: &RouteTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut routes = HashSet::new();

    if table.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            table.observability.log_level.clone(),
        ));
    }

    for (index, route) in table.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }

        if let Err(source) = validate_route(&route.method, &route.path) {
            errors.push(ValidationError::InvalidRoute {
                name: route.name.clone(),
                source,
            });
        } else if !routes.insert((route.method.as_str(), route.path.as_str())) {
            errors.push(ValidationError::DuplicateRoute {
                method: route.method.clone(),
                path: route.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
