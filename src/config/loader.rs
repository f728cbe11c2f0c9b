//! Route table loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{RouteOutcome, RouteTable};
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::{Params, RouteError, Router};

/// Error type for route table loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Route rejected: {0}")]
    Route(#[from] RouteError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a route table from TOML text.
pub fn parse_config(content: &str) -> Result<RouteTable, ConfigError> {
    let table: RouteTable = toml::from_str(content)?;
    validate_config(&table).map_err(ConfigError::Validation)?;
    Ok(table)
}

/// Load and validate a route table from a TOML file.
pub fn load_config(path: &Path) -> Result<RouteTable, ConfigError> {
    let content = fs::read_to_string(path)?;
    let table = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        routes = table.routes.len(),
        "Route table loaded"
    );
    Ok(table)
}

impl RouteTable {
    /// Build a router whose handlers report the matched route's name.
    pub fn into_router(&self) -> Result<Router<RouteOutcome>, ConfigError> {
        let fallback = self.not_found.name.clone();
        let mut router = Router::with_not_found(move || RouteOutcome {
            route: fallback.clone(),
            matched: false,
            params: Params::new(),
        });

        for route in &self.routes {
            let name = route.name.clone();
            router.register(&route.method, &route.path, move |params: &Params| {
                RouteOutcome {
                    route: name.clone(),
                    matched: true,
                    params: params.clone(),
                }
            })?;
        }
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
[observability]
log_level = "debug"

[not_found]
name = "missing"

[[routes]]
name = "list_items"
method = "GET"
path = "/items"

[[routes]]
name = "get_item"
method = "GET"
path = "/items/:id"
"#;

    #[test]
    fn test_parse_config() {
        let table = parse_config(TABLE).unwrap();
        assert_eq!(table.observability.log_level, "debug");
        assert_eq!(table.not_found.name, "missing");
        assert_eq!(table.routes.len(), 2);
        assert_eq!(table.routes[1].path, "/items/:id");
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let table = parse_config("").unwrap();
        assert_eq!(table.observability.log_level, "info");
        assert_eq!(table.not_found.name, "not_found");
        assert!(table.routes.is_empty());
    }

    #[test]
    fn test_into_router() {
        let router = parse_config(TABLE).unwrap().into_router().unwrap();

        let outcome = router.lookup("GET", "/items/7");
        assert_eq!(outcome.route, "get_item");
        assert!(outcome.matched);
        assert_eq!(outcome.params.get("id"), Some("7"));

        let outcome = router.lookup("GET", "/nope");
        assert_eq!(outcome.route, "missing");
        assert!(!outcome.matched);
        assert!(outcome.params.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("routes = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config(
            r#"
[[routes]]
name = "a"
method = "GET"
path = "a"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed: route \"a\""));
    }

    #[test]
    fn test_conflicting_routes_rejected_on_build() {
        let table = parse_config(
            r#"
[[routes]]
name = "show"
method = "GET"
path = "/items/:id"

[[routes]]
name = "new"
method = "GET"
path = "/items/new"
"#,
        )
        .unwrap();
        let err = table.into_router().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Route(RouteError::ParameterConflict { .. })
        ));
    }
}
