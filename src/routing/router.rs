//! Route registration and lookup.
//!
//! # Responsibilities
//! - Validate and register `(method, path, handler)` triples
//! - Normalize lookup paths and dispatch to exactly one handler
//! - Fall back to the not-found handler when nothing matches
//!
//! # Design Decisions
//! - One trie per method, created on first registration
//! - Re-registering a pattern replaces its handler
//! - Registration needs `&mut self`; lookups only `&self`, so a built router
//!   can be shared across threads without locks
//! - Not-found is an outcome, never an error

use std::collections::HashMap;
use std::fmt;

use crate::observability::metrics;
use crate::routing::error::{RouteError, RouteResult};
use crate::routing::params::{ParamIndex, Params};
use crate::routing::trie::MethodTrie;

/// A route handler.
///
/// Implemented for every `Fn(&Params) -> R` closure that can be shared
/// across threads.
pub trait Handler<R>: Send + Sync + 'static {
    fn call(&self, params: &Params) -> R;
}

impl<R, F> Handler<R> for F
where
    F: Fn(&Params) -> R + Send + Sync + 'static,
{
    fn call(&self, params: &Params) -> R {
        self(params)
    }
}

type BoxedHandler<R> = Box<dyn Handler<R>>;
type NotFoundHandler<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Routing table keyed by HTTP method.
pub struct Router<R = ()> {
    tries: HashMap<String, MethodTrie<BoxedHandler<R>>>,
    not_found: NotFoundHandler<R>,
}

/// A successful resolution.
pub struct RouteMatch<'a, R> {
    /// Pattern the path matched, as registered.
    pub pattern: &'a str,
    /// Captured parameters, in path order.
    pub params: Params,
    handler: &'a dyn Handler<R>,
}

impl<'a, R: 'static> RouteMatch<'a, R> {
    /// Invoke the matched handler with the captured parameters.
    pub fn call(&self) -> R {
        self.handler.call(&self.params)
    }
}

impl<R> fmt::Debug for RouteMatch<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Outcome of [`Router::resolve`].
#[derive(Debug)]
pub enum RouteLookup<'a, R> {
    /// The path matched a route for the requested method.
    Match(RouteMatch<'a, R>),
    /// The path matches only under other methods (sorted).
    MethodNotAllowed { allowed: Vec<String> },
    /// No route matched the path.
    NotFound,
}

/// Strip one trailing `/`, unless the path is the root.
pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Check a method and pattern before they reach a trie.
pub fn validate_route(method: &str, path: &str) -> RouteResult<()> {
    if path.is_empty() {
        return Err(RouteError::EmptyPath);
    }
    if method.is_empty() {
        return Err(RouteError::EmptyMethod {
            path: path.to_string(),
        });
    }
    if !path.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash {
            path: path.to_string(),
        });
    }
    if path.len() > 1 && path.ends_with('/') {
        return Err(RouteError::TrailingSlash {
            path: path.to_string(),
        });
    }
    if path.ends_with(':') {
        return Err(RouteError::TrailingColon {
            path: path.to_string(),
        });
    }
    ParamIndex::scan(path).map(|_| ())
}

impl<R: Default + 'static> Router<R> {
    /// Create a router whose not-found handler returns `R::default()`.
    pub fn new() -> Self {
        Self::with_not_found(R::default)
    }
}

impl<R: Default + 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> Router<R> {
    /// Create a router with a custom not-found handler.
    pub fn with_not_found<F>(not_found: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self {
            tries: HashMap::new(),
            not_found: Box::new(not_found),
        }
    }

    /// Register `handler` for `method` and `path`.
    ///
    /// Parameters are written as `:name` segments. Registering the same
    /// method and path again replaces the previous handler.
    pub fn register<H>(&mut self, method: &str, path: &str, handler: H) -> RouteResult<()>
    where
        H: Handler<R>,
    {
        validate_route(method, path)?;

        let trie = self.tries.entry(method.to_string()).or_default();
        let replaced = trie.build(path, Box::new(handler))?;

        if replaced.is_some() {
            tracing::debug!(method = %method, path = %path, "Route handler replaced");
        } else {
            tracing::debug!(method = %method, path = %path, "Route registered");
        }
        metrics::record_registration(method);
        Ok(())
    }

    /// Resolve `method` and `path` without invoking anything.
    pub fn resolve(&self, method: &str, path: &str) -> RouteLookup<'_, R> {
        let path = normalize_path(path);

        if let Some((leaf, params)) = self.tries.get(method).and_then(|t| t.traverse(path)) {
            return RouteLookup::Match(RouteMatch {
                pattern: &leaf.pattern,
                params,
                handler: leaf.handler.as_ref(),
            });
        }

        let mut allowed: Vec<String> = self
            .tries
            .iter()
            .filter(|(m, trie)| m.as_str() != method && trie.traverse(path).is_some())
            .map(|(m, _)| m.clone())
            .collect();

        if allowed.is_empty() {
            RouteLookup::NotFound
        } else {
            allowed.sort();
            RouteLookup::MethodNotAllowed { allowed }
        }
    }

    /// Dispatch `method` and `path` to exactly one handler.
    ///
    /// The matched handler receives the captured parameters; otherwise the
    /// not-found handler is called with none.
    pub fn lookup(&self, method: &str, path: &str) -> R {
        let normalized = normalize_path(path);
        let found = self
            .tries
            .get(method)
            .and_then(|trie| trie.traverse(normalized));

        match found {
            Some((leaf, params)) => {
                tracing::trace!(
                    method = %method,
                    path = %path,
                    route = %leaf.pattern,
                    params = params.len(),
                    "Route matched"
                );
                metrics::record_lookup("matched");
                leaf.handler.call(&params)
            }
            None => {
                tracing::trace!(method = %method, path = %path, "No route matched");
                metrics::record_lookup("not_found");
                (self.not_found)()
            }
        }
    }

    /// Registered `(method, pattern)` pairs.
    ///
    /// Methods are sorted; patterns keep their registration order.
    pub fn routes(&self) -> Vec<(&str, &str)> {
        let mut methods: Vec<&String> = self.tries.keys().collect();
        methods.sort();
        methods
            .into_iter()
            .flat_map(|method| {
                self.tries[method]
                    .patterns()
                    .iter()
                    .map(move |pattern| (method.as_str(), pattern.as_str()))
            })
            .collect()
    }

    /// Number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.tries.values().map(MethodTrie::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .tries
            .iter()
            .map(|(m, t)| (m.as_str(), t.len()))
            .collect();
        counts.sort();
        f.debug_struct("Router").field("routes", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/items/"), "/items");
        assert_eq!(normalize_path("/items"), "/items");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/a//"), "/a/");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_validate_route() {
        assert!(validate_route("GET", "/").is_ok());
        assert!(validate_route("GET", "/items/:id").is_ok());
        assert_eq!(validate_route("GET", ""), Err(RouteError::EmptyPath));
        assert!(matches!(
            validate_route("", "/a"),
            Err(RouteError::EmptyMethod { .. })
        ));
        assert!(matches!(
            validate_route("GET", "items"),
            Err(RouteError::MissingLeadingSlash { .. })
        ));
        assert!(matches!(
            validate_route("GET", "/items/"),
            Err(RouteError::TrailingSlash { .. })
        ));
        assert!(matches!(
            validate_route("GET", "/items:"),
            Err(RouteError::TrailingColon { .. })
        ));
        assert!(matches!(
            validate_route("GET", "/a/:/b"),
            Err(RouteError::EmptyParameterName { .. })
        ));
    }

    #[test]
    fn test_lookup_dispatches() {
        let mut router: Router<String> = Router::new();
        router
            .register("GET", "/items/:id", |p: &Params| {
                format!("item {}", p.get("id").unwrap_or_default())
            })
            .unwrap();

        assert_eq!(router.lookup("GET", "/items/42"), "item 42");
        assert_eq!(router.lookup("GET", "/items/42/"), "item 42");
        assert_eq!(router.lookup("POST", "/items/42"), "");
    }

    #[test]
    fn test_resolve_method_not_allowed() {
        let mut router: Router<u8> = Router::new();
        router.register("PUT", "/items/:id", |_: &Params| 1).unwrap();
        router.register("DELETE", "/items/:id", |_: &Params| 2).unwrap();

        match router.resolve("GET", "/items/1") {
            RouteLookup::MethodNotAllowed { allowed } => {
                assert_eq!(allowed, vec!["DELETE".to_string(), "PUT".to_string()]);
            }
            other => panic!("unexpected lookup: {:?}", other),
        }
        assert!(matches!(router.resolve("GET", "/other"), RouteLookup::NotFound));

        match router.resolve("PUT", "/items/1") {
            RouteLookup::Match(m) => {
                assert_eq!(m.pattern, "/items/:id");
                assert_eq!(m.params.get("id"), Some("1"));
                assert_eq!(m.call(), 1);
            }
            other => panic!("unexpected lookup: {:?}", other),
        }
    }

    #[test]
    fn test_routes_listing() {
        let mut router: Router = Router::new();
        router.register("POST", "/b", |_: &Params| ()).unwrap();
        router.register("GET", "/z", |_: &Params| ()).unwrap();
        router.register("GET", "/a", |_: &Params| ()).unwrap();
        router.register("GET", "/z", |_: &Params| ()).unwrap();

        assert_eq!(
            router.routes(),
            vec![("GET", "/z"), ("GET", "/a"), ("POST", "/b")]
        );
        assert_eq!(router.len(), 3);
    }

    #[test]
    fn test_rejected_registration_is_not_recorded() {
        let mut router: Router = Router::new();
        assert!(router.register("GET", "/items/", |_: &Params| ()).is_err());
        assert!(router.is_empty());
        assert!(router.routes().is_empty());
    }
}
