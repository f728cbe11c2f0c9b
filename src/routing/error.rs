//! Registration errors.

use thiserror::Error;

/// Reasons a route registration is rejected.
///
/// A rejected registration leaves the router unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Method string was empty.
    #[error("route method must not be empty (path {path:?})")]
    EmptyMethod { path: String },

    /// Path was empty.
    #[error("route path must not be empty")]
    EmptyPath,

    /// Path does not begin with `/`.
    #[error("route path {path:?} must start with '/'")]
    MissingLeadingSlash { path: String },

    /// Path ends with `/` and is not the root.
    #[error("route path {path:?} must not end with '/'")]
    TrailingSlash { path: String },

    /// Path ends with a dangling `:`.
    #[error("route path {path:?} must not end with ':'")]
    TrailingColon { path: String },

    /// A `:` is immediately followed by its terminator.
    #[error("route path {path:?} has an unnamed parameter at offset {offset}")]
    EmptyParameterName { path: String, offset: usize },

    /// Two parameters without a literal byte between them.
    #[error("route path {path:?} has adjacent parameters at offset {offset}")]
    AdjacentParameters { path: String, offset: usize },

    /// A parameter and literal bytes (or two differently named parameters)
    /// compete for the same trie position.
    #[error("route path {path:?} conflicts with an existing route at offset {offset}: {reason}")]
    ParameterConflict {
        path: String,
        offset: usize,
        reason: String,
    },
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
