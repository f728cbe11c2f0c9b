//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     (method, pattern, handler)
//!     → router.rs (validate, pick method trie)
//!     → params.rs (index `:name` tokens)
//!     → trie.rs (graft pattern, leaf holds handler)
//!
//! Lookup:
//!     (method, path)
//!     → router.rs (normalize trailing slash, pick method trie)
//!     → trie.rs (walk bytes, capture parameter values)
//!     → matched handler(params) or not-found handler()
//! ```
//!
//! # Design Decisions
//! - One byte trie per method; no regex, no wildcards
//! - A trie node branches on literals or captures one parameter, never both
//! - Deterministic: the same path always resolves to the same route
//! - Routers are built, then shared read-only (see `shared.rs` for swaps)

pub mod error;
pub mod node;
pub mod params;
pub mod router;
pub mod shared;
pub mod trie;

pub use error::{RouteError, RouteResult};
pub use params::Params;
pub use router::{normalize_path, validate_route, Handler, RouteLookup, RouteMatch, Router};
pub use shared::SharedRouter;
pub use trie::MethodTrie;
