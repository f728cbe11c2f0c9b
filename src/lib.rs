//! Method-keyed HTTP route table.
//!
//! Maps an HTTP method and request path to a registered handler, capturing
//! `:name` path parameters along the way. No I/O: this is the lookup table a
//! dispatch pipeline consults.
//!
//! ```
//! use method_router::{Params, Router};
//!
//! let mut router: Router<String> = Router::with_not_found(|| "404".to_string());
//! router
//!     .register("GET", "/items/:id", |p: &Params| format!("item {}", p.get("id").unwrap_or("")))
//!     .unwrap();
//!
//! assert_eq!(router.lookup("GET", "/items/42"), "item 42");
//! assert_eq!(router.lookup("GET", "/items/42/extra"), "404");
//! ```

// Core subsystem
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::{load_config, RouteTable};
pub use routing::{Handler, Params, RouteError, RouteLookup, RouteMatch, Router, SharedRouter};
