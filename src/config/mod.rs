//! Route table configuration.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteTable (validated)
//!     → RouteTable::into_router (register every route)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - Routes register in file order

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{NotFoundConfig, ObservabilityConfig, RouteConfig, RouteOutcome, RouteTable};
pub use validation::{validate_config, ValidationError};
