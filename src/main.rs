//! method-router CLI
//!
//! Loads a TOML route table and answers questions about it.
//!
//! ```text
//! method-router check routes.toml
//! method-router routes routes.toml
//! method-router resolve routes.toml GET /items/42
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use method_router::config::load_config;
use method_router::observability::logging::init_logging;
use method_router::RouteLookup;

#[derive(Parser)]
#[command(name = "method-router")]
#[command(about = "Inspect and query an HTTP route table", long_about = None)]
struct Cli {
    /// Log level; overrides the route table's setting.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a route table and build its router
    Check { config: PathBuf },
    /// List registered routes
    Routes { config: PathBuf },
    /// Resolve a request against the route table
    Resolve {
        config: PathBuf,
        method: String,
        path: String,
    },
}

impl Commands {
    fn config(&self) -> &PathBuf {
        match self {
            Commands::Check { config }
            | Commands::Routes { config }
            | Commands::Resolve { config, .. } => config,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = load_config(cli.command.config());
    let level = cli
        .log_level
        .clone()
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|table| table.observability.log_level.clone())
        })
        .unwrap_or_else(|| "info".to_string());
    init_logging(&level)?;

    let table = loaded.inspect_err(|e| {
        tracing::warn!(
            path = %cli.command.config().display(),
            error = %e,
            "Route table rejected"
        );
    })?;
    let router = table.into_router()?;

    match &cli.command {
        Commands::Check { .. } => {
            println!("ok: {} routes", router.len());
        }
        Commands::Routes { .. } => {
            for (method, pattern) in router.routes() {
                println!("{:<8} {}", method, pattern);
            }
        }
        Commands::Resolve { method, path, .. } => {
            let report = match router.resolve(method, path) {
                RouteLookup::Match(m) => json!({
                    "outcome": m.call(),
                    "pattern": m.pattern,
                }),
                RouteLookup::MethodNotAllowed { allowed } => json!({
                    "outcome": router.lookup(method, path),
                    "allowed": allowed,
                }),
                RouteLookup::NotFound => json!({
                    "outcome": router.lookup(method, path),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
