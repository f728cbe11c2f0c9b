//! Atomically replaceable router.
//!
//! Registration needs exclusive access, so a running host cannot register
//! into a router that is serving lookups. Instead it builds a new router
//! and publishes it here; in-flight lookups finish against the snapshot
//! they loaded.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::Router;

/// A router that can be swapped while lookups are running.
pub struct SharedRouter<R: 'static> {
    current: ArcSwap<Router<R>>,
}

impl<R: 'static> SharedRouter<R> {
    pub fn new(router: Router<R>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// Snapshot of the router currently published.
    pub fn load(&self) -> Arc<Router<R>> {
        self.current.load_full()
    }

    /// Publish `router`, returning the one it replaces.
    pub fn replace(&self, router: Router<R>) -> Arc<Router<R>> {
        let previous = self.current.swap(Arc::new(router));
        tracing::info!(routes = previous.len(), "Router replaced");
        previous
    }

    /// Dispatch against the current snapshot.
    pub fn lookup(&self, method: &str, path: &str) -> R {
        self.current.load().lookup(method, path)
    }
}

impl<R: 'static> std::fmt::Debug for SharedRouter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRouter")
            .field("current", &*self.current.load())
            .finish()
    }
}
