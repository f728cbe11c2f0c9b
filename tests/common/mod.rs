//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use method_router::Params;

/// Records every handler invocation as `(label, params)`.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records `label` and the params it receives.
    pub fn handler(&self, label: &str) -> impl Fn(&Params) + Send + Sync + 'static {
        let calls = self.calls.clone();
        let label = label.to_string();
        move |params: &Params| {
            let params = params
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect();
            calls.lock().unwrap().push((label.clone(), params));
        }
    }

    /// A not-found handler that records `label` with no params.
    #[allow(dead_code)]
    pub fn fallback(&self, label: &str) -> impl Fn() + Send + Sync + 'static {
        let calls = self.calls.clone();
        let label = label.to_string();
        move || calls.lock().unwrap().push((label.clone(), Vec::new()))
    }

    /// Drain the recorded calls.
    pub fn take(&self) -> Vec<(String, Vec<(String, String)>)> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

/// Shorthand for an expected params list.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}
