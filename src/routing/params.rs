//! Path parameter indexing and captured values.
//!
//! # Responsibilities
//! - Locate every `:name` token in a registration pattern
//! - Find where a parameter value ends in a concrete path
//! - Carry captured values to handlers in the order they were matched
//!
//! # Design Decisions
//! - A name (or value) ends at the first `/`; only when there is none does
//!   it end at the first `?`; otherwise it runs to the end of the string
//! - Offsets are byte offsets into the string being scanned
//! - Tokens never overlap: scanning resumes at the previous terminator

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::routing::error::{RouteError, RouteResult};

/// One `:name` token in a registration pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    /// Parameter name, without the leading `:`.
    pub name: String,
    /// Offset of the `:`.
    pub start: usize,
    /// Offset of the terminator (or the pattern length).
    pub end: usize,
}

/// Every parameter of a pattern, ordered by `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamIndex {
    params: Vec<ParamInfo>,
}

impl ParamIndex {
    /// Scan `path` for parameter tokens.
    ///
    /// Rejects unnamed parameters (`/a/:/b`) and parameters with no literal
    /// byte between them (`/:a:b`).
    pub fn scan(path: &str) -> RouteResult<Self> {
        let mut params = Vec::new();
        let mut cursor = 0;

        while let Some(found) = path[cursor..].find(':') {
            let start = cursor + found;
            let end = param_end(path, start + 1);
            let name = &path[start + 1..end];

            if name.is_empty() {
                return Err(RouteError::EmptyParameterName {
                    path: path.to_string(),
                    offset: start,
                });
            }
            if let Some(inner) = name.find(':') {
                return Err(RouteError::AdjacentParameters {
                    path: path.to_string(),
                    offset: start + 1 + inner,
                });
            }

            params.push(ParamInfo {
                name: name.to_string(),
                start,
                end,
            });
            cursor = end;
        }

        Ok(Self { params })
    }

    /// The parameter whose `:` sits exactly at `start`, if any.
    pub fn at(&self, start: usize) -> Option<&ParamInfo> {
        self.params
            .binary_search_by_key(&start, |p| p.start)
            .ok()
            .map(|idx| &self.params[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamInfo> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Offset where a parameter name or value starting at `from` ends.
///
/// First `/` at or after `from`, else first `?`, else `path.len()`.
pub fn param_end(path: &str, from: usize) -> usize {
    let rest = path.get(from..).unwrap_or("");
    rest.find('/')
        .or_else(|| rest.find('?'))
        .map_or(path.len(), |pos| from + pos)
}

/// Parameter values captured during a lookup.
///
/// Keys are the names from the matched pattern; iteration follows the order
/// the parameters appear along the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
