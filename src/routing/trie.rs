//! Per-method route trie.
//!
//! # Responsibilities
//! - Graft registered patterns onto the trie, one node per literal byte and
//!   one per parameter
//! - Walk a concrete path through the trie, capturing parameter values
//!
//! # Design Decisions
//! - Patterns are walked with a cursor that jumps over parameter spans; the
//!   pattern string is never rewritten
//! - Conflicts can only surface on nodes that already existed, before any
//!   new node is created, so a rejected pattern leaves the trie untouched
//! - Lookups are bounded by the path length and never allocate nodes

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::node::{Leaf, Node, NodeKind};
use crate::routing::params::{param_end, ParamIndex, ParamInfo, Params};

/// One unit of a pattern walk.
enum Step<'a> {
    Byte { offset: usize, byte: u8 },
    Param(&'a ParamInfo),
}

fn steps<'a>(path: &'a str, index: &'a ParamIndex) -> impl Iterator<Item = Step<'a>> + 'a {
    let bytes = path.as_bytes();
    let mut cursor = 0;
    std::iter::from_fn(move || {
        if cursor >= bytes.len() {
            return None;
        }
        if let Some(param) = index.at(cursor) {
            cursor = param.end;
            return Some(Step::Param(param));
        }
        let offset = cursor;
        cursor += 1;
        Some(Step::Byte {
            offset,
            byte: bytes[offset],
        })
    })
}

/// All routes registered for a single HTTP method.
#[derive(Debug)]
pub struct MethodTrie<H> {
    root: Node<H>,
    patterns: Vec<String>,
}

impl<H> Default for MethodTrie<H> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            patterns: Vec::new(),
        }
    }
}

impl<H> MethodTrie<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path` to the trie, ending in a leaf holding `handler`.
    ///
    /// `path` is expected to be validated already. Returns the handler it
    /// replaced when the same pattern was registered before.
    pub fn build(&mut self, path: &str, handler: H) -> RouteResult<Option<H>> {
        let index = ParamIndex::scan(path)?;

        let mut node = &mut self.root;
        for step in steps(path, &index) {
            let (offset, next) = match step {
                Step::Byte { offset, byte } => (offset, node.literal_child(byte)),
                Step::Param(param) => (param.start, node.param_next(param)),
            };
            node = next.map_err(|conflict| RouteError::ParameterConflict {
                path: path.to_string(),
                offset,
                reason: conflict.to_string(),
            })?;
        }

        let previous = node.leaf.replace(Leaf {
            pattern: path.to_string(),
            handler,
        });
        if previous.is_none() {
            self.patterns.push(path.to_string());
        }
        Ok(previous.map(|leaf| leaf.handler))
    }

    /// Find the leaf `path` resolves to, with the parameters captured on
    /// the way.
    pub fn traverse(&self, path: &str) -> Option<(&Leaf<H>, Params)> {
        let bytes = path.as_bytes();
        let mut node = &self.root;
        let mut cursor = 0;
        let mut params = Params::new();

        loop {
            match &node.kind {
                NodeKind::Literal(children) => {
                    let Some(byte) = bytes.get(cursor) else { break };
                    node = children.get(byte)?;
                    cursor += 1;
                }
                NodeKind::Parameter { param, next } => {
                    let end = param_end(path, cursor);
                    if end == cursor {
                        // An empty value only ends the walk at the path's end.
                        if cursor == bytes.len() {
                            break;
                        }
                        return None;
                    }
                    params.push(param.name.as_str(), path.get(cursor..end)?);
                    node = &**next;
                    cursor = end;
                }
            }
        }

        node.leaf.as_ref().map(|leaf| (leaf, params))
    }

    /// Patterns in registration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
