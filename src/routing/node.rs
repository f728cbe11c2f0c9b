//! Trie node types.
//!
//! # Design Decisions
//! - A node either branches on the next literal byte or captures exactly
//!   one parameter; the two never coexist on the same node
//! - A parameter node owns the node reached after its value, which in turn
//!   holds the literal bytes that follow the parameter
//! - A node is a leaf when a registered pattern ends on it

use std::collections::BTreeMap;
use std::fmt;

use crate::routing::params::ParamInfo;

/// Outgoing edges of a node.
#[derive(Debug)]
pub enum NodeKind<H> {
    /// Children keyed by the next literal byte.
    Literal(BTreeMap<u8, Node<H>>),
    /// A parameter captured at this position, then `next`.
    Parameter { param: ParamInfo, next: Box<Node<H>> },
}

/// Handler attached to a terminal node.
#[derive(Debug)]
pub struct Leaf<H> {
    /// Pattern as registered, e.g. `/items/:id`.
    pub pattern: String,
    pub handler: H,
}

/// One position in a method trie.
#[derive(Debug)]
pub struct Node<H> {
    pub kind: NodeKind<H>,
    pub leaf: Option<Leaf<H>>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            kind: NodeKind::Literal(BTreeMap::new()),
            leaf: None,
        }
    }
}

/// Why a pattern cannot be grafted onto an existing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// A literal byte where `:name` already captures.
    LiteralAfterParameter(String),
    /// A parameter where literal routes already branch.
    ParameterAfterLiteral,
    /// A parameter whose name differs from the one already here.
    ParameterName(String),
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::LiteralAfterParameter(name) => {
                write!(f, "parameter :{} already captures this position", name)
            }
            Conflict::ParameterAfterLiteral => {
                write!(f, "literal routes already continue from this position")
            }
            Conflict::ParameterName(name) => {
                write!(f, "parameter is already named :{} here", name)
            }
        }
    }
}

// Tries nest one node per byte, so the generated drop would recurse once
// per byte of the longest pattern. Unlink children onto a heap stack instead.
impl<H> Drop for Node<H> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node.kind, &mut pending);
        }
    }
}

fn detach_children<H>(kind: &mut NodeKind<H>, pending: &mut Vec<Node<H>>) {
    match std::mem::replace(kind, NodeKind::Literal(BTreeMap::new())) {
        NodeKind::Literal(children) => pending.extend(children.into_values()),
        NodeKind::Parameter { next, .. } => pending.push(*next),
    }
}

impl<H> Node<H> {
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// Child reached by `byte`, created if missing.
    pub fn literal_child(&mut self, byte: u8) -> Result<&mut Node<H>, Conflict> {
        match &mut self.kind {
            NodeKind::Literal(children) => Ok(children.entry(byte).or_default()),
            NodeKind::Parameter { param, .. } => {
                Err(Conflict::LiteralAfterParameter(param.name.clone()))
            }
        }
    }

    /// Node reached after capturing `param`.
    ///
    /// A childless literal node is turned into a parameter node. An existing
    /// parameter node is shared only when the names agree.
    pub fn param_next(&mut self, param: &ParamInfo) -> Result<&mut Node<H>, Conflict> {
        let vacant = matches!(&self.kind, NodeKind::Literal(children) if children.is_empty());
        if vacant {
            self.kind = NodeKind::Parameter {
                param: param.clone(),
                next: Box::default(),
            };
        }

        match &mut self.kind {
            NodeKind::Parameter { param: existing, next } => {
                if existing.name == param.name {
                    Ok(next.as_mut())
                } else {
                    Err(Conflict::ParameterName(existing.name.clone()))
                }
            }
            NodeKind::Literal(_) => Err(Conflict::ParameterAfterLiteral),
        }
    }
}
