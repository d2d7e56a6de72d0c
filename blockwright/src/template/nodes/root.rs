use crate::error::{EditError, EditErrorFast, Result};
use crate::template::nodes::node::{Node, RawNode};
use crate::template::NodePath;

/// Root of the document: an ordered sequence of top-level nodes. Paths are
/// resolved against this sequence; the empty path addresses the sequence
/// itself (a valid insert target, never a node).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootNode {
    pub children: Vec<Node>,
}

impl RootNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: Vec<RawNode>) -> Result<Self> {
        Ok(Self {
            children: raw
                .into_iter()
                .map(RawNode::transform)
                .collect::<Result<Vec<_>>>()?,
        })
    }

    pub fn raw(&self) -> Vec<RawNode> {
        self.children.iter().map(Node::raw).collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Resolves a path to the node it addresses. Fails on the empty path,
    /// on any out-of-range index, and on descent through a childless node.
    pub fn node(&self, path: &NodePath) -> Result<&Node> {
        let mut segments = path.iter();
        let first = *segments.next().ok_or_else(|| EditError::path(path))?;
        let mut node = self
            .children
            .get(first)
            .ok_or_else(|| EditError::path(path))?;
        for &index in segments {
            let children = node.children.as_ref().ok_or_else(|| EditError::path(path))?;
            node = children.get(index).ok_or_else(|| EditError::path(path))?;
        }
        Ok(node)
    }

    pub fn node_mut(&mut self, path: &NodePath) -> Result<&mut Node> {
        let mut segments = path.iter();
        let first = *segments.next().ok_or_else(|| EditError::path(path))?;
        let mut node = self
            .children
            .get_mut(first)
            .ok_or_else(|| EditError::path(path))?;
        for &index in segments {
            let children = node.children.as_mut().ok_or_else(|| EditError::path(path))?;
            node = children.get_mut(index).ok_or_else(|| EditError::path(path))?;
        }
        Ok(node)
    }

    /// Child sequence of `parent`, the root sequence for the empty path.
    /// `InvalidTarget` when the parent exists but can not hold children.
    pub fn children_mut(&mut self, parent: &NodePath) -> Result<&mut Vec<Node>> {
        if parent.is_empty() {
            return Ok(&mut self.children);
        }
        self.node_mut(parent)?.children.as_mut().invalid_target()
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.node(path).is_ok()
    }
}
