use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Label that marks a seat as explicitly empty.
pub const VACANT: &str = "None";

/// Deepest level the builder populates (middle branches).
pub const MAX_DEPTH: usize = 2;

/// Handle to a node inside a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

/// Position of a node in the fixed three-level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Root,
    Large,
    Middle,
}

impl Level {
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Level::Root),
            1 => Some(Level::Large),
            2 => Some(Level::Middle),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Root => write!(f, "tree"),
            Level::Large => write!(f, "great branch"),
            Level::Middle => write!(f, "middle branch"),
        }
    }
}

/// Branch in the village forest.
#[derive(Debug)]
pub struct BranchNode {
    /// Occupant name, None until assigned
    label: Option<String>,
    /// Index of parent node in the arena, None for roots. Never owning.
    parent: Option<NodeId>,
    /// Owned children in traversal order
    children: Vec<NodeId>,
}

impl BranchNode {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            label: None,
            parent,
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True when the label is present, non-empty and not the vacant sentinel.
    pub fn is_occupied(&self) -> bool {
        matches!(self.label.as_deref(), Some(name) if !name.is_empty() && name != VACANT)
    }

    /// Exact, case-sensitive comparison. An unset label compares as "".
    fn matches(&self, name: &str) -> bool {
        self.label.as_deref().unwrap_or_default() == name
    }
}

/// Arena-backed forest of branch trees.
///
/// Ownership runs strictly top-down through `children`; the parent index
/// is only used for upward navigation. Nodes are never removed, so every
/// handle handed out stays valid for the lifetime of the forest.
#[derive(Debug, Default)]
pub struct Forest {
    arena: Arena<BranchNode>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn add_root(&mut self) -> NodeId {
        let id = NodeId(self.arena.insert(BranchNode::new(None)));
        self.roots.push(id);
        id
    }

    /// Creates a child owned by `parent` and returns its handle.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: NodeId) -> DomainResult<NodeId> {
        if !self.arena.contains(parent.0) {
            return Err(DomainError::UnknownNode);
        }
        debug_assert!(
            self.depth_of(parent) < MAX_DEPTH,
            "branches below middle level are not allowed"
        );
        let child = NodeId(self.arena.insert(BranchNode::new(Some(parent))));
        if let Some(node) = self.arena.get_mut(parent.0) {
            node.children.push(child);
        }
        Ok(child)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn node(&self, id: NodeId) -> Option<&BranchNode> {
        self.arena.get(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, |n| n.children.len())
    }

    /// Out-of-range indices are a normal empty result.
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id)?.children.get(index).copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.label()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_label(&mut self, id: NodeId, name: &str) -> DomainResult<()> {
        let node = self.arena.get_mut(id.0).ok_or(DomainError::UnknownNode)?;
        node.label = Some(name.to_string());
        Ok(())
    }

    /// Number of hops up to the root.
    pub fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    pub fn level_of(&self, id: NodeId) -> Option<Level> {
        Level::from_depth(self.depth_of(id))
    }

    /// Height of the subtree below `id`, counting `id` itself as 1.
    #[instrument(level = "debug", skip(self))]
    pub fn tree_depth(&self, id: NodeId) -> usize {
        match self.node(id) {
            Some(node) => {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.tree_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Pre-order search below (and including) `id`; first match in child order wins.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_label(&self, id: NodeId, name: &str) -> Option<NodeId> {
        let node = self.node(id)?;
        if node.matches(name) {
            return Some(id);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_by_label(child, name))
    }

    /// The great branch enclosing `id`.
    ///
    /// Relies on the fixed three-level layout: a root has none, a great branch
    /// is its own ancestor, and a middle branch resolves to its parent. At most
    /// one upward hop is taken.
    #[instrument(level = "trace", skip(self))]
    pub fn top_level_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        if self.parent(parent).is_none() {
            return Some(id);
        }
        debug_assert!(
            self.parent(parent).and_then(|p| self.parent(p)).is_none(),
            "node sits deeper than a middle branch"
        );
        Some(parent)
    }

    /// Inclusive count of occupied nodes in the subtree rooted at `id`.
    #[instrument(level = "trace", skip(self))]
    pub fn count_labeled_descendants(&self, id: NodeId) -> usize {
        match self.node(id) {
            Some(node) => {
                usize::from(node.is_occupied())
                    + node
                        .children
                        .iter()
                        .map(|&child| self.count_labeled_descendants(child))
                        .sum::<usize>()
            }
            None => 0,
        }
    }

    /// Great and middle branches in roster order: per tree, each great branch
    /// followed by its middle branches.
    pub fn seats(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.parent.is_some())
            .map(|(id, _)| id)
            .collect()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self)
    }
}

/// Pre-order traversal over every tree, in forest order.
pub struct ForestIterator<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl<'a> ForestIterator<'a> {
    fn new(forest: &'a Forest) -> Self {
        let stack = forest.roots.iter().rev().copied().collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = (NodeId, &'a BranchNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.forest.node(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev().copied());
                return Some((current, node));
            }
        }
        None
    }
}
