//! The skeleton tree: folder and request nodes under a single collection root.
//!
//! Nodes are stored by [`NodeId`] and edges as ordered child lists, which is
//! all the builders and the emitter need. The model only grows: there is no
//! removal.

use std::collections::HashSet;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

mod node;

pub use self::node::{
    FolderMeta, NodeData, NodeId, NodeKind, NodeMeta, ROOT_ID, RequestMeta, SkeletonNode,
    WEBHOOK_FOLDER_NAME, WEBHOOK_PREFIX,
};

/// A directed "contains" graph rooted at `root:collection`.
///
/// Under the path and tag hierarchy strategies every non-root node has
/// exactly one parent. Under the flat tag strategy an operation with several
/// tags is represented by several request nodes, one per tag folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkeletonTree {
    nodes: IndexMap<NodeId, SkeletonNode>,
    children: IndexMap<NodeId, IndexSet<NodeId>>,
    #[serde(skip)]
    parents: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl Default for SkeletonTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SkeletonTree {
    /// Creates a tree holding only the collection root.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = IndexMap::new();
        nodes.insert(NodeId::root(), SkeletonNode::new(NodeMeta::Collection));
        Self {
            nodes,
            children: IndexMap::new(),
            parents: IndexMap::new(),
        }
    }

    /// Returns `true` if the node exists.
    #[must_use]
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Inserts a node, replacing the payload of an existing one.
    ///
    /// Edges of a replaced node are kept.
    pub fn set_node(&mut self, id: NodeId, meta: NodeMeta) {
        self.nodes.insert(id, SkeletonNode::new(meta));
    }

    /// Adds a `from -> to` edge. Adding an existing edge is a no-op.
    pub fn set_edge(&mut self, from: &NodeId, to: &NodeId) {
        self.children
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        self.parents
            .entry(to.clone())
            .or_default()
            .insert(from.clone());
    }

    /// Returns `true` if the `from -> to` edge exists.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.children
            .get(from)
            .is_some_and(|children| children.contains(to))
    }

    /// Inserts `id` under `parent` unless it already exists.
    ///
    /// This is the insert-or-get operation every builder goes through: an
    /// existing node keeps its payload and its parent, `make_meta` is not
    /// called. Returns `true` when the node was created.
    pub fn ensure_child(
        &mut self,
        parent: &NodeId,
        id: &NodeId,
        make_meta: impl FnOnce() -> NodeMeta,
    ) -> bool {
        if self.has_node(id.as_str()) {
            return false;
        }
        self.set_node(id.clone(), make_meta());
        self.set_edge(parent, id);
        true
    }

    /// Returns a node.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SkeletonNode> {
        self.nodes.get(id)
    }

    /// Returns a node for the emitter to fill its payload.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut SkeletonNode> {
        self.nodes.get_mut(id)
    }

    /// Children of a node, in insertion order.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &NodeId> {
        self.children.get(id).into_iter().flatten()
    }

    /// Parents of a node, in insertion order.
    pub fn parents(&self, id: &str) -> impl Iterator<Item = &NodeId> {
        self.parents.get(id).into_iter().flatten()
    }

    /// All node ids, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// All nodes with their ids, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &SkeletonNode)> {
        self.nodes.iter()
    }

    /// All edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.children
            .iter()
            .flat_map(|(from, children)| children.iter().map(move |to| (from, to)))
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.children.values().map(IndexSet::len).sum()
    }

    /// Depth-first, pre-order walk from the root.
    ///
    /// Siblings come in insertion order and a node reachable twice is only
    /// visited the first time. Nodes not reachable from the root are skipped.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        let root = self
            .nodes
            .get_key_value(ROOT_ID)
            .map(|(id, node)| (0, id, node));
        Walk {
            tree: self,
            stack: root.into_iter().collect(),
            visited: HashSet::new(),
        }
    }

    /// Renders the tree as an indented outline, one node per line.
    ///
    /// ```rust
    /// use apitree_core::{Document, FolderStrategy, Operation, SkeletonConfig, generate_skeleton};
    ///
    /// let document = Document::default().with_operation("/pets", "get", Operation::new());
    /// let tree = generate_skeleton(&document, &SkeletonConfig::new(FolderStrategy::Paths));
    ///
    /// assert_eq!(tree.outline(), "\
    /// collection root:collection
    ///   folder path:folder:pets
    ///     request path:request:pets:get
    /// ");
    /// ```
    #[must_use]
    pub fn outline(&self) -> String {
        Outline(self).to_string()
    }
}

struct Outline<'a>(&'a SkeletonTree);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, id, node) in self.0.walk() {
            writeln!(f, "{:indent$}{} {id}", "", node.kind(), indent = depth * 2)?;
        }
        Ok(())
    }
}

/// Iterator returned by [`SkeletonTree::walk`], yielding `(depth, id, node)`.
#[derive(Debug)]
pub struct Walk<'a> {
    tree: &'a SkeletonTree,
    stack: Vec<(usize, &'a NodeId, &'a SkeletonNode)>,
    visited: HashSet<&'a NodeId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a NodeId, &'a SkeletonNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, id, node) = self.stack.pop()?;
            if !self.visited.insert(id) {
                continue;
            }
            let children = self.tree.children(id.as_str()).collect::<Vec<_>>();
            for child in children.into_iter().rev() {
                if let Some((child_id, child_node)) = self.tree.nodes.get_key_value(child) {
                    self.stack.push((depth + 1, child_id, child_node));
                }
            }
            return Some((depth, id, node));
        }
    }
}
