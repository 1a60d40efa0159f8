//! Folder organization strategies.
//!
//! Each strategy turns a [`Document`] into a fresh [`SkeletonTree`]; the
//! [`AppendWebhooks`] step can then extend any of those trees with a webhook
//! subtree. The [`generate_skeleton`](crate::generate_skeleton) dispatcher
//! picks a strategy from a [`SkeletonConfig`](crate::SkeletonConfig).
//!
//! # Example
//!
//! ```rust
//! use apitree_core::organize::{DocumentTreeExt, GroupByTags};
//! use apitree_core::{Document, Operation};
//!
//! let document = Document::default()
//!     .with_tag("pets", None)
//!     .with_operation("/pets", "get", Operation::tagged(["pets"]));
//!
//! let tree = document.organize_with(GroupByTags::new(true));
//! assert!(tree.has_edge("path:pets", "path:pets:/pets:get"));
//! ```

use tracing::{debug, trace};

use crate::{Document, HttpMethod, Operation, PathOperations, SkeletonTree};

mod paths;
mod tag_hierarchy;
mod tags;
mod webhooks;

pub use self::paths::GroupByPaths;
pub use self::tag_hierarchy::GroupByTagHierarchy;
pub use self::tags::GroupByTags;
pub use self::webhooks::AppendWebhooks;

/// Builds a skeleton tree from a document.
///
/// Implementations create the tree, root included, and own no state across
/// calls: organizing the same document twice yields equal trees.
///
/// # Implementing Custom Organizers
///
/// ```rust
/// use apitree_core::organize::TreeOrganizer;
/// use apitree_core::{Document, NodeId, NodeMeta, RequestMeta, SkeletonTree};
///
/// /// Every request directly under the root.
/// struct Flat;
///
/// impl TreeOrganizer for Flat {
///     fn organize(&self, document: &Document) -> SkeletonTree {
///         let mut tree = SkeletonTree::new();
///         let root = NodeId::root();
///         for (path, operations) in &document.paths {
///             for method in operations.keys() {
///                 let id = NodeId::untagged_request(path, method);
///                 let meta = RequestMeta::new(path, method);
///                 tree.ensure_child(&root, &id, || NodeMeta::Request(meta));
///             }
///         }
///         tree
///     }
/// }
/// ```
pub trait TreeOrganizer {
    /// Builds the tree for `document`.
    fn organize(&self, document: &Document) -> SkeletonTree;
}

/// Extension trait to organize a document with a given strategy.
pub trait DocumentTreeExt {
    /// Builds a tree with `organizer`.
    ///
    /// This is a convenience method that calls `organizer.organize(self)`.
    fn organize_with<O: TreeOrganizer>(&self, organizer: O) -> SkeletonTree;
}

impl DocumentTreeExt for Document {
    fn organize_with<O: TreeOrganizer>(&self, organizer: O) -> SkeletonTree {
        organizer.organize(self)
    }
}

/// Operations of a path that become request nodes, with their method key.
///
/// Keys that are not allowed methods are skipped, and so are deprecated
/// operations unless `include_deprecated` is set.
fn retained_operations<'a>(
    path: &'a str,
    operations: &'a PathOperations,
    include_deprecated: bool,
) -> impl Iterator<Item = (&'a str, &'a Operation)> {
    operations
        .iter()
        .filter(move |(method, operation)| {
            if !HttpMethod::is_allowed(method) {
                trace!(%path, %method, "skip non-method key");
                return false;
            }
            if operation.is_excluded(include_deprecated) {
                debug!(%path, %method, "skip deprecated operation");
                return false;
            }
            true
        })
        .map(|(method, operation)| (method.as_str(), operation))
}
