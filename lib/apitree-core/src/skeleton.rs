use tracing::debug;

use crate::organize::{
    AppendWebhooks, GroupByPaths, GroupByTagHierarchy, GroupByTags, TreeOrganizer,
};
use crate::{Document, FolderStrategy, SkeletonConfig, SkeletonTree};

/// Builds the skeleton tree of `document`.
///
/// Runs the organizer selected by `config.folder_strategy`, then appends the
/// webhook subtree when `config.include_webhooks` is set. The returned tree
/// is complete: nothing in this crate touches it afterwards.
///
/// An unknown strategy name is rejected when the [`FolderStrategy`] is
/// parsed, so no tree is ever started for it.
///
/// ```rust
/// use apitree_core::{Document, FolderStrategy, Operation, SkeletonConfig, generate_skeleton};
///
/// let document = Document::default()
///     .with_operation("/pet", "get", Operation::new())
///     .with_webhook("newPet", "post", Operation::new());
/// let config = SkeletonConfig::new("paths".parse::<FolderStrategy>()?).with_webhooks(true);
///
/// let tree = generate_skeleton(&document, &config);
///
/// assert!(tree.has_edge("path:folder:pet", "path:request:pet:get"));
/// assert!(tree.has_edge("path~webhook:folder", "path~webhook:newPet:post"));
/// # Ok::<(), apitree_core::ApiTreeError>(())
/// ```
#[must_use]
pub fn generate_skeleton(document: &Document, config: &SkeletonConfig) -> SkeletonTree {
    let include_deprecated = config.include_deprecated;
    let tree = match config.folder_strategy {
        FolderStrategy::Paths => GroupByPaths::new(include_deprecated).organize(document),
        FolderStrategy::Tags => GroupByTags::new(include_deprecated).organize(document),
        FolderStrategy::TagsHierarchical => {
            GroupByTagHierarchy::new(include_deprecated).organize(document)
        }
    };

    let tree = if config.include_webhooks {
        AppendWebhooks::new(include_deprecated).append(document, tree)
    } else {
        tree
    };

    debug!(
        strategy = %config.folder_strategy,
        nodes = tree.node_count(),
        edges = tree.edge_count(),
        "skeleton tree built"
    );
    tree
}
