use tracing::debug;

use super::{TreeOrganizer, retained_operations};
use crate::{Document, FolderMeta, NodeId, NodeMeta, RequestMeta, SkeletonTree};

/// One folder per tag, directly under the root.
///
/// Every declared tag gets a folder, used or not. An operation with several
/// tags is filed once per tag: `["a", "b"]` on `GET /x` yields the two
/// request nodes `path:a:/x:get` and `path:b:/x:get`, each with a single
/// parent. Untagged operations are attached to the root as `path:/x:get`.
///
/// A tag used by an operation but never declared gets its folder on first
/// use, carrying the operation path.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupByTags {
    include_deprecated: bool,
}

impl GroupByTags {
    /// Creates the organizer.
    #[must_use]
    pub fn new(include_deprecated: bool) -> Self {
        Self { include_deprecated }
    }
}

impl TreeOrganizer for GroupByTags {
    fn organize(&self, document: &Document) -> SkeletonTree {
        let mut tree = SkeletonTree::new();
        let root = NodeId::root();
        let descriptions = document.tag_descriptions();

        for (tag, description) in &descriptions {
            tree.ensure_child(&root, &NodeId::tag_folder(tag), || {
                NodeMeta::Folder(FolderMeta::tag(tag, "", *description))
            });
        }

        for (path, operations) in &document.paths {
            let retained = retained_operations(path, operations, self.include_deprecated);
            for (method, operation) in retained {
                if operation.tags.is_empty() {
                    let request = NodeId::untagged_request(path, method);
                    tree.set_node(
                        request.clone(),
                        NodeMeta::Request(RequestMeta::new(path, method)),
                    );
                    tree.set_edge(&root, &request);
                    continue;
                }

                for tag in &operation.tags {
                    let request = NodeId::tag_request(tag, path, method);
                    tree.set_node(
                        request.clone(),
                        NodeMeta::Request(RequestMeta::new(path, method).with_tag(tag)),
                    );

                    let folder = NodeId::tag_folder(tag);
                    let created = tree.ensure_child(&root, &folder, || {
                        let description = descriptions.get(tag.as_str()).copied().flatten();
                        NodeMeta::Folder(FolderMeta::tag(tag, path, description))
                    });
                    if created {
                        debug!(%tag, %path, %method, "create folder for undeclared tag");
                    }
                    tree.set_edge(&folder, &request);
                }
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operation, ROOT_ID};

    #[test]
    fn should_create_declared_tag_folders_eagerly() {
        let document = Document::default()
            .with_tag("pets", Some("Everything about pets"))
            .with_tag("store", None);

        let tree = GroupByTags::new(true).organize(&document);

        assert_eq!(
            tree.children(ROOT_ID).collect::<Vec<_>>(),
            ["path:pets", "path:store"]
        );
        let folder = tree
            .node("path:pets")
            .and_then(|node| node.meta.as_folder())
            .expect("should have folder");
        assert_eq!(
            folder,
            &FolderMeta::tag("pets", "", Some("Everything about pets"))
        );
    }

    #[test]
    fn should_replicate_request_per_tag() {
        let document = Document::default()
            .with_tag("a", None)
            .with_tag("b", None)
            .with_operation("/x", "get", Operation::tagged(["a", "b"]));

        let tree = GroupByTags::new(true).organize(&document);

        assert!(tree.has_edge("path:a", "path:a:/x:get"));
        assert!(tree.has_edge("path:b", "path:b:/x:get"));
        assert_eq!(
            tree.parents("path:a:/x:get").collect::<Vec<_>>(),
            ["path:a"]
        );
        assert_eq!(
            tree.parents("path:b:/x:get").collect::<Vec<_>>(),
            ["path:b"]
        );
        let tag = tree
            .node("path:b:/x:get")
            .and_then(|node| node.meta.as_request())
            .and_then(|meta| meta.tag.as_deref());
        assert_eq!(tag, Some("b"));
    }

    #[test]
    fn should_attach_untagged_operation_to_root() {
        let document = Document::default().with_operation("/health", "get", Operation::new());

        let tree = GroupByTags::new(true).organize(&document);

        assert!(tree.has_edge(ROOT_ID, "path:/health:get"));
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn should_create_folder_for_undeclared_tag() {
        let document = Document::default()
            .with_operation("/x", "get", Operation::tagged(["ghost"]))
            .with_operation("/y", "get", Operation::tagged(["ghost"]));

        let tree = GroupByTags::new(true).organize(&document);

        let folder = tree
            .node("path:ghost")
            .and_then(|node| node.meta.as_folder())
            .expect("should have folder");
        assert_eq!(folder, &FolderMeta::tag("ghost", "/x", None));
        assert_eq!(tree.parents("path:ghost").collect::<Vec<_>>(), [ROOT_ID]);
        assert_eq!(tree.children("path:ghost").count(), 2);
    }

    #[test]
    fn should_skip_deprecated_and_non_method_keys() {
        let document = Document::default()
            .with_tag("a", None)
            .with_operation("/x", "get", Operation::tagged(["a"]).with_deprecated(true))
            .with_operation("/x", "parameters", Operation::tagged(["a"]));

        let tree = GroupByTags::new(false).organize(&document);

        assert_eq!(tree.children("path:a").count(), 0);
        assert_eq!(tree.node_count(), 2);
    }
}
