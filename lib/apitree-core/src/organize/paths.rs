use tracing::debug;

use super::{TreeOrganizer, retained_operations};
use crate::{Document, FolderMeta, NodeId, NodeMeta, PathOperations, RequestMeta, SkeletonTree};

/// Nests requests into folders that mirror the URL path segments.
///
/// `/pet/{id}` with a `get` operation gives
///
/// ```text
/// root:collection
/// └── path:folder:pet
///     └── path:folder:pet/{id}
///         └── path:request:pet/{id}:get
/// ```
///
/// Paths sharing leading segments share the folders of that prefix, so
/// `/pet` and `/pet/{id}` both land under `path:folder:pet`. Intermediate
/// folders are always created; the folder of the last segment only when at
/// least one operation survives filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupByPaths {
    include_deprecated: bool,
}

impl GroupByPaths {
    /// Creates the organizer.
    #[must_use]
    pub fn new(include_deprecated: bool) -> Self {
        Self { include_deprecated }
    }

    fn add_path(&self, tree: &mut SkeletonTree, path: &str, operations: &PathOperations) {
        let segments = path_segments(path);
        let Some((last, intermediates)) = segments.split_last() else {
            debug!(%path, "skip path without segments");
            return;
        };

        let mut parent = NodeId::root();
        let mut path_identifier = String::new();
        for segment in intermediates {
            push_segment(&mut path_identifier, segment);
            let folder = NodeId::path_folder(&path_identifier);
            tree.ensure_child(&parent, &folder, || {
                NodeMeta::Folder(FolderMeta::path_segment(segment, &path_identifier))
            });
            parent = folder;
        }

        push_segment(&mut path_identifier, last);
        let folder = NodeId::path_folder(&path_identifier);
        for (method, _) in retained_operations(path, operations, self.include_deprecated) {
            tree.ensure_child(&parent, &folder, || {
                NodeMeta::Folder(FolderMeta::path_segment(last, &path_identifier))
            });

            let request = NodeId::path_request(&path_identifier, method);
            tree.set_node(
                request.clone(),
                NodeMeta::Request(
                    RequestMeta::new(path, method).with_path_identifier(&path_identifier),
                ),
            );
            tree.set_edge(&folder, &request);
        }
    }
}

impl TreeOrganizer for GroupByPaths {
    fn organize(&self, document: &Document) -> SkeletonTree {
        let mut tree = SkeletonTree::new();
        for (path, operations) in &document.paths {
            self.add_path(&mut tree, path, operations);
        }
        tree
    }
}

/// Splits a path on `/`, dropping empty segments. The root path `/` is the
/// single segment `/`.
fn path_segments(path: &str) -> Vec<&str> {
    if path == "/" {
        return vec![path];
    }
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn push_segment(path_identifier: &mut String, segment: &str) {
    if !path_identifier.is_empty() {
        path_identifier.push('/');
    }
    path_identifier.push_str(segment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeKind, Operation, ROOT_ID, SkeletonNode};

    fn organize(document: &Document) -> SkeletonTree {
        GroupByPaths::new(false).organize(document)
    }

    #[test]
    fn should_split_segments() {
        assert_eq!(path_segments("/"), ["/"]);
        assert_eq!(path_segments("/pet"), ["pet"]);
        assert_eq!(path_segments("/pet/{id}/"), ["pet", "{id}"]);
        assert_eq!(path_segments("pet//photos"), ["pet", "photos"]);
        assert!(path_segments("//").is_empty());
        assert!(path_segments("").is_empty());
    }

    #[test]
    fn should_share_prefix_folder() {
        let document = Document::default()
            .with_operation("/pet", "get", Operation::new())
            .with_operation("/pet/{id}", "get", Operation::new());

        let tree = organize(&document);

        assert!(tree.has_edge(ROOT_ID, "path:folder:pet"));
        assert!(tree.has_edge("path:folder:pet", "path:request:pet:get"));
        let item_folder = "path:folder:pet/{id}";
        assert!(tree.has_edge("path:folder:pet", item_folder));
        assert!(tree.has_edge(item_folder, "path:request:pet/{id}:get"));
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.edge_count(), 4);
    }

    #[test]
    fn should_share_prefix_folder_in_any_order() {
        let document = Document::default()
            .with_operation("/pet/{id}", "get", Operation::new())
            .with_operation("/pet", "get", Operation::new());

        let tree = organize(&document);

        assert_eq!(
            tree.parents("path:folder:pet").collect::<Vec<_>>(),
            [ROOT_ID]
        );
        assert_eq!(
            tree.children("path:folder:pet").collect::<Vec<_>>(),
            ["path:folder:pet/{id}", "path:request:pet:get"]
        );
    }

    #[test]
    fn should_carry_request_meta() {
        let document = Document::default().with_operation("/store/order", "post", Operation::new());

        let tree = organize(&document);

        let folder = tree
            .node("path:folder:store/order")
            .and_then(|node| node.meta.as_folder())
            .expect("should have folder");
        assert_eq!(folder, &FolderMeta::path_segment("order", "store/order"));
        let request = tree
            .node("path:request:store/order:post")
            .and_then(|node| node.meta.as_request())
            .expect("should have request");
        assert_eq!(
            request,
            &RequestMeta::new("/store/order", "post").with_path_identifier("store/order")
        );
    }

    #[test]
    fn should_handle_root_path() {
        let document = Document::default().with_operation("/", "get", Operation::new());

        let tree = organize(&document);

        assert!(tree.has_edge(ROOT_ID, "path:folder:/"));
        assert!(tree.has_edge("path:folder:/", "path:request:/:get"));
    }

    #[test]
    fn should_skip_path_without_segments() {
        let document = Document::default().with_operation("//", "get", Operation::new());

        let tree = organize(&document);

        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn should_keep_intermediate_folders_when_every_operation_is_filtered() {
        let document = Document::default()
            .with_operation("/a/b", "get", Operation::new().with_deprecated(true))
            .with_operation("/c", "parameters", Operation::new());

        let tree = organize(&document);

        assert!(tree.has_edge(ROOT_ID, "path:folder:a"));
        assert!(!tree.has_node("path:folder:a/b"));
        assert!(!tree.has_node("path:folder:c"));
        assert_eq!(
            tree.node("path:folder:a").map(SkeletonNode::kind),
            Some(NodeKind::Folder)
        );
    }

    #[test]
    fn should_merge_equivalent_paths_into_one_request() {
        let document = Document::default()
            .with_operation("/pet", "get", Operation::new())
            .with_operation("/pet/", "get", Operation::new());

        let tree = organize(&document);

        assert_eq!(tree.children("path:folder:pet").count(), 1);
        let request = tree
            .node("path:request:pet:get")
            .and_then(|node| node.meta.as_request())
            .expect("should have request");
        assert_eq!(request.path, "/pet/");
    }
}
