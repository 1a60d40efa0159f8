use super::{TreeOrganizer, retained_operations};
use crate::{Document, FolderMeta, NodeId, NodeMeta, RequestMeta, SkeletonTree};

/// Nests requests into folders following each operation's ordered tag list.
///
/// The tag list is read from the end: the last tag is the top folder and the
/// first tag the folder holding the request. `["a", "b", "c"]` on `GET /x`
/// gives
///
/// ```text
/// root:collection
/// └── path:c
///     └── path:c/b
///         └── path:c/b/a
///             └── path:c/b/a:/x:get   (tagPath = [a, b, c])
/// ```
///
/// Operations sharing trailing tags share the matching folders. Untagged
/// operations are attached to the root as `path:/x:get`. Declared tags that
/// no operation uses get no folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupByTagHierarchy {
    include_deprecated: bool,
}

impl GroupByTagHierarchy {
    /// Creates the organizer.
    #[must_use]
    pub fn new(include_deprecated: bool) -> Self {
        Self { include_deprecated }
    }
}

impl TreeOrganizer for GroupByTagHierarchy {
    fn organize(&self, document: &Document) -> SkeletonTree {
        let mut tree = SkeletonTree::new();
        let root = NodeId::root();
        let descriptions = document.tag_descriptions();

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

                let mut parent = root.clone();
                let mut current_path = String::new();
                for tag in operation.tags.iter().rev() {
                    if !current_path.is_empty() {
                        current_path.push('/');
                    }
                    current_path.push_str(tag);

                    let folder = NodeId::tag_folder(&current_path);
                    tree.ensure_child(&parent, &folder, || {
                        let description = descriptions
                            .get(tag.as_str())
                            .copied()
                            .flatten()
                            .unwrap_or_default();
                        NodeMeta::Folder(FolderMeta::tag(tag, "", Some(description)))
                    });
                    parent = folder;
                }

                let request = NodeId::tag_request(&current_path, path, method);
                tree.set_node(
                    request.clone(),
                    NodeMeta::Request(
                        RequestMeta::new(path, method).with_tag_path(&operation.tags),
                    ),
                );
                tree.set_edge(&parent, &request);
            }
        }

        tree
    }
}
