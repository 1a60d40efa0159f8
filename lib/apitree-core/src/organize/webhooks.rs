use tracing::debug;

use crate::{
    Document, FolderMeta, NodeId, NodeMeta, RequestMeta, SkeletonTree, WEBHOOK_FOLDER_NAME,
};

/// Adds a webhook subtree to an already organized tree.
///
/// A non-empty webhook map yields a single `path~webhook:folder` node under
/// the root holding one `path~webhook:<name>:<method>` request per webhook
/// operation. Every key of a webhook is taken as a method; only the
/// deprecated filter applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendWebhooks {
    include_deprecated: bool,
}

impl AppendWebhooks {
    /// Creates the appender.
    #[must_use]
    pub fn new(include_deprecated: bool) -> Self {
        Self { include_deprecated }
    }

    /// Extends `tree` with the webhooks of `document` and returns it.
    #[must_use]
    pub fn append(&self, document: &Document, mut tree: SkeletonTree) -> SkeletonTree {
        if document.webhooks.is_empty() {
            return tree;
        }

        let root = NodeId::root();
        let folder = NodeId::webhook_folder();
        tree.ensure_child(&root, &folder, || {
            NodeMeta::WebhookFolder(FolderMeta {
                name: WEBHOOK_FOLDER_NAME.to_string(),
                path: WEBHOOK_FOLDER_NAME.to_string(),
                path_identifier: None,
                description: Some(String::new()),
            })
        });

        for (name, operations) in &document.webhooks {
            for (method, operation) in operations {
                if operation.is_excluded(self.include_deprecated) {
                    debug!(%name, %method, "skip deprecated webhook");
                    continue;
                }

                let request = NodeId::webhook_request(name, method);
                tree.set_node(
                    request.clone(),
                    NodeMeta::WebhookRequest(RequestMeta::new(name, method)),
                );
                tree.set_edge(&folder, &request);
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organize::{GroupByPaths, TreeOrganizer};
    use crate::{NodeKind, Operation, ROOT_ID, SkeletonNode};

    #[test]
    fn should_leave_tree_untouched_without_webhooks() {
        let document = Document::default().with_operation("/pet", "get", Operation::new());
        let tree = GroupByPaths::new(true).organize(&document);

        let extended = AppendWebhooks::new(true).append(&document, tree.clone());

        assert_eq!(extended, tree);
    }

    #[test]
    fn should_append_webhook_subtree() {
        let document = Document::default()
            .with_webhook("newPet", "post", Operation::new())
            .with_webhook("newPet", "parameters", Operation::new())
            .with_webhook("petGone", "post", Operation::new());

        let tree = AppendWebhooks::new(true).append(&document, SkeletonTree::new());

        assert_eq!(
            tree.children(ROOT_ID).collect::<Vec<_>>(),
            ["path~webhook:folder"]
        );
        assert_eq!(
            tree.children("path~webhook:folder").collect::<Vec<_>>(),
            [
                "path~webhook:newPet:post",
                "path~webhook:newPet:parameters",
                "path~webhook:petGone:post"
            ]
        );
        assert_eq!(
            tree.node("path~webhook:folder").map(SkeletonNode::kind),
            Some(NodeKind::WebhookFolder)
        );
        assert_eq!(
            tree.node("path~webhook:petGone:post")
                .and_then(|node| node.meta.as_request()),
            Some(&RequestMeta::new("petGone", "post"))
        );
    }

    #[test]
    fn should_keep_folder_when_every_webhook_is_deprecated() {
        let document =
            Document::default().with_webhook("old", "post", Operation::new().with_deprecated(true));

        let tree = AppendWebhooks::new(false).append(&document, SkeletonTree::new());

        assert!(tree.has_node("path~webhook:folder"));
        assert_eq!(tree.children("path~webhook:folder").count(), 0);
    }
}
