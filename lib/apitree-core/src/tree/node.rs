use std::borrow::Borrow;

use serde::Serialize;

/// Identifier of the collection root, present in every tree.
pub const ROOT_ID: &str = "root:collection";

/// Prefix shared by every webhook node id.
pub const WEBHOOK_PREFIX: &str = "path~webhook";

/// Name and path given to the webhook folder.
pub const WEBHOOK_FOLDER_NAME: &str = "webhook~folder";

/// Deterministic node key derived from a node's role and position.
///
/// Re-deriving the same logical node yields the same id, which is what makes
/// insertion idempotent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// `root:collection`
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    /// `path:folder:<path identifier>`
    #[must_use]
    pub fn path_folder(path_identifier: &str) -> Self {
        Self(format!("path:folder:{path_identifier}"))
    }

    /// `path:request:<path identifier>:<method>`
    #[must_use]
    pub fn path_request(path_identifier: &str, method: &str) -> Self {
        Self(format!("path:request:{path_identifier}:{method}"))
    }

    /// `path:<tag path>`, a tag folder (flat or nested).
    #[must_use]
    pub fn tag_folder(tag_path: &str) -> Self {
        Self(format!("path:{tag_path}"))
    }

    /// `path:<tag path>:<path>:<method>`, a request filed under a tag folder.
    #[must_use]
    pub fn tag_request(tag_path: &str, path: &str, method: &str) -> Self {
        Self(format!("path:{tag_path}:{path}:{method}"))
    }

    /// `path:<path>:<method>`, an untagged request attached to the root.
    #[must_use]
    pub fn untagged_request(path: &str, method: &str) -> Self {
        Self(format!("path:{path}:{method}"))
    }

    /// `path~webhook:folder`
    #[must_use]
    pub fn webhook_folder() -> Self {
        Self(format!("{WEBHOOK_PREFIX}:folder"))
    }

    /// `path~webhook:<name>:<method>`
    #[must_use]
    pub fn webhook_request(name: &str, method: &str) -> Self {
        Self(format!("{WEBHOOK_PREFIX}:{name}:{method}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Role of a node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NodeKind {
    /// The single root.
    #[display("collection")]
    Collection,
    /// A folder derived from a path segment or a tag.
    #[display("folder")]
    Folder,
    /// A request for one path operation.
    #[display("request")]
    Request,
    /// The folder holding every webhook request.
    #[display("webhook-folder")]
    WebhookFolder,
    /// A request for one webhook operation.
    #[display("webhook-request")]
    WebhookRequest,
}

/// Role-dependent description of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NodeMeta {
    /// The collection root carries no metadata.
    Collection,
    /// A folder.
    Folder(FolderMeta),
    /// A request.
    Request(RequestMeta),
    /// The webhook folder.
    WebhookFolder(FolderMeta),
    /// A webhook request.
    WebhookRequest(RequestMeta),
}

impl NodeMeta {
    /// Returns the node role.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Collection => NodeKind::Collection,
            Self::Folder(_) => NodeKind::Folder,
            Self::Request(_) => NodeKind::Request,
            Self::WebhookFolder(_) => NodeKind::WebhookFolder,
            Self::WebhookRequest(_) => NodeKind::WebhookRequest,
        }
    }

    /// Returns the folder metadata, for both folder roles.
    #[must_use]
    pub fn as_folder(&self) -> Option<&FolderMeta> {
        match self {
            Self::Folder(meta) | Self::WebhookFolder(meta) => Some(meta),
            _ => None,
        }
    }

    /// Returns the request metadata, for both request roles.
    #[must_use]
    pub fn as_request(&self) -> Option<&RequestMeta> {
        match self {
            Self::Request(meta) | Self::WebhookRequest(meta) => Some(meta),
            _ => None,
        }
    }
}

/// Folder metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderMeta {
    /// Display name: the path segment or the tag name.
    pub name: String,
    /// The path segment for path folders, empty for declared tag folders.
    pub path: String,
    /// Slash-joined segment prefix, path folders only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_identifier: Option<String>,
    /// Tag description, tag folders only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FolderMeta {
    /// Folder for one path segment at the given cumulative identifier.
    #[must_use]
    pub fn path_segment(segment: &str, path_identifier: &str) -> Self {
        Self {
            name: segment.to_string(),
            path: segment.to_string(),
            path_identifier: Some(path_identifier.to_string()),
            description: None,
        }
    }

    /// Folder for a tag.
    #[must_use]
    pub fn tag(name: &str, path: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            path_identifier: None,
            description: description.map(str::to_string),
        }
    }
}

/// Request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    /// The full path (or webhook name) as declared in the document.
    pub path: String,
    /// The method key as declared in the document.
    pub method: String,
    /// Slash-joined segments of the path, path strategy only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_identifier: Option<String>,
    /// The tag whose folder holds this request, flat tag strategy only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// The operation's tags in declared order, tag hierarchy strategy only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_path: Option<Vec<String>>,
}

impl RequestMeta {
    /// Creates request metadata for a path and method.
    #[must_use]
    pub fn new(path: &str, method: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            ..Self::default()
        }
    }

    /// Sets the path identifier.
    #[must_use]
    pub fn with_path_identifier(mut self, path_identifier: &str) -> Self {
        self.path_identifier = Some(path_identifier.to_string());
        self
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Sets the tag path.
    #[must_use]
    pub fn with_tag_path(mut self, tag_path: &[String]) -> Self {
        self.tag_path = Some(tag_path.to_vec());
        self
    }
}

/// Payload reserved for the collection emitter. Always empty when built.
pub type NodeData = serde_json::Map<String, serde_json::Value>;

/// A node of the skeleton tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkeletonNode {
    /// Role and description.
    pub meta: NodeMeta,
    /// Emitter-owned payload.
    pub data: NodeData,
}

impl SkeletonNode {
    /// Creates a node with an empty payload.
    #[must_use]
    pub fn new(meta: NodeMeta) -> Self {
        Self {
            meta,
            data: NodeData::new(),
        }
    }

    /// Returns the node role.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.meta.kind()
    }
}
