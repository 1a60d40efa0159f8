//! # Apitree Core
//!
//! Build the folder/request skeleton of a request collection from an OpenAPI
//! document.
//!
//! The skeleton is a tree rooted at `root:collection`, whose folders follow
//! one of three organizations:
//! - **paths** ([`organize::GroupByPaths`]) - nested folders mirroring URL path segments
//! - **tags** ([`organize::GroupByTags`]) - one folder per tag, a request per tag of an operation
//! - **tagshierarchical** ([`organize::GroupByTagHierarchy`]) - nested folders from the
//!   ordered tag list of each operation, last tag outermost
//!
//! Webhooks can be appended as a separate subtree ([`organize::AppendWebhooks`]).
//!
//! The tree only holds node metadata (names, paths, methods, tags). Request
//! bodies, headers and examples are the job of the collection emitter that
//! walks the tree afterwards, filling each node's `data` payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use apitree_core::{Document, SkeletonConfig, generate_skeleton};
//!
//! let document = Document::from_json(r#"{
//!     "paths": {
//!         "/pet": { "get": { "tags": ["pet"] } },
//!         "/pet/{petId}": {
//!             "get": { "tags": ["pet"] },
//!             "delete": { "tags": ["pet"], "deprecated": true }
//!         }
//!     },
//!     "tags": [{ "name": "pet", "description": "Everything about your Pets" }]
//! }"#)?;
//!
//! let options = r#"{ "folderStrategy": "paths", "includeDeprecated": false }"#;
//! let config = SkeletonConfig::from_json(options)?;
//! let tree = generate_skeleton(&document, &config);
//!
//! assert_eq!(tree.outline(), "\
//! collection root:collection
//!   folder path:folder:pet
//!     request path:request:pet:get
//!     folder path:folder:pet/{petId}
//!       request path:request:pet/{petId}:get
//! ");
//! # Ok::<(), apitree_core::ApiTreeError>(())
//! ```
//!
//! ## Walking the tree
//!
//! ```rust
//! use apitree_core::{Document, NodeKind, Operation, SkeletonConfig, generate_skeleton};
//!
//! let document = Document::default()
//!     .with_operation("/store/order", "post", Operation::new());
//! let tree = generate_skeleton(&document, &SkeletonConfig::default());
//!
//! let requests = tree
//!     .walk()
//!     .filter(|(_, _, node)| node.kind() == NodeKind::Request)
//!     .filter_map(|(_, _, node)| node.meta.as_request())
//!     .map(|meta| format!("{} {}", meta.method, meta.path))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(requests, ["post /store/order"]);
//! ```

mod config;
mod document;
mod error;
mod method;
pub mod organize;
mod skeleton;
mod tree;

#[cfg(feature = "yaml")]
mod yaml;

pub use self::config::{FolderStrategy, SkeletonConfig};
pub use self::document::{Document, Operation, PathOperations, TagDeclaration};
pub use self::error::ApiTreeError;
pub use self::method::{HttpMethod, UnknownMethod};
pub use self::skeleton::generate_skeleton;
pub use self::tree::{
    FolderMeta, NodeData, NodeId, NodeKind, NodeMeta, ROOT_ID, RequestMeta, SkeletonNode,
    SkeletonTree, WEBHOOK_FOLDER_NAME, WEBHOOK_PREFIX, Walk,
};

#[cfg(feature = "yaml")]
pub use self::yaml::{ToYaml, YamlError};
