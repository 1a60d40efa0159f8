use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ApiTreeError;

/// How requests are grouped into folders.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display,
)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum FolderStrategy {
    /// Nested folders following URL path segments.
    #[default]
    #[display("paths")]
    Paths,
    /// One folder per tag, requests replicated per tag.
    #[display("tags")]
    Tags,
    /// Nested folders following each operation's tag list, last tag outermost.
    #[display("tagshierarchical")]
    TagsHierarchical,
}

impl FolderStrategy {
    /// Returns the canonical option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paths => "paths",
            Self::Tags => "tags",
            Self::TagsHierarchical => "tagshierarchical",
        }
    }
}

impl FromStr for FolderStrategy {
    type Err = ApiTreeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "paths" => Ok(Self::Paths),
            "tags" => Ok(Self::Tags),
            "tagshierarchical" | "TagsHierarchical" => Ok(Self::TagsHierarchical),
            _ => Err(ApiTreeError::InvalidFolderStrategy {
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FolderStrategy {
    type Error = ApiTreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options of a tree build.
///
/// Reads from camelCase options, missing keys taking their default:
///
/// ```rust
/// use apitree_core::{FolderStrategy, SkeletonConfig};
///
/// let options = r#"{ "folderStrategy": "tags", "includeWebhooks": true }"#;
/// let config = SkeletonConfig::from_json(options)?;
///
/// assert_eq!(config.folder_strategy, FolderStrategy::Tags);
/// assert!(config.include_webhooks);
/// assert!(config.include_deprecated);
/// # Ok::<(), apitree_core::ApiTreeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkeletonConfig {
    /// The folder organization.
    pub folder_strategy: FolderStrategy,
    /// Append the webhook subtree after organizing paths.
    pub include_webhooks: bool,
    /// Keep operations marked deprecated.
    pub include_deprecated: bool,
}

/// Options as written, before the strategy name is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkeletonConfig {
    folder_strategy: Option<String>,
    include_webhooks: Option<bool>,
    include_deprecated: Option<bool>,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            folder_strategy: FolderStrategy::Paths,
            include_webhooks: false,
            include_deprecated: true,
        }
    }
}

impl SkeletonConfig {
    /// Creates a configuration for a strategy, other options at their default.
    #[must_use]
    pub fn new(folder_strategy: FolderStrategy) -> Self {
        Self {
            folder_strategy,
            ..Self::default()
        }
    }

    /// Parses camelCase JSON options.
    ///
    /// # Errors
    ///
    /// Returns [`ApiTreeError::JsonError`] for malformed options and
    /// [`ApiTreeError::InvalidFolderStrategy`] for an unknown `folderStrategy`.
    pub fn from_json(input: &str) -> Result<Self, ApiTreeError> {
        let raw = serde_json::from_str::<RawSkeletonConfig>(input)?;
        let defaults = Self::default();
        let folder_strategy = match raw.folder_strategy {
            Some(value) => value.parse::<FolderStrategy>()?,
            None => defaults.folder_strategy,
        };
        Ok(Self {
            folder_strategy,
            include_webhooks: raw.include_webhooks.unwrap_or(defaults.include_webhooks),
            include_deprecated: raw
                .include_deprecated
                .unwrap_or(defaults.include_deprecated),
        })
    }

    /// Sets whether webhooks are appended.
    #[must_use]
    pub fn with_webhooks(mut self, include_webhooks: bool) -> Self {
        self.include_webhooks = include_webhooks;
        self
    }

    /// Sets whether deprecated operations are kept.
    #[must_use]
    pub fn with_deprecated(mut self, include_deprecated: bool) -> Self {
        self.include_deprecated = include_deprecated;
        self
    }
}
