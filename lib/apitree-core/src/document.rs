//! The API description consumed by the tree builders.
//!
//! Only the parts of an OpenAPI document that drive folder organization are
//! modelled: the path-keyed operation map, the declared tags and the webhook
//! map. Everything else in the input is ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::trace;
use utoipa::openapi::path::{Operation as OpenApiOperation, PathItem};
use utoipa::openapi::{Deprecated, OpenApi};

use crate::{ApiTreeError, HttpMethod};

/// Operations of a single path (or webhook), keyed by the raw method key.
///
/// Keys are kept verbatim: filtering of non-method keys is the builders' job.
pub type PathOperations = IndexMap<String, Operation>;

/// An API description, reduced to what the tree builders read.
///
/// Maps keep declaration order, so the children of every folder follow the
/// order of the source document.
///
/// # Example
///
/// ```rust
/// use apitree_core::Document;
///
/// let document = Document::from_json(r#"{
///     "paths": { "/pets": { "get": { "tags": ["pets"] } } },
///     "tags": [{ "name": "pets", "description": "Everything about pets" }]
/// }"#)?;
///
/// assert_eq!(document.paths.len(), 1);
/// # Ok::<(), apitree_core::ApiTreeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Document {
    /// Operations keyed by path, then by method.
    #[serde(default, deserialize_with = "lenient_items")]
    pub paths: IndexMap<String, PathOperations>,

    /// Top-level tag declarations.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<TagDeclaration>,

    /// Webhook operations keyed by webhook name, then by method.
    #[serde(
        default,
        deserialize_with = "lenient_items",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub webhooks: IndexMap<String, PathOperations>,
}

impl Document {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiTreeError::JsonError`] if the input is not valid JSON or
    /// a tag declaration has no name.
    pub fn from_json(input: &str) -> Result<Self, ApiTreeError> {
        let document = serde_json::from_str(input)?;
        Ok(document)
    }

    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiTreeError::YamlError`] if the input is not valid YAML or
    /// a tag declaration has no name.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(input: &str) -> Result<Self, ApiTreeError> {
        serde_saphyr::from_str(input).map_err(|err| ApiTreeError::YamlError {
            message: err.to_string(),
        })
    }

    /// Adds an operation under a path.
    #[must_use]
    pub fn with_operation(
        mut self,
        path: impl Into<String>,
        method: impl Into<String>,
        operation: Operation,
    ) -> Self {
        self.paths
            .entry(path.into())
            .or_default()
            .insert(method.into(), operation);
        self
    }

    /// Adds a webhook operation.
    #[must_use]
    pub fn with_webhook(
        mut self,
        name: impl Into<String>,
        method: impl Into<String>,
        operation: Operation,
    ) -> Self {
        self.webhooks
            .entry(name.into())
            .or_default()
            .insert(method.into(), operation);
        self
    }

    /// Declares a tag.
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, description: Option<&str>) -> Self {
        self.tags.push(TagDeclaration {
            name: name.into(),
            description: description.map(str::to_string),
        });
        self
    }

    /// Returns the tag name to description lookup.
    ///
    /// A tag declared twice keeps its first position and its last description.
    #[must_use]
    pub fn tag_descriptions(&self) -> IndexMap<&str, Option<&str>> {
        let mut result = IndexMap::new();
        for tag in &self.tags {
            result.insert(tag.name.as_str(), tag.description.as_deref());
        }
        result
    }
}

/// A top-level tag declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagDeclaration {
    /// The tag name.
    pub name: String,
    /// Optional description, copied onto the tag folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The fields of an operation that affect the tree.
///
/// Reading is lenient. `deprecated` is read for truthiness: `true`, a
/// non-zero number, a non-empty string, an array or an object mark the
/// operation deprecated, anything else (including a missing flag) does not.
/// A missing or malformed `tags` list means "untagged". Values that are not
/// operations at all (a path-level `parameters` array, a `summary` string)
/// parse as a plain untagged operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Value")]
pub struct Operation {
    /// `true` when the operation is marked deprecated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    /// Tags, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Operation {
    /// Creates an untagged, non-deprecated operation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an operation with the given tags.
    #[must_use]
    pub fn tagged<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deprecated: false,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the deprecated flag.
    #[must_use]
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Returns `true` if the operation should be left out of the tree.
    #[must_use]
    pub fn is_excluded(&self, include_deprecated: bool) -> bool {
        self.deprecated && !include_deprecated
    }
}

impl From<Value> for Operation {
    fn from(value: Value) -> Self {
        let deprecated = value.get("deprecated").is_some_and(is_truthy);

        let tags = match value.get("tags") {
            Some(Value::Array(tags)) => tags
                .iter()
                .filter_map(|tag| {
                    let name = tag.as_str();
                    if name.is_none() {
                        trace!(?tag, "ignore non-string tag");
                    }
                    name.map(str::to_string)
                })
                .collect(),
            _ => Vec::new(),
        };

        Self { deprecated, tags }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<&OpenApiOperation> for Operation {
    fn from(operation: &OpenApiOperation) -> Self {
        Self {
            deprecated: matches!(operation.deprecated, Some(Deprecated::True)),
            tags: operation.tags.clone().unwrap_or_default(),
        }
    }
}

impl From<&OpenApi> for Document {
    fn from(openapi: &OpenApi) -> Self {
        let paths = openapi
            .paths
            .paths
            .iter()
            .map(|(path, item)| {
                let operations = iter_operations(item)
                    .map(|(method, operation)| (method.to_string(), Operation::from(operation)))
                    .collect();
                (path.clone(), operations)
            })
            .collect();

        let tags = openapi
            .tags
            .iter()
            .flatten()
            .map(|tag| TagDeclaration {
                name: tag.name.clone(),
                description: tag.description.clone(),
            })
            .collect();

        Self {
            paths,
            tags,
            webhooks: IndexMap::new(),
        }
    }
}

/// Iterates over the operations of a utoipa path item with their method.
fn iter_operations(item: &PathItem) -> impl Iterator<Item = (HttpMethod, &OpenApiOperation)> {
    [
        (HttpMethod::Get, item.get.as_ref()),
        (HttpMethod::Put, item.put.as_ref()),
        (HttpMethod::Post, item.post.as_ref()),
        (HttpMethod::Delete, item.delete.as_ref()),
        (HttpMethod::Options, item.options.as_ref()),
        (HttpMethod::Head, item.head.as_ref()),
        (HttpMethod::Patch, item.patch.as_ref()),
        (HttpMethod::Trace, item.trace.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.map(|operation| (method, operation)))
}

/// A path item or webhook entry; anything but an object carries no operation.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientItem {
    Operations(PathOperations),
    Other(Value),
}

/// Reads a path or webhook map, keeping entries that are not objects as
/// empty operation maps. A `null` map is empty.
fn lenient_items<'de, D>(deserializer: D) -> Result<IndexMap<String, PathOperations>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<IndexMap<String, LenientItem>>::deserialize(deserializer)?;
    let result = items
        .into_iter()
        .flatten()
        .map(|(key, item)| match item {
            LenientItem::Operations(operations) => (key, operations),
            LenientItem::Other(value) => {
                trace!(%key, ?value, "ignore entry that is not an object");
                (key, PathOperations::new())
            }
        })
        .collect();
    Ok(result)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
