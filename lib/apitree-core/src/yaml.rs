//! YAML output for trees, using serde-saphyr.
//!
//! Only available when the `yaml` feature is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use apitree_core::{Document, SkeletonConfig, ToYaml, generate_skeleton};
//!
//! let tree = generate_skeleton(&document, &SkeletonConfig::default());
//! let yaml = tree.to_yaml()?;
//! ```

use serde::Serialize;

/// Error type for YAML serialization operations.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait for serializing types to YAML.
///
/// This trait is implemented for all types that implement [`Serialize`].
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FolderStrategy, SkeletonConfig};

    #[test]
    fn should_serialize_config_to_yaml() {
        let config = SkeletonConfig::new(FolderStrategy::Tags);

        let yaml = config.to_yaml().expect("should serialize to YAML");

        assert!(yaml.contains("folderStrategy: tags"));
        assert!(yaml.contains("includeWebhooks: false"));
    }
}
