/// Errors raised while reading a document or its tree options.
///
/// Building a tree never fails once a [`Document`](crate::Document) and a
/// [`SkeletonConfig`](crate::SkeletonConfig) exist: every failure happens at
/// the parsing boundary, before the first node is created.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiTreeError {
    /// The folder strategy is not one of `paths`, `tags` or `tagshierarchical`.
    #[display("Invalid folder strategy '{value}', expected one of: paths, tags, tagshierarchical")]
    #[from(skip)]
    InvalidFolderStrategy {
        /// The rejected strategy name.
        value: String,
    },

    /// The document or the options are not valid JSON.
    JsonError(serde_json::Error),

    /// The document is not valid YAML.
    #[display("Failed to parse YAML document: {message}")]
    #[from(skip)]
    YamlError {
        /// The parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_folder_strategy() {
        let error = ApiTreeError::InvalidFolderStrategy {
            value: "bogus".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid folder strategy 'bogus', expected one of: paths, tags, tagshierarchical"
        );
    }

    #[test]
    fn should_convert_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ApiTreeError::from(json_error);

        assert!(matches!(error, ApiTreeError::JsonError(_)));
    }
}
