//! Configuration errors

use mamba_tree::TreeError;

/// Errors raised at the edges of the store.
///
/// Lookups and mapping merges never fail; these cover turning caller input
/// into overlays and serializing the active tree.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Overlay must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Invalid assignment '{0}': expected PATH=VALUE")]
    InvalidAssignment(String),

    #[error("Fingerprint error: {0}")]
    FingerprintError(String),

    #[error("Serialization error: {0}")]
    SerializeError(String),
}

impl From<TreeError> for ConfigError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::NotAnObject(found) => Self::NotAMapping { found },
            TreeError::Canonicalize(msg) => Self::FingerprintError(msg),
            parse @ (TreeError::JsonParse(_) | TreeError::TomlParse(_)) => {
                Self::ParseError(parse.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializeError(err.to_string())
    }
}
