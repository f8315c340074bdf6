//! Error types for tree parsing and canonicalization.

/// Errors raised while turning text into trees or trees into digests.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("expected an object at the top level, found {0}")]
    NotAnObject(&'static str),

    #[error("canonicalization failed: {0}")]
    Canonicalize(String),
}
