use field_mask::MaskError;
use thiserror::Error;

/// Configuration-time failures. Runtime operations on a field never fail.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("unknown input kind '{0}'")]
    UnknownInputKind(String),

    #[error("counter limit must be a boolean or a non-negative number, got '{0}'")]
    InvalidCounter(String),

    #[error("invalid mask pattern '{pattern}': {source}")]
    Mask {
        pattern: String,
        #[source]
        source: MaskError,
    },

    #[error("failed to parse field options: {0}")]
    Options(#[source] serde_json::Error),
}

impl FieldError {
    #[must_use]
    pub fn mask(pattern: impl Into<String>, source: MaskError) -> Self {
        Self::Mask {
            pattern: pattern.into(),
            source,
        }
    }
}
