use thiserror::Error;

/// Configuration error.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A mandatory field was never set.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A field holds a value GitHub would not accept.
    #[error("invalid value for field {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}
