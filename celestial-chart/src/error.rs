//! Crate-wide error type.
//!
//! Only two kinds of failure escape a plot call: programming errors in a
//! selection expression ([`Error::UnknownAttribute`], [`Error::TypeMismatch`])
//! and failures raised by collaborators or callbacks. Null attribute values,
//! missing styles and malformed geometry are handled where they occur and
//! never show up here.

use thiserror::Error;

/// Error returned by a caller-supplied callback such as an `alpha_fn`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} has no attribute `{attribute}`")]
    UnknownAttribute {
        kind: &'static str,
        attribute: String,
    },

    #[error("cannot order `{attribute}`: {message}")]
    TypeMismatch { attribute: String, message: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("style error: {0}")]
    Style(String),

    #[error("ephemeris error: {0}")]
    Ephemeris(String),

    #[error("callback failed: {0}")]
    Callback(#[source] BoxError),

    #[error("render error: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("style file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("style serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unknown_attribute(kind: &'static str, attribute: &str) -> Self {
        Self::UnknownAttribute {
            kind,
            attribute: attribute.to_string(),
        }
    }

    /// Returns `true` for errors caused by how the caller built a query,
    /// as opposed to failures of a collaborator.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownAttribute { .. } | Self::TypeMismatch { .. } | Self::InvalidArgument(_)
        )
    }
}
