//! Domain errors of the metadata catalog.

use metadata_catalog_sdk::{ErrorKind, MetadataCatalogError, RepositoryError};
use thiserror::Error;

/// Errors raised by the registry, the converter, and the domain service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("entity {guid} of type '{actual}' cannot be converted to '{expected}'")]
    TypeMismatch {
        guid: String,
        expected: String,
        actual: String,
    },

    #[error("entity {guid} is missing required attribute '{attribute}'")]
    MissingAttribute { guid: String, attribute: String },

    #[error("entity {guid} has an invalid '{attribute}' attribute: {reason}")]
    InvalidAttribute {
        guid: String,
        attribute: String,
        reason: String,
    },

    #[error("invalid paging request: {0}")]
    InvalidPaging(String),

    #[error("invalid request path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("user '{user_id}' is not authorized to call {action}")]
    Unauthorized { user_id: String, action: String },
}

impl DomainError {
    #[must_use]
    pub fn type_mismatch(
        guid: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            guid: guid.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    #[must_use]
    pub fn missing_attribute(guid: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            guid: guid.into(),
            attribute: attribute.into(),
        }
    }

    #[must_use]
    pub fn invalid_attribute(
        guid: impl Into<String>,
        attribute: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            guid: guid.into(),
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_paging(message: impl Into<String>) -> Self {
        Self::InvalidPaging(message.into())
    }

    #[must_use]
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }

    #[must_use]
    pub fn unauthorized(user_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Unauthorized {
            user_id: user_id.into(),
            action: action.into(),
        }
    }

    /// Wire-level kind this error is reported as.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. }
            | Self::MissingAttribute { .. }
            | Self::InvalidAttribute { .. }
            | Self::InvalidPaging(_)
            | Self::InvalidPath(_) => ErrorKind::InvalidEntity,
            Self::Repository(_) => ErrorKind::RepositoryAccess,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
        }
    }
}

impl From<DomainError> for MetadataCatalogError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e.kind() {
            ErrorKind::InvalidEntity => Self::InvalidEntity(message),
            ErrorKind::RepositoryAccess => Self::RepositoryAccess(message),
            ErrorKind::Unauthorized => Self::Unauthorized(message),
        }
    }
}
