//! Public error types for the `metadata-catalog` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Wire-level classification of every failure the catalog can report.
///
/// The set is closed: each kind maps to exactly one HTTP status in the
/// module's error catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing entity data.
    InvalidEntity,
    /// The repository could not be reached or the entity does not exist.
    RepositoryAccess,
    /// The caller lacks the rights for the operation.
    Unauthorized,
}

impl ErrorKind {
    /// All declared kinds, in catalog order.
    pub const ALL: [Self; 3] = [Self::InvalidEntity, Self::RepositoryAccess, Self::Unauthorized];

    /// Machine-distinguishable class identifier reported on the wire.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::InvalidEntity => "InvalidEntityError",
            Self::RepositoryAccess => "RepositoryAccessError",
            Self::Unauthorized => "UnauthorizedError",
        }
    }
}

/// Errors that can be returned by the `MetadataCatalogClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataCatalogError {
    /// The entity is not compatible with the requested bean, or its data is invalid.
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    /// The repository collaborator failed to resolve the entity.
    #[error("Repository access failed: {0}")]
    RepositoryAccess(String),

    /// The caller is not allowed to perform the operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl MetadataCatalogError {
    /// Creates an `InvalidEntity` error.
    #[must_use]
    pub fn invalid_entity(message: impl Into<String>) -> Self {
        Self::InvalidEntity(message.into())
    }

    /// Creates a `RepositoryAccess` error.
    #[must_use]
    pub fn repository_access(message: impl Into<String>) -> Self {
        Self::RepositoryAccess(message.into())
    }

    /// Creates an `Unauthorized` error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Returns the wire-level kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEntity(_) => ErrorKind::InvalidEntity,
            Self::RepositoryAccess(_) => ErrorKind::RepositoryAccess,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
        }
    }

    /// Returns the message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidEntity(m) | Self::RepositoryAccess(m) | Self::Unauthorized(m) => m,
        }
    }

    /// Returns `true` if this is an invalid entity error.
    #[must_use]
    pub const fn is_invalid_entity(&self) -> bool {
        matches!(self, Self::InvalidEntity(_))
    }

    /// Returns `true` if this is a repository access error.
    #[must_use]
    pub const fn is_repository_access(&self) -> bool {
        matches!(self, Self::RepositoryAccess(_))
    }

    /// Returns `true` if this is an unauthorized error.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Errors raised by an [`EntityRepository`](crate::EntityRepository) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No entity is stored under the given GUID.
    #[error("Entity not found: {guid}")]
    NotFound { guid: String },

    /// The repository could not serve the request.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(guid: impl Into<String>) -> Self {
        Self::NotFound { guid: guid.into() }
    }

    /// Creates an `Unavailable` error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

impl From<RepositoryError> for MetadataCatalogError {
    fn from(e: RepositoryError) -> Self {
        Self::RepositoryAccess(e.to_string())
    }
}
