//! Metadata Catalog SDK
//!
//! Public contract of the `metadata-catalog` module:
//!
//! - [`MetadataCatalogClient`]: the API other modules consume
//! - [`EntityRepository`]: the collaborator the module reads generic entities from
//! - Models for type descriptors, generic entities, and the typed beans
//! - [`MetadataCatalogError`] and [`RepositoryError`]

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::{EntityRepository, MetadataCatalogClient};
pub use error::{ErrorKind, MetadataCatalogError, RepositoryError};
pub use models::{
    ClassificationRef, ElementPage, EnumValue, GenericEntity, PageRequest, PropertyValue,
    RelationalColumn, RelationalSchema, RelationalTable, SortOrder, TypeDescriptor,
};
