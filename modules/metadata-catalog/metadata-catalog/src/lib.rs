//! Metadata Catalog Module Implementation
//!
//! Converts loosely-typed repository entities into typed beans and wraps every
//! result in the uniform response envelope. The public API is defined in
//! `metadata-catalog-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - **Type registry**: frozen catalog of searchable types, built once at startup
//! - **Entity converter**: one engine driven by declarative per-bean mapping specs
//! - **Response assembler**: the only place where errors become wire envelopes

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use metadata_catalog_sdk::{
    ClassificationRef, ElementPage, EntityRepository, EnumValue, ErrorKind, GenericEntity,
    MetadataCatalogClient, MetadataCatalogError, PageRequest, PropertyValue, RelationalColumn,
    RelationalSchema, RelationalTable, RepositoryError, SortOrder, TypeDescriptor,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::MetadataCatalogModule;

// === CONFIGURATION ===
pub mod config;

pub mod local_client;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod errors;
#[doc(hidden)]
pub mod infra;
