//! Generic entity conversion engine.
//!
//! A bean type takes part by registering a [`MappingSpec`]: the registry type
//! it represents, its attribute table, and a function assembling the bean from
//! already-validated attributes. The engine does the rest, so a bean is
//! either produced whole or not at all.

use std::sync::Arc;

use metadata_catalog_sdk::GenericEntity;

use super::error::DomainError;
use super::mapping::{AttributeSpec, MappedAttributes, map_attributes};
use super::type_registry::TypeRegistry;

/// Entity data that is not part of the property bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityHeader {
    pub guid: String,
    pub type_name: String,
    pub classifications: Vec<String>,
}

impl EntityHeader {
    #[must_use]
    pub fn has_classification(&self, name: &str) -> bool {
        self.classifications.iter().any(|c| c == name)
    }
}

impl From<&GenericEntity> for EntityHeader {
    fn from(entity: &GenericEntity) -> Self {
        Self {
            guid: entity.guid.clone(),
            type_name: entity.type_name.clone(),
            classifications: entity.classification_names(),
        }
    }
}

/// Declarative description of how to build bean `B`.
pub struct MappingSpec<B> {
    /// Registry type the entity must be assignable to.
    pub type_name: &'static str,
    pub attributes: &'static [AttributeSpec],
    pub assemble: fn(EntityHeader, &mut MappedAttributes) -> B,
}

/// A bean with a registered mapping spec.
pub trait MappedBean: Sized + Send + 'static {
    fn mapping() -> &'static MappingSpec<Self>;
}

/// Converts generic entities into mapped beans.
#[derive(Debug, Clone)]
pub struct EntityConverter {
    registry: Arc<TypeRegistry>,
}

impl EntityConverter {
    #[must_use]
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// Converts one entity.
    ///
    /// # Errors
    /// `TypeMismatch` if the entity type is not assignable to the bean's type,
    /// `MissingAttribute`/`InvalidAttribute` from attribute mapping.
    pub fn convert<B: MappedBean>(&self, entity: &GenericEntity) -> Result<B, DomainError> {
        let spec = B::mapping();

        if !self.registry.is_assignable(&entity.type_name, spec.type_name) {
            return Err(DomainError::type_mismatch(
                &entity.guid,
                spec.type_name,
                &entity.type_name,
            ));
        }

        let mut attributes = map_attributes(entity, spec.attributes)?;
        Ok((spec.assemble)(EntityHeader::from(entity), &mut attributes))
    }

    /// Converts a batch, failing on the first entity that does not convert.
    ///
    /// # Errors
    /// The first conversion error, see [`EntityConverter::convert`].
    pub fn convert_all<B: MappedBean>(&self, entities: &[GenericEntity]) -> Result<Vec<B>, DomainError> {
        entities.iter().map(|e| self.convert::<B>(e)).collect()
    }
}
