//! In-memory entity repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use metadata_catalog_sdk::{EntityRepository, GenericEntity, RepositoryError};
use parking_lot::RwLock;

/// Entity repository backed by a GUID-ordered map.
#[derive(Debug, Default)]
pub struct InMemoryEntityRepository {
    entities: RwLock<BTreeMap<String, GenericEntity>>,
}

impl InMemoryEntityRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository. A later entity replaces an earlier one with the same GUID.
    #[must_use]
    pub fn from_entities(entities: impl IntoIterator<Item = GenericEntity>) -> Self {
        let map = entities
            .into_iter()
            .map(|e| (e.guid.clone(), e))
            .collect();
        Self {
            entities: RwLock::new(map),
        }
    }

    /// Stores `entity`, returning the one it replaced.
    pub fn insert(&self, entity: GenericEntity) -> Option<GenericEntity> {
        self.entities.write().insert(entity.guid.clone(), entity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}

#[async_trait]
impl EntityRepository for InMemoryEntityRepository {
    async fn fetch_entity(&self, guid: &str) -> Result<GenericEntity, RepositoryError> {
        self.entities
            .read()
            .get(guid)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(guid))
    }

    async fn find_entities(
        &self,
        type_names: &[String],
        start_from: usize,
        page_size: usize,
    ) -> Result<Vec<GenericEntity>, RepositoryError> {
        let entities = self.entities.read();
        Ok(entities
            .values()
            .filter(|e| type_names.iter().any(|t| *t == e.type_name))
            .skip(start_from)
            .take(page_size)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[tokio::test]
    async fn test_fetch_entity() {
        let repo = InMemoryEntityRepository::from_entities([GenericEntity::new("g1", "T")]);
        assert_eq!(repo.fetch_entity("g1").await.unwrap().type_name, "T");
        assert_eq!(
            repo.fetch_entity("g2").await.unwrap_err(),
            RepositoryError::not_found("g2")
        );
    }

    #[tokio::test]
    async fn test_find_entities_filters_and_pages_in_guid_order() {
        let repo = InMemoryEntityRepository::from_entities([
            GenericEntity::new("b", "T"),
            GenericEntity::new("a", "T"),
            GenericEntity::new("c", "U"),
            GenericEntity::new("d", "V"),
        ]);

        let all = repo.find_entities(&types(&["T", "U"]), 0, 10).await.unwrap();
        let guids: Vec<&str> = all.iter().map(|e| e.guid.as_str()).collect();
        assert_eq!(guids, vec!["a", "b", "c"]);

        let page = repo.find_entities(&types(&["T", "U"]), 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].guid, "b");

        let past_end = repo.find_entities(&types(&["T"]), 5, 10).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_insert_replaces_by_guid() {
        let repo = InMemoryEntityRepository::new();
        assert!(repo.is_empty());
        assert!(repo.insert(GenericEntity::new("g1", "T")).is_none());
        let replaced = repo.insert(GenericEntity::new("g1", "U")).unwrap();
        assert_eq!(replaced.type_name, "T");
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.fetch_entity("g1").await.unwrap().type_name, "U");
    }
}
