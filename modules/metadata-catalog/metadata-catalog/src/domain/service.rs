//! Domain service for the Metadata Catalog module.

use std::collections::HashSet;
use std::sync::Arc;

use metadata_catalog_sdk::{ElementPage, EntityRepository, PageRequest, TypeDescriptor};
use tracing::{debug, instrument};

use super::converter::{EntityConverter, MappedBean};
use super::error::DomainError;
use super::type_registry::TypeRegistry;
use crate::config::MetadataCatalogConfig;

/// Paging and access settings of the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// `None` allows every caller.
    pub authorized_users: Option<HashSet<String>>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from(&MetadataCatalogConfig::default())
    }
}

impl From<&MetadataCatalogConfig> for ServiceConfig {
    fn from(cfg: &MetadataCatalogConfig) -> Self {
        Self {
            default_page_size: cfg.default_page_size,
            max_page_size: cfg.max_page_size,
            authorized_users: cfg
                .authorized_users
                .as_ref()
                .map(|users| users.iter().cloned().collect()),
        }
    }
}

/// Orchestrates repository reads, entity conversion and registry lookups.
pub struct MetadataCatalogService {
    registry: Arc<TypeRegistry>,
    converter: EntityConverter,
    repo: Arc<dyn EntityRepository>,
    config: ServiceConfig,
}

impl MetadataCatalogService {
    #[must_use]
    pub fn new(
        registry: Arc<TypeRegistry>,
        repo: Arc<dyn EntityRepository>,
        config: ServiceConfig,
    ) -> Self {
        let converter = EntityConverter::new(Arc::clone(&registry));
        Self {
            registry,
            converter,
            repo,
            config,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Supported search types in registry order.
    #[must_use]
    pub fn list_supported_types(&self) -> Vec<TypeDescriptor> {
        self.registry.list_supported_types().to_vec()
    }

    /// Fetches the entity stored under `guid` and converts it to `B`.
    ///
    /// # Errors
    /// `Repository` when the fetch fails, a conversion error otherwise.
    #[instrument(skip(self), fields(bean = B::mapping().type_name))]
    pub async fn get_bean<B: MappedBean>(&self, guid: &str) -> Result<B, DomainError> {
        let entity = self.repo.fetch_entity(guid).await?;
        debug!(type_name = %entity.type_name, "entity fetched");
        self.converter.convert(&entity)
    }

    /// Lists entities of `B`'s type and its registered subtypes, converted.
    ///
    /// # Errors
    /// `InvalidPaging` for a bad page size, `Repository` when the query fails,
    /// or the first conversion error of the page.
    #[instrument(skip(self), fields(bean = B::mapping().type_name))]
    pub async fn list_beans<B: MappedBean>(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<B>, DomainError> {
        let page_size = self.resolve_page_size(page.page_size)?;
        let type_names = self.registry.assignable_type_names(B::mapping().type_name);

        let entities = self
            .repo
            .find_entities(&type_names, page.start_from, page_size)
            .await?;
        debug!(found = entities.len(), ?type_names, "entities listed");

        let elements = self.converter.convert_all(&entities)?;
        Ok(ElementPage {
            elements,
            start_from: page.start_from,
            page_size,
        })
    }

    /// Effective page size for a request.
    ///
    /// # Errors
    /// `InvalidPaging` when the size is zero or above the configured maximum.
    pub fn resolve_page_size(&self, requested: Option<usize>) -> Result<usize, DomainError> {
        match requested {
            None => Ok(self.config.default_page_size),
            Some(0) => Err(DomainError::invalid_paging("pageSize must be positive")),
            Some(size) if size > self.config.max_page_size => {
                Err(DomainError::invalid_paging(format!(
                    "pageSize {size} exceeds the maximum of {}",
                    self.config.max_page_size
                )))
            }
            Some(size) => Ok(size),
        }
    }

    /// Checks that `user_id` may call `action`.
    ///
    /// # Errors
    /// `Unauthorized` when an allow-list is configured and does not name the user.
    pub fn check_access(&self, user_id: &str, action: &str) -> Result<(), DomainError> {
        let Some(users) = &self.config.authorized_users else {
            return Ok(());
        };
        if users.contains(user_id) {
            Ok(())
        } else {
            Err(DomainError::unauthorized(user_id, action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::InMemoryEntityRepository;
    use async_trait::async_trait;
    use metadata_catalog_sdk::{
        GenericEntity, RelationalColumn, RelationalTable, RepositoryError,
    };

    struct UnavailableRepository;

    #[async_trait]
    impl EntityRepository for UnavailableRepository {
        async fn fetch_entity(&self, _guid: &str) -> Result<GenericEntity, RepositoryError> {
            Err(RepositoryError::unavailable("connection refused"))
        }

        async fn find_entities(
            &self,
            _type_names: &[String],
            _start_from: usize,
            _page_size: usize,
        ) -> Result<Vec<GenericEntity>, RepositoryError> {
            Err(RepositoryError::unavailable("connection refused"))
        }
    }

    fn seeded_service(config: ServiceConfig) -> MetadataCatalogService {
        let repo = InMemoryEntityRepository::from_entities([
            GenericEntity::new("t1", "RelationalTable").with_property("displayName", "orders"),
            GenericEntity::new("t2", "RelationalTable").with_property("displayName", "customers"),
            GenericEntity::new("v1", "RelationalView").with_property("displayName", "open_orders"),
            GenericEntity::new("c1", "RelationalColumn")
                .with_property("displayName", "id")
                .with_property("dataType", "INT"),
        ]);
        MetadataCatalogService::new(Arc::new(TypeRegistry::builtin()), Arc::new(repo), config)
    }

    #[tokio::test]
    async fn test_get_bean_converts_fetched_entity() {
        let service = seeded_service(ServiceConfig::default());
        let table: RelationalTable = service.get_bean("t1").await.unwrap();
        assert_eq!(table.display_name, "orders");
    }

    #[tokio::test]
    async fn test_get_bean_rejects_incompatible_entity() {
        let service = seeded_service(ServiceConfig::default());
        let err = service.get_bean::<RelationalTable>("c1").await.unwrap_err();
        assert!(matches!(err, DomainError::TypeMismatch { .. }));
    }

    #[tokio::test]
    async fn test_get_bean_propagates_missing_entity() {
        let service = seeded_service(ServiceConfig::default());
        let err = service.get_bean::<RelationalTable>("nope").await.unwrap_err();
        assert_eq!(err, DomainError::Repository(RepositoryError::not_found("nope")));
    }

    #[tokio::test]
    async fn test_unavailable_repository_is_repository_error() {
        let service = MetadataCatalogService::new(
            Arc::new(TypeRegistry::builtin()),
            Arc::new(UnavailableRepository),
            ServiceConfig::default(),
        );
        let err = service.get_bean::<RelationalColumn>("c1").await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(RepositoryError::Unavailable(_))));

        let err = service
            .list_beans::<RelationalColumn>(PageRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }

    #[tokio::test]
    async fn test_list_beans_includes_subtypes_in_guid_order() {
        let service = seeded_service(ServiceConfig::default());
        let page = service
            .list_beans::<RelationalTable>(PageRequest::default())
            .await
            .unwrap();
        let guids: Vec<&str> = page.elements.iter().map(|t| t.guid.as_str()).collect();
        assert_eq!(guids, vec!["t1", "t2", "v1"]);
        assert_eq!(page.start_from, 0);
        assert_eq!(page.page_size, 25);
    }

    #[tokio::test]
    async fn test_list_beans_pages() {
        let service = seeded_service(ServiceConfig::default());
        let page = service
            .list_beans::<RelationalTable>(PageRequest::new(1, 1))
            .await
            .unwrap();
        assert_eq!(page.elements.len(), 1);
        assert_eq!(page.elements[0].guid, "t2");
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn test_resolve_page_size() {
        let service = seeded_service(ServiceConfig {
            max_page_size: 50,
            ..ServiceConfig::default()
        });
        assert_eq!(service.resolve_page_size(None), Ok(25));
        assert_eq!(service.resolve_page_size(Some(50)), Ok(50));
        assert!(matches!(
            service.resolve_page_size(Some(0)),
            Err(DomainError::InvalidPaging(_))
        ));
        assert!(matches!(
            service.resolve_page_size(Some(51)),
            Err(DomainError::InvalidPaging(_))
        ));
    }

    #[test]
    fn test_check_access() {
        let open = seeded_service(ServiceConfig::default());
        assert!(open.check_access("anyone", "getTable").is_ok());

        let restricted = seeded_service(ServiceConfig {
            authorized_users: Some(HashSet::from(["alice".to_owned()])),
            ..ServiceConfig::default()
        });
        assert!(restricted.check_access("alice", "getTable").is_ok());
        assert_eq!(
            restricted.check_access("mallory", "getTable"),
            Err(DomainError::unauthorized("mallory", "getTable"))
        );
    }
}
