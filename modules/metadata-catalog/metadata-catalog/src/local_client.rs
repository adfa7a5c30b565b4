//! Local client implementing the `MetadataCatalogClient` trait.

use std::sync::Arc;

use async_trait::async_trait;
use metadata_catalog_sdk::{
    ElementPage, MetadataCatalogClient, MetadataCatalogError, PageRequest, RelationalColumn,
    RelationalSchema, RelationalTable, TypeDescriptor,
};

use crate::domain::service::MetadataCatalogService;

/// Local client for the Metadata Catalog module.
///
/// Delegates to the domain service and converts domain errors into the
/// public SDK error. Callers are trusted, so no access check is made.
pub struct MetadataCatalogLocalClient {
    service: Arc<MetadataCatalogService>,
}

impl MetadataCatalogLocalClient {
    #[must_use]
    pub fn new(service: Arc<MetadataCatalogService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MetadataCatalogClient for MetadataCatalogLocalClient {
    async fn list_supported_types(&self) -> Result<Vec<TypeDescriptor>, MetadataCatalogError> {
        Ok(self.service.list_supported_types())
    }

    async fn get_table(&self, guid: &str) -> Result<RelationalTable, MetadataCatalogError> {
        Ok(self.service.get_bean(guid).await?)
    }

    async fn get_column(&self, guid: &str) -> Result<RelationalColumn, MetadataCatalogError> {
        Ok(self.service.get_bean(guid).await?)
    }

    async fn get_schema(&self, guid: &str) -> Result<RelationalSchema, MetadataCatalogError> {
        Ok(self.service.get_bean(guid).await?)
    }

    async fn list_tables(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<RelationalTable>, MetadataCatalogError> {
        Ok(self.service.list_beans(page).await?)
    }

    async fn list_columns(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<RelationalColumn>, MetadataCatalogError> {
        Ok(self.service.list_beans(page).await?)
    }

    async fn list_schemas(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<RelationalSchema>, MetadataCatalogError> {
        Ok(self.service.list_beans(page).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service::ServiceConfig;
    use crate::domain::type_registry::TypeRegistry;
    use crate::infra::storage::InMemoryEntityRepository;
    use metadata_catalog_sdk::GenericEntity;

    fn create_client() -> MetadataCatalogLocalClient {
        let repo = InMemoryEntityRepository::from_entities([
            GenericEntity::new("s1", "RelationalSchema").with_property("displayName", "public"),
            GenericEntity::new("t1", "RelationalTable").with_property("displayName", "orders"),
            GenericEntity::new("c1", "RelationalColumn")
                .with_property("displayName", "id")
                .with_property("dataType", "INT"),
            GenericEntity::new("c2", "RelationalColumn").with_property("displayName", "broken"),
        ]);
        let service = Arc::new(MetadataCatalogService::new(
            Arc::new(TypeRegistry::builtin()),
            Arc::new(repo),
            ServiceConfig::default(),
        ));
        MetadataCatalogLocalClient::new(service)
    }

    #[tokio::test]
    async fn test_get_beans() {
        let client = create_client();
        assert_eq!(client.get_schema("s1").await.unwrap().display_name, "public");
        assert_eq!(client.get_table("t1").await.unwrap().display_name, "orders");
        assert_eq!(client.get_column("c1").await.unwrap().data_type, "INT");
    }

    #[tokio::test]
    async fn test_errors_map_to_public_kinds() {
        let client = create_client();

        let err = client.get_table("c1").await.unwrap_err();
        assert!(err.is_invalid_entity());

        let err = client.get_table("zz").await.unwrap_err();
        assert!(err.is_repository_access());
        assert_eq!(err.message(), "Entity not found: zz");
    }

    #[tokio::test]
    async fn test_list_fails_whole_page_on_invalid_entity() {
        let client = create_client();
        let err = client.list_columns(PageRequest::default()).await.unwrap_err();
        assert!(err.is_invalid_entity());

        let page = client.list_columns(PageRequest::new(0, 1)).await.unwrap();
        assert_eq!(page.elements.len(), 1);
        assert_eq!(page.elements[0].guid, "c1");
    }

    #[tokio::test]
    async fn test_list_supported_types() {
        let client = create_client();
        let types = client.list_supported_types().await.unwrap();
        let names: Vec<&str> = types.iter().map(TypeDescriptor::name).collect();
        assert_eq!(
            names,
            vec![
                "RelationalSchema",
                "RelationalTable",
                "RelationalView",
                "RelationalColumn"
            ]
        );
    }
}
