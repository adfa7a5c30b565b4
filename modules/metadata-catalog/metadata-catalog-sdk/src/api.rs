//! Client and collaborator traits of the `metadata-catalog` module.

use async_trait::async_trait;

use crate::error::{MetadataCatalogError, RepositoryError};
use crate::models::{
    ElementPage, GenericEntity, PageRequest, RelationalColumn, RelationalSchema, RelationalTable,
    TypeDescriptor,
};

/// Public API of the `metadata-catalog` module.
///
/// Other modules consume it through the local client:
/// ```ignore
/// let client: Arc<dyn MetadataCatalogClient> = module.client();
/// let table = client.get_table("2d1c5e...").await?;
/// ```
#[async_trait]
pub trait MetadataCatalogClient: Send + Sync {
    /// Lists the metadata types supported for search, in registry order.
    async fn list_supported_types(&self) -> Result<Vec<TypeDescriptor>, MetadataCatalogError>;

    /// Fetches the entity stored under `guid` and converts it to a relational table.
    async fn get_table(&self, guid: &str) -> Result<RelationalTable, MetadataCatalogError>;

    /// Fetches the entity stored under `guid` and converts it to a relational column.
    async fn get_column(&self, guid: &str) -> Result<RelationalColumn, MetadataCatalogError>;

    /// Fetches the entity stored under `guid` and converts it to a relational schema.
    async fn get_schema(&self, guid: &str) -> Result<RelationalSchema, MetadataCatalogError>;

    /// Lists relational tables (including registered subtypes) page by page.
    async fn list_tables(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<RelationalTable>, MetadataCatalogError>;

    /// Lists relational columns (including registered subtypes) page by page.
    async fn list_columns(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<RelationalColumn>, MetadataCatalogError>;

    /// Lists relational schemas (including registered subtypes) page by page.
    async fn list_schemas(
        &self,
        page: PageRequest,
    ) -> Result<ElementPage<RelationalSchema>, MetadataCatalogError>;
}

/// The metadata repository the catalog reads from.
///
/// Retries, timeouts and cancellation are the implementation's concern;
/// the catalog propagates failures as they come.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Fetches a single entity by GUID.
    async fn fetch_entity(&self, guid: &str) -> Result<GenericEntity, RepositoryError>;

    /// Returns entities whose type name is one of `type_names`, ordered by GUID,
    /// skipping `start_from` matches and returning at most `page_size`.
    async fn find_entities(
        &self,
        type_names: &[String],
        start_from: usize,
        page_size: usize,
    ) -> Result<Vec<GenericEntity>, RepositoryError>;
}
