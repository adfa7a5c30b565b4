//! REST DTOs for the Metadata Catalog module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use metadata_catalog_sdk::{
    ElementPage, PageRequest, RelationalColumn, RelationalSchema, RelationalTable, TypeDescriptor,
};

/// DTO for a supported search type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptorDto {
    pub name: String,
    pub description: String,
    pub super_type_names: Vec<String>,
}

impl From<&TypeDescriptor> for TypeDescriptorDto {
    fn from(descriptor: &TypeDescriptor) -> Self {
        Self {
            name: descriptor.name().to_owned(),
            description: descriptor.description().to_owned(),
            super_type_names: descriptor.super_type_names().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalTableDto {
    pub guid: String,
    pub qualified_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    pub is_deprecated: bool,
    #[serde(default)]
    pub classifications: Vec<String>,
}

impl From<RelationalTable> for RelationalTableDto {
    fn from(table: RelationalTable) -> Self {
        Self {
            guid: table.guid,
            qualified_name: table.qualified_name,
            display_name: table.display_name,
            description: table.description,
            owner: table.owner,
            create_time: table.create_time,
            is_deprecated: table.is_deprecated,
            classifications: table.classifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalColumnDto {
    pub guid: String,
    pub qualified_name: String,
    pub display_name: String,
    pub data_type: String,
    pub position: i64,
    pub length: i64,
    pub is_nullable: bool,
    /// Canonical symbol, e.g. `ASCENDING`.
    pub sort_order: String,
    pub is_primary_key: bool,
    #[serde(default)]
    pub classifications: Vec<String>,
}

impl From<RelationalColumn> for RelationalColumnDto {
    fn from(column: RelationalColumn) -> Self {
        Self {
            guid: column.guid,
            qualified_name: column.qualified_name,
            display_name: column.display_name,
            data_type: column.data_type,
            position: column.position,
            length: column.length,
            is_nullable: column.is_nullable,
            sort_order: column.sort_order.as_str().to_owned(),
            is_primary_key: column.is_primary_key,
            classifications: column.classifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalSchemaDto {
    pub guid: String,
    pub qualified_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub classifications: Vec<String>,
}

impl From<RelationalSchema> for RelationalSchemaDto {
    fn from(schema: RelationalSchema) -> Self {
        Self {
            guid: schema.guid,
            qualified_name: schema.qualified_name,
            display_name: schema.display_name,
            description: schema.description,
            create_time: schema.create_time,
            classifications: schema.classifications,
        }
    }
}

/// Payload of `listSupportedTypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypesPayload {
    pub types: Vec<TypeDescriptorDto>,
}

impl From<Vec<TypeDescriptor>> for SupportedTypesPayload {
    fn from(types: Vec<TypeDescriptor>) -> Self {
        Self {
            types: types.iter().map(TypeDescriptorDto::from).collect(),
        }
    }
}

/// Payload carrying a single bean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementPayload<T> {
    pub element: T,
}

/// Payload carrying one page of beans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementListPayload<T> {
    pub element_list: Vec<T>,
    pub start_from: usize,
    pub page_size: usize,
}

impl<B, T: From<B>> From<ElementPage<B>> for ElementListPayload<T> {
    fn from(page: ElementPage<B>) -> Self {
        Self {
            element_list: page.elements.into_iter().map(T::from).collect(),
            start_from: page.start_from,
            page_size: page.page_size,
        }
    }
}

/// Paging query parameters of the listing routes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingQuery {
    pub start_from: Option<usize>,
    pub page_size: Option<usize>,
}

impl From<PagingQuery> for PageRequest {
    fn from(query: PagingQuery) -> Self {
        Self {
            start_from: query.start_from.unwrap_or(0),
            page_size: query.page_size,
        }
    }
}
