//! REST handlers for the Metadata Catalog module.
//!
//! Every handler answers with a `ResponseEnvelope`, including when the path or
//! the query string cannot be extracted.

use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use metadata_catalog_sdk::{RelationalColumn, RelationalSchema, RelationalTable};

use super::assembler::assemble;
use super::dto::{
    ElementListPayload, ElementPayload, PagingQuery, RelationalColumnDto, RelationalSchemaDto,
    RelationalTableDto, SupportedTypesPayload,
};
use super::envelope::ResponseEnvelope;
use crate::domain::converter::MappedBean;
use crate::domain::error::DomainError;
use crate::domain::service::MetadataCatalogService;

type UserPath = Result<Path<String>, PathRejection>;
type ElementPath = Result<Path<(String, String)>, PathRejection>;
type PagingParams = Result<Query<PagingQuery>, QueryRejection>;

/// How envelopes are turned into HTTP responses.
#[derive(Debug, Clone, Copy)]
pub struct ResponseOptions {
    /// Use `relatedHTTPCode` as the HTTP status, otherwise always `200 OK`.
    pub mirror_http_status: bool,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            mirror_http_status: true,
        }
    }
}

impl ResponseOptions {
    #[must_use]
    pub fn respond<P: Serialize>(self, envelope: &ResponseEnvelope<P>) -> Response {
        let status = if self.mirror_http_status {
            StatusCode::from_u16(envelope.related_http_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::OK
        };
        (status, Json(envelope)).into_response()
    }
}

/// GET /metadata-catalog/v1/users/{user_id}/supported-types
///
/// List the supported search types in registry order.
#[allow(clippy::unused_async)]
pub async fn list_supported_types(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: UserPath,
) -> Response {
    let action = "listSupportedTypes";
    let result = path
        .map_err(|rejection| DomainError::invalid_path(rejection.body_text()))
        .and_then(|Path(user_id)| svc.check_access(&user_id, action))
        .map(|()| SupportedTypesPayload::from(svc.list_supported_types()));
    options.respond(&assemble(result).with_action(action))
}

/// GET /metadata-catalog/v1/users/{user_id}/tables/{guid}
pub async fn get_table(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: ElementPath,
) -> Response {
    let envelope = get_element::<RelationalTable, RelationalTableDto>(&svc, path, "getTable").await;
    options.respond(&envelope)
}

/// GET /metadata-catalog/v1/users/{user_id}/columns/{guid}
pub async fn get_column(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: ElementPath,
) -> Response {
    let envelope =
        get_element::<RelationalColumn, RelationalColumnDto>(&svc, path, "getColumn").await;
    options.respond(&envelope)
}

/// GET /metadata-catalog/v1/users/{user_id}/schemas/{guid}
pub async fn get_schema(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: ElementPath,
) -> Response {
    let envelope =
        get_element::<RelationalSchema, RelationalSchemaDto>(&svc, path, "getSchema").await;
    options.respond(&envelope)
}

/// GET /metadata-catalog/v1/users/{user_id}/tables
///
/// Tables and views, ordered by GUID, paged with `startFrom` and `pageSize`.
pub async fn list_tables(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: UserPath,
    query: PagingParams,
) -> Response {
    let envelope =
        list_elements::<RelationalTable, RelationalTableDto>(&svc, path, query, "findTables")
            .await;
    options.respond(&envelope)
}

/// GET /metadata-catalog/v1/users/{user_id}/columns
pub async fn list_columns(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: UserPath,
    query: PagingParams,
) -> Response {
    let envelope =
        list_elements::<RelationalColumn, RelationalColumnDto>(&svc, path, query, "findColumns")
            .await;
    options.respond(&envelope)
}

/// GET /metadata-catalog/v1/users/{user_id}/schemas
pub async fn list_schemas(
    Extension(svc): Extension<Arc<MetadataCatalogService>>,
    Extension(options): Extension<ResponseOptions>,
    path: UserPath,
    query: PagingParams,
) -> Response {
    let envelope =
        list_elements::<RelationalSchema, RelationalSchemaDto>(&svc, path, query, "findSchemas")
            .await;
    options.respond(&envelope)
}

async fn get_element<B, D>(
    svc: &MetadataCatalogService,
    path: ElementPath,
    action: &str,
) -> ResponseEnvelope<ElementPayload<D>>
where
    B: MappedBean,
    D: From<B>,
{
    let result = async {
        let Path((user_id, guid)) =
            path.map_err(|rejection| DomainError::invalid_path(rejection.body_text()))?;
        svc.check_access(&user_id, action)?;
        svc.get_bean::<B>(&guid).await
    }
    .await;
    assemble(result.map(|bean| ElementPayload {
        element: D::from(bean),
    }))
    .with_action(action)
}

async fn list_elements<B, D>(
    svc: &MetadataCatalogService,
    path: UserPath,
    query: PagingParams,
    action: &str,
) -> ResponseEnvelope<ElementListPayload<D>>
where
    B: MappedBean,
    D: From<B>,
{
    let result = async {
        let Path(user_id) =
            path.map_err(|rejection| DomainError::invalid_path(rejection.body_text()))?;
        svc.check_access(&user_id, action)?;
        let Query(paging) =
            query.map_err(|rejection| DomainError::invalid_paging(rejection.body_text()))?;
        svc.list_beans::<B>(paging.into()).await
    }
    .await;
    assemble(result.map(ElementListPayload::from)).with_action(action)
}
