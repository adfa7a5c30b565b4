//! REST route registration for the Metadata Catalog module.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers::{self, ResponseOptions};
use crate::domain::service::MetadataCatalogService;

/// Prefix of every catalog route. Each call names the requesting user.
pub const BASE_PATH: &str = "/metadata-catalog/v1/users/{user_id}";

/// Registers all REST routes for the Metadata Catalog module.
#[must_use]
pub fn register_routes(
    router: Router,
    service: Arc<MetadataCatalogService>,
    options: ResponseOptions,
) -> Router {
    let api = Router::new()
        .route(
            &format!("{BASE_PATH}/supported-types"),
            get(handlers::list_supported_types),
        )
        .route(&format!("{BASE_PATH}/tables"), get(handlers::list_tables))
        .route(&format!("{BASE_PATH}/tables/{{guid}}"), get(handlers::get_table))
        .route(&format!("{BASE_PATH}/columns"), get(handlers::list_columns))
        .route(&format!("{BASE_PATH}/columns/{{guid}}"), get(handlers::get_column))
        .route(&format!("{BASE_PATH}/schemas"), get(handlers::list_schemas))
        .route(&format!("{BASE_PATH}/schemas/{{guid}}"), get(handlers::get_schema))
        .layer(Extension(service))
        .layer(Extension(options));

    router.merge(api)
}
