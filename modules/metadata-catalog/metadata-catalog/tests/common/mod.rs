#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use metadata_catalog::config::MetadataCatalogConfig;
use metadata_catalog::{EntityRepository, GenericEntity, MetadataCatalogModule, RepositoryError};
use serde_json::Value;
use tower::ServiceExt as _;

/// Repository that fails every call, as an unreachable backend would.
pub struct UnavailableRepository;

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

/// Entities shared by the integration tests.
pub fn fixture_entities() -> Vec<GenericEntity> {
    vec![
        GenericEntity::new("s1", "RelationalSchema")
            .with_property("displayName", "public")
            .with_property("qualifiedName", "sales.public"),
        GenericEntity::new("g1", "RelationalTable").with_property("displayName", "orders"),
        GenericEntity::new("g2", "RelationalTable")
            .with_property("displayName", "customers")
            .with_property("qualifiedName", "sales.public.customers")
            .with_property("createTime", 1_700_000_000_000_i64),
        GenericEntity::new("v1", "RelationalView").with_property("displayName", "open_orders"),
        GenericEntity::new("c1", "RelationalColumn")
            .with_property("displayName", "id")
            .with_property("dataType", "BIGINT")
            .with_property("position", 1_i64)
            .with_classification("PrimaryKey"),
    ]
}

pub fn fixture_config() -> MetadataCatalogConfig {
    MetadataCatalogConfig {
        entities: fixture_entities(),
        ..MetadataCatalogConfig::default()
    }
}

pub fn create_module(cfg: &MetadataCatalogConfig) -> MetadataCatalogModule {
    MetadataCatalogModule::init(cfg).expect("module init")
}

pub fn create_router() -> Router {
    create_module(&fixture_config()).router()
}

/// Sends a GET request and returns status and JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).expect("response body is JSON");
    (status, json)
}
