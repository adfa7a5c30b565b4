//! Module declaration for the Metadata Catalog module.

use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use metadata_catalog_sdk::{EntityRepository, MetadataCatalogClient, TypeDescriptor};
use tracing::{debug, info};

use crate::api::rest::handlers::ResponseOptions;
use crate::api::rest::routes;
use crate::config::MetadataCatalogConfig;
use crate::domain::service::{MetadataCatalogService, ServiceConfig};
use crate::domain::type_registry::TypeRegistry;
use crate::infra::storage::InMemoryEntityRepository;
use crate::local_client::MetadataCatalogLocalClient;

/// Metadata Catalog module.
///
/// Owns the frozen type registry and the domain service, and hands out the
/// REST router and the local client.
#[derive(Clone)]
pub struct MetadataCatalogModule {
    service: Arc<MetadataCatalogService>,
    options: ResponseOptions,
}

impl MetadataCatalogModule {
    /// Key of the module's section under `modules` in the app config.
    pub const NAME: &'static str = "metadata_catalog";

    /// Initializes the module with an in-memory repository seeded from `cfg.entities`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn init(cfg: &MetadataCatalogConfig) -> anyhow::Result<Self> {
        let repo = Arc::new(InMemoryEntityRepository::from_entities(
            cfg.entities.iter().cloned(),
        ));
        debug!(entities = repo.len(), "Seeded in-memory entity repository");
        Self::with_repository(cfg, repo)
    }

    /// Initializes the module on top of an external repository.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_repository(
        cfg: &MetadataCatalogConfig,
        repo: Arc<dyn EntityRepository>,
    ) -> anyhow::Result<Self> {
        info!("Initializing {} module", Self::NAME);

        cfg.validate()
            .context("invalid metadata_catalog configuration")?;

        let registry = if cfg.types.is_empty() {
            TypeRegistry::builtin()
        } else {
            TypeRegistry::new(cfg.types.iter().map(TypeDescriptor::from))
                .context("invalid metadata_catalog type catalog")?
        };
        debug!(
            types = registry.len(),
            default_page_size = cfg.default_page_size,
            max_page_size = cfg.max_page_size,
            restricted = cfg.authorized_users.is_some(),
            "Built type registry"
        );

        let service = Arc::new(MetadataCatalogService::new(
            Arc::new(registry),
            repo,
            ServiceConfig::from(cfg),
        ));

        info!("{} module initialized", Self::NAME);
        Ok(Self {
            service,
            options: ResponseOptions {
                mirror_http_status: cfg.mirror_http_status,
            },
        })
    }

    /// Adds the module's REST routes to `router`.
    #[must_use]
    pub fn register_routes(&self, router: Router) -> Router {
        routes::register_routes(router, Arc::clone(&self.service), self.options)
    }

    /// A router holding only the module's REST routes.
    #[must_use]
    pub fn router(&self) -> Router {
        self.register_routes(Router::new())
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn MetadataCatalogClient> {
        Arc::new(MetadataCatalogLocalClient::new(Arc::clone(&self.service)))
    }

    #[must_use]
    pub fn service(&self) -> Arc<MetadataCatalogService> {
        Arc::clone(&self.service)
    }
}
