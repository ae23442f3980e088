//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration and, when backed by PostgreSQL, the pool used for
//! readiness checks.

use std::sync::Arc;

use forum_common::{AppConfig, JwtService};
use forum_db::PgPool;
use forum_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    pool: Option<PgPool>,
}

impl AppState {
    /// State backed by a PostgreSQL pool
    pub fn new(service_context: ServiceContext, config: AppConfig, pool: PgPool) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            pool: Some(pool),
        }
    }

    /// State without a database pool, e.g. over the in-memory store
    pub fn without_pool(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            pool: None,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("pool", &self.pool.is_some())
            .finish()
    }
}
