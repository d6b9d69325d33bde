//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{ApiTokenGrant, AuthService, StaticTokenAuthService},
    database,
    domain::products::{ProductsService, StoreProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL and the configured API tokens.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_config(
        database_url: &str,
        max_connections: u32,
        grants: Vec<ApiTokenGrant>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(database_url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            products: Arc::new(StoreProductsService::from_pool(pool)),
            auth: Arc::new(StaticTokenAuthService::new(grants)),
        })
    }
}
