//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    domain::products::{
        errors::ProductsServiceError,
        models::{ProductData, ProductFilter, ProductRecord, ProductUuid},
        repository::{PgProductsRepository, ProductsRepository},
    },
    pagination::{Page, PageRequest},
};

#[derive(Clone)]
pub struct StoreProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }

    /// Build the service over the `PostgreSQL` repository.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgProductsRepository::new(pool)))
    }
}

impl Debug for StoreProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreProductsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    #[tracing::instrument(name = "products.create", skip_all, fields(code = %product.code), err)]
    async fn create_product(
        &self,
        product: ProductData,
    ) -> Result<ProductData, ProductsServiceError> {
        if self.repository.find_by_code(&product.code).await?.is_some() {
            debug!("product code already taken");

            return Err(ProductsServiceError::AlreadyExists);
        }

        let record = ProductRecord::from_data(ProductUuid::new(), product);

        let created = self.repository.save(record).await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created.into())
    }

    #[tracing::instrument(name = "products.update", skip_all, fields(code = %product.code), err)]
    async fn update_product(
        &self,
        product: ProductData,
    ) -> Result<ProductData, ProductsServiceError> {
        let existing = self
            .repository
            .find_by_code(&product.code)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        let updated = self.repository.save(existing.apply(product)).await?;

        info!(
            product_uuid = %updated.uuid,
            price = %updated.price,
            quantity = updated.quantity,
            "updated product"
        );

        Ok(updated.into())
    }

    #[tracing::instrument(name = "products.get", skip(self), err)]
    async fn get_product(&self, code: &str) -> Result<ProductData, ProductsServiceError> {
        self.repository
            .find_by_code(code)
            .await?
            .map(ProductData::from)
            .ok_or(ProductsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "products.list",
        skip_all,
        fields(filter = ?filter, page = page.page(), size = page.size()),
        err
    )]
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<Page<ProductData>, ProductsServiceError> {
        debug!(code = ?filter.code, "listing every product, filter not applied");

        let products = self.repository.list_page(page).await?;

        Ok(products.map(ProductData::from))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Creates a product under a freshly generated UUID.
    ///
    /// Fails with `AlreadyExists` when the code is taken.
    async fn create_product(&self, product: ProductData)
    -> Result<ProductData, ProductsServiceError>;

    /// Replaces price and quantity of the product with the same code.
    async fn update_product(&self, product: ProductData)
    -> Result<ProductData, ProductsServiceError>;

    /// Retrieve a single product by code.
    async fn get_product(&self, code: &str) -> Result<ProductData, ProductsServiceError>;

    /// Retrieves one page of products.
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<Page<ProductData>, ProductsServiceError>;
}
