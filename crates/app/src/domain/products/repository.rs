//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};
use tracing::debug;

use crate::{
    domain::products::{
        errors::ProductsServiceError,
        models::{ProductRecord, ProductUuid},
    },
    pagination::{Page, PageRequest},
};

const FIND_PRODUCT_BY_CODE_SQL: &str = include_str!("sql/find_product_by_code.sql");
const SAVE_PRODUCT_SQL: &str = include_str!("sql/save_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");

/// Storage for product records.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Look up a product by its unique code.
    async fn find_by_code(&self, code: &str)
    -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Insert or replace the product with the record's UUID, returning the stored form.
    async fn save(&self, product: ProductRecord) -> Result<ProductRecord, ProductsServiceError>;

    /// Fetch one page of products. A page past the end is empty, not an error.
    async fn list_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCT_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn save(&self, product: ProductRecord) -> Result<ProductRecord, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(SAVE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.code)
            .bind(product.price)
            .bind(i32::try_from(product.quantity)?)
            .fetch_one(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn list_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let mut tx = self.pool.begin().await?;

        let total = query_scalar::<Postgres, i64>(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut *tx)
            .await?;

        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(i64::try_from(page.limit())?)
            .bind(i64::try_from(page.offset())?)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            page = page.page(),
            size = page.size(),
            total,
            returned = products.len(),
            "listed products"
        );

        Ok(Page::new(products, page, u64::try_from(total)?))
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            price: row.try_get("price")?,
            quantity,
        })
    }
}
