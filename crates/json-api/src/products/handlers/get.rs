//! Get Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use store_app::domain::products::models::ProductData;

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Option<Uuid>,

    /// The unique product code
    pub code: String,

    /// The unit price, as a decimal string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Units in stock
    pub quantity: u32,
}

impl From<ProductData> for ProductResponse {
    fn from(product: ProductData) -> Self {
        ProductResponse {
            uuid: product.uuid.map(Into::into),
            code: product.code,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

/// Get Product Handler
///
/// Returns a product by its code.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    depot.require_authenticated()?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(&code.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use store_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{
        anonymous_products_service, make_product, products_service, strict_products_mock,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("products/{code}").get(handler)
    }

    #[tokio::test]
    async fn test_get_product_returns_product() -> TestResult {
        let product = make_product("1", 100, 100);
        let uuid = product.uuid.map(Into::<Uuid>::into);

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|code| code == "1")
            .return_once(move |_| Ok(product));

        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_list_products().never();

        let mut res = TestClient::get("http://example.com/products/1")
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.uuid, uuid);
        assert_eq!(body.code, "1");
        assert_eq!(body.price, Decimal::from(100));
        assert_eq!(body.quantity, 100);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_renders_price_as_string() -> TestResult {
        let mut product = make_product("1", 0, 3);
        product.price = Decimal::new(1999, 2);

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(move |_| Ok(product));

        let mut res = TestClient::get("http://example.com/products/1")
            .send(&products_service(repo, route()))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["price"], "19.99");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|code| code == "missing")
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_list_products().never();

        let res = TestClient::get("http://example.com/products/missing")
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_anonymous_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/products/1")
            .send(&anonymous_products_service(strict_products_mock(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
