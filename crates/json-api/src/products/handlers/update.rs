//! Update Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use store_app::domain::products::models::ProductData;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// Ignored; the code in the path selects the product
    #[serde(default)]
    pub code: Option<String>,

    /// New unit price, as a decimal string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// New stock level
    pub quantity: u32,
}

impl UpdateProductRequest {
    fn into_product_data(self, code: String) -> ProductData {
        ProductData::new(code, self.price, self.quantity)
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update_request",
    skip(code, json, depot),
    fields(code = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    depot.require_authenticated()?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let code = code.into_inner();

    tracing::Span::current().record("code", code.as_str());

    let product = state
        .app
        .products
        .update_product(json.into_inner().into_product_data(code))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use store_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{
        anonymous_products_service, make_product, products_service, strict_products_mock,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("products/{code}").put(handler)
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let product = make_product("1", 200, 200);

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|data| *data == ProductData::new("1", Decimal::from(200), 200))
            .return_once(move |_| Ok(product));

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let mut res = TestClient::put("http://example.com/products/1")
            .json(&json!({ "price": "200", "quantity": 200 }))
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.code, "1");
        assert_eq!(body.price, Decimal::from(200));
        assert_eq!(body.quantity, 200);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_path_code_wins_over_body() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|data| data.code == "1")
            .return_once(|data| Ok(data));

        let res = TestClient::put("http://example.com/products/1")
            .json(&json!({ "code": "other", "price": "5", "quantity": 1 }))
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::put("http://example.com/products/missing")
            .json(&json!({ "price": "1", "quantity": 1 }))
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_anonymous_returns_401() -> TestResult {
        let res = TestClient::put("http://example.com/products/1")
            .json(&json!({ "price": "1", "quantity": 1 }))
            .send(&anonymous_products_service(strict_products_mock(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
