//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use store_app::domain::products::models::ProductData;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Unique product code
    pub code: String,

    /// Unit price, as a decimal string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Units in stock
    pub quantity: u32,
}

impl From<CreateProductRequest> for ProductData {
    fn from(request: CreateProductRequest) -> Self {
        ProductData::new(request.code, request.price, request.quantity)
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    depot.require_authenticated()?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    // The product is stored by now, so a missing Location must not fail the request.
    match product_location(&product.code) {
        Some(location) => {
            if let Err(source) = res.add_header(LOCATION, location, true) {
                warn!(code = %product.code, "could not set location header: {source}");
            }
        }
        None => warn!(code = %product.code, "could not build location for product"),
    }

    Ok(Json(product.into()))
}

/// Path of the product resource, with `code` percent-encoded as one segment.
fn product_location(code: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/products").ok()?;

    url.path_segments_mut().ok()?.push(code);

    Some(url.path().to_string())
}
