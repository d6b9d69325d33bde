//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use store_app::{
    domain::products::models::{ProductData, ProductFilter},
    pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest},
};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The products on this page
    pub products: Vec<ProductResponse>,

    /// Zero-based page index
    pub page: u32,

    /// Requested page size
    pub size: u32,

    /// Products across all pages
    pub total: u64,

    /// Number of pages at this size
    pub total_pages: u64,
}

impl From<Page<ProductData>> for ProductsResponse {
    fn from(page: Page<ProductData>) -> Self {
        let total_pages = page.total_pages();

        ProductsResponse {
            page: page.page,
            size: page.size,
            total: page.total,
            total_pages,
            products: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Product Index Handler
///
/// Returns one page of products, oldest first.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Page of products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid paging parameters"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    size: QueryParam<u32, false>,
    code: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    depot.require_authenticated()?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = PageRequest::new(
        page.into_inner().unwrap_or_default(),
        size.into_inner().unwrap_or(DEFAULT_PAGE_SIZE),
    )
    .or_400("invalid paging parameters")?;

    let filter = ProductFilter {
        code: code.into_inner(),
    };

    let products = state
        .app
        .products
        .list_products(filter, request)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
