//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use store_app::{
    auth::{Authentication, MockAuthService},
    context::AppContext,
    domain::products::{MockProductsService, models::ProductData, models::ProductUuid},
};

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn inject_authenticated(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_authentication(Authentication::authenticated(vec!["ADMIN".to_string()]));
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().never();

    auth
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_get_product().never();
    products.expect_list_products().never();

    products
}

fn state(products: MockProductsService, auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_products_mock(), auth)
}

/// Serve `route` to an authenticated caller.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_auth_mock())))
            .hoop(inject_authenticated)
            .push(route),
    )
}

/// Serve `route` to an anonymous caller.
pub(crate) fn anonymous_products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_auth_mock())))
            .push(route),
    )
}

pub(crate) fn make_product(code: &str, price: i64, quantity: u32) -> ProductData {
    ProductData {
        uuid: Some(ProductUuid::new()),
        code: code.to_string(),
        price: Decimal::from(price),
        quantity,
    }
}
