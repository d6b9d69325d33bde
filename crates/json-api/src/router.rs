//! App Router

use salvo::Router;

use crate::{auth, healthcheck, products};

/// Routes served behind the auth middleware, plus the open healthcheck.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("auth").get(auth::handler::handler))
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{code}")
                                .get(products::get::handler)
                                .put(products::update::handler),
                        ),
                ),
        )
}
