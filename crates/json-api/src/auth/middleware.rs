//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use store_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

/// Resolve the caller from the `Authorization` header.
///
/// Requests without the header continue as anonymous. A header that is not a
/// bearer token, or a token nobody was granted, is rejected with 401.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let token = match extract_bearer_token(req) {
        Ok(token) => token.map(ToString::to_string),
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let authentication = match state.app.auth.authenticate(token).await {
        Ok(authentication) => authentication,
        Err(AuthServiceError::InvalidToken) => {
            res.render(StatusError::unauthorized().brief("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_authentication(authentication);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Result<Option<&str>, StatusError> {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let malformed = || StatusError::unauthorized().brief("Missing or invalid Authorization header");

    let value = value.to_str().map_err(|_ignored| malformed())?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next().ok_or_else(malformed)?;
    let token = parts.next().ok_or_else(malformed)?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(malformed());
    }

    Ok(Some(token))
}
