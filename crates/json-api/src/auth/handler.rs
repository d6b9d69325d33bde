//! Current Authentication Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use store_app::auth::Authentication;

use crate::extensions::*;

/// Who the caller is, as resolved from their bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthenticationResponse {
    /// Whether a valid token was presented
    pub authenticated: bool,

    /// Roles granted to the token
    pub roles: Vec<String>,
}

impl From<Authentication> for AuthenticationResponse {
    fn from(authentication: Authentication) -> Self {
        AuthenticationResponse {
            authenticated: authentication.is_authenticated(),
            roles: authentication.roles().to_vec(),
        }
    }
}

/// Describe the current caller
#[endpoint(
    tags("auth"),
    summary = "Current Authentication",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Json<AuthenticationResponse> {
    Json(depot.authentication().into())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[salvo::handler]
    async fn inject_admin(
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_authentication(Authentication::authenticated(vec!["ADMIN".to_string()]));
        ctrl.call_next(req, depot, res).await;
    }

    #[tokio::test]
    async fn test_anonymous_caller() -> TestResult {
        let router = Router::with_path("auth").get(handler);

        let response: AuthenticationResponse = TestClient::get("http://example.com/auth")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert!(!response.authenticated);
        assert!(response.roles.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_authenticated_caller() -> TestResult {
        let router = Router::new()
            .hoop(inject_admin)
            .push(Router::with_path("auth").get(handler));

        let response: AuthenticationResponse = TestClient::get("http://example.com/auth")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert!(response.authenticated);
        assert_eq!(response.roles, vec!["ADMIN".to_string()]);

        Ok(())
    }
}
