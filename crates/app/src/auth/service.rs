//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::auth::{ApiTokenGrant, Authentication, AuthServiceError};

/// Resolves bearer tokens against a fixed set of configured grants.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthService {
    grants: Vec<ApiTokenGrant>,
}

impl StaticTokenAuthService {
    #[must_use]
    pub fn new(grants: Vec<ApiTokenGrant>) -> Self {
        Self { grants }
    }
}

#[async_trait]
impl AuthService for StaticTokenAuthService {
    async fn authenticate(
        &self,
        bearer_token: Option<String>,
    ) -> Result<Authentication, AuthServiceError> {
        let Some(token) = bearer_token else {
            return Ok(Authentication::anonymous());
        };

        let grant = self
            .grants
            .iter()
            .find(|grant| grant.matches(&token))
            .ok_or(AuthServiceError::InvalidToken)?;

        debug!(roles = ?grant.roles(), "authenticated api token");

        Ok(Authentication::authenticated(grant.roles().to_vec()))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Describe the caller presenting `bearer_token`, or an anonymous caller when absent.
    async fn authenticate(
        &self,
        bearer_token: Option<String>,
    ) -> Result<Authentication, AuthServiceError>;
}
