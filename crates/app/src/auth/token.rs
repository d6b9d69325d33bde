//! API token grants: a bearer token and the roles it carries.

use std::{fmt, str::FromStr};

use subtle::ConstantTimeEq as _;
use thiserror::Error;
use zeroize::Zeroizing;

/// Separates the token from its roles, e.g. `secret=ADMIN|USER`.
const GRANT_SEPARATOR: char = '=';

/// Separates roles within a grant.
const ROLE_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiTokenGrantError {
    #[error("api token grant must look like `token=ROLE|ROLE`")]
    MissingSeparator,

    #[error("api token must not be empty")]
    EmptyToken,
}

/// A configured bearer token and the roles granted to whoever presents it.
#[derive(Clone)]
pub struct ApiTokenGrant {
    token: Zeroizing<String>,
    roles: Vec<String>,
}

impl ApiTokenGrant {
    /// Build a grant.
    ///
    /// # Errors
    ///
    /// Returns an error if `token` is blank.
    pub fn new(token: impl Into<String>, roles: Vec<String>) -> Result<Self, ApiTokenGrantError> {
        let token = Zeroizing::new(token.into());

        if token.trim().is_empty() {
            return Err(ApiTokenGrantError::EmptyToken);
        }

        Ok(Self { token, roles })
    }

    /// Compare `token` against the granted one in constant time.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.token.as_bytes().ct_eq(token.as_bytes()).into()
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

impl fmt::Debug for ApiTokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiTokenGrant")
            .field("token", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}

impl FromStr for ApiTokenGrant {
    type Err = ApiTokenGrantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (token, roles) = value
            .split_once(GRANT_SEPARATOR)
            .ok_or(ApiTokenGrantError::MissingSeparator)?;

        let roles = roles
            .split(ROLE_SEPARATOR)
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(ToString::to_string)
            .collect();

        Self::new(token.trim(), roles)
    }
}
