//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use store_app::auth::Authentication;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

/// Access to the caller description stored by the auth middleware.
pub(crate) trait AuthenticationExt {
    fn insert_authentication(&mut self, authentication: Authentication);

    /// The stored caller, or an anonymous one when the middleware did not run.
    fn authentication(&self) -> Authentication;

    fn require_authenticated(&self) -> Result<Authentication, StatusError>;
}

impl AuthenticationExt for Depot {
    fn insert_authentication(&mut self, authentication: Authentication) {
        self.inject(authentication);
    }

    fn authentication(&self) -> Authentication {
        self.obtain::<Authentication>()
            .map_or_else(|_| Authentication::anonymous(), Clone::clone)
    }

    fn require_authenticated(&self) -> Result<Authentication, StatusError> {
        let authentication = self.authentication();

        if !authentication.is_authenticated() {
            return Err(StatusError::unauthorized().brief("Authentication required"));
        }

        Ok(authentication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_authentication_is_anonymous() {
        let depot = Depot::new();

        assert_eq!(depot.authentication(), Authentication::anonymous());
        assert!(depot.require_authenticated().is_err());
    }

    #[test]
    fn stored_authentication_is_returned() {
        let mut depot = Depot::new();
        let authentication = Authentication::authenticated(vec!["ADMIN".to_string()]);

        depot.insert_authentication(authentication.clone());

        assert_eq!(depot.authentication(), authentication);
        assert!(depot.require_authenticated().is_ok());
    }
}
