//! Auth data models.

use serde::{Deserialize, Serialize};

/// Who the caller is, as far as the rest of the application is concerned.
///
/// Built fresh for each request and only ever read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    authenticated: bool,
    roles: Vec<String>,
}

impl Authentication {
    /// A caller that presented no credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            authenticated: false,
            roles: Vec::new(),
        }
    }

    /// An authenticated caller holding `roles`, in the order given.
    #[must_use]
    pub fn authenticated(roles: Vec<String>) -> Self {
        Self {
            authenticated: true,
            roles,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_roles() {
        let auth = Authentication::anonymous();

        assert!(!auth.is_authenticated());
        assert!(auth.roles().is_empty());
        assert_eq!(auth, Authentication::default());
    }

    #[test]
    fn authenticated_keeps_roles_verbatim() {
        let roles = vec!["ADMIN".to_string(), "USER".to_string(), "ADMIN".to_string()];
        let auth = Authentication::authenticated(roles.clone());

        assert!(auth.is_authenticated());
        assert_eq!(auth.roles(), roles.as_slice());
    }

    #[test]
    fn serializes_as_flag_and_role_list() -> Result<(), serde_json::Error> {
        let auth = Authentication::authenticated(vec!["USER".to_string()]);

        assert_eq!(
            serde_json::to_value(&auth)?,
            serde_json::json!({ "authenticated": true, "roles": ["USER"] })
        );

        Ok(())
    }
}
