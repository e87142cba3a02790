//! Per-operation access requirements for resource handlers.
//!
//! A resource declares what each [`Operation`] requires; the HTTP layer
//! resolves the caller (if any) and asks [`authorize`] for a verdict.

use crate::error::CoreError;
use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

/// Operations exposed by a resource handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    /// A resource-specific read outside the generic contract.
    Query(&'static str),
}

/// What a caller must present to perform an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated,
    Admin,
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: DbId,
    pub role: String,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Check `caller` against `access`.
///
/// Missing credentials yield `Unauthorized`; insufficient role yields
/// `Forbidden`.
pub fn authorize(access: Access, caller: Option<&Principal>) -> Result<(), CoreError> {
    match (access, caller) {
        (Access::Anonymous, _) => Ok(()),
        (_, None) => Err(CoreError::Unauthorized("Authentication required".into())),
        (Access::Authenticated, Some(_)) => Ok(()),
        (Access::Admin, Some(p)) if p.is_admin() => Ok(()),
        (Access::Admin, Some(_)) => Err(CoreError::Forbidden("Admin role required".into())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::roles::ROLE_USER;

    fn principal(role: &str) -> Principal {
        Principal {
            user_id: 1,
            role: role.to_string(),
        }
    }

    #[test]
    fn anonymous_allows_everyone() {
        assert!(authorize(Access::Anonymous, None).is_ok());
        assert!(authorize(Access::Anonymous, Some(&principal(ROLE_USER))).is_ok());
    }

    #[test]
    fn authenticated_rejects_missing_caller() {
        assert_matches!(
            authorize(Access::Authenticated, None),
            Err(CoreError::Unauthorized(_))
        );
        assert!(authorize(Access::Authenticated, Some(&principal(ROLE_USER))).is_ok());
    }

    #[test]
    fn admin_requires_admin_role() {
        assert_matches!(authorize(Access::Admin, None), Err(CoreError::Unauthorized(_)));
        assert_matches!(
            authorize(Access::Admin, Some(&principal(ROLE_USER))),
            Err(CoreError::Forbidden(_))
        );
        assert!(authorize(Access::Admin, Some(&principal(ROLE_ADMIN))).is_ok());
    }
}
