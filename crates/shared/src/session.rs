//! Admin session context.
//!
//! The identity provider owns authentication; the dashboard only receives
//! an immutable snapshot of `{is_admin, user}` at construction and logs it.

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User ID.
    pub id: u64,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
}

/// Immutable auth context handed to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    is_admin: bool,
    user: Option<UserInfo>,
}

impl AdminSession {
    /// Creates a new session snapshot.
    #[must_use]
    pub const fn new(is_admin: bool, user: Option<UserInfo>) -> Self {
        Self { is_admin, user }
    }

    /// Whether the provider flagged the user as an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
}
