//! Role enumeration and the redirect-by-role mapping.

use serde::{Deserialize, Serialize};

use crate::config::{PATH_ADMIN, PATH_LOGIN, PATH_STUDENT, ROLE_ADMIN, ROLE_STUDENT};

/// Roles governing which area of the application is reachable.
///
/// Profile rows are written by a server-side trigger, so a value outside the
/// known set can appear; it deserializes to `Unknown` so the redirect mapping
/// stays total instead of failing the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Default area for this role. Total: every role maps to exactly one
    /// destination, and `Unknown` has no area so it lands on the anonymous
    /// entry point.
    pub fn default_path(&self) -> &'static str {
        match self {
            Role::Admin => PATH_ADMIN,
            Role::Student => PATH_STUDENT,
            Role::Unknown => PATH_LOGIN,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => Role::Admin,
            ROLE_STUDENT => Role::Student,
            _ => Role::Unknown,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", ROLE_ADMIN),
            Role::Student => write!(f, "{}", ROLE_STUDENT),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}

/// Redirect destination for an optional role. Absent role maps to the
/// anonymous entry point, same as an unknown one.
pub fn redirect_for_role(role: Option<Role>) -> &'static str {
    role.map(|r| r.default_path()).unwrap_or(PATH_LOGIN)
}
