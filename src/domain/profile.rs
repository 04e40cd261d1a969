//! Identity and profile domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// Opaque account reference issued by the external auth provider.
///
/// The application never creates or destroys identities directly except
/// through sign-up and sign-out calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Application-level record extending an Identity with role and personal
/// data. Exactly one row per identity, created asynchronously by a
/// server-side trigger after sign-up — it may not exist immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Foreign key to the provider identity, unique
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub full_name: String,
    pub national_id: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

impl Profile {
    /// Check if the profile carries the admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
