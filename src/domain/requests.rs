//! Request payloads for user-initiated auth operations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Role;

/// Sign-up request: credentials plus the metadata the server-side trigger
/// copies into the new profile row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub national_id: String,
    pub role: Role,
}
