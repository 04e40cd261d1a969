//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Roles
// =============================================================================

/// Administrator role with access to the admin area
pub const ROLE_ADMIN: &str = "admin";

/// Resident student role with access to the student area
pub const ROLE_STUDENT: &str = "student";

// =============================================================================
// Navigation
// =============================================================================

/// Anonymous entry point; every unauthenticated or unmapped navigation lands here
pub const PATH_LOGIN: &str = "/login";

/// Public registration page
pub const PATH_REGISTER: &str = "/register";

/// Admin area root
pub const PATH_ADMIN: &str = "/admin";

/// Student area root
pub const PATH_STUDENT: &str = "/student";

// =============================================================================
// Backend (hosted platform)
// =============================================================================

/// Default backend URL (local supabase stack for development)
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";

/// Default path for the persisted session file
pub const DEFAULT_SESSION_FILE: &str = ".hostelhub-session.json";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Profile provisioning
// =============================================================================

/// Grace delay before the first profile lookup after sign-up, while the
/// server-side trigger creates the row (milliseconds)
pub const DEFAULT_PROFILE_GRACE_MS: u64 = 1000;

/// Total profile lookup attempts after sign-up. Must be at least 2 so a
/// delayed trigger gets one retry before ProfileMissing is surfaced.
pub const DEFAULT_PROFILE_RETRY_ATTEMPTS: u32 = 3;

/// Initial backoff between profile lookup attempts (milliseconds, doubling)
pub const DEFAULT_PROFILE_RETRY_DELAY_MS: u64 = 500;

// =============================================================================
// Remote tables
// =============================================================================

pub const TABLE_PROFILES: &str = "profiles";
pub const TABLE_ROOMS: &str = "rooms";
pub const TABLE_MAINTENANCE: &str = "maintenance_requests";
pub const TABLE_RESOURCE_USAGE: &str = "resource_usage";
pub const TABLE_NOTIFICATIONS: &str = "notifications";
pub const TABLE_CHAT_MESSAGES: &str = "chat_messages";
