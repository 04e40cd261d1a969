//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. The auth
//! variants mirror how the session layer degrades: transient read failures
//! fail open to a logged-out state, failures of explicit user actions are
//! surfaced to the caller.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & session
    /// Provider rejected the credentials (bad password, duplicate email, ...).
    /// The provider's message is preserved verbatim for display.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Retrieving the persisted session failed. Transient; the session
    /// controller fails open to Anonymous.
    #[error("session retrieval failed: {0}")]
    SessionRetrieval(String),

    /// The profile lookup itself errored (network, remote query). Treated as
    /// "no profile" during initialization; surfaced on explicit actions.
    #[error("profile fetch failed: {0}")]
    ProfileFetch(String),

    /// A valid identity has no profile row. Expected transiently after
    /// sign-up while the server-side trigger runs; a hard failure on sign-in.
    #[error("no profile exists for the authenticated account")]
    ProfileMissing,

    #[error("not signed in")]
    Unauthorized,

    #[error("access denied")]
    Forbidden,

    // Resource errors
    #[error("resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("request error")]
    Http(#[from] reqwest::Error),

    #[error("serialization error")]
    Json(#[from] serde_json::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code for logs and machine consumers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "AUTH_ERROR",
            AppError::SessionRetrieval(_) => "SESSION_RETRIEVAL_ERROR",
            AppError::ProfileFetch(_) => "PROFILE_FETCH_ERROR",
            AppError::ProfileMissing => "PROFILE_MISSING",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Json(_) => "SERIALIZATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn auth(msg: impl Into<String>) -> Self {
        AppError::Auth(msg.into())
    }

    pub fn session_retrieval(msg: impl Into<String>) -> Self {
        AppError::SessionRetrieval(msg.into())
    }

    pub fn profile_fetch(msg: impl Into<String>) -> Self {
        AppError::ProfileFetch(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
