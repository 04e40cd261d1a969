//! hostelhub - hostel management client
//!
//! Role-gated client for a hostel/dormitory management application backed by
//! a hosted platform (auth + relational data over REST). The crate owns the
//! session/role state machine and the navigation guard; persistence,
//! credential checks, and row-level access all belong to the backend.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Roles, profiles, and remote record rows
//! - **provider**: Boundary with the hosted backend (auth + tables)
//! - **session**: Session store, profile resolver, and controller
//! - **routing**: Route table and guard decisions
//! - **services**: Thin record services, one per page group
//! - **chat**: Scripted assistant replies
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Sign in and find your area
//! cargo run -- sign-in --email you@example.com --password ...
//!
//! # File a maintenance ticket
//! cargo run -- maintenance submit --room-number B-14 --description "leaky tap"
//! ```

pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod provider;
pub mod routing;
pub mod services;
pub mod session;

// Re-export commonly used types at crate root
pub use config::Settings;
pub use domain::{Profile, Role};
pub use errors::{AppError, AppResult};
pub use routing::RouteDecision;
pub use session::{SessionController, SessionState, SessionStore};
