//! Session layer: state container, profile resolver, and the controller
//! that keeps local state synchronized with the provider.

mod controller;
mod resolver;
mod state;

pub use controller::{Redirect, SessionController};
pub use resolver::ProfileResolver;
pub use state::{SessionState, SessionStore};
