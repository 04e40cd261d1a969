//! Follow session-change notifications until interrupted.
//!
//! Runs the controller's event loop against the provider's subscription and
//! prints every state transition. Mostly useful against a long-lived session
//! file shared with other commands.

use crate::config::Settings;
use crate::errors::AppResult;
use crate::provider::AuthProvider;
use crate::session::SessionState;

use super::bootstrap;

fn describe(state: &SessionState) -> String {
    match state {
        SessionState::Loading => "loading".to_string(),
        SessionState::Anonymous => "anonymous".to_string(),
        SessionState::Authenticated { identity, profile } => {
            format!("authenticated as {} (role={})", identity.email, profile.role)
        }
    }
}

pub async fn execute(settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;

    let events = ctx.backend.subscribe();
    tokio::spawn(ctx.controller.clone().run(events));

    let mut changes = ctx.store.subscribe();
    println!("session: {}", describe(&ctx.store.current()));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = changes.borrow_and_update().clone();
                println!("session: {}", describe(&state));
            }
        }
    }
    Ok(())
}
