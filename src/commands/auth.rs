//! Auth commands: sign-up, sign-in, sign-out, whoami.

use crate::cli::{SignInArgs, SignUpArgs};
use crate::config::{Settings, PATH_LOGIN};
use crate::domain::{Role, SignUpRequest};
use crate::errors::{AppError, AppResult};
use crate::session::SessionState;

use super::bootstrap;

pub async fn sign_up(args: SignUpArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;

    let request = SignUpRequest {
        email: args.email,
        password: args.password,
        full_name: args.full_name,
        national_id: args.national_id,
        role: Role::from(args.role.as_str()),
    };

    match ctx.controller.sign_up(request).await {
        Ok(redirect) => {
            println!("account created and signed in; continue at {}", redirect.to);
            Ok(())
        }
        Err(AppError::ProfileMissing) => {
            println!(
                "account created, but the profile was not provisioned in time; \
                 try signing in at {PATH_LOGIN} in a moment"
            );
            Err(AppError::ProfileMissing)
        }
        Err(e) => Err(e),
    }
}

pub async fn sign_in(args: SignInArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let redirect = ctx.controller.sign_in(&args.email, &args.password).await?;
    println!("signed in; continue at {}", redirect.to);
    Ok(())
}

pub async fn sign_out(settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let redirect = ctx.controller.sign_out().await;
    println!("signed out; continue at {}", redirect.to);
    Ok(())
}

pub async fn whoami(settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    match ctx.store.current() {
        SessionState::Authenticated { identity, profile } => {
            println!(
                "{} <{}> role={} area={}",
                profile.full_name,
                identity.email,
                profile.role,
                profile.role.default_path()
            );
        }
        SessionState::Anonymous => println!("not signed in"),
        SessionState::Loading => println!("session is still loading"),
    }
    Ok(())
}
