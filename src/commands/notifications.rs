//! Notification commands.

use crate::cli::{NotificationsAction, NotificationsArgs};
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::services::NotificationService;

use super::{admit, bootstrap, AppContext};

/// Notifications live in both areas; admit through the current role's page.
fn admit_own_area(ctx: &AppContext) -> AppResult<crate::domain::Profile> {
    if ctx.store.current().role().is_some_and(|r| r.is_admin()) {
        admit(ctx, "/admin/notifications")
    } else {
        admit(ctx, "/student/notifications")
    }
}

pub async fn execute(args: NotificationsArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let notifications = NotificationService::new(ctx.backend.clone());

    match args.action {
        NotificationsAction::List => {
            let profile = admit_own_area(&ctx)?;
            for n in notifications.list_for(profile.id).await? {
                println!(
                    "[{}]{} {}: {}",
                    format!("{:?}", n.kind).to_lowercase(),
                    if n.is_read { "" } else { " *" },
                    n.title,
                    n.message
                );
            }
        }
        NotificationsAction::Send {
            user,
            title,
            message,
            kind,
        } => {
            admit(&ctx, "/admin/notifications")?;
            let kind = kind.parse().map_err(AppError::Validation)?;
            let sent = notifications.send(user, &title, &message, kind).await?;
            println!("notification {} sent to {user}", sent.id);
        }
        NotificationsAction::MarkRead { id } => {
            admit_own_area(&ctx)?;
            notifications.mark_read(id).await?;
            println!("notification {id} marked read");
        }
    }
    Ok(())
}
