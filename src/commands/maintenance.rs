//! Maintenance ticket commands.

use crate::cli::{MaintenanceAction, MaintenanceArgs};
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::services::MaintenanceService;

use super::{admit, bootstrap};

pub async fn execute(args: MaintenanceArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let tickets = MaintenanceService::new(ctx.backend.clone());

    match args.action {
        MaintenanceAction::Submit {
            room_number,
            description,
        } => {
            let profile = admit(&ctx, "/student/maintenance")?;
            let ticket = tickets.submit(profile.id, &room_number, &description).await?;
            println!("ticket {} filed ({})", ticket.id, ticket.status);
        }
        MaintenanceAction::List => {
            // Admins triage everything, students see their own page.
            let listed = if ctx.store.current().role().is_some_and(|r| r.is_admin()) {
                admit(&ctx, "/admin/maintenance")?;
                tickets.list_all().await?
            } else {
                let profile = admit(&ctx, "/student/maintenance")?;
                tickets.list_for(profile.id).await?
            };
            for ticket in listed {
                println!(
                    "{}  room {}  {}  {}",
                    ticket.id, ticket.room_number, ticket.status, ticket.description
                );
            }
        }
        MaintenanceAction::SetStatus { id, status } => {
            admit(&ctx, "/admin/maintenance")?;
            let status = status.parse().map_err(AppError::Validation)?;
            let ticket = tickets.set_status(id, status).await?;
            println!("ticket {} is now {}", ticket.id, ticket.status);
        }
    }
    Ok(())
}
