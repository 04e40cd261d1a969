//! Resource usage commands.

use crate::cli::{ResourcesAction, ResourcesArgs};
use crate::config::Settings;
use crate::errors::AppResult;
use crate::services::ResourceService;

use super::{admit, bootstrap};

pub async fn execute(args: ResourcesArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let usage = ResourceService::new(ctx.backend.clone());
    let profile = admit(&ctx, "/student/resources")?;

    match args.action {
        ResourcesAction::Log {
            date,
            water,
            electricity,
        } => {
            let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let reading = usage.log(profile.id, date, water, electricity).await?;
            println!(
                "logged {}: water={} electricity={}",
                reading.date, reading.water_usage, reading.electricity_usage
            );
        }
        ResourcesAction::List => {
            for reading in usage.list_for(profile.id).await? {
                println!(
                    "{}  water={}  electricity={}",
                    reading.date, reading.water_usage, reading.electricity_usage
                );
            }
        }
    }
    Ok(())
}
