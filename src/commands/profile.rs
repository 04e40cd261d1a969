//! Own-profile commands.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::Settings;
use crate::errors::AppResult;
use crate::services::StudentService;

use super::{admit, bootstrap};

pub async fn execute(args: ProfileArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let students = StudentService::new(ctx.backend.clone());
    let profile = admit(&ctx, "/student/profile")?;

    match args.action {
        ProfileAction::Show => {
            println!("{} <{}>", profile.full_name, profile.email);
            println!("national id: {}", profile.national_id);
            println!("phone: {}", profile.phone.as_deref().unwrap_or("-"));
            println!(
                "emergency contact: {}",
                profile.emergency_contact.as_deref().unwrap_or("-")
            );
        }
        ProfileAction::Update {
            full_name,
            phone,
            emergency_contact,
        } => {
            let updated = students
                .update_contact(
                    profile.id,
                    full_name.as_deref(),
                    phone.as_deref(),
                    emergency_contact.as_deref(),
                )
                .await?;
            println!("profile updated ({})", updated.full_name);
        }
    }
    Ok(())
}
