//! Student roster commands.

use crate::cli::{StudentsAction, StudentsArgs};
use crate::config::Settings;
use crate::errors::AppResult;
use crate::services::StudentService;

use super::{admit, bootstrap};

pub async fn execute(args: StudentsArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let students = StudentService::new(ctx.backend.clone());
    admit(&ctx, "/admin/students")?;

    match args.action {
        StudentsAction::List => {
            for s in students.list().await? {
                println!(
                    "{}  {}  <{}>  national_id={}",
                    s.id, s.full_name, s.email, s.national_id
                );
            }
        }
        StudentsAction::Update {
            id,
            full_name,
            national_id,
        } => {
            let updated = students.update_details(id, &full_name, &national_id).await?;
            println!("student {} updated ({})", updated.id, updated.full_name);
        }
        StudentsAction::Delete { id } => {
            students.delete(id).await?;
            println!("student {id} deleted");
        }
    }
    Ok(())
}
