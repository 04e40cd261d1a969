//! Room management commands.

use crate::cli::{RoomsAction, RoomsArgs};
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::services::RoomService;

use super::{admit, bootstrap};

pub async fn execute(args: RoomsArgs, settings: Settings) -> AppResult<()> {
    let ctx = bootstrap(&settings).await?;
    let rooms = RoomService::new(ctx.backend.clone());

    match args.action {
        RoomsAction::List => {
            admit(&ctx, "/admin/rooms")?;
            for room in rooms.list().await? {
                println!(
                    "{}  {}  {}  occupant={}",
                    room.room_number,
                    room.room_type,
                    if room.is_available { "available" } else { "occupied" },
                    room.student_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
                );
            }
        }
        RoomsAction::Assign { room, student } => {
            admit(&ctx, "/admin/rooms")?;
            let updated = rooms.assign(room, student).await?;
            println!("room {} assigned to {student}", updated.room_number);
        }
        RoomsAction::Release { room } => {
            admit(&ctx, "/admin/rooms")?;
            let updated = rooms.release(room).await?;
            println!("room {} released", updated.room_number);
        }
        RoomsAction::Create {
            room_number,
            room_type,
        } => {
            admit(&ctx, "/admin/rooms")?;
            let room_type = room_type.parse().map_err(AppError::Validation)?;
            let room = rooms.create(&room_number, room_type).await?;
            println!("room {} created ({})", room.room_number, room.room_type);
        }
        RoomsAction::Delete { room } => {
            admit(&ctx, "/admin/rooms")?;
            rooms.delete(room).await?;
            println!("room {room} deleted");
        }
        RoomsAction::Mine => {
            let profile = admit(&ctx, "/student/room")?;
            match rooms.room_for_student(profile.id).await? {
                Some(room) => println!("your room: {} ({})", room.room_number, room.room_type),
                None => println!("no room assigned yet"),
            }
        }
    }
    Ok(())
}
