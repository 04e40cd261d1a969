//! Thin record services over the remote tables, one per page group of the
//! application. These are interchangeable forms over remote rows; the only
//! client-side checks are field presence.

mod chat;
mod maintenance;
mod notifications;
mod resources;
mod rooms;
mod students;

pub use chat::ChatService;
pub use maintenance::MaintenanceService;
pub use notifications::NotificationService;
pub use resources::ResourceService;
pub use rooms::RoomService;
pub use students::StudentService;
