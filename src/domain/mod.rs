//! Core business entities: roles, identities, profiles, and the flat record
//! rows mirrored from the remote tables.

mod profile;
mod records;
mod requests;
mod role;

pub use profile::{Identity, Profile};
pub use records::{
    ChatMessage, MaintenanceRequest, MaintenanceStatus, Notification, NotificationKind,
    ResourceUsage, Room, RoomType,
};
pub use requests::SignUpRequest;
pub use role::{redirect_for_role, Role};
