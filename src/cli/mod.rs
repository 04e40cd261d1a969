//! Command-line interface definitions.

mod args;

pub use args::{
    ChatAction, ChatArgs, Cli, Commands, MaintenanceAction, MaintenanceArgs, NotificationsAction,
    NotificationsArgs, ProfileAction, ProfileArgs, ResourcesAction, ResourcesArgs, RoomsAction,
    RoomsArgs, SignInArgs, SignUpArgs, StudentsAction, StudentsArgs,
};
