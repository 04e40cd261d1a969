//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Hostel management client
#[derive(Parser, Debug)]
#[command(name = "hostelhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    SignUp(SignUpArgs),

    /// Sign in with email and password
    SignIn(SignInArgs),

    /// Sign out and clear the local session
    SignOut,

    /// Show the current session state
    Whoami,

    /// Follow session changes until interrupted
    Watch,

    /// Room management
    Rooms(RoomsArgs),

    /// Student roster management
    Students(StudentsArgs),

    /// Your own profile
    Profile(ProfileArgs),

    /// Maintenance tickets
    Maintenance(MaintenanceArgs),

    /// Resource usage logging
    Resources(ResourcesArgs),

    /// Notifications
    Notifications(NotificationsArgs),

    /// Hostel assistant chat
    Chat(ChatArgs),
}

/// Arguments for the sign-up command
#[derive(Parser, Debug)]
pub struct SignUpArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub full_name: String,

    #[arg(long)]
    pub national_id: String,

    /// Account role
    #[arg(long, value_parser = ["admin", "student"])]
    pub role: String,
}

/// Arguments for the sign-in command
#[derive(Parser, Debug)]
pub struct SignInArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Parser, Debug)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub action: RoomsAction,
}

#[derive(Subcommand, Debug)]
pub enum RoomsAction {
    /// List all rooms (admin)
    List,
    /// Assign a student to a room (admin)
    Assign {
        #[arg(long)]
        room: Uuid,
        #[arg(long)]
        student: Uuid,
    },
    /// Release a room back to the pool (admin)
    Release {
        #[arg(long)]
        room: Uuid,
    },
    /// Add a room to the pool (admin)
    Create {
        #[arg(long)]
        room_number: String,
        /// single, double, or triple
        #[arg(long)]
        room_type: String,
    },
    /// Remove a room entirely (admin)
    Delete {
        #[arg(long)]
        room: Uuid,
    },
    /// Show your own room (student)
    Mine,
}

#[derive(Parser, Debug)]
pub struct StudentsArgs {
    #[command(subcommand)]
    pub action: StudentsAction,
}

#[derive(Subcommand, Debug)]
pub enum StudentsAction {
    /// List the student roster (admin)
    List,
    /// Rewrite a student's registration details (admin)
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        national_id: String,
    },
    /// Delete a student's profile (admin)
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show your profile (student)
    Show,
    /// Update your contact details (student)
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        emergency_contact: Option<String>,
    },
}

#[derive(Parser, Debug)]
pub struct MaintenanceArgs {
    #[command(subcommand)]
    pub action: MaintenanceAction,
}

#[derive(Subcommand, Debug)]
pub enum MaintenanceAction {
    /// File a ticket (student)
    Submit {
        #[arg(long)]
        room_number: String,
        #[arg(long)]
        description: String,
    },
    /// List tickets: all of them for admins, your own for students
    List,
    /// Move a ticket through its lifecycle (admin)
    SetStatus {
        #[arg(long)]
        id: Uuid,
        /// pending, in_progress, or completed
        #[arg(long)]
        status: String,
    },
}

#[derive(Parser, Debug)]
pub struct ResourcesArgs {
    #[command(subcommand)]
    pub action: ResourcesAction,
}

#[derive(Subcommand, Debug)]
pub enum ResourcesAction {
    /// Record today's readings (student)
    Log {
        /// Reading date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
        #[arg(long)]
        water: f64,
        #[arg(long)]
        electricity: f64,
    },
    /// List your readings (student)
    List,
}

#[derive(Parser, Debug)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub action: NotificationsAction,
}

#[derive(Subcommand, Debug)]
pub enum NotificationsAction {
    /// List your notifications
    List,
    /// Send a notification to a profile (admin)
    Send {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        /// info, warning, success, or error
        #[arg(long, default_value = "info")]
        kind: String,
    },
    /// Mark a notification as read
    MarkRead {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub action: ChatAction,
}

#[derive(Subcommand, Debug)]
pub enum ChatAction {
    /// Send a message to the hostel assistant (student)
    Send {
        message: Vec<String>,
    },
    /// Show your conversation (student)
    History,
}
