//! Flat record rows mirrored from the remote tables.
//!
//! Each record keys back to a Profile and is created, updated, and deleted
//! directly through remote calls; no invariant is enforced client-side
//! beyond field presence.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room capacity classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Triple,
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::Single => write!(f, "single"),
            RoomType::Double => write!(f, "double"),
            RoomType::Triple => write!(f, "triple"),
        }
    }
}

impl std::str::FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "triple" => Ok(RoomType::Triple),
            other => Err(format!("unknown room type: {other}")),
        }
    }
}

/// Hostel room row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub room_number: String,
    pub room_type: RoomType,
    pub is_available: bool,
    /// Occupant, when assigned
    pub student_id: Option<Uuid>,
}

/// Maintenance ticket lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceStatus::Pending => write!(f, "pending"),
            MaintenanceStatus::InProgress => write!(f, "in_progress"),
            MaintenanceStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for MaintenanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MaintenanceStatus::Pending),
            "in_progress" => Ok(MaintenanceStatus::InProgress),
            "completed" => Ok(MaintenanceStatus::Completed),
            other => Err(format!("unknown maintenance status: {other}")),
        }
    }
}

/// Maintenance ticket row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub room_number: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub student_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Daily water/electricity reading for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub id: Uuid,
    pub student_id: Uuid,
    pub date: NaiveDate,
    pub water_usage: f64,
    pub electricity_usage: f64,
    pub created_at: DateTime<Utc>,
}

/// Notification severity/kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(NotificationKind::Info),
            "warning" => Ok(NotificationKind::Warning),
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// Notification row addressed to one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

/// One chat exchange: the student's message paired with the scripted reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub student_id: Uuid,
    pub message: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
