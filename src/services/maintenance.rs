//! Maintenance tickets: submission by students, triage by admins.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::config::TABLE_MAINTENANCE;
use crate::domain::{MaintenanceRequest, MaintenanceStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::provider::SupabaseProvider;

#[derive(Debug, Serialize)]
struct NewTicket<'a> {
    room_number: &'a str,
    description: &'a str,
    status: MaintenanceStatus,
    student_id: Uuid,
}

pub struct MaintenanceService {
    backend: Arc<SupabaseProvider>,
}

impl MaintenanceService {
    pub fn new(backend: Arc<SupabaseProvider>) -> Self {
        Self { backend }
    }

    /// File a new ticket; it always starts pending
    pub async fn submit(
        &self,
        student_id: Uuid,
        room_number: &str,
        description: &str,
    ) -> AppResult<MaintenanceRequest> {
        if description.trim().is_empty() {
            return Err(AppError::validation("description must not be empty"));
        }
        self.backend
            .insert(
                TABLE_MAINTENANCE,
                &NewTicket {
                    room_number,
                    description,
                    status: MaintenanceStatus::Pending,
                    student_id,
                },
            )
            .await
    }

    /// Every ticket, newest first (admin view)
    pub async fn list_all(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.backend
            .select(TABLE_MAINTENANCE, &[("order", "created_at.desc".to_string())])
            .await
    }

    /// One student's tickets, newest first
    pub async fn list_for(&self, student_id: Uuid) -> AppResult<Vec<MaintenanceRequest>> {
        self.backend
            .select(
                TABLE_MAINTENANCE,
                &[
                    ("student_id", format!("eq.{student_id}")),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await
    }

    /// Move a ticket through its lifecycle (admin)
    pub async fn set_status(
        &self,
        id: Uuid,
        status: MaintenanceStatus,
    ) -> AppResult<MaintenanceRequest> {
        let mut updated: Vec<MaintenanceRequest> = self
            .backend
            .update(
                TABLE_MAINTENANCE,
                &[("id", format!("eq.{id}"))],
                &json!({ "status": status }),
            )
            .await?;
        updated.pop().ok_or_not_found()
    }
}
