//! Room management: the pool itself, assignment, and availability.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::config::TABLE_ROOMS;
use crate::domain::{Room, RoomType};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::provider::SupabaseProvider;

#[derive(Debug, Serialize)]
struct NewRoom<'a> {
    room_number: &'a str,
    room_type: RoomType,
    is_available: bool,
}

pub struct RoomService {
    backend: Arc<SupabaseProvider>,
}

impl RoomService {
    pub fn new(backend: Arc<SupabaseProvider>) -> Self {
        Self { backend }
    }

    /// All rooms, ordered by room number
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.backend
            .select(TABLE_ROOMS, &[("order", "room_number.asc".to_string())])
            .await
    }

    /// The room currently assigned to a student, if any
    pub async fn room_for_student(&self, student_id: Uuid) -> AppResult<Option<Room>> {
        let mut rooms: Vec<Room> = self
            .backend
            .select(TABLE_ROOMS, &[("student_id", format!("eq.{student_id}"))])
            .await?;
        Ok(rooms.pop())
    }

    /// Assign a student to a room and mark it occupied
    pub async fn assign(&self, room_id: Uuid, student_id: Uuid) -> AppResult<Room> {
        let mut updated: Vec<Room> = self
            .backend
            .update(
                TABLE_ROOMS,
                &[("id", format!("eq.{room_id}"))],
                &json!({ "student_id": student_id, "is_available": false }),
            )
            .await?;
        updated.pop().ok_or_not_found()
    }

    /// Release a room back to the available pool
    pub async fn release(&self, room_id: Uuid) -> AppResult<Room> {
        let mut updated: Vec<Room> = self
            .backend
            .update(
                TABLE_ROOMS,
                &[("id", format!("eq.{room_id}"))],
                &json!({ "student_id": null, "is_available": true }),
            )
            .await?;
        updated.pop().ok_or_not_found()
    }

    /// Add a room to the pool; new rooms start available
    pub async fn create(&self, room_number: &str, room_type: RoomType) -> AppResult<Room> {
        if room_number.trim().is_empty() {
            return Err(AppError::validation("room number must not be empty"));
        }
        self.backend
            .insert(
                TABLE_ROOMS,
                &NewRoom {
                    room_number,
                    room_type,
                    is_available: true,
                },
            )
            .await
    }

    /// Remove a room entirely
    pub async fn delete(&self, room_id: Uuid) -> AppResult<()> {
        self.backend
            .delete(TABLE_ROOMS, &[("id", format!("eq.{room_id}"))])
            .await
    }
}
