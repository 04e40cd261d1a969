//! Notifications: admins send, everyone reads their own.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::config::TABLE_NOTIFICATIONS;
use crate::domain::{Notification, NotificationKind};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::provider::SupabaseProvider;

#[derive(Debug, Serialize)]
struct NewNotification<'a> {
    title: &'a str,
    message: &'a str,
    #[serde(rename = "type")]
    kind: NotificationKind,
    is_read: bool,
    user_id: Uuid,
}

pub struct NotificationService {
    backend: Arc<SupabaseProvider>,
}

impl NotificationService {
    pub fn new(backend: Arc<SupabaseProvider>) -> Self {
        Self { backend }
    }

    /// Send a notification to one profile
    pub async fn send(
        &self,
        user_id: Uuid,
        title: &str,
        message: &str,
        kind: NotificationKind,
    ) -> AppResult<Notification> {
        if title.trim().is_empty() {
            return Err(AppError::validation("title must not be empty"));
        }
        self.backend
            .insert(
                TABLE_NOTIFICATIONS,
                &NewNotification {
                    title,
                    message,
                    kind,
                    is_read: false,
                    user_id,
                },
            )
            .await
    }

    /// A profile's notifications, newest first
    pub async fn list_for(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        self.backend
            .select(
                TABLE_NOTIFICATIONS,
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await
    }

    /// Mark one notification as read
    pub async fn mark_read(&self, id: Uuid) -> AppResult<Notification> {
        let mut updated: Vec<Notification> = self
            .backend
            .update(
                TABLE_NOTIFICATIONS,
                &[("id", format!("eq.{id}"))],
                &json!({ "is_read": true }),
            )
            .await?;
        updated.pop().ok_or_not_found()
    }
}
