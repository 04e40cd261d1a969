//! Chat service: pairs each student message with the scripted reply and
//! stores the exchange.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::chat::respond;
use crate::config::TABLE_CHAT_MESSAGES;
use crate::domain::ChatMessage;
use crate::errors::{AppError, AppResult};
use crate::provider::SupabaseProvider;

#[derive(Debug, Serialize)]
struct NewExchange<'a> {
    student_id: Uuid,
    message: &'a str,
    response: &'a str,
}

pub struct ChatService {
    backend: Arc<SupabaseProvider>,
}

impl ChatService {
    pub fn new(backend: Arc<SupabaseProvider>) -> Self {
        Self { backend }
    }

    /// Send a message: the reply is generated locally, then the exchange is
    /// stored as one row.
    pub async fn send(&self, student_id: Uuid, message: &str) -> AppResult<ChatMessage> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::validation("message must not be empty"));
        }
        let response = respond(message);
        self.backend
            .insert(
                TABLE_CHAT_MESSAGES,
                &NewExchange {
                    student_id,
                    message,
                    response,
                },
            )
            .await
    }

    /// One student's conversation, oldest first
    pub async fn history(&self, student_id: Uuid) -> AppResult<Vec<ChatMessage>> {
        self.backend
            .select(
                TABLE_CHAT_MESSAGES,
                &[
                    ("student_id", format!("eq.{student_id}")),
                    ("order", "created_at.asc".to_string()),
                ],
            )
            .await
    }
}
