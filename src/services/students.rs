//! Student roster: admin management of profile rows, plus the self-service
//! contact update from the student profile page.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::config::{ROLE_STUDENT, TABLE_PROFILES};
use crate::domain::Profile;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::provider::SupabaseProvider;

#[derive(Debug, Serialize)]
struct DetailsPatch<'a> {
    full_name: &'a str,
    national_id: &'a str,
}

/// Absent fields are left untouched on the row
#[derive(Debug, Serialize)]
struct ContactPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emergency_contact: Option<&'a str>,
}

pub struct StudentService {
    backend: Arc<SupabaseProvider>,
}

impl StudentService {
    pub fn new(backend: Arc<SupabaseProvider>) -> Self {
        Self { backend }
    }

    /// The student roster, by name (admin)
    pub async fn list(&self) -> AppResult<Vec<Profile>> {
        self.backend
            .select(
                TABLE_PROFILES,
                &[
                    ("role", format!("eq.{ROLE_STUDENT}")),
                    ("order", "full_name.asc".to_string()),
                ],
            )
            .await
    }

    /// Rewrite a student's registration details (admin)
    pub async fn update_details(
        &self,
        id: Uuid,
        full_name: &str,
        national_id: &str,
    ) -> AppResult<Profile> {
        if full_name.trim().is_empty() || national_id.trim().is_empty() {
            return Err(AppError::validation(
                "full name and national id must not be empty",
            ));
        }
        let mut updated: Vec<Profile> = self
            .backend
            .update(
                TABLE_PROFILES,
                &[("id", format!("eq.{id}"))],
                &DetailsPatch {
                    full_name,
                    national_id,
                },
            )
            .await?;
        updated.pop().ok_or_not_found()
    }

    /// Update one's own contact fields; at least one must be given
    pub async fn update_contact(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        phone: Option<&str>,
        emergency_contact: Option<&str>,
    ) -> AppResult<Profile> {
        if full_name.is_none() && phone.is_none() && emergency_contact.is_none() {
            return Err(AppError::validation("nothing to update"));
        }
        let mut updated: Vec<Profile> = self
            .backend
            .update(
                TABLE_PROFILES,
                &[("id", format!("eq.{id}"))],
                &ContactPatch {
                    full_name,
                    phone,
                    emergency_contact,
                },
            )
            .await?;
        updated.pop().ok_or_not_found()
    }

    /// Remove a student's profile row (admin)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.backend
            .delete(TABLE_PROFILES, &[("id", format!("eq.{id}"))])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn contact_update_requires_at_least_one_field() {
        let backend = Arc::new(SupabaseProvider::new(&Settings::default()).unwrap());
        let students = StudentService::new(backend);

        let err = students
            .update_contact(Uuid::new_v4(), None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn detail_update_rejects_blank_fields() {
        let backend = Arc::new(SupabaseProvider::new(&Settings::default()).unwrap());
        let students = StudentService::new(backend);

        let err = students
            .update_details(Uuid::new_v4(), "  ", "12345678901234")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
