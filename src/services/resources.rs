//! Resource usage logging: daily water and electricity readings per student.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::config::TABLE_RESOURCE_USAGE;
use crate::domain::ResourceUsage;
use crate::errors::{AppError, AppResult};
use crate::provider::SupabaseProvider;

#[derive(Debug, Serialize)]
struct NewReading {
    student_id: Uuid,
    date: NaiveDate,
    water_usage: f64,
    electricity_usage: f64,
}

pub struct ResourceService {
    backend: Arc<SupabaseProvider>,
}

impl ResourceService {
    pub fn new(backend: Arc<SupabaseProvider>) -> Self {
        Self { backend }
    }

    /// Record one day's readings
    pub async fn log(
        &self,
        student_id: Uuid,
        date: NaiveDate,
        water_usage: f64,
        electricity_usage: f64,
    ) -> AppResult<ResourceUsage> {
        if water_usage < 0.0 || electricity_usage < 0.0 {
            return Err(AppError::validation("usage readings must be non-negative"));
        }
        self.backend
            .insert(
                TABLE_RESOURCE_USAGE,
                &NewReading {
                    student_id,
                    date,
                    water_usage,
                    electricity_usage,
                },
            )
            .await
    }

    /// One student's readings, most recent day first
    pub async fn list_for(&self, student_id: Uuid) -> AppResult<Vec<ResourceUsage>> {
        self.backend
            .select(
                TABLE_RESOURCE_USAGE,
                &[
                    ("student_id", format!("eq.{student_id}")),
                    ("order", "date.desc".to_string()),
                ],
            )
            .await
    }
}
