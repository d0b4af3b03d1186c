/*
 * Responsibility
 * - appointment records and their in-memory store
 * - clone-cheap handle (Arc inside); persistence is out of scope here
 */
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
    pub status: AppointmentStatus,
}

#[derive(Clone, Default)]
pub struct AppointmentRepo {
    inner: Arc<RwLock<HashMap<Uuid, AppointmentRecord>>>,
}

impl AppointmentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<AppointmentRecord> {
        let map = self.inner.read().await;
        let mut rows: Vec<_> = map.values().cloned().collect();
        rows.sort_by_key(|a| a.scheduled_at);
        rows
    }

    pub async fn create(
        &self,
        patient_id: Uuid,
        doctor_id: Uuid,
        scheduled_at: DateTime<Utc>,
        reason: &str,
    ) -> AppointmentRecord {
        let record = AppointmentRecord {
            id: Uuid::new_v4(),
            patient_id,
            doctor_id,
            scheduled_at,
            reason: reason.to_string(),
            status: AppointmentStatus::Scheduled,
        };

        self.inner
            .write()
            .await
            .insert(record.id, record.clone());
        record
    }

    pub async fn get(&self, id: Uuid) -> Option<AppointmentRecord> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn update(
        &self,
        id: Uuid,
        scheduled_at: Option<DateTime<Utc>>,
        reason: Option<&str>,
    ) -> Option<AppointmentRecord> {
        let mut map = self.inner.write().await;
        let record = map.get_mut(&id)?;

        if let Some(at) = scheduled_at {
            record.scheduled_at = at;
        }
        if let Some(reason) = reason {
            record.reason = reason.to_string();
        }

        Some(record.clone())
    }

    pub async fn cancel(&self, id: Uuid) -> Option<AppointmentRecord> {
        let mut map = self.inner.write().await;
        let record = map.get_mut(&id)?;
        record.status = AppointmentStatus::Cancelled;
        Some(record.clone())
    }
}
