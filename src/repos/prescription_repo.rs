/*
 * Responsibility
 * - prescription records and their in-memory store
 * - clone-cheap handle (Arc inside); persistence is out of scope here
 */
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PrescriptionItem {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: u32,
}

#[derive(Debug, Clone)]
pub struct PrescriptionRecord {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub items: Vec<PrescriptionItem>,
    pub notes: Option<String>,
    pub issued_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct PrescriptionRepo {
    inner: Arc<RwLock<HashMap<Uuid, PrescriptionRecord>>>,
}

impl PrescriptionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        appointment_id: Uuid,
        items: Vec<PrescriptionItem>,
        notes: Option<String>,
    ) -> PrescriptionRecord {
        let record = PrescriptionRecord {
            id: Uuid::new_v4(),
            appointment_id,
            items,
            notes,
            issued_at: Utc::now(),
        };

        self.inner
            .write()
            .await
            .insert(record.id, record.clone());
        record
    }

    pub async fn get(&self, id: Uuid) -> Option<PrescriptionRecord> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn list_by_appointment(&self, appointment_id: Uuid) -> Vec<PrescriptionRecord> {
        let map = self.inner.read().await;
        let mut rows: Vec<_> = map
            .values()
            .filter(|p| p.appointment_id == appointment_id)
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.issued_at);
        rows
    }
}
