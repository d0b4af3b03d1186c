/*
 * Responsibility
 * - prescription request/response DTOs (camelCase on the wire)
 * - validate() for shape checks before touching the store
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::prescription_repo::{PrescriptionItem, PrescriptionRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItemDto {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: u32,
}

impl PrescriptionItemDto {
    fn validate(&self) -> Result<(), &'static str> {
        if self.medication.trim().is_empty() {
            return Err("medication is required");
        }
        if self.dosage.trim().is_empty() {
            return Err("dosage is required");
        }
        if self.frequency.trim().is_empty() {
            return Err("frequency is required");
        }
        if self.duration_days == 0 {
            return Err("durationDays must be >= 1");
        }

        Ok(())
    }
}

impl From<PrescriptionItemDto> for PrescriptionItem {
    fn from(d: PrescriptionItemDto) -> Self {
        Self {
            medication: d.medication,
            dosage: d.dosage,
            frequency: d.frequency,
            duration_days: d.duration_days,
        }
    }
}

impl From<PrescriptionItem> for PrescriptionItemDto {
    fn from(i: PrescriptionItem) -> Self {
        Self {
            medication: i.medication,
            dosage: i.dosage,
            frequency: i.frequency,
            duration_days: i.duration_days,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    pub appointment_id: Uuid,
    pub items: Vec<PrescriptionItemDto>,
    pub notes: Option<String>,
}

impl CreatePrescriptionRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.items.is_empty() {
            return Err("at least one item is required");
        }
        for item in &self.items {
            item.validate()?;
        }
        if let Some(notes) = &self.notes
            && notes.len() > 1000
        {
            return Err("notes must be <= 1000 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionResponse {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub items: Vec<PrescriptionItemDto>,
    pub notes: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl From<PrescriptionRecord> for PrescriptionResponse {
    fn from(r: PrescriptionRecord) -> Self {
        Self {
            id: r.id,
            appointment_id: r.appointment_id,
            items: r.items.into_iter().map(Into::into).collect(),
            notes: r.notes,
            issued_at: r.issued_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> PrescriptionItemDto {
        PrescriptionItemDto {
            medication: "amoxicillin".to_string(),
            dosage: "500mg".to_string(),
            frequency: "3x daily".to_string(),
            duration_days: 7,
        }
    }

    #[test]
    fn create_requires_items() {
        let req = CreatePrescriptionRequest {
            appointment_id: Uuid::new_v4(),
            items: vec![],
            notes: None,
        };
        assert!(req.validate().is_err());

        let req = CreatePrescriptionRequest {
            appointment_id: Uuid::new_v4(),
            items: vec![item()],
            notes: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn item_duration_must_be_positive() {
        let mut bad = item();
        bad.duration_days = 0;

        let req = CreatePrescriptionRequest {
            appointment_id: Uuid::new_v4(),
            items: vec![bad],
            notes: None,
        };
        assert!(req.validate().is_err());
    }
}
