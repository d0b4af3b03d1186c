/*
 * Responsibility
 * - appointment request/response DTOs (camelCase on the wire)
 * - validate() for shape checks before touching the store
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::appointment_repo::{AppointmentRecord, AppointmentStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
}

impl CreateAppointmentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.reason.trim().is_empty() {
            return Err("reason is required");
        }
        if self.reason.len() > 500 {
            return Err("reason must be <= 500 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub scheduled_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl UpdateAppointmentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(reason) = &self.reason {
            if reason.trim().is_empty() {
                return Err("reason cannot be empty");
            }
            if reason.len() > 500 {
                return Err("reason must be <= 500 chars");
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
    pub status: AppointmentStatus,
}

impl From<AppointmentRecord> for AppointmentResponse {
    fn from(r: AppointmentRecord) -> Self {
        Self {
            id: r.id,
            patient_id: r.patient_id,
            doctor_id: r.doctor_id,
            scheduled_at: r.scheduled_at,
            reason: r.reason,
            status: r.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(reason: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            patient_id: Uuid::new_v4(),
            doctor_id: Uuid::new_v4(),
            scheduled_at: Utc::now(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn create_rejects_blank_reason() {
        assert!(create_request("   ").validate().is_err());
        assert!(create_request("annual checkup").validate().is_ok());
    }

    #[test]
    fn update_allows_missing_fields() {
        let req = UpdateAppointmentRequest {
            scheduled_at: None,
            reason: None,
        };
        assert!(req.validate().is_ok());

        let req = UpdateAppointmentRequest {
            scheduled_at: None,
            reason: Some("".to_string()),
        };
        assert!(req.validate().is_err());
    }
}
