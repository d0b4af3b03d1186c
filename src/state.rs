/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 * - Clone-cheap by construction (Arc / Arc-backed repos inside)
 */
use std::sync::Arc;

use crate::repos::{appointment_repo::AppointmentRepo, prescription_repo::PrescriptionRepo};
use crate::services::auth::revocation::RevocationList;

#[derive(Clone)]
pub struct AppState {
    pub revocation: Arc<dyn RevocationList>,
    pub appointments: AppointmentRepo,
    pub prescriptions: PrescriptionRepo,
}

impl AppState {
    pub fn new(revocation: Arc<dyn RevocationList>) -> Self {
        Self {
            revocation,
            appointments: AppointmentRepo::new(),
            prescriptions: PrescriptionRepo::new(),
        }
    }
}
