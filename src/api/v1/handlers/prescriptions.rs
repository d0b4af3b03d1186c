/*
 * Responsibility
 * - /prescriptions handlers
 * - a prescription must reference an existing appointment
 * - all bodies use the standard response envelope
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::dto::{
        prescriptions::{CreatePrescriptionRequest, PrescriptionResponse},
        response::ApiEnvelope,
    },
    error::AppError,
    state::AppState,
};

pub async fn create_prescription(
    State(state): State<AppState>,
    Json(req): Json<CreatePrescriptionRequest>,
) -> Result<(StatusCode, Json<ApiEnvelope<PrescriptionResponse>>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    if state.appointments.get(req.appointment_id).await.is_none() {
        return Err(AppError::not_found("appointment"));
    }

    let items = req.items.into_iter().map(Into::into).collect();
    let row = state
        .prescriptions
        .create(req.appointment_id, items, req.notes)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok(201, "Prescription created.", row.into())),
    ))
}

pub async fn get_prescription(
    State(state): State<AppState>,
    Path(prescription_id): Path<Uuid>,
) -> Result<Json<ApiEnvelope<PrescriptionResponse>>, AppError> {
    let row = state
        .prescriptions
        .get(prescription_id)
        .await
        .ok_or(AppError::not_found("prescription"))?;

    Ok(Json(ApiEnvelope::ok(200, "Prescription retrieved.", row.into())))
}

pub async fn list_appointment_prescriptions(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<ApiEnvelope<Vec<PrescriptionResponse>>>, AppError> {
    if state.appointments.get(appointment_id).await.is_none() {
        return Err(AppError::not_found("appointment"));
    }

    let rows = state.prescriptions.list_by_appointment(appointment_id).await;
    let res: Vec<PrescriptionResponse> = rows.into_iter().map(Into::into).collect();

    Ok(Json(ApiEnvelope::ok(200, "Prescriptions retrieved.", res)))
}
