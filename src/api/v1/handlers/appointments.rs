/*
 * Responsibility
 * - /appointments handlers
 * - Path/Json via extractors, DTO validation -> repo calls
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
        appointments::{AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest},
        response::ApiEnvelope,
    },
    error::AppError,
    state::AppState,
};

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Json<ApiEnvelope<Vec<AppointmentResponse>>> {
    let rows = state.appointments.list().await;
    let res: Vec<AppointmentResponse> = rows.into_iter().map(Into::into).collect();

    Json(ApiEnvelope::ok(200, "Appointments retrieved.", res))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<ApiEnvelope<AppointmentResponse>>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = state
        .appointments
        .create(req.patient_id, req.doctor_id, req.scheduled_at, &req.reason)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok(201, "Appointment created.", row.into())),
    ))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<ApiEnvelope<AppointmentResponse>>, AppError> {
    let row = state
        .appointments
        .get(appointment_id)
        .await
        .ok_or(AppError::not_found("appointment"))?;

    Ok(Json(ApiEnvelope::ok(200, "Appointment retrieved.", row.into())))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
    Json(req): Json<UpdateAppointmentRequest>,
) -> Result<Json<ApiEnvelope<AppointmentResponse>>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = state
        .appointments
        .update(appointment_id, req.scheduled_at, req.reason.as_deref())
        .await
        .ok_or(AppError::not_found("appointment"))?;

    Ok(Json(ApiEnvelope::ok(200, "Appointment updated.", row.into())))
}

pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<ApiEnvelope<AppointmentResponse>>, AppError> {
    let row = state
        .appointments
        .cancel(appointment_id)
        .await
        .ok_or(AppError::not_found("appointment"))?;

    Ok(Json(ApiEnvelope::ok(200, "Appointment cancelled.", row.into())))
}
