/*
 * Responsibility
 * - define the v1 URL structure
 * - /health, /appointments, /prescriptions
 * - the revocation gate is layered over the whole app in app.rs, not here
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    appointments::{
        cancel_appointment, create_appointment, get_appointment, list_appointments,
        update_appointment,
    },
    health::health,
    prescriptions::{create_prescription, get_prescription, list_appointment_prescriptions},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/appointments/{appointment_id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(cancel_appointment),
        )
        .route(
            "/appointments/{appointment_id}/prescriptions",
            get(list_appointment_prescriptions),
        )
        .route("/prescriptions", post(create_prescription))
        .route("/prescriptions/{prescription_id}", get(get_prescription))
}
