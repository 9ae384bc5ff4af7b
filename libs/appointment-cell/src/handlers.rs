use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::passkey;

use crate::models::{AppointmentError, CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::router::AppointmentState;
use crate::services::booking::AppointmentService;

fn map_appointment_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::NotFound => {
            AppError::NotFound("Appointment not found".to_string())
        }
        AppointmentError::InvalidSchedule(value) => {
            AppError::BadRequest(format!("Invalid schedule date: {}", value))
        }
        AppointmentError::MissingSchedule => {
            AppError::BadRequest("A schedule date is required to confirm an appointment".to_string())
        }
        AppointmentError::InvalidStatusTransition { from, to } => {
            AppError::Conflict(format!("Appointment cannot move from {} to {}", from, to))
        }
        AppointmentError::UpdateFailed => {
            AppError::Internal("Failed to update appointment".to_string())
        }
        AppointmentError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppointmentState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.config, state.revalidation.clone());

    let appointment = service.create_appointment(request).await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment request submitted successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.config, state.revalidation.clone());

    let appointment = service.get_appointment(&appointment_id).await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.config, state.revalidation.clone());

    let appointments = service.get_appointments().await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "appointments": appointments
    })))
}

/// Admin dashboard listing with per-status counts. Gated by the encoded
/// admin passkey header rather than user authentication.
#[axum::debug_handler]
pub async fn get_recent_appointment_list(
    State(state): State<AppointmentState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let encoded = headers
        .get("X-Admin-Passkey")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Auth("Admin passkey required".to_string()))?;

    if !passkey::verify_passkey(encoded, &state.config.admin_passkey) {
        return Err(AppError::Auth("Invalid admin passkey".to_string()));
    }

    let service = AppointmentService::new(&state.config, state.revalidation.clone());

    let recent = service.get_recent_appointment_list().await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "recent": recent
    })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&state.config, state.revalidation.clone());

    let appointment = service.update_appointment(&appointment_id, request).await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment updated successfully"
    })))
}
