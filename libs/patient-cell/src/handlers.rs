use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::PatientError;
use crate::services::patient::PatientService;

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state);

    let patient = service.get_patient(&user_id).await
        .map_err(|e| match e {
            PatientError::NotFound => AppError::NotFound("Patient not found".to_string()),
            PatientError::DatabaseError(msg) => AppError::Database(msg),
        })?;

    match patient {
        Some(patient) => Ok(Json(json!({
            "success": true,
            "patient": patient
        }))),
        None => Err(AppError::NotFound("Patient not found".to_string())),
    }
}
