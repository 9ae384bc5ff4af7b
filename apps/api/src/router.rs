use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use appointment_cell::router::appointment_routes;
use appointment_cell::services::revalidate::RevalidationNotifier;
use patient_cell::router::patient_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>, revalidation: RevalidationNotifier) -> Router {
    Router::new()
        .route("/", get(|| async { "Medify patient portal API is running!" }))
        .nest("/appointments", appointment_routes(state.clone(), revalidation))
        .nest("/patients", patient_routes(state))
}
