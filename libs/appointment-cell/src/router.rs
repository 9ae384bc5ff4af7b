use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::revalidate::RevalidationNotifier;

#[derive(Clone)]
pub struct AppointmentState {
    pub config: Arc<AppConfig>,
    pub revalidation: RevalidationNotifier,
}

pub fn appointment_routes(config: Arc<AppConfig>, revalidation: RevalidationNotifier) -> Router {
    let state = AppointmentState { config, revalidation };

    Router::new()
        .route("/", post(handlers::create_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/recent", get(handlers::get_recent_appointment_list))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}", put(handlers::update_appointment))
        .with_state(state)
}
