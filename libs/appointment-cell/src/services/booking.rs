use std::sync::Arc;

use chrono::SecondsFormat;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use patient_cell::services::patient::PatientService;
use shared_config::AppConfig;
use shared_database::{queries, AppwriteClient, DocumentList};
use shared_utils::format_instant;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, CreateAppointmentRequest,
    RecentAppointmentList, UpdateAppointmentRequest, UpdateKind,
};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::notification::NotificationService;
use crate::services::revalidate::{RevalidationNotifier, ADMIN_DASHBOARD_PATH};

/// Name stamped on appointments when the patient lookup is unavailable.
const UNKNOWN_PATIENT_NAME: &str = "Unknown";

pub struct AppointmentService {
    appwrite: Arc<AppwriteClient>,
    patient_service: PatientService,
    lifecycle_service: AppointmentLifecycleService,
    notification_service: NotificationService,
    revalidation: RevalidationNotifier,
    database_id: String,
    collection_id: String,
}

impl AppointmentService {
    pub fn new(config: &AppConfig, revalidation: RevalidationNotifier) -> Self {
        let appwrite = Arc::new(AppwriteClient::new(config));

        let patient_service = PatientService::new(config);
        let lifecycle_service = AppointmentLifecycleService::new();
        let notification_service = NotificationService::new(Arc::clone(&appwrite));

        Self {
            appwrite,
            patient_service,
            lifecycle_service,
            notification_service,
            revalidation,
            database_id: config.database_id.clone(),
            collection_id: config.appointment_collection_id.clone(),
        }
    }

    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!("Creating appointment for user {}", request.user_id);

        let patient_name = self.resolve_patient_name(&request.user_id).await;

        let schedule = request.schedule.to_instant().ok_or_else(|| {
            AppointmentError::InvalidSchedule(request.schedule.to_string())
        })?;
        let formatted_schedule = schedule.to_rfc3339_opts(SecondsFormat::Millis, true);

        let appointment: Appointment = self.appwrite
            .create_document(
                &self.database_id,
                &self.collection_id,
                json!({
                    "userId": request.user_id,
                    "primaryPhysician": request.primary_physician,
                    "schedule": formatted_schedule,
                    "reason": request.reason,
                    "note": request.note.unwrap_or_default(),
                    "status": request.status,
                    "patientName": patient_name,
                }),
            )
            .await
            .map_err(|e| {
                error!("Error creating appointment: {}", e);
                AppointmentError::DatabaseError(e.to_string())
            })?;

        self.revalidation.revalidate(ADMIN_DASHBOARD_PATH);

        info!("Appointment {} created with status {}", appointment.id, appointment.status);
        Ok(appointment)
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", appointment_id);

        let appointment: Option<Appointment> = self.appwrite
            .get_document(&self.database_id, &self.collection_id, appointment_id)
            .await
            .map_err(|e| {
                error!("Error retrieving appointment {}: {}", appointment_id, e);
                AppointmentError::DatabaseError(e.to_string())
            })?;

        appointment.ok_or(AppointmentError::NotFound)
    }

    /// All appointments, newest first. An empty collection is an empty
    /// vector, never an error.
    pub async fn get_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let listing = self.list_newest_first().await?;
        Ok(listing.documents)
    }

    /// Admin-dashboard listing plus per-status counts, folded from the full
    /// sequence on every call. O(n) per request; fine at this scale.
    pub async fn get_recent_appointment_list(&self) -> Result<RecentAppointmentList, AppointmentError> {
        let listing = self.list_newest_first().await?;

        let mut pending_count = 0;
        let mut scheduled_count = 0;
        let mut cancelled_count = 0;

        for appointment in &listing.documents {
            match appointment.status {
                AppointmentStatus::Pending => pending_count += 1,
                AppointmentStatus::Scheduled => scheduled_count += 1,
                AppointmentStatus::Cancelled => cancelled_count += 1,
            }
        }

        Ok(RecentAppointmentList {
            total_count: listing.total,
            pending_count,
            scheduled_count,
            cancelled_count,
            documents: listing.documents,
        })
    }

    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment: {}", appointment_id);

        let current = self.get_appointment(appointment_id).await?;
        self.lifecycle_service
            .validate_status_transition(&current.status, &request.appointment.status)?;

        let patient_name = self.resolve_patient_name(&request.user_id).await;

        let mut data = serde_json::Map::new();
        data.insert("userId".to_string(), json!(request.user_id));
        data.insert("primaryPhysician".to_string(), json!(request.appointment.primary_physician));
        data.insert("status".to_string(), json!(request.appointment.status));
        data.insert("patientName".to_string(), json!(patient_name));

        let confirmed_schedule = match request.kind {
            UpdateKind::Schedule => {
                let input = request.appointment.schedule.as_ref()
                    .ok_or(AppointmentError::MissingSchedule)?;
                let schedule = input.to_instant().ok_or_else(|| {
                    AppointmentError::InvalidSchedule(input.to_string())
                })?;

                let formatted = schedule.to_rfc3339_opts(SecondsFormat::Millis, true);
                data.insert("schedule".to_string(), json!(formatted));
                data.insert("cancellationReason".to_string(), json!(""));
                Some(schedule)
            }
            UpdateKind::Cancel => {
                // schedule stays out of the payload so the stored value is
                // left untouched by the partial update
                let reason = request.appointment.cancellation_reason.clone().unwrap_or_default();
                data.insert("cancellationReason".to_string(), json!(reason));
                None
            }
        };

        let updated: Appointment = self.appwrite
            .update_document(
                &self.database_id,
                &self.collection_id,
                appointment_id,
                Value::Object(data),
            )
            .await
            .map_err(|e| {
                error!("Error updating appointment {}: {}", appointment_id, e);
                AppointmentError::UpdateFailed
            })?;

        let sms_message = match confirmed_schedule {
            Some(schedule) => {
                let formatted = format_instant(schedule, request.time_zone.as_deref());
                NotificationService::confirmation_message(
                    &formatted,
                    &request.appointment.primary_physician,
                )
            }
            None => NotificationService::cancellation_message(
                request.appointment.cancellation_reason.as_deref(),
            ),
        };
        self.notification_service.dispatch(request.user_id.clone(), sms_message);

        self.revalidation.revalidate(ADMIN_DASHBOARD_PATH);

        info!("Appointment {} updated to status {}", updated.id, updated.status);
        Ok(updated)
    }

    async fn list_newest_first(&self) -> Result<DocumentList<Appointment>, AppointmentError> {
        self.appwrite
            .list_documents(
                &self.database_id,
                &self.collection_id,
                &[queries::order_desc("$createdAt")],
            )
            .await
            .map_err(|e| {
                error!("Error retrieving appointments: {}", e);
                AppointmentError::DatabaseError(e.to_string())
            })
    }

    /// Patient metadata is non-critical: a failed or empty lookup degrades
    /// to a placeholder name instead of failing the write. The two cases log
    /// differently so degraded lookups stay distinguishable from users who
    /// never registered a patient profile.
    async fn resolve_patient_name(&self, user_id: &str) -> String {
        match self.patient_service.get_patient(user_id).await {
            Ok(Some(patient)) => patient.name,
            Ok(None) => {
                debug!("No patient profile registered for user {}", user_id);
                UNKNOWN_PATIENT_NAME.to_string()
            }
            Err(e) => {
                warn!("Patient lookup degraded for user {}: {}", user_id, e);
                UNKNOWN_PATIENT_NAME.to_string()
            }
        }
    }
}
