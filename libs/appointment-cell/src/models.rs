use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_utils::parse_instant;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// An appointment document. Attributes use the collection's camelCase wire
/// names; `$`-prefixed fields are assigned by the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
    /// Snapshot of the patient's name at last write, not a live join. Goes
    /// stale if the patient record changes without an appointment update.
    pub patient_name: String,
    pub primary_physician: String,
    pub schedule: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub note: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub cancellation_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A schedule value as supplied by callers: either an already-parsed instant
/// or a raw timestamp string that still needs validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleInput {
    Instant(DateTime<Utc>),
    Raw(String),
}

impl ScheduleInput {
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            ScheduleInput::Instant(instant) => Some(*instant),
            ScheduleInput::Raw(value) => parse_instant(value),
        }
    }
}

impl From<DateTime<Utc>> for ScheduleInput {
    fn from(instant: DateTime<Utc>) -> Self {
        ScheduleInput::Instant(instant)
    }
}

impl From<&str> for ScheduleInput {
    fn from(value: &str) -> Self {
        ScheduleInput::Raw(value.to_string())
    }
}

impl fmt::Display for ScheduleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleInput::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
            ScheduleInput::Raw(value) => write!(f, "{}", value),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub user_id: String,
    pub primary_physician: String,
    pub schedule: ScheduleInput,
    pub reason: String,
    pub note: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub user_id: String,
    pub time_zone: Option<String>,
    pub appointment: UpdateAppointmentFields,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentFields {
    pub primary_physician: String,
    pub schedule: Option<ScheduleInput>,
    pub status: AppointmentStatus,
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Schedule,
    Cancel,
}

// ==============================================================================
// STATISTICS MODELS
// ==============================================================================

/// Admin-dashboard listing with per-status counts, recomputed from the full
/// listing on every call.
#[derive(Debug, Clone, Serialize)]
pub struct RecentAppointmentList {
    pub total_count: u64,
    pub pending_count: u64,
    pub scheduled_count: u64,
    pub cancelled_count: u64,
    pub documents: Vec<Appointment>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Invalid schedule date: {0}")]
    InvalidSchedule(String),

    #[error("A schedule date is required to confirm an appointment")]
    MissingSchedule,

    #[error("Appointment cannot move from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Failed to update appointment")]
    UpdateFailed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
