use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub appwrite_endpoint: String,
    pub appwrite_project_id: String,
    pub appwrite_api_key: String,
    pub database_id: String,
    pub patient_collection_id: String,
    pub appointment_collection_id: String,
    pub admin_passkey: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            appwrite_endpoint: env::var("APPWRITE_ENDPOINT")
                .unwrap_or_else(|_| {
                    warn!("APPWRITE_ENDPOINT not set, using default");
                    "https://cloud.appwrite.io/v1".to_string()
                }),
            appwrite_project_id: env::var("APPWRITE_PROJECT_ID")
                .unwrap_or_else(|_| {
                    warn!("APPWRITE_PROJECT_ID not set, using empty value");
                    String::new()
                }),
            appwrite_api_key: env::var("APPWRITE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("APPWRITE_API_KEY not set, using empty value");
                    String::new()
                }),
            database_id: env::var("APPWRITE_DATABASE_ID")
                .unwrap_or_else(|_| {
                    warn!("APPWRITE_DATABASE_ID not set, using empty value");
                    String::new()
                }),
            patient_collection_id: env::var("PATIENT_COLLECTION_ID")
                .unwrap_or_else(|_| {
                    warn!("PATIENT_COLLECTION_ID not set, using empty value");
                    String::new()
                }),
            appointment_collection_id: env::var("APPOINTMENT_COLLECTION_ID")
                .unwrap_or_else(|_| {
                    warn!("APPOINTMENT_COLLECTION_ID not set, using empty value");
                    String::new()
                }),
            admin_passkey: env::var("ADMIN_PASSKEY")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_PASSKEY not set, using empty value");
                    String::new()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.appwrite_endpoint.is_empty()
            && !self.appwrite_project_id.is_empty()
            && !self.appwrite_api_key.is_empty()
            && !self.database_id.is_empty()
            && !self.patient_collection_id.is_empty()
            && !self.appointment_collection_id.is_empty()
    }

    pub fn is_admin_gate_configured(&self) -> bool {
        !self.admin_passkey.is_empty()
    }
}
