use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub appwrite_endpoint: String,
    pub appwrite_project_id: String,
    pub appwrite_api_key: String,
    pub database_id: String,
    pub patient_collection_id: String,
    pub appointment_collection_id: String,
    pub admin_passkey: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            appwrite_endpoint: "http://localhost:8090/v1".to_string(),
            appwrite_project_id: "test-project".to_string(),
            appwrite_api_key: "test-api-key".to_string(),
            database_id: "test-db".to_string(),
            patient_collection_id: "patients".to_string(),
            appointment_collection_id: "appointments".to_string(),
            admin_passkey: "111111".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            appwrite_endpoint: endpoint.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            appwrite_endpoint: self.appwrite_endpoint.clone(),
            appwrite_project_id: self.appwrite_project_id.clone(),
            appwrite_api_key: self.appwrite_api_key.clone(),
            database_id: self.database_id.clone(),
            patient_collection_id: self.patient_collection_id.clone(),
            appointment_collection_id: self.appointment_collection_id.clone(),
            admin_passkey: self.admin_passkey.clone(),
        }
    }
}

pub struct MockAppwriteResponses;

impl MockAppwriteResponses {
    pub fn patient_document(user_id: &str, name: &str) -> serde_json::Value {
        json!({
            "$id": Uuid::new_v4().to_string(),
            "$createdAt": "2025-01-01T00:00:00.000+00:00",
            "$updatedAt": "2025-01-01T00:00:00.000+00:00",
            "userId": user_id,
            "name": name,
            "email": "patient@example.com",
            "phone": "+353871234567",
            "birthDate": "1990-05-14",
            "gender": "Female",
            "address": "12 Abbey Street, Dublin",
            "occupation": "Pharmacist",
            "emergencyContactName": "Pat Doyle",
            "emergencyContactNumber": "+353879876543",
            "primaryPhysician": "Sarah Lee",
            "privacyConsent": true
        })
    }

    pub fn appointment_document(
        id: &str,
        user_id: &str,
        status: &str,
        schedule: &str,
        created_at: &str,
    ) -> serde_json::Value {
        json!({
            "$id": id,
            "$createdAt": created_at,
            "$updatedAt": created_at,
            "userId": user_id,
            "patientName": "Jane Doyle",
            "primaryPhysician": "Sarah Lee",
            "schedule": schedule,
            "reason": "Annual check-up",
            "note": "",
            "status": status,
            "cancellationReason": ""
        })
    }

    pub fn document_list(documents: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "total": documents.len(),
            "documents": documents
        })
    }

    pub fn sms_message_response() -> serde_json::Value {
        json!({
            "$id": Uuid::new_v4().to_string(),
            "status": "processing"
        })
    }
}
