use tracing::debug;

use shared_config::AppConfig;
use shared_database::{queries, AppwriteClient, DocumentList};

use crate::models::{Patient, PatientError};

pub struct PatientService {
    appwrite: AppwriteClient,
    database_id: String,
    collection_id: String,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            appwrite: AppwriteClient::new(config),
            database_id: config.database_id.clone(),
            collection_id: config.patient_collection_id.clone(),
        }
    }

    /// Look up the patient registered for a portal user id. An unregistered
    /// user is `Ok(None)`; only transport failures are errors.
    pub async fn get_patient(&self, user_id: &str) -> Result<Option<Patient>, PatientError> {
        debug!("Fetching patient profile for user: {}", user_id);

        let result: DocumentList<Patient> = self.appwrite
            .list_documents(
                &self.database_id,
                &self.collection_id,
                &[queries::equal("userId", user_id), queries::limit(1)],
            )
            .await
            .map_err(|e| PatientError::DatabaseError(e.to_string()))?;

        Ok(result.documents.into_iter().next())
    }
}
