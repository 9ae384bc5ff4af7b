use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

/// Paged listing envelope returned by the document API.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

pub struct AppwriteClient {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl AppwriteClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.appwrite_endpoint.clone(),
            project_id: config.appwrite_project_id.clone(),
            api_key: config.appwrite_api_key.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("X-Appwrite-Project", HeaderValue::from_str(&self.project_id).unwrap());
        headers.insert("X-Appwrite-Key", HeaderValue::from_str(&self.api_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let headers = self.get_headers();

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Insert a new document. Identifier generation is delegated to the
    /// server via the `unique()` sentinel, which guarantees global uniqueness.
    pub async fn create_document<T>(
        &self,
        database_id: &str,
        collection_id: &str,
        data: Value,
    ) -> Result<T>
    where T: DeserializeOwned {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        );

        self.request(
            Method::POST,
            &path,
            Some(json!({
                "documentId": "unique()",
                "data": data,
            })),
        ).await
    }

    /// Fetch a single document. A missing id is `Ok(None)`, not an error.
    pub async fn get_document<T>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Option<T>>
    where T: DeserializeOwned {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database_id, collection_id, document_id
        );

        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let response = self.client.get(&url)
            .headers(self.get_headers())
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);
            return Err(anyhow!("API error ({}): {}", status, error_text));
        }

        let document = response.json::<T>().await?;
        Ok(Some(document))
    }

    pub async fn list_documents<T>(
        &self,
        database_id: &str,
        collection_id: &str,
        query_specs: &[String],
    ) -> Result<DocumentList<T>>
    where T: DeserializeOwned {
        let mut path = format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        );

        for (i, spec) in query_specs.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            path.push(separator);
            path.push_str("queries[]=");
            path.push_str(&urlencoding::encode(spec));
        }

        self.request(Method::GET, &path, None).await
    }

    /// Partial-field update: fields absent from `data` keep their stored
    /// value.
    pub async fn update_document<T>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<T>
    where T: DeserializeOwned {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database_id, collection_id, document_id
        );

        self.request(
            Method::PATCH,
            &path,
            Some(json!({ "data": data })),
        ).await
    }

    /// Send an SMS through the messaging API, targeted at a portal user id.
    pub async fn create_sms(&self, user_id: &str, content: &str) -> Result<Value> {
        self.request(
            Method::POST,
            "/messaging/messages/sms",
            Some(json!({
                "messageId": "unique()",
                "content": content,
                "topics": [],
                "users": [user_id],
                "targets": [],
            })),
        ).await
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builders for the JSON query specs accepted by the document listing API.
pub mod queries {
    use serde_json::json;

    pub fn order_desc(attribute: &str) -> String {
        json!({ "method": "orderDesc", "attribute": attribute }).to_string()
    }

    pub fn equal(attribute: &str, value: &str) -> String {
        json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
    }

    pub fn limit(count: u32) -> String {
        json!({ "method": "limit", "values": [count] }).to_string()
    }
}
