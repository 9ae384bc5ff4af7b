use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use shared_database::AppwriteClient;
use shared_utils::FormattedDateTime;

pub struct NotificationService {
    appwrite: Arc<AppwriteClient>,
}

impl NotificationService {
    pub fn new(appwrite: Arc<AppwriteClient>) -> Self {
        Self { appwrite }
    }

    pub fn confirmation_message(formatted: &FormattedDateTime, primary_physician: &str) -> String {
        format!(
            "Greetings from Medify. Your appointment is confirmed for {} with Dr. {}",
            formatted.date_time, primary_physician
        )
    }

    pub fn cancellation_message(cancellation_reason: Option<&str>) -> String {
        let reason = match cancellation_reason {
            Some(reason) if !reason.is_empty() => reason,
            _ => "Not provided",
        };
        format!(
            "We regret to inform that your appointment has been cancelled. Reason: {}",
            reason
        )
    }

    /// Single attempt, no retry. Failure is logged and returned, never
    /// escalated past the dispatcher.
    pub async fn send_sms(&self, user_id: &str, content: &str) -> anyhow::Result<Value> {
        debug!("Sending SMS notification to user {}", user_id);
        self.appwrite.create_sms(user_id, content).await
    }

    /// Dispatch an SMS on a spawned task after the triggering write has
    /// committed. The write's outcome is already decided; a messaging outage
    /// can only produce a log line.
    pub fn dispatch(&self, user_id: String, content: String) {
        let appwrite = Arc::clone(&self.appwrite);
        tokio::spawn(async move {
            if let Err(e) = appwrite.create_sms(&user_id, &content).await {
                error!("Error sending SMS to user {}: {}", user_id, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::format_date_time;

    #[test]
    fn confirmation_message_includes_time_and_physician() {
        let formatted = format_date_time("2025-03-01T14:30:00.000Z", Some("America/New_York"));
        let message = NotificationService::confirmation_message(&formatted, "Sarah Lee");

        assert_eq!(
            message,
            "Greetings from Medify. Your appointment is confirmed for Mar 1, 2025, 9:30 AM with Dr. Sarah Lee"
        );
    }

    #[test]
    fn cancellation_message_falls_back_when_reason_empty() {
        assert_eq!(
            NotificationService::cancellation_message(Some("Physician unavailable")),
            "We regret to inform that your appointment has been cancelled. Reason: Physician unavailable"
        );
        assert_eq!(
            NotificationService::cancellation_message(Some("")),
            "We regret to inform that your appointment has been cancelled. Reason: Not provided"
        );
        assert_eq!(
            NotificationService::cancellation_message(None),
            "We regret to inform that your appointment has been cancelled. Reason: Not provided"
        );
    }
}
