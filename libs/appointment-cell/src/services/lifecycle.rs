use tracing::{debug, warn};

use crate::models::{AppointmentError, AppointmentStatus};

pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed. Re-stamping the current
    /// status is not a transition and always passes.
    pub fn validate_status_transition(
        &self,
        current_status: &AppointmentStatus,
        new_status: &AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition from {} to {}", current_status, new_status);

        if current_status == new_status {
            return Ok(());
        }

        let valid_transitions = self.get_valid_transitions(current_status);

        if !valid_transitions.contains(new_status) {
            warn!("Invalid status transition attempted: {} -> {}", current_status, new_status);
            return Err(AppointmentError::InvalidStatusTransition {
                from: *current_status,
                to: *new_status,
            });
        }

        Ok(())
    }

    /// Get all valid next statuses for a given current status.
    pub fn get_valid_transitions(&self, current_status: &AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Scheduled,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::Scheduled => vec![
                AppointmentStatus::Cancelled,
            ],
            // Terminal state - no transitions allowed
            AppointmentStatus::Cancelled => vec![],
        }
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn pending_can_be_scheduled_or_cancelled() {
        let lifecycle = AppointmentLifecycleService::new();

        assert!(lifecycle
            .validate_status_transition(&AppointmentStatus::Pending, &AppointmentStatus::Scheduled)
            .is_ok());
        assert!(lifecycle
            .validate_status_transition(&AppointmentStatus::Pending, &AppointmentStatus::Cancelled)
            .is_ok());
    }

    #[test]
    fn scheduled_can_only_be_cancelled() {
        let lifecycle = AppointmentLifecycleService::new();

        assert!(lifecycle
            .validate_status_transition(&AppointmentStatus::Scheduled, &AppointmentStatus::Cancelled)
            .is_ok());
        assert_matches!(
            lifecycle.validate_status_transition(
                &AppointmentStatus::Scheduled,
                &AppointmentStatus::Pending
            ),
            Err(AppointmentError::InvalidStatusTransition { .. })
        );
    }

    #[test]
    fn cancelled_is_terminal() {
        let lifecycle = AppointmentLifecycleService::new();

        assert!(lifecycle.get_valid_transitions(&AppointmentStatus::Cancelled).is_empty());
        assert_matches!(
            lifecycle.validate_status_transition(
                &AppointmentStatus::Cancelled,
                &AppointmentStatus::Scheduled
            ),
            Err(AppointmentError::InvalidStatusTransition {
                from: AppointmentStatus::Cancelled,
                to: AppointmentStatus::Scheduled,
            })
        );
    }

    #[test]
    fn restamping_the_same_status_passes() {
        let lifecycle = AppointmentLifecycleService::new();

        assert!(lifecycle
            .validate_status_transition(&AppointmentStatus::Scheduled, &AppointmentStatus::Scheduled)
            .is_ok());
    }
}
