pub mod booking;
pub mod lifecycle;
pub mod notification;
pub mod revalidate;

pub use booking::AppointmentService;
pub use lifecycle::AppointmentLifecycleService;
pub use notification::NotificationService;
pub use revalidate::{RevalidationNotifier, ADMIN_DASHBOARD_PATH};
