use tokio::sync::broadcast;
use tracing::debug;

/// Path watched by the server-rendered admin dashboard.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin";

pub type RevalidationReceiver = broadcast::Receiver<String>;

/// Push-style cache invalidation keyed by path. Writers call `revalidate`
/// after a successful write; the rendering layer subscribes and refetches.
#[derive(Clone)]
pub struct RevalidationNotifier {
    sender: broadcast::Sender<String>,
}

impl RevalidationNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    pub fn subscribe(&self) -> RevalidationReceiver {
        self.sender.subscribe()
    }

    /// Fire-and-forget: having no subscribers is not an error.
    pub fn revalidate(&self, path: &str) {
        debug!("Revalidating view for path {}", path);
        let _ = self.sender.send(path.to_string());
    }
}

impl Default for RevalidationNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_the_invalidated_path() {
        let notifier = RevalidationNotifier::new();
        let mut receiver = notifier.subscribe();

        notifier.revalidate(ADMIN_DASHBOARD_PATH);

        assert_eq!(receiver.recv().await.unwrap(), "/admin");
    }

    #[test]
    fn revalidation_without_subscribers_is_a_no_op() {
        let notifier = RevalidationNotifier::new();
        notifier.revalidate(ADMIN_DASHBOARD_PATH);
    }
}
