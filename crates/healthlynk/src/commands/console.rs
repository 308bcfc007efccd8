use healthlynk_chat::{Notification, Notifier, TracingNotifier};
use healthlynk_records::Settings;

/// Prints notifications to stderr
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = if notification.destructive { "!" } else { "*" };
        eprintln!("[{marker}] {}: {}", notification.title, notification.description);
    }
}

/// Console output unless notifications are turned off, in which case they only reach the log
pub fn notifier(settings: &Settings) -> Box<dyn Notifier> {
    if settings.notifications_enabled {
        Box::new(ConsoleNotifier)
    } else {
        Box::new(TracingNotifier)
    }
}
