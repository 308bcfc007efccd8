use crate::notify::{Notification, Notifier};
use crate::session::SessionProfile;
use healthlynk_core::Message;
use std::path::Path;
use tracing::error;

/// Export a transcript to PDF, reporting the outcome through `notifier`.
///
/// A transcript holding only the greeting is not exported.
pub fn export_conversation(
    messages: &[Message],
    profile: &SessionProfile,
    path: &Path,
    notifier: &dyn Notifier,
) -> bool {
    if messages.len() <= 1 {
        notifier.notify(Notification::error(
            "Nothing to export",
            "Have a conversation first before exporting.",
        ));
        return false;
    }

    match healthlynk_records::export_pdf(messages, profile.patient_name(), path) {
        Ok(()) => {
            notifier.notify(Notification::info(
                "Export successful",
                "Your consultation has been saved as a PDF.",
            ));
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "export failed");
            notifier.notify(Notification::error(
                "Export failed",
                "There was a problem creating your PDF file.",
            ));
            false
        }
    }
}
