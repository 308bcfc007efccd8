//! Consultation records: history, settings, export and on-disk paths

pub mod export;
mod history;
mod io;
mod paths;
mod settings;

pub use export::{default_export_name, export_pdf, render_pdf, ExportError};
pub use history::{referral_history, remedy_history, sample_history, ConsultationRecord};
pub use io::{atomic_write, read_json, write_json};
pub use paths::Paths;
pub use settings::Settings;
