//! Symptom classification, care guidance and the shared conversation types

mod classifier;
mod config;
mod guidance;
mod responder;
mod types;

pub use classifier::{Classification, Classifier};
pub use config::{ConditionPattern, PatternTable};
pub use guidance::{CareGuide, Doctor, Guidance, Remedy};
pub use responder::OfflineResponder;
pub use types::{CurrentSymptom, Message, ParseSeverityError, Role, Severity, DEFAULT_GREETING};
