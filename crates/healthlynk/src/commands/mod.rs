pub mod chat;
pub mod classify;
pub mod export;
pub mod guidance;
pub mod history;
pub mod monitor;
pub mod settings;
pub mod version;

mod console;
