//! Application use cases. Orchestrate domain logic via ports.

pub mod settings_service;

pub use settings_service::{SettingsProvider, resolve_settings};
