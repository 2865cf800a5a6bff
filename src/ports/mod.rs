//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by consumers into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::SettingsPort;
pub use outbound::{ImageSaver, WordListSource};
