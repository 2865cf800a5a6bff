//! Inbound port. Downstream consumers (renderer, CLI) read resolved settings.

use crate::domain::{ColoringOptions, DomainError, Settings};

/// Read-only access to settings resolved once at construction.
pub trait SettingsPort: Send + Sync {
    /// The cached resolution outcome. Never re-resolves.
    fn settings(&self) -> Result<&Settings, &DomainError>;

    /// Coloring options of the resolved settings.
    ///
    /// Only meaningful after a successful resolution; on failure the same
    /// error as [`SettingsPort::settings`] is returned.
    fn coloring_options(&self) -> Result<&ColoringOptions, &DomainError> {
        self.settings().map(Settings::coloring_options)
    }

    fn is_resolved(&self) -> bool {
        self.settings().is_ok()
    }
}
