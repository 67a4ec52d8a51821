//! Errors raised while resolving locale artifacts.

use thiserror::Error;

use crate::config::ConfigError;

/// Failure to obtain one of a locale's artifacts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// A table or the plural rule could not be resolved for the locale
    #[error("Resource unavailable for locale '{locale}': {resource} ({reason})")]
    ResourceUnavailable {
        /// Locale identifier the resource was requested for
        locale: String,
        /// Which artifact failed (e.g. "short table", "plural rule")
        resource: String,
        /// Underlying cause, kept as text
        reason: String,
    },
}

impl LocaleError {
    #[must_use]
    pub fn unavailable(
        locale: impl Into<String>,
        resource: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ResourceUnavailable {
            locale: locale.into(),
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Locale the failure belongs to.
    #[must_use]
    pub fn locale(&self) -> &str {
        match self {
            Self::ResourceUnavailable { locale, .. } => locale,
        }
    }
}

/// Errors surfaced while bootstrapping a [`crate::LocaleRegistry`] from settings.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Settings(#[from] ConfigError),

    #[error("Failed to register locale: {0}")]
    Locale(#[from] LocaleError),
}
