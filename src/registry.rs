//! Registry of assembled locale records, built once during bootstrap.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{
    ConfigError,
    RegistrySettings,
};
use crate::error::{
    LocaleError,
    RegistryError,
};
use crate::loader::{
    DirectoryLoader,
    EmbeddedLoader,
    LocaleLoader,
};
use crate::record::LocaleRecord;

/// Locale records keyed by identifier.
///
/// Consumers receive `Arc<LocaleRecord>`; repeated lookups return the same
/// allocation.
#[derive(Debug, Default, Clone)]
pub struct LocaleRegistry {
    records: HashMap<String, Arc<LocaleRecord>>,
}

impl LocaleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble every locale in `locales` through `loader`.
    ///
    /// The first failure aborts the whole bootstrap.
    pub fn bootstrap<S: AsRef<str>>(
        loader: &dyn LocaleLoader,
        locales: &[S],
    ) -> Result<Self, LocaleError> {
        let mut registry = Self::new();
        for locale in locales {
            let locale = locale.as_ref();
            tracing::debug!("Assembling locale: {}", locale);
            let record = LocaleRecord::assemble(loader, locale).inspect_err(|e| {
                tracing::warn!("Failed to assemble locale {}: {}", locale, e);
            })?;
            registry.register(record);
        }
        tracing::debug!("Registered {} locale(s)", registry.len());
        Ok(registry)
    }

    /// Validate `settings`, choose a loader and bootstrap.
    pub fn from_settings(settings: &RegistrySettings) -> Result<Self, RegistryError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let registry = match &settings.data_dir {
            Some(dir) => Self::bootstrap(&DirectoryLoader::new(dir), &settings.locales)?,
            None => Self::bootstrap(&EmbeddedLoader::new(), &settings.locales)?,
        };
        Ok(registry)
    }

    /// Insert `record`, replacing any previous record for the same locale.
    pub fn register(&mut self, record: LocaleRecord) -> Arc<LocaleRecord> {
        let record = Arc::new(record);
        if self.records.insert(record.locale().to_string(), Arc::clone(&record)).is_some() {
            tracing::debug!("Replaced existing record for locale: {}", record.locale());
        }
        record
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<Arc<LocaleRecord>> {
        self.records.get(locale).cloned()
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.records.contains_key(locale)
    }

    /// Registered identifiers, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.records.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
