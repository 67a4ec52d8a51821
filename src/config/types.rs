use std::collections::HashSet;
use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrySettings {
    /// Locale identifiers assembled at bootstrap.
    pub locales: Vec<String>,

    /// Directory laid out as `<dataDir>/<locale>/{long,short}.json`.
    /// If unset, the tables compiled into the crate are used.
    pub data_dir: Option<PathBuf>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self { locales: vec![crate::haw::LOCALE.to_string()], data_dir: None }
    }
}

impl RegistrySettings {
    /// # Errors
    /// - No locales listed
    /// - Empty or duplicated locale identifier
    /// - Locale identifier that is not a single path component
    /// - Empty data directory
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locales.is_empty() {
            errors.push(ValidationError::new(
                "locales",
                "At least one locale is required. Example: [\"haw\"]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, locale) in self.locales.iter().enumerate() {
            if locale.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    "The locale identifier cannot be empty",
                ));
            } else if locale.contains(['/', '\\']) || locale.contains("..") {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!("Invalid locale '{locale}': path separators and '..' are not allowed"),
                ));
            } else if !seen.insert(locale.as_str()) {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!("Duplicate locale '{locale}'"),
                ));
            }
        }

        if let Some(dir) = &self.data_dir
            && dir.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "dataDir",
                "The directory cannot be empty. Please specify a path, or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = RegistrySettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: RegistrySettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.locales, elements_are![eq("haw")]);
        assert_that!(settings.data_dir, none());
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"dataDir": "/srv/locale"}"#;

        let settings: RegistrySettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.locales, len(eq(1)));
        assert_that!(settings.data_dir, some(eq(&PathBuf::from("/srv/locale"))));
    }

    #[rstest]
    fn validate_locales_empty() {
        let settings = RegistrySettings { locales: vec![], ..RegistrySettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales")),
                field!(ValidationError.message, contains_substring("At least one locale"))
            ]])
        );
    }

    #[rstest]
    fn validate_locale_blank() {
        let settings = RegistrySettings {
            locales: vec!["haw".to_string(), "  ".to_string()],
            ..RegistrySettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales[1]")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_locale_duplicate() {
        let settings = RegistrySettings {
            locales: vec!["haw".to_string(), "haw".to_string()],
            ..RegistrySettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales[1]")),
                field!(ValidationError.message, contains_substring("Duplicate locale 'haw'"))
            ]])
        );
    }

    #[rstest]
    #[case::parent("..")]
    #[case::nested("haw/../..")]
    #[case::slash("en/US")]
    #[case::backslash("en\\US")]
    #[case::embedded_dots("haw..")]
    fn validate_locale_not_single_component(#[case] locale: &str) {
        let settings =
            RegistrySettings { locales: vec![locale.to_string()], ..RegistrySettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales[0]")),
                field!(ValidationError.message, contains_substring("are not allowed"))
            ]])
        );
    }

    #[rstest]
    fn validate_data_dir_empty() {
        let settings =
            RegistrySettings { data_dir: Some(PathBuf::new()), ..RegistrySettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("dataDir"))])
        );
    }

    #[rstest]
    fn validate_collects_multiple_errors() {
        let settings = RegistrySettings { locales: vec![], data_dir: Some(PathBuf::new()) };

        let errors = settings.validate().unwrap_err();

        assert_that!(errors, len(eq(2)));
        let message = ConfigError::ValidationErrors(errors).to_string();
        assert_that!(message, contains_substring("  1. locales - "));
        assert_that!(message, contains_substring("  2. dataDir - "));
    }
}
