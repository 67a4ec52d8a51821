//! Settings file loading

use std::path::Path;

use super::{
    ConfigError,
    RegistrySettings,
};

pub const SETTINGS_FILE_NAME: &str = ".locale-registry.json";

/// Read `.locale-registry.json` from `workspace_root`.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: no settings file
/// - `Err(ConfigError)`: read or parse failure
pub fn load_from_workspace(workspace_root: &Path) -> Result<Option<RegistrySettings>, ConfigError> {
    let config_path = workspace_root.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: RegistrySettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Load workspace settings, falling back to defaults, and validate them.
///
/// # Errors
/// - File read or JSON parse error
/// - Validation errors
pub fn load_settings(workspace_root: Option<&Path>) -> Result<RegistrySettings, ConfigError> {
    tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

    let settings = match workspace_root {
        Some(root) => load_from_workspace(root)?.unwrap_or_default(),
        None => RegistrySettings::default(),
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded successfully: {:?}", settings);

    Ok(settings)
}
