//! Registry settings
/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::{
    SETTINGS_FILE_NAME,
    load_from_workspace,
    load_settings,
};
pub use types::{
    ConfigError,
    RegistrySettings,
    ValidationError,
};
