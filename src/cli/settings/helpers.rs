//! Helper functions for settings operations.

use crate::core::config::data::Config;
use crate::ui::builtin_themes::find_builtin_theme;

use super::error::SettingError;

pub fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

/// Validate and resolve a theme identifier.
///
/// Checks both built-in and custom themes, returning the canonical theme ID.
pub fn validate_theme(config: &Config, input: &str) -> Result<String, SettingError> {
    if let Some(theme) = find_builtin_theme(input) {
        return Ok(theme.id);
    }

    if let Some(theme) = config.get_custom_theme(input) {
        return Ok(theme.id.clone());
    }

    Err(SettingError::UnknownTheme {
        input: input.to_string(),
    })
}
