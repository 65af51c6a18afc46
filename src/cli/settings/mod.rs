//! Settings management for CLI set/unset commands.
//!
//! Each configuration key has a [`SettingHandler`]; the [`SettingRegistry`]
//! maps keys to handlers and renders the `parley set` listing.

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;

use std::path::Path;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
///
/// Handlers edit the in-memory [`Config`]; loading and saving is done by
/// [`set_at_path`] and [`unset_at_path`].
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the value from the words following the key. Returns the message
    /// to show on success.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value so the default applies again.
    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;

    /// Format the current value for display in `parley set` output.
    fn format(&self, config: &Config) -> String;
}

fn handler_for<'a>(
    registry: &'a SettingRegistry,
    key: &str,
) -> Result<&'a dyn SettingHandler, SettingError> {
    registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))
}

fn load(path: &Path) -> Result<Config, SettingError> {
    Config::load_from_path(path).map_err(|e| SettingError::ConfigError(e.to_string()))
}

fn save(config: &Config, path: &Path) -> Result<(), SettingError> {
    config
        .save_to_path(path)
        .map_err(|e| SettingError::ConfigError(e.to_string()))
}

/// Load the config at `path`, set `key`, and write it back.
pub fn set_at_path(
    registry: &SettingRegistry,
    path: &Path,
    key: &str,
    args: &[String],
) -> Result<String, SettingError> {
    let handler = handler_for(registry, key)?;
    let mut config = load(path)?;
    let message = handler.set(args, &mut config)?;
    save(&config, path)?;
    Ok(message)
}

/// Load the config at `path`, unset `key`, and write it back.
pub fn unset_at_path(
    registry: &SettingRegistry,
    path: &Path,
    key: &str,
) -> Result<String, SettingError> {
    let handler = handler_for(registry, key)?;
    let mut config = load(path)?;
    let message = handler.unset(&mut config)?;
    save(&config, path)?;
    Ok(message)
}
