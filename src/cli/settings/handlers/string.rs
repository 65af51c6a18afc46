//! Free-text settings: participant names, the timestamp format and the title.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::success_set;
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::{
    DEFAULT_PRIMARY_NAME, DEFAULT_SECONDARY_NAME, DEFAULT_TIMESTAMP_FORMAT, DEFAULT_TITLE,
};

type Getter = fn(&Config) -> Option<&str>;
type Field = fn(&mut Config) -> &mut Option<String>;

/// A setting stored as an optional string on [`Config`].
pub struct TextHandler {
    key: &'static str,
    default: &'static str,
    hint: &'static str,
    example: &'static str,
    get: Getter,
    field: Field,
}

impl SettingHandler for TextHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let value = args.join(" ");
        if value.trim().is_empty() {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        }

        let message = success_set(self.key, &value);
        *(self.field)(config) = Some(value);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        *(self.field)(config) = None;
        Ok(format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default
        ))
    }

    fn format(&self, config: &Config) -> String {
        match (self.get)(config) {
            Some(value) => format!("  {}: {value}", self.key),
            None => format!("  {}: (unset, default: {})", self.key, self.default),
        }
    }
}

pub fn primary_name_handler() -> TextHandler {
    TextHandler {
        key: "primary-name",
        default: DEFAULT_PRIMARY_NAME,
        hint: "To rename yourself, provide the display name:",
        example: "parley set primary-name Ada",
        get: |config| config.primary_name.as_deref(),
        field: |config| &mut config.primary_name,
    }
}

pub fn secondary_name_handler() -> TextHandler {
    TextHandler {
        key: "secondary-name",
        default: DEFAULT_SECONDARY_NAME,
        hint: "To rename the other participant, provide the display name:",
        example: "parley set secondary-name Grace",
        get: |config| config.secondary_name.as_deref(),
        field: |config| &mut config.secondary_name,
    }
}

pub fn timestamp_format_handler() -> TextHandler {
    TextHandler {
        key: "timestamp-format",
        default: DEFAULT_TIMESTAMP_FORMAT,
        hint: "To change timestamps, provide a strftime format:",
        example: "parley set timestamp-format \"%H:%M\"",
        get: |config| config.timestamp_format.as_deref(),
        field: |config| &mut config.timestamp_format,
    }
}

pub fn title_handler() -> TextHandler {
    TextHandler {
        key: "title",
        default: DEFAULT_TITLE,
        hint: "To change the header title, provide the text:",
        example: "parley set title \"Team chat\"",
        get: |config| config.title.as_deref(),
        field: |config| &mut config.title,
    }
}
