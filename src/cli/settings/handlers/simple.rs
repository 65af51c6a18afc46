//! Handlers for settings with a validated value: `theme` and `reply-delay-ms`.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{success_set, success_unset, validate_theme};
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_REPLY_DELAY_MS, DEFAULT_THEME_ID};

/// Handler for the `theme` setting.
pub struct ThemeHandler;

impl SettingHandler for ThemeHandler {
    fn key(&self) -> &'static str {
        "theme"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set a theme, specify the theme name:",
                example: "parley set theme dark",
            });
        }

        let theme = validate_theme(config, &args.join(" "))?;
        let message = success_set("theme", &theme);
        config.theme = Some(theme);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.theme = None;
        Ok(success_unset("theme"))
    }

    fn format(&self, config: &Config) -> String {
        match &config.theme {
            Some(theme) => format!("  theme: {theme}"),
            None => format!("  theme: (unset, default: {DEFAULT_THEME_ID})"),
        }
    }
}

/// Handler for the `reply-delay-ms` setting.
pub struct ReplyDelayHandler;

impl SettingHandler for ReplyDelayHandler {
    fn key(&self) -> &'static str {
        "reply-delay-ms"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(raw) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: "To set the reply delay, give it in milliseconds:",
                example: "parley set reply-delay-ms 1500",
            });
        };

        let delay: u64 = raw
            .trim()
            .parse()
            .map_err(|_| SettingError::InvalidDelay(raw.clone()))?;
        config.reply_delay_ms = Some(delay);
        Ok(success_set("reply-delay-ms", &format!("{delay} ms")))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.reply_delay_ms = None;
        Ok(format!(
            "✅ Unset reply-delay-ms (will use default: {DEFAULT_REPLY_DELAY_MS} ms)"
        ))
    }

    fn format(&self, config: &Config) -> String {
        match config.reply_delay_ms {
            Some(ms) => format!("  reply-delay-ms: {ms} ms"),
            None => format!("  reply-delay-ms: (unset, default: {DEFAULT_REPLY_DELAY_MS} ms)"),
        }
    }
}
