use std::time::Duration;

use crate::core::config::data::Config;
use crate::core::constants::{
    DEFAULT_PRIMARY_NAME, DEFAULT_REPLY_DELAY_MS, DEFAULT_SECONDARY_NAME,
    DEFAULT_TIMESTAMP_FORMAT, DEFAULT_TITLE,
};
use crate::core::message::Participant;

/// Per-session settings resolved from config and command-line overrides.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub primary_name: String,
    pub secondary_name: String,
    pub timestamp_format: String,
    pub reply_delay: Duration,
    pub title: String,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            primary_name: DEFAULT_PRIMARY_NAME.to_string(),
            secondary_name: DEFAULT_SECONDARY_NAME.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SessionContext {
    pub fn from_config(config: &Config, reply_delay_override: Option<u64>) -> Self {
        let defaults = Self::default();
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let delay_ms = reply_delay_override
            .or(config.reply_delay_ms)
            .unwrap_or(DEFAULT_REPLY_DELAY_MS);

        Self {
            primary_name: non_blank(&config.primary_name).unwrap_or(defaults.primary_name),
            secondary_name: non_blank(&config.secondary_name).unwrap_or(defaults.secondary_name),
            timestamp_format: non_blank(&config.timestamp_format)
                .unwrap_or(defaults.timestamp_format),
            reply_delay: Duration::from_millis(delay_ms),
            title: non_blank(&config.title).unwrap_or(defaults.title),
        }
    }

    pub fn display_name(&self, participant: Participant) -> &str {
        match participant {
            Participant::Primary => &self.primary_name,
            Participant::Secondary => &self.secondary_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulation_parameters() {
        let session = SessionContext::from_config(&Config::default(), None);
        assert_eq!(session.primary_name, "User1");
        assert_eq!(session.secondary_name, "User2");
        assert_eq!(session.reply_delay, Duration::from_millis(1000));
        assert_eq!(session.title, "Chat App");
        assert_eq!(session.display_name(Participant::Secondary), "User2");
    }

    #[test]
    fn cli_override_beats_config() {
        let config = Config {
            reply_delay_ms: Some(250),
            primary_name: Some("Ada".into()),
            secondary_name: Some("   ".into()),
            ..Default::default()
        };
        let session = SessionContext::from_config(&config, Some(10));
        assert_eq!(session.reply_delay, Duration::from_millis(10));
        assert_eq!(session.display_name(Participant::Primary), "Ada");
        assert_eq!(session.display_name(Participant::Secondary), "User2");

        let session = SessionContext::from_config(&config, None);
        assert_eq!(session.reply_delay, Duration::from_millis(250));
    }
}
