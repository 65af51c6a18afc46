//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{
    primary_name_handler, secondary_name_handler, timestamp_format_handler, title_handler,
    ReplyDelayHandler, ThemeHandler,
};
use super::SettingHandler;
use crate::core::config::data::Config;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in display order for `parley set` output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        // Register handlers in display order
        registry.register(Box::new(ThemeHandler));
        registry.register(Box::new(primary_name_handler()));
        registry.register(Box::new(secondary_name_handler()));
        registry.register(Box::new(ReplyDelayHandler));
        registry.register(Box::new(timestamp_format_handler()));
        registry.register(Box::new(title_handler()));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    /// Get a handler by key.
    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    /// Get all keys in sorted order.
    pub fn keys_sorted(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.handlers.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Get all keys in display order.
    pub fn keys_display_order(&self) -> &[&'static str] {
        &self.display_order
    }

    /// Current value of every setting, one per line, in display order.
    pub fn format_all(&self, config: &Config) -> String {
        let mut out = String::from("Current configuration:\n");
        for key in &self.display_order {
            if let Some(handler) = self.get(key) {
                out.push_str(&handler.format(config));
                out.push('\n');
            }
        }
        if !config.custom_themes.is_empty() {
            out.push_str(&format!("  custom-themes: {}\n", config.custom_themes.len()));
        }
        out
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
