use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomTheme {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub header: Option<String>,
    pub header_text: Option<String>,
    pub primary_bubble: Option<String>,
    pub secondary_bubble: Option<String>,
    pub bubble_text: Option<String>,
    pub timestamp: Option<String>,
    pub border: Option<String>,
    pub input_text: Option<String>,
    pub placeholder: Option<String>,
    pub send_hint: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// UI theme id (e.g., "material", "dark", "light")
    pub theme: Option<String>,
    /// Display name of the person typing
    pub primary_name: Option<String>,
    /// Display name of the simulated counterpart
    pub secondary_name: Option<String>,
    /// Delay before the simulated reply, in milliseconds
    pub reply_delay_ms: Option<u64>,
    /// chrono strftime format for message timestamps
    pub timestamp_format: Option<String>,
    /// Header title
    pub title: Option<String>,
    #[serde(default)]
    pub custom_themes: Vec<CustomTheme>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn get_custom_theme(&self, id: &str) -> Option<&CustomTheme> {
        self.custom_themes
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(id))
    }

    pub fn list_custom_themes(&self) -> Vec<&CustomTheme> {
        self.custom_themes.iter().collect()
    }
}
