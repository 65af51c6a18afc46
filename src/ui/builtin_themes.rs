use crate::core::config::CustomTheme;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
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

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

pub fn load_builtin_themes() -> Vec<ThemeSpec> {
    const CONFIG_CONTENT: &str = include_str!("../builtin_themes.toml");
    let config: BuiltinThemesConfig =
        toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtin_themes.toml");
    config.themes
}

pub fn find_builtin_theme(id: &str) -> Option<ThemeSpec> {
    load_builtin_themes()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
}

/// Convert a `CustomTheme` from config into a `ThemeSpec` compatible with UI theming.
pub fn theme_spec_from_custom(ct: &CustomTheme) -> ThemeSpec {
    ThemeSpec {
        id: ct.id.clone(),
        display_name: ct.display_name.clone(),
        background: ct.background.clone(),
        header: ct.header.clone(),
        header_text: ct.header_text.clone(),
        primary_bubble: ct.primary_bubble.clone(),
        secondary_bubble: ct.secondary_bubble.clone(),
        bubble_text: ct.bubble_text.clone(),
        timestamp: ct.timestamp.clone(),
        border: ct.border.clone(),
        input_text: ct.input_text.clone(),
        placeholder: ct.placeholder.clone(),
        send_hint: ct.send_hint.clone(),
    }
}
