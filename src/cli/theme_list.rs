use crate::core::config::data::Config;
use crate::core::constants::DEFAULT_THEME_ID;
use crate::ui::builtin_themes::load_builtin_themes;

pub fn format_theme_list(config: &Config) -> String {
    let current_id_for_mark = config.theme.as_deref().unwrap_or(DEFAULT_THEME_ID);
    let current_display = config
        .theme
        .clone()
        .unwrap_or_else(|| format!("(default: {DEFAULT_THEME_ID})"));
    let mark = |id: &str| {
        if id.eq_ignore_ascii_case(current_id_for_mark) {
            "*"
        } else {
            " "
        }
    };

    let mut out = String::from("Available themes:\n\nBuilt-in:\n");
    for t in load_builtin_themes() {
        out.push_str(&format!("  {} {} - {}\n", mark(&t.id), t.id, t.display_name));
    }

    let customs = config.list_custom_themes();
    if !customs.is_empty() {
        out.push_str("\nCustom:\n");
        for t in customs {
            out.push_str(&format!("  {} {} - {}\n", mark(&t.id), t.id, t.display_name));
        }
    }

    out.push_str(&format!("\nCurrent: {current_display}\n"));
    out
}

pub fn list_themes(config: &Config) {
    print!("{}", format_theme_list(config));
}
