use crate::core::config::Config;
use crate::core::constants::DEFAULT_THEME_ID;
use crate::ui::builtin_themes::{find_builtin_theme, theme_spec_from_custom, ThemeSpec};
use crate::utils::color::{parse_color, quantize_color, quantize_style, ColorDepth};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Chrome
    pub header_style: Style,
    pub border_style: Style,

    // Message bubbles
    pub primary_bubble_style: Style,
    pub secondary_bubble_style: Style,
    pub timestamp_style: Style,

    // Input row
    pub input_text_style: Style,
    pub placeholder_style: Style,
    pub send_hint_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    /// The Material-inspired palette: deep purple and pink bubbles on grey.
    pub fn default_theme() -> Self {
        if let Some(spec) = find_builtin_theme(DEFAULT_THEME_ID) {
            return Self::from_spec(&spec);
        }
        // Fallback palette-based theme
        Theme {
            background_color: Color::Reset,
            header_style: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::Gray),
            primary_bubble_style: Style::default().bg(Color::Magenta).fg(Color::White),
            secondary_bubble_style: Style::default().bg(Color::LightMagenta).fg(Color::White),
            timestamp_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default(),
            placeholder_style: Style::default().fg(Color::DarkGray),
            send_hint_style: Style::default().fg(Color::Magenta),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Resolve a theme id against custom themes first, then built-ins.
    /// Unknown ids fall back to the default theme.
    pub fn from_name(name: &str, config: &Config) -> Self {
        if let Some(custom) = config.get_custom_theme(name) {
            return Self::from_spec(&theme_spec_from_custom(custom));
        }
        match find_builtin_theme(name) {
            Some(spec) => Self::from_spec(&spec),
            None => Self::default_theme(),
        }
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Reset);

        let bubble_text = parse_style(&spec.bubble_text);
        let bubble = |color: &Option<String>, fallback: Color| {
            let bg = color.as_deref().and_then(parse_color).unwrap_or(fallback);
            bubble_text.bg(bg)
        };

        let header_bg = spec
            .header
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Blue);

        Theme {
            background_color,
            header_style: parse_style(&spec.header_text).bg(header_bg),
            border_style: parse_style(&spec.border),
            primary_bubble_style: bubble(&spec.primary_bubble, Color::Magenta),
            secondary_bubble_style: bubble(&spec.secondary_bubble, Color::LightMagenta),
            timestamp_style: parse_style(&spec.timestamp),
            input_text_style: parse_style(&spec.input_text),
            placeholder_style: parse_style(&spec.placeholder),
            send_hint_style: parse_style(&spec.send_hint),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn quantized(mut self, depth: ColorDepth) -> Self {
        if depth == ColorDepth::Truecolor {
            return self;
        }
        self.background_color = quantize_color(self.background_color, depth);
        for style in [
            &mut self.header_style,
            &mut self.border_style,
            &mut self.primary_bubble_style,
            &mut self.secondary_bubble_style,
            &mut self.timestamp_style,
            &mut self.input_text_style,
            &mut self.placeholder_style,
            &mut self.send_hint_style,
            &mut self.input_cursor_style,
        ] {
            *style = quantize_style(*style, depth);
        }
        self
    }
}

fn parse_style(spec: &Option<String>) -> Style {
    let mut style = Style::default();
    let Some(spec) = spec else {
        return style;
    };
    for tok in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(color) = parse_color(tok) {
            style = style.fg(color);
            continue;
        }
        match tok.to_ascii_lowercase().as_str() {
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "reversed" => style = style.add_modifier(Modifier::REVERSED),
            _ => {}
        }
    }
    style
}
