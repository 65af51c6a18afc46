use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Truecolor,
    X256,
    X16,
}

/// Detect terminal color depth.
/// Priority: PARLEY_COLOR override -> COLORTERM truecolor/24bit -> TERM *256color -> 16.
pub fn detect_color_depth() -> ColorDepth {
    color_depth_from(
        std::env::var("PARLEY_COLOR").ok().as_deref(),
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn color_depth_from(force: Option<&str>, colorterm: Option<&str>, term: Option<&str>) -> ColorDepth {
    if let Some(force) = force {
        match force.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "24-bit" => return ColorDepth::Truecolor,
            "256" | "x256" | "256color" => return ColorDepth::X256,
            "16" | "ansi" | "x16" => return ColorDepth::X16,
            _ => {}
        }
    }

    if let Some(colorterm) = colorterm {
        let s = colorterm.to_ascii_lowercase();
        if s.contains("truecolor") || s.contains("24bit") {
            return ColorDepth::Truecolor;
        }
    }
    if term.is_some_and(|t| t.to_ascii_lowercase().contains("256color")) {
        return ColorDepth::X256;
    }
    ColorDepth::X16
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a named ANSI color.
pub fn parse_color(spec: &str) -> Option<Color> {
    let lower = spec.trim().to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(inner) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<u8> = inner
            .split([',', ' '])
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<u16>().map(|v| v.min(255) as u8))
            .collect::<Result<_, _>>()
            .ok()?;
        return match parts.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }
    let named = match lower.as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark-gray" | "darkgray" | "dark-grey" => Color::DarkGray,
        "red" => Color::Red,
        "light_red" | "light-red" => Color::LightRed,
        "green" => Color::Green,
        "light_green" | "light-green" => Color::LightGreen,
        "blue" => Color::Blue,
        "light_blue" | "light-blue" => Color::LightBlue,
        "cyan" | "teal" => Color::Cyan,
        "light_cyan" | "light-cyan" => Color::LightCyan,
        "magenta" | "purple" => Color::Magenta,
        "light_magenta" | "light-magenta" | "pink" => Color::LightMagenta,
        "yellow" => Color::Yellow,
        "light_yellow" | "light-yellow" => Color::LightYellow,
        "reset" => Color::Reset,
        _ => return None,
    };
    Some(named)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Map a color to the nearest representable color in the chosen depth.
pub fn quantize_color(color: Color, depth: ColorDepth) -> Color {
    match (color, depth) {
        (Color::Rgb(r, g, b), ColorDepth::X256) => Color::Indexed(rgb_to_cube_index(r, g, b)),
        (Color::Rgb(r, g, b), ColorDepth::X16) => nearest_ansi16(r, g, b),
        (other, _) => other,
    }
}

pub fn quantize_style(mut style: Style, depth: ColorDepth) -> Style {
    if let Some(fg) = style.fg {
        style.fg = Some(quantize_color(fg, depth));
    }
    if let Some(bg) = style.bg {
        style.bg = Some(quantize_color(bg, depth));
    }
    style
}

fn rgb_to_cube_index(r: u8, g: u8, b: u8) -> u8 {
    fn level(c: u8) -> u8 {
        // xterm cube levels: 0, 95, 135, 175, 215, 255
        match c {
            0..=47 => 0,
            48..=114 => 1,
            _ => ((c - 35) / 40).min(5),
        }
    }
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> Color {
    const ANSI16: [(u8, u8, u8, Color); 16] = [
        (0, 0, 0, Color::Black),
        (205, 0, 0, Color::Red),
        (0, 205, 0, Color::Green),
        (205, 205, 0, Color::Yellow),
        (0, 0, 205, Color::Blue),
        (205, 0, 205, Color::Magenta),
        (0, 205, 205, Color::Cyan),
        (192, 192, 192, Color::Gray),
        (128, 128, 128, Color::DarkGray),
        (255, 0, 0, Color::LightRed),
        (0, 255, 0, Color::LightGreen),
        (255, 255, 0, Color::LightYellow),
        (92, 92, 255, Color::LightBlue),
        (255, 0, 255, Color::LightMagenta),
        (0, 255, 255, Color::LightCyan),
        (255, 255, 255, Color::White),
    ];

    let dist = |(rr, gg, bb): (u8, u8, u8)| {
        let dr = i32::from(rr) - i32::from(r);
        let dg = i32::from(gg) - i32::from(g);
        let db = i32::from(bb) - i32::from(b);
        dr * dr + dg * dg + db * db
    };

    ANSI16
        .iter()
        .min_by_key(|(rr, gg, bb, _)| dist((*rr, *gg, *bb)))
        .map(|entry| entry.3)
        .unwrap_or(Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_rgb_and_names() {
        assert_eq!(parse_color("#673AB7"), Some(Color::Rgb(0x67, 0x3a, 0xb7)));
        assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("rgb(1, 2, 300)"), Some(Color::Rgb(1, 2, 255)));
        assert_eq!(parse_color("Teal"), Some(Color::Cyan));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("rgb(1,2)"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn depth_detection_prefers_override() {
        assert_eq!(
            color_depth_from(Some("16"), Some("truecolor"), None),
            ColorDepth::X16
        );
        assert_eq!(
            color_depth_from(None, Some("truecolor"), Some("xterm-256color")),
            ColorDepth::Truecolor
        );
        assert_eq!(
            color_depth_from(None, None, Some("xterm-256color")),
            ColorDepth::X256
        );
        assert_eq!(color_depth_from(None, None, Some("vt100")), ColorDepth::X16);
    }

    #[test]
    fn quantizes_bubble_colors() {
        let purple = Color::Rgb(0x67, 0x3a, 0xb7);
        assert_eq!(quantize_color(purple, ColorDepth::Truecolor), purple);
        assert!(matches!(
            quantize_color(purple, ColorDepth::X256),
            Color::Indexed(_)
        ));
        assert_eq!(
            quantize_color(Color::Rgb(250, 250, 250), ColorDepth::X16),
            Color::White
        );
        assert_eq!(quantize_color(Color::Cyan, ColorDepth::X16), Color::Cyan);
    }
}
