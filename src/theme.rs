use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme built from configuration. Later calls are ignored.
pub fn init(config: &ThemeConfig) {
    let _ = THEME.set(config.to_theme());
}

/// Get the active theme (default until [`init`] runs).
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

// Const fallbacks used in places that need compile-time styles
pub const DIM_STYLE: Style = Style::new().fg(Color::DarkGray);
pub const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub today: Style,
    pub selected: Style,
    pub header: Style,
    pub weekend: Style,
    pub dim: Style,
    pub border: Style,
    pub focus_border: Style,
    pub status: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Yellow),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            weekend: Style::default().fg(Color::LightBlue),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            focus_border: Style::default().fg(Color::Cyan),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            highlight: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        }
    }
}

/// Colours a preset is built from; every style derives from these.
struct Palette {
    name: &'static str,
    today: (u8, u8, u8),
    selected: (u8, u8, u8),
    text: (u8, u8, u8),
    weekend: (u8, u8, u8),
    dim: (u8, u8, u8),
    border: (u8, u8, u8),
    panel: (u8, u8, u8),
}

const PALETTES: [Palette; 3] = [
    Palette {
        name: "dracula",
        today: (189, 147, 249),
        selected: (139, 233, 253),
        text: (248, 248, 242),
        weekend: (255, 121, 198),
        dim: (98, 114, 164),
        border: (68, 71, 90),
        panel: (68, 71, 90),
    },
    Palette {
        name: "gruvbox",
        today: (250, 189, 47),
        selected: (131, 165, 152),
        text: (235, 219, 178),
        weekend: (211, 134, 155),
        dim: (146, 131, 116),
        border: (102, 92, 84),
        panel: (80, 73, 69),
    },
    Palette {
        name: "nord",
        today: (235, 203, 139),
        selected: (136, 192, 208),
        text: (229, 233, 240),
        weekend: (129, 161, 193),
        dim: (76, 86, 106),
        border: (67, 76, 94),
        panel: (67, 76, 94),
    },
];

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

impl Theme {
    /// Built-in preset by name; unknown names give the default theme.
    pub fn preset(name: &str) -> Self {
        PALETTES
            .iter()
            .find(|p| p.name == name)
            .map_or_else(Self::default, Self::from_palette)
    }

    fn from_palette(p: &Palette) -> Self {
        let on = |bg| Style::default().fg(Color::Black).bg(rgb(bg));
        Self {
            name: p.name.to_string(),
            today: on(p.today),
            selected: on(p.selected),
            header: Style::default().fg(rgb(p.text)).add_modifier(Modifier::BOLD),
            weekend: Style::default().fg(rgb(p.weekend)),
            dim: Style::default().fg(rgb(p.dim)),
            border: Style::default().fg(rgb(p.border)),
            focus_border: Style::default().fg(rgb(p.selected)),
            status: Style::default().fg(rgb(p.text)).bg(rgb(p.panel)),
            highlight: Style::default().bg(rgb(p.panel)).add_modifier(Modifier::BOLD),
        }
    }
}

// ── TOML config types ──

/// `[theme]` table of the config file: a preset plus per-colour overrides.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub weekend_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub highlight_bg: Option<String>,
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        // Override individual colors
        if let Some(c) = self.today_fg.as_deref().and_then(parse_color) {
            theme.today = theme.today.fg(c);
        }
        if let Some(c) = self.today_bg.as_deref().and_then(parse_color) {
            theme.today = theme.today.bg(c);
        }
        if let Some(c) = self.selected_fg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.fg(c);
        }
        if let Some(c) = self.selected_bg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = self.header_fg.as_deref().and_then(parse_color) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = self.weekend_fg.as_deref().and_then(parse_color) {
            theme.weekend = theme.weekend.fg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = self.highlight_bg.as_deref().and_then(parse_color) {
            theme.highlight = theme.highlight.bg(c);
        }

        theme
    }
}

/// Colour for an event-data colour string; unknown strings draw in the
/// terminal's default colour.
pub fn event_color(s: &str) -> Color {
    parse_color(s).unwrap_or(Color::Reset)
}

/// Parse a color string: hex "#rrggbb" or "#rgb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return match hex.len() {
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, i) in rgb.iter_mut().zip(0..3) {
                    let nibble = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
                    *slot = nibble * 17;
                }
                Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
            }
            _ => None,
        };
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color(" #000 "), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_color("#0f8"), Some(Color::Rgb(0, 255, 136)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn named_colors_and_unknowns() {
        assert_eq!(parse_color("LightBlue"), Some(Color::LightBlue));
        assert_eq!(event_color("tomato"), Color::Reset);
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config = ThemeConfig {
            preset: Some("nord".into()),
            today_bg: Some("#102030".into()),
            ..ThemeConfig::default()
        };
        let theme = config.to_theme();

        assert_eq!(theme.name, "nord");
        assert_eq!(theme.today.bg, Some(Color::Rgb(16, 32, 48)));
    }

    #[test]
    fn presets_by_name() {
        assert_eq!(Theme::preset("gruvbox").today.bg, Some(Color::Rgb(250, 189, 47)));
        assert_eq!(
            Theme::preset("dracula").focus_border.fg,
            Theme::preset("dracula").selected.bg
        );
        assert_eq!(Theme::preset("solarized").name, "default");
    }
}
