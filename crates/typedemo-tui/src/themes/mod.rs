//! Theme registry and loader
//!
//! Built-in themes with user color overrides from the config file.

mod dracula;
mod monokai;
mod nord;
mod one_dark;

use ratatui::style::Color;
use tracing::warn;
use typedemo_core::config::{ThemeColorOverrides, ThemeConfig};

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => Theme::default(),
        "dracula" => dracula::default(),
        "nord" => nord::default(),
        "one-dark" | "onedark" => one_dark::default(),
        "monokai" => monokai::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            Theme::default()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 6] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.accent, &mut theme.accent),
        (&overrides.emphasis, &mut theme.emphasis),
        (&overrides.selection, &mut theme.selection),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Ignoring invalid color override '{}'", hex),
        }
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#가나").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "vaporwave".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert!(matches!(load_theme(&config).bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                emphasis: Some("#ff0000".to_string()),
                accent: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.emphasis, Color::Rgb(255, 0, 0)));
        assert!(matches!(theme.accent, Color::Rgb(0x88, 0xc0, 0xd0)));
    }
}
