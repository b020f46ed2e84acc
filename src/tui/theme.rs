//! # Theme
//!
//! Styles for every widget, built once from `[theme]` config and handed to
//! components as props. Unparseable colors fall back to the defaults with a
//! warning in the log.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub item_fg: Color,
    pub cursor_fg: Color,
    pub border_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected_fg: Color::Indexed(0),
            selected_bg: Color::Indexed(63),
            item_fg: Color::Indexed(212),
            cursor_fg: Color::Indexed(212),
            border_fg: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Self::default();
        Self {
            selected_fg: parse_or(config.selected_fg.as_deref(), defaults.selected_fg),
            selected_bg: parse_or(config.selected_bg.as_deref(), defaults.selected_bg),
            item_fg: parse_or(config.item_fg.as_deref(), defaults.item_fg),
            cursor_fg: parse_or(config.cursor_fg.as_deref(), defaults.cursor_fg),
            border_fg: parse_or(config.border_fg.as_deref(), defaults.border_fg),
        }
    }

    pub fn selected_item(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }

    pub fn item(&self) -> Style {
        Style::default().fg(self.item_fg)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border_fg)
    }

    pub fn cursor(&self) -> Style {
        Style::default().fg(self.cursor_fg)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }
}

fn parse_or(value: Option<&str>, default: Color) -> Color {
    let Some(value) = value else {
        return default;
    };
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        warn!("Unknown theme color '{}', using {:?}", value, default);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gives_defaults() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::default());
    }

    #[test]
    fn test_parses_names_hex_and_indices() {
        let config = ThemeConfig {
            selected_fg: Some("white".into()),
            selected_bg: Some("#102030".into()),
            item_fg: Some("42".into()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.selected_fg, Color::White);
        assert_eq!(theme.selected_bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.item_fg, Color::Indexed(42));
        assert_eq!(theme.cursor_fg, Theme::default().cursor_fg);
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            border_fg: Some("not-a-color".into()),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).border_fg, Theme::default().border_fg);
    }
}
