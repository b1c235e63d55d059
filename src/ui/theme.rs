// src/ui/theme.rs
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Built-in color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    TokyoMint,
    Dark,
    Light,
    SolarizedDark,
    SolarizedLight,
    Monokai,
    Dracula,
    Nord,
    GruvboxDark,
    GruvboxLight,
}

/// Colors for every surface the terminal UI paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub panel: Color,
    pub accent: Color,
    pub focus: Color,
    pub error: Color,
}

impl Palette {
    const fn dark(text: Color, muted: Color, accent: Color) -> Self {
        Palette {
            text,
            muted,
            background: Color::Black,
            panel: Color::DarkGray,
            accent,
            focus: Color::Black,
            error: Color::LightRed,
        }
    }

    const fn light(accent: Color) -> Self {
        Palette {
            text: Color::Black,
            muted: Color::DarkGray,
            background: Color::White,
            panel: Color::Gray,
            accent,
            focus: Color::White,
            error: Color::LightRed,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    pub fn bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.panel)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.focus)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).bg(self.panel)
    }
}

impl Theme {
    pub const ALL: [Theme; 10] = [
        Theme::TokyoMint,
        Theme::Dark,
        Theme::Light,
        Theme::SolarizedDark,
        Theme::SolarizedLight,
        Theme::Monokai,
        Theme::Dracula,
        Theme::Nord,
        Theme::GruvboxDark,
        Theme::GruvboxLight,
    ];

    pub fn palette(self) -> Palette {
        match self {
            Theme::TokyoMint => Palette::dark(Color::LightCyan, Color::Cyan, Color::LightGreen),
            Theme::Dark => Palette::dark(Color::White, Color::Gray, Color::LightYellow),
            Theme::Light => Palette::light(Color::LightBlue),
            Theme::SolarizedDark => {
                Palette::dark(Color::LightCyan, Color::Cyan, Color::LightYellow)
            }
            Theme::SolarizedLight => Palette::light(Color::LightBlue),
            Theme::Monokai => Palette::dark(Color::White, Color::Gray, Color::LightMagenta),
            Theme::Dracula => Palette::dark(Color::White, Color::Gray, Color::Magenta),
            Theme::Nord => Palette::dark(Color::Cyan, Color::Blue, Color::LightCyan),
            Theme::GruvboxDark => {
                Palette::dark(Color::LightYellow, Color::Magenta, Color::LightGreen)
            }
            Theme::GruvboxLight => Palette::light(Color::LightGreen),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::TokyoMint => "Tokyo Mint",
            Theme::Dark => "Dark Mode",
            Theme::Light => "Light Mode",
            Theme::SolarizedDark => "Solarized Dark",
            Theme::SolarizedLight => "Solarized Light",
            Theme::Monokai => "Monokai",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = Theme::default();
        for _ in 0..Theme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::TokyoMint);
        assert_eq!(Theme::GruvboxLight.next(), Theme::TokyoMint);
    }

    #[test]
    fn test_light_themes_use_light_background() {
        assert_eq!(Theme::Light.palette().background, Color::White);
        assert_eq!(Theme::Nord.palette().background, Color::Black);
    }

    #[test]
    fn test_theme_names_deserialize() {
        let theme: Theme = serde_json::from_str("\"gruvbox_dark\"").unwrap();
        assert_eq!(theme, Theme::GruvboxDark);
    }
}
