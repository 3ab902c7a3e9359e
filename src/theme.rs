use catppuccin::PALETTE;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Convert a catppuccin color to a ratatui color.
const fn catppuccin_to_color(c: &catppuccin::Color) -> Color {
    Color::Rgb(c.rgb.r, c.rgb.g, c.rgb.b)
}

/// Application theme.
///
/// Holds color values directly, independent of any specific palette. Use
/// the factory functions like `catppuccin_mocha()` for pre-configured
/// themes.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub base: Color,

    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    /// Accent used for titles, the active tab and the spinner.
    pub accent: Color,
    /// Focus highlight for interactive borders.
    pub highlight: Color,
    pub error: Color,

    pub border_type: BorderType,
}

impl Theme {
    const fn from_catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let c = &flavor.colors;
        Self {
            base: catppuccin_to_color(&c.base),
            text: catppuccin_to_color(&c.text),
            subtext: catppuccin_to_color(&c.subtext1),
            muted: catppuccin_to_color(&c.overlay1),
            accent: catppuccin_to_color(&c.peach),
            highlight: catppuccin_to_color(&c.lavender),
            error: catppuccin_to_color(&c.red),
            border_type: BorderType::Rounded,
        }
    }

    /// Catppuccin Mocha theme (dark).
    #[must_use]
    pub const fn catppuccin_mocha() -> Self {
        Self::from_catppuccin(&PALETTE.mocha)
    }

    /// Catppuccin Latte theme (light).
    #[must_use]
    pub const fn catppuccin_latte() -> Self {
        Self::from_catppuccin(&PALETTE.latte)
    }

    /// Catppuccin Frappé theme (dark).
    #[must_use]
    pub const fn catppuccin_frappe() -> Self {
        Self::from_catppuccin(&PALETTE.frappe)
    }

    /// Catppuccin Macchiato theme (dark).
    #[must_use]
    pub const fn catppuccin_macchiato() -> Self {
        Self::from_catppuccin(&PALETTE.macchiato)
    }
}

/// Resolve a configured theme name, falling back to Mocha.
pub fn theme_from_name(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "catppuccin latte" => Theme::catppuccin_latte(),
        "catppuccin frappe" | "catppuccin frappé" => Theme::catppuccin_frappe(),
        "catppuccin macchiato" => Theme::catppuccin_macchiato(),
        _ => Theme::catppuccin_mocha(),
    }
}
