//! Application theming backed by the Catppuccin palettes.

use catppuccin::PALETTE;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Convert a catppuccin color to a ratatui color.
const fn palette_color(c: &catppuccin::Color) -> Color {
    Color::Rgb(c.rgb.r, c.rgb.g, c.rgb.b)
}

/// Color set used across the UI.
///
/// Holds plain color values so the UI stays independent of any specific
/// palette crate. Use the flavor constructors or [`theme_from_name`].
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub base: Color,
    pub crust: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub text: Color,
    pub subtext0: Color,
    pub peach: Color,
    pub green: Color,
    pub blue: Color,
    pub mauve: Color,
    pub lavender: Color,
    pub border_type: BorderType,
}

impl Theme {
    const fn from_catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let c = &flavor.colors;
        Self {
            base: palette_color(&c.base),
            crust: palette_color(&c.crust),
            surface0: palette_color(&c.surface0),
            surface1: palette_color(&c.surface1),
            text: palette_color(&c.text),
            subtext0: palette_color(&c.subtext0),
            peach: palette_color(&c.peach),
            green: palette_color(&c.green),
            blue: palette_color(&c.blue),
            mauve: palette_color(&c.mauve),
            lavender: palette_color(&c.lavender),
            border_type: BorderType::Rounded,
        }
    }

    /// Catppuccin Mocha (dark).
    #[must_use]
    pub fn catppuccin_mocha() -> Self {
        Self::from_catppuccin(&PALETTE.mocha)
    }

    /// Catppuccin Latte (light).
    #[must_use]
    pub fn catppuccin_latte() -> Self {
        Self::from_catppuccin(&PALETTE.latte)
    }

    /// Catppuccin Frappé (dark).
    #[must_use]
    pub fn catppuccin_frappe() -> Self {
        Self::from_catppuccin(&PALETTE.frappe)
    }

    /// Catppuccin Macchiato (dark).
    #[must_use]
    pub fn catppuccin_macchiato() -> Self {
        Self::from_catppuccin(&PALETTE.macchiato)
    }
}

/// Theme names shown in the theme selector, in display order.
#[must_use]
pub fn available_themes() -> Vec<&'static str> {
    vec![
        "Catppuccin Mocha",
        "Catppuccin Macchiato",
        "Catppuccin Frappé",
        "Catppuccin Latte",
    ]
}

/// Look up a theme by display name, falling back to Mocha.
#[must_use]
pub fn theme_from_name(name: &str) -> Theme {
    match name {
        "Catppuccin Latte" => Theme::catppuccin_latte(),
        "Catppuccin Frappé" => Theme::catppuccin_frappe(),
        "Catppuccin Macchiato" => Theme::catppuccin_macchiato(),
        _ => Theme::catppuccin_mocha(),
    }
}
