use ratatui::style::Color;

use crate::domain::{dataset::Dataset, route::Route};

/// Accent of the home page (slate).
pub const HOME_ACCENT: Color = Color::Rgb(0x47, 0x55, 0x69);
/// Accent of a technology page whose alternative is missing.
pub const FALLBACK_ACCENT: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Colours the chrome uses for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTheme {
    pub accent: Color,
    pub on_accent: Color,
}

impl PageTheme {
    pub fn for_route(route: Route, dataset: &Dataset) -> Self {
        let accent = match route {
            Route::Home => HOME_ACCENT,
            _ => route
                .resolve(dataset)
                .map_or(FALLBACK_ACCENT, |alt| alt.color.into()),
        };
        Self {
            accent,
            on_accent: contrast_text(accent),
        }
    }
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            // ITU-R BT.601 luma
            let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
            if luma > 150.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}
