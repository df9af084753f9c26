//! Screen chrome around the document.

use sinew_style::scheme::ColorScheme;
use sinew_style::types::Color;

/// Content color of the platform status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    /// Light icons and text, for dark backgrounds.
    LightContent,
    /// Dark icons and text, for light backgrounds.
    DarkContent,
}

impl StatusBarStyle {
    /// The style that stays legible under a scheme.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => StatusBarStyle::LightContent,
            ColorScheme::Light => StatusBarStyle::DarkContent,
        }
    }
}

/// Status bar settings for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chrome {
    pub status_bar: StatusBarStyle,
    /// Status bar background, matching the document background.
    pub background: Color,
}

impl Chrome {
    /// Chrome for a scheme and document background.
    pub fn new(scheme: ColorScheme, background: Color) -> Self {
        Self {
            status_bar: StatusBarStyle::for_scheme(scheme),
            background,
        }
    }
}
