//! Color scheme resolution.
//!
//! A render pass asks its [`SchemeSource`] for the current scheme exactly once
//! and threads the answer through composition. Sources never cache: calling
//! [`SchemeSource::color_scheme`] again re-queries the environment.
//!
//! ```
//! use sinew_style::scheme::{ColorScheme, FixedScheme, SchemeSource};
//!
//! let source = FixedScheme(ColorScheme::Dark);
//! assert!(source.color_scheme().is_dark());
//!
//! // Any closure works as a source too.
//! let toggled = || ColorScheme::Light;
//! assert_eq!(toggled.color_scheme(), ColorScheme::Light);
//! ```

use std::fmt;

/// The display preference of the host, light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ColorScheme {
    /// Returns true if this is the dark color scheme.
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Returns true if this is the light color scheme.
    pub fn is_light(&self) -> bool {
        matches!(self, ColorScheme::Light)
    }

    /// Parse the value of a `prefers-color-scheme` media feature.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The stylesheet keyword for this scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can report the current color scheme.
pub trait SchemeSource {
    /// Query the current color scheme.
    fn color_scheme(&self) -> ColorScheme;
}

impl<F> SchemeSource for F
where
    F: Fn() -> ColorScheme,
{
    fn color_scheme(&self) -> ColorScheme {
        self()
    }
}

/// A source that always reports the same scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedScheme(pub ColorScheme);

impl SchemeSource for FixedScheme {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}

/// The operating system's appearance setting.
///
/// With the `system-theme` feature disabled, or when the platform has no
/// preference, this reports [`ColorScheme::Light`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemScheme;

impl SchemeSource for SystemScheme {
    #[cfg(feature = "system-theme")]
    fn color_scheme(&self) -> ColorScheme {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorScheme::Dark,
            dark_light::Mode::Light => ColorScheme::Light,
            dark_light::Mode::Default => ColorScheme::Light,
        }
    }

    #[cfg(not(feature = "system-theme"))]
    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }
}
