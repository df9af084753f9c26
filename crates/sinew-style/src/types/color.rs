//! Color and font weight values.

use std::fmt;

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Components are stored in the 0.0-1.0 range.
///
/// # Example
///
/// ```
/// use sinew_style::types::Color;
///
/// let banner = Color::from_hex("#BCCDA9").unwrap();
/// assert_eq!(banner, Color::from_rgb8(0xBC, 0xCD, 0xA9));
///
/// let text = Color::from_hex("#333").unwrap();
/// assert_eq!(text.to_hex(), "#333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components (0-255 range).
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`, with or without
    /// the leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        let short = |index: usize| channel(index..index + 1).map(|v| v * 17);

        match hex.len() {
            3 => Some(Self::from_rgb8(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::from_rgba8(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Look up a CSS named color.
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            "lightgray" | "lightgrey" => Self::LIGHT_GRAY,
            "darkgray" | "darkgrey" => Self::DARK_GRAY,
            "whitesmoke" => Self::WHITE_SMOKE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            _ => return None,
        };
        Some(color)
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Check whether the color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Convert to 8-bit RGBA components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }

    /// Format as a hex string (`#RRGGBB`, or `#RRGGBBAA` when translucent).
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    // Named colors (CSS values)
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const GRAY: Self = Self::from_rgb8(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::from_rgb8(211, 211, 211);
    pub const DARK_GRAY: Self = Self::from_rgb8(169, 169, 169);
    pub const WHITE_SMOKE: Self = Self::from_rgb8(245, 245, 245);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Font weight, ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Thin weight (100).
    pub const THIN: Self = Self(100);
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);
    /// Black/heavy weight (900).
    pub const BLACK: Self = Self(900);

    /// Create a font weight from a numeric value, clamped to 100-900.
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parse a CSS keyword weight.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "thin" => Some(Self::THIN),
            "light" | "lighter" => Some(Self::LIGHT),
            "normal" | "regular" => Some(Self::NORMAL),
            "medium" => Some(Self::MEDIUM),
            "semibold" | "semi-bold" => Some(Self::SEMI_BOLD),
            "bold" | "bolder" => Some(Self::BOLD),
            "black" => Some(Self::BLACK),
            _ => None,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u16> for FontWeight {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(Color::from_hex("#333"), Some(Color::from_rgb8(0x33, 0x33, 0x33)));
        assert_eq!(Color::from_hex("f5f5f5"), Some(Color::WHITE_SMOKE));
        assert_eq!(
            Color::from_hex("#00000080"),
            Some(Color::from_rgba8(0, 0, 0, 0x80))
        );
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn named_colors() {
        assert_eq!(Color::named("LightGray"), Some(Color::LIGHT_GRAY));
        assert_eq!(Color::named("grey"), Some(Color::GRAY));
        assert_eq!(Color::named("chartreuse"), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_rgb8(83, 104, 120).to_hex(), "#536878");
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn font_weight_clamps() {
        assert_eq!(FontWeight::new(1000), FontWeight::BLACK);
        assert_eq!(FontWeight::new(50), FontWeight::THIN);
        assert_eq!(FontWeight::from_css("bold"), Some(FontWeight::BOLD));
    }
}
