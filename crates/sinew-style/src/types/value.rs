//! Length and flex layout value types.
//!
//! # Example
//!
//! ```
//! use sinew_style::types::{EdgeValues, LengthValue};
//!
//! let width = LengthValue::px(400.0);
//! let half = LengthValue::percent(50.0);
//!
//! assert_eq!(width.to_px(1000.0), Some(400.0));
//! assert_eq!(half.to_px(300.0), Some(150.0));
//! assert_eq!(LengthValue::Auto.to_px(300.0), None);
//!
//! // Horizontal padding shorthand
//! let padding = EdgeValues::symmetric(LengthValue::Zero, LengthValue::px(24.0));
//! assert_eq!(padding.left, LengthValue::px(24.0));
//! ```

/// Length values with the units a stylesheet may use.
///
/// Unitless numbers in a stylesheet are density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the containing block.
    Percent(f32),
    /// Automatic sizing (context-dependent).
    #[default]
    Auto,
    /// Zero length.
    Zero,
}

impl LengthValue {
    /// Create a pixel value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Resolve to pixels given the containing block size.
    ///
    /// Returns `None` for `Auto`, which only the host can resolve.
    pub fn to_px(&self, parent_size: f32) -> Option<f32> {
        match self {
            LengthValue::Px(v) => Some(*v),
            LengthValue::Percent(v) => Some((v / 100.0) * parent_size),
            LengthValue::Zero => Some(0.0),
            LengthValue::Auto => None,
        }
    }

    /// Check if this is an auto value.
    pub fn is_auto(&self) -> bool {
        matches!(self, LengthValue::Auto)
    }

    /// Check if this is zero or would resolve to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            LengthValue::Zero => true,
            LengthValue::Px(v) | LengthValue::Percent(v) => *v == 0.0,
            LengthValue::Auto => false,
        }
    }
}

impl From<f32> for LengthValue {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

/// Edge values for the margin and padding shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeValues {
    /// Top edge value.
    pub top: LengthValue,
    /// Right edge value.
    pub right: LengthValue,
    /// Bottom edge value.
    pub bottom: LengthValue,
    /// Left edge value.
    pub left: LengthValue,
}

impl EdgeValues {
    /// Create uniform edge values.
    pub fn uniform(value: LengthValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub fn symmetric(vertical: LengthValue, horizontal: LengthValue) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(
        top: LengthValue,
        right: LengthValue,
        bottom: LengthValue,
        left: LengthValue,
    ) -> Self {
        Self { top, right, bottom, left }
    }

    /// Expand 1-4 shorthand values the way CSS does.
    pub fn from_shorthand(values: &[LengthValue]) -> Option<Self> {
        match *values {
            [all] => Some(Self::uniform(all)),
            [vertical, horizontal] => Some(Self::symmetric(vertical, horizontal)),
            [top, horizontal, bottom] => Some(Self::new(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Some(Self::new(top, right, bottom, left)),
            _ => None,
        }
    }
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// Children are laid out left to right.
    Row,
    /// Children are laid out top to bottom.
    #[default]
    Column,
}

impl FlexDirection {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "row" => Some(Self::Row),
            "column" => Some(Self::Column),
            _ => None,
        }
    }
}

/// Distribution of children along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flex-start" | "start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" | "end" => Some(Self::FlexEnd),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            _ => None,
        }
    }
}

/// Alignment of children along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    #[default]
    Stretch,
    Baseline,
}

impl AlignItems {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flex-start" | "start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" | "end" => Some(Self::FlexEnd),
            "stretch" => Some(Self::Stretch),
            "baseline" => Some(Self::Baseline),
            _ => None,
        }
    }
}
