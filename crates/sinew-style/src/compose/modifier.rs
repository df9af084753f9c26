//! Layout modifiers carried by registry entries.

use std::fmt;

/// How an entry changes the geometry of an element.
///
/// Modifiers are applied in a fixed stage order no matter where their
/// identifiers appear in a style list: base and `Natural` first, then
/// `Square`, then the alignment offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutModifier {
    /// Full-width base size.
    Natural,
    /// Width forced equal to height.
    Square,
    /// Offset by a right margin.
    LeftAligned,
    /// Offset by a left margin.
    RightAligned,
}

impl LayoutModifier {
    /// Stage at which this modifier is applied.
    pub fn stage(self) -> u8 {
        match self {
            LayoutModifier::Natural => 0,
            LayoutModifier::Square => 1,
            LayoutModifier::LeftAligned | LayoutModifier::RightAligned => 2,
        }
    }

    /// Whether this is one of the alignment modifiers.
    pub fn is_alignment(self) -> bool {
        self.stage() == 2
    }

    /// Parse the value of a `-sinew-layout` declaration.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "natural" => Some(Self::Natural),
            "square" => Some(Self::Square),
            "left" | "left-aligned" => Some(Self::LeftAligned),
            "right" | "right-aligned" => Some(Self::RightAligned),
            _ => None,
        }
    }

    /// The stylesheet keyword for this modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutModifier::Natural => "natural",
            LayoutModifier::Square => "square",
            LayoutModifier::LeftAligned => "left",
            LayoutModifier::RightAligned => "right",
        }
    }
}

/// Stage of an entry with an optional modifier; plain entries share stage 0.
pub(crate) fn stage_of(modifier: Option<LayoutModifier>) -> u8 {
    modifier.map_or(0, LayoutModifier::stage)
}

impl fmt::Display for LayoutModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
