//! Registry entries.

use crate::compose::LayoutModifier;
use crate::scheme::ColorScheme;
use crate::style::AttributeSet;

/// The attributes stored under one style identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleEntry {
    /// Attributes that apply under every scheme.
    pub base: AttributeSet,
    /// Overrides applied under the light scheme.
    pub light: AttributeSet,
    /// Overrides applied under the dark scheme.
    pub dark: AttributeSet,
    /// Layout modifier this entry carries.
    pub modifier: Option<LayoutModifier>,
}

impl StyleEntry {
    /// Create an entry with only base attributes.
    pub fn new(base: AttributeSet) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Create an entry whose attributes depend entirely on the scheme.
    pub fn adaptive(light: AttributeSet, dark: AttributeSet) -> Self {
        Self {
            light,
            dark,
            ..Self::default()
        }
    }

    /// Attach a layout modifier.
    pub fn with_modifier(mut self, modifier: LayoutModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// The override set for a scheme.
    pub fn variant(&self, scheme: ColorScheme) -> &AttributeSet {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub(crate) fn variant_mut(&mut self, scheme: ColorScheme) -> &mut AttributeSet {
        match scheme {
            ColorScheme::Light => &mut self.light,
            ColorScheme::Dark => &mut self.dark,
        }
    }

    /// Whether either scheme overrides anything.
    pub fn has_scheme_override(&self) -> bool {
        !self.light.is_empty() || !self.dark.is_empty()
    }

    /// Base attributes with the scheme override applied.
    pub fn resolve(&self, scheme: ColorScheme) -> AttributeSet {
        let mut attrs = self.base.clone();
        attrs.merge(self.variant(scheme));
        attrs
    }
}
