//! Single style rule definition.

use crate::compose::LayoutModifier;
use crate::registry::StyleId;
use crate::scheme::ColorScheme;
use crate::style::AttributeSet;

/// A rule mapping one style identifier to properties.
///
/// A rule without a scheme contributes to the base attributes of its
/// identifier. A rule with a scheme comes from a `prefers-color-scheme`
/// block and only applies while that scheme is active.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The identifier this rule defines.
    pub id: StyleId,
    /// Scheme the rule is restricted to, if any.
    pub scheme: Option<ColorScheme>,
    /// The properties to apply.
    pub properties: AttributeSet,
    /// Layout modifier declared by the rule.
    pub modifier: Option<LayoutModifier>,
    /// Source order.
    pub order: u32,
}

impl StyleRule {
    /// Create a base rule.
    pub fn new(id: impl Into<StyleId>, properties: AttributeSet, order: u32) -> Self {
        Self {
            id: id.into(),
            scheme: None,
            properties,
            modifier: None,
            order,
        }
    }

    /// Restrict the rule to a color scheme.
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Attach a layout modifier.
    pub fn with_modifier(mut self, modifier: LayoutModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Whether the rule only applies under one scheme.
    pub fn is_scheme_variant(&self) -> bool {
        self.scheme.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::types::Color;

    #[test]
    fn rule_creation() {
        let props = Style::new().color(Color::BLACK).build();
        let rule = StyleRule::new("sectionTitleColor", props, 3);

        assert_eq!(rule.id.as_str(), "sectionTitleColor");
        assert_eq!(rule.order, 3);
        assert!(!rule.is_scheme_variant());
    }

    #[test]
    fn scheme_variant() {
        let rule =
            StyleRule::new("background", AttributeSet::new(), 0).with_scheme(ColorScheme::Dark);
        assert!(rule.is_scheme_variant());
        assert_eq!(rule.scheme, Some(ColorScheme::Dark));
    }
}
