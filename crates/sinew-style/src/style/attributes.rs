//! Attribute set definition.

use crate::types::{
    AlignItems, Color, EdgeValues, FlexDirection, FontWeight, JustifyContent, LengthValue,
};

/// A single property value, as returned by [`AttributeSet::get`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Number(f32),
    Length(LengthValue),
    Color(Color),
    Weight(FontWeight),
    Direction(FlexDirection),
    Justify(JustifyContent),
    Align(AlignItems),
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::$variant(value)
                }
            }
        )+
    };
}

impl_from_value!(
    f32 => Number,
    LengthValue => Length,
    Color => Color,
    FontWeight => Weight,
    FlexDirection => Direction,
    JustifyContent => Justify,
    AlignItems => Align,
);

macro_rules! attribute_set {
    ($(
        $(#[$doc:meta])*
        $field:ident: $ty:ty => $variant:ident, $css:literal;
    )+) => {
        /// Partial mapping from visual property to value.
        ///
        /// Unset properties are `None`. Merging copies only the properties
        /// that are set in the overlay, so later sets override earlier ones
        /// property by property.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct AttributeSet {
            $(
                $(#[$doc])*
                pub $field: Option<$ty>,
            )+
        }

        /// Names of the properties an [`AttributeSet`] can hold.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Property {
            $($variant,)+
        }

        impl Property {
            /// Every property, in declaration order.
            pub const ALL: &'static [Property] = &[$(Property::$variant,)+];

            /// The stylesheet declaration name.
            pub fn css_name(self) -> &'static str {
                match self {
                    $(Property::$variant => $css,)+
                }
            }
        }

        impl AttributeSet {
            /// Overlay the set properties of `other` onto this set.
            pub fn merge(&mut self, other: &AttributeSet) {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )+
            }

            /// Get a property value by name.
            pub fn get(&self, property: Property) -> Option<AttributeValue> {
                match property {
                    $(Property::$variant => self.$field.map(AttributeValue::from),)+
                }
            }

            /// Number of properties that are set.
            pub fn len(&self) -> usize {
                0 $(+ usize::from(self.$field.is_some()))+
            }
        }
    };
}

attribute_set! {
    // Flex layout
    /// Flex grow factor.
    flex: f32 => Flex, "flex";
    flex_direction: FlexDirection => FlexDirection, "flex-direction";
    justify_content: JustifyContent => JustifyContent, "justify-content";
    align_items: AlignItems => AlignItems, "align-items";

    // Size
    width: LengthValue => Width, "width";
    height: LengthValue => Height, "height";

    // Spacing, kept per edge so that `marginTop` survives a later `marginRight`
    margin_top: LengthValue => MarginTop, "margin-top";
    margin_right: LengthValue => MarginRight, "margin-right";
    margin_bottom: LengthValue => MarginBottom, "margin-bottom";
    margin_left: LengthValue => MarginLeft, "margin-left";
    padding_top: LengthValue => PaddingTop, "padding-top";
    padding_right: LengthValue => PaddingRight, "padding-right";
    padding_bottom: LengthValue => PaddingBottom, "padding-bottom";
    padding_left: LengthValue => PaddingLeft, "padding-left";

    // Colors
    background_color: Color => BackgroundColor, "background-color";
    /// Text color.
    color: Color => Color, "color";

    // Typography
    /// Font size in pixels.
    font_size: f32 => FontSize, "font-size";
    font_weight: FontWeight => FontWeight, "font-weight";
}

impl Property {
    /// Look up a property by its declaration name.
    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.css_name().eq_ignore_ascii_case(name))
    }

    /// Whether the property holds a color.
    pub fn is_color(self) -> bool {
        matches!(self, Property::Color | Property::BackgroundColor)
    }
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the set properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, AttributeValue)> + '_ {
        Property::ALL
            .iter()
            .filter_map(move |&property| self.get(property).map(|value| (property, value)))
    }

    /// Set all four margin edges.
    pub fn set_margin(&mut self, edges: EdgeValues) {
        self.margin_top = Some(edges.top);
        self.margin_right = Some(edges.right);
        self.margin_bottom = Some(edges.bottom);
        self.margin_left = Some(edges.left);
    }

    /// Set all four padding edges.
    pub fn set_padding(&mut self, edges: EdgeValues) {
        self.padding_top = Some(edges.top);
        self.padding_right = Some(edges.right);
        self.padding_bottom = Some(edges.bottom);
        self.padding_left = Some(edges.left);
    }

    /// Resolved margin, with unset edges as zero.
    pub fn margin(&self) -> EdgeValues {
        EdgeValues::new(
            self.margin_top.unwrap_or(LengthValue::Zero),
            self.margin_right.unwrap_or(LengthValue::Zero),
            self.margin_bottom.unwrap_or(LengthValue::Zero),
            self.margin_left.unwrap_or(LengthValue::Zero),
        )
    }

    /// Resolved padding, with unset edges as zero.
    pub fn padding(&self) -> EdgeValues {
        EdgeValues::new(
            self.padding_top.unwrap_or(LengthValue::Zero),
            self.padding_right.unwrap_or(LengthValue::Zero),
            self.padding_bottom.unwrap_or(LengthValue::Zero),
            self.padding_left.unwrap_or(LengthValue::Zero),
        )
    }

    /// Properties whose values differ between the two sets.
    pub fn diff(&self, other: &AttributeSet) -> Vec<Property> {
        Property::ALL
            .iter()
            .copied()
            .filter(|&property| self.get(property) != other.get(property))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let attrs = AttributeSet::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.iter().count(), 0);
    }

    #[test]
    fn merge_overrides_per_property() {
        let mut base = AttributeSet::new();
        base.color = Some(Color::BLACK);
        base.margin_top = Some(LengthValue::px(16.0));

        let mut overlay = AttributeSet::new();
        overlay.color = Some(Color::WHITE);
        overlay.margin_right = Some(LengthValue::px(160.0));

        base.merge(&overlay);

        assert_eq!(base.color, Some(Color::WHITE));
        assert_eq!(base.margin_top, Some(LengthValue::px(16.0)));
        assert_eq!(base.margin_right, Some(LengthValue::px(160.0)));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn property_lookup() {
        assert_eq!(Property::from_css_name("font-size"), Some(Property::FontSize));
        assert_eq!(Property::from_css_name("Background-Color"), Some(Property::BackgroundColor));
        assert_eq!(Property::from_css_name("border"), None);
        assert!(Property::Color.is_color());
        assert!(!Property::Width.is_color());
    }

    #[test]
    fn diff_reports_changed_properties() {
        let mut light = AttributeSet::new();
        light.font_size = Some(24.0);
        light.color = Some(Color::BLACK);

        let mut dark = light.clone();
        dark.color = Some(Color::WHITE);

        assert_eq!(light.diff(&dark), vec![Property::Color]);
    }
}
