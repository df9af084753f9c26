//! Fluent builder for attribute sets.

use super::AttributeSet;
use crate::types::{
    AlignItems, Color, EdgeValues, FlexDirection, FontWeight, JustifyContent, LengthValue,
};

/// Builder for creating attribute sets with a fluent API.
///
/// # Example
///
/// ```
/// use sinew_style::prelude::*;
///
/// let title = Style::new()
///     .background_color(Color::WHITE_SMOKE)
///     .padding_all(LengthValue::px(16.0))
///     .font_size(32.0)
///     .font_weight(FontWeight::SEMI_BOLD)
///     .margin_bottom(LengthValue::px(16.0))
///     .color(Color::from_rgb8(83, 104, 120))
///     .build();
///
/// assert_eq!(title.font_size, Some(32.0));
/// assert_eq!(title.padding_left, Some(LengthValue::px(16.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    attrs: AttributeSet,
}

impl Style {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final AttributeSet.
    pub fn build(self) -> AttributeSet {
        self.attrs
    }

    // === Flex layout ===

    /// Set the flex grow factor.
    pub fn flex(mut self, value: f32) -> Self {
        self.attrs.flex = Some(value);
        self
    }

    /// Set the main axis.
    pub fn flex_direction(mut self, value: FlexDirection) -> Self {
        self.attrs.flex_direction = Some(value);
        self
    }

    /// Set main axis distribution.
    pub fn justify_content(mut self, value: JustifyContent) -> Self {
        self.attrs.justify_content = Some(value);
        self
    }

    /// Set cross axis alignment.
    pub fn align_items(mut self, value: AlignItems) -> Self {
        self.attrs.align_items = Some(value);
        self
    }

    // === Size ===

    /// Set explicit width.
    pub fn width(mut self, value: LengthValue) -> Self {
        self.attrs.width = Some(value);
        self
    }

    /// Set explicit height.
    pub fn height(mut self, value: LengthValue) -> Self {
        self.attrs.height = Some(value);
        self
    }

    // === Spacing ===

    /// Set margin on all sides.
    pub fn margin(mut self, value: EdgeValues) -> Self {
        self.attrs.set_margin(value);
        self
    }

    /// Set uniform margin on all sides.
    pub fn margin_all(self, value: LengthValue) -> Self {
        self.margin(EdgeValues::uniform(value))
    }

    /// Set margin top.
    pub fn margin_top(mut self, value: LengthValue) -> Self {
        self.attrs.margin_top = Some(value);
        self
    }

    /// Set margin right.
    pub fn margin_right(mut self, value: LengthValue) -> Self {
        self.attrs.margin_right = Some(value);
        self
    }

    /// Set margin bottom.
    pub fn margin_bottom(mut self, value: LengthValue) -> Self {
        self.attrs.margin_bottom = Some(value);
        self
    }

    /// Set margin left.
    pub fn margin_left(mut self, value: LengthValue) -> Self {
        self.attrs.margin_left = Some(value);
        self
    }

    /// Set left and right margins.
    pub fn margin_horizontal(self, value: LengthValue) -> Self {
        self.margin_left(value).margin_right(value)
    }

    /// Set padding on all sides.
    pub fn padding(mut self, value: EdgeValues) -> Self {
        self.attrs.set_padding(value);
        self
    }

    /// Set uniform padding on all sides.
    pub fn padding_all(self, value: LengthValue) -> Self {
        self.padding(EdgeValues::uniform(value))
    }

    /// Set padding top.
    pub fn padding_top(mut self, value: LengthValue) -> Self {
        self.attrs.padding_top = Some(value);
        self
    }

    /// Set padding right.
    pub fn padding_right(mut self, value: LengthValue) -> Self {
        self.attrs.padding_right = Some(value);
        self
    }

    /// Set padding bottom.
    pub fn padding_bottom(mut self, value: LengthValue) -> Self {
        self.attrs.padding_bottom = Some(value);
        self
    }

    /// Set padding left.
    pub fn padding_left(mut self, value: LengthValue) -> Self {
        self.attrs.padding_left = Some(value);
        self
    }

    /// Set left and right padding.
    pub fn padding_horizontal(self, value: LengthValue) -> Self {
        self.padding_left(value).padding_right(value)
    }

    // === Colors ===

    /// Set background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.attrs.background_color = Some(color);
        self
    }

    /// Set text color.
    pub fn color(mut self, color: Color) -> Self {
        self.attrs.color = Some(color);
        self
    }

    // === Typography ===

    /// Set font size in pixels.
    pub fn font_size(mut self, size: f32) -> Self {
        self.attrs.font_size = Some(size);
        self
    }

    /// Set font weight.
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.attrs.font_weight = Some(weight);
        self
    }
}

impl From<Style> for AttributeSet {
    fn from(style: Style) -> Self {
        style.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_only_named_properties() {
        let attrs = Style::new().font_size(18.0).font_weight(FontWeight::NORMAL).build();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.color, None);
    }

    #[test]
    fn horizontal_padding_leaves_vertical_unset() {
        let attrs = Style::new()
            .margin_top(LengthValue::px(32.0))
            .padding_horizontal(LengthValue::px(24.0))
            .build();

        assert_eq!(attrs.padding_left, Some(LengthValue::px(24.0)));
        assert_eq!(attrs.padding_right, Some(LengthValue::px(24.0)));
        assert_eq!(attrs.padding_top, None);
        assert_eq!(attrs.margin_top, Some(LengthValue::px(32.0)));
    }
}
