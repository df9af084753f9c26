//! Style composition.
//!
//! Composition turns an ordered style list into a single [`AttributeSet`]:
//!
//! 1. Every identifier is looked up; the first unknown one fails the call.
//! 2. Left and right alignment together fail with
//!    [`Error::ConflictingLayoutModifiers`].
//! 3. Entries are stably ordered by modifier stage (base and natural,
//!    square, alignment), so caller order only matters within a stage.
//! 4. Base attributes merge in that order, then the scheme variants merge
//!    in the same order, so a scheme override beats any base value.
//! 5. A square entry forces `width == height` on the result.

use crate::compose::modifier::stage_of;
use crate::compose::LayoutModifier;
use crate::registry::{StyleEntry, StyleId, StyleRegistry};
use crate::scheme::ColorScheme;
use crate::style::AttributeSet;
use crate::{Error, Result};

/// Merges style lists against a registry.
///
/// The composer only borrows the registry and keeps no state between calls,
/// so composing the same list under the same scheme always gives the same
/// result.
///
/// # Example
///
/// ```
/// use sinew_style::prelude::*;
///
/// let registry = StyleRegistry::from_css(r#"
///     .image { width: 400; height: 200; margin-top: 16; -sinew-layout: natural; }
///     .squareImage { width: 200; height: 200; -sinew-layout: square; }
///     .leftImage { margin-right: 160; -sinew-layout: left; }
/// "#).unwrap();
///
/// let composer = StyleComposer::new(&registry);
/// let attrs = composer
///     .compose(&style_ids!["leftImage", "squareImage", "image"], ColorScheme::Light)
///     .unwrap();
///
/// assert_eq!(attrs.width, attrs.height);
/// assert_eq!(attrs.width, Some(LengthValue::px(200.0)));
/// assert_eq!(attrs.margin_right, Some(LengthValue::px(160.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleComposer<'r> {
    registry: &'r StyleRegistry,
}

impl<'r> StyleComposer<'r> {
    /// Create a composer over a registry.
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self { registry }
    }

    /// The registry this composer reads from.
    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    /// Compose a single identifier.
    pub fn compose_one(&self, id: &str, scheme: ColorScheme) -> Result<AttributeSet> {
        let entry = self.registry.lookup(id)?;
        Ok(finish(entry.resolve(scheme), entry.modifier == Some(LayoutModifier::Square)))
    }

    /// Compose an ordered style list under a scheme.
    ///
    /// An empty list yields an empty attribute set.
    pub fn compose(&self, ids: &[StyleId], scheme: ColorScheme) -> Result<AttributeSet> {
        tracing::debug!(styles = ?ids, %scheme, "composing style list");

        let mut entries = ids
            .iter()
            .map(|id| self.registry.lookup(id.as_str()).map(|entry| (id, entry)))
            .collect::<Result<Vec<(&StyleId, &StyleEntry)>>>()?;

        check_alignment(&entries)?;

        // Stable, so equal stages keep caller order
        entries.sort_by_key(|(_, entry)| stage_of(entry.modifier));

        let mut attrs = AttributeSet::new();
        for (id, entry) in &entries {
            tracing::trace!(style = %id, "merging base attributes");
            attrs.merge(&entry.base);
        }
        for (id, entry) in &entries {
            let variant = entry.variant(scheme);
            if !variant.is_empty() {
                tracing::trace!(style = %id, %scheme, "merging scheme override");
                attrs.merge(variant);
            }
        }

        let square = entries
            .iter()
            .any(|(_, entry)| entry.modifier == Some(LayoutModifier::Square));
        Ok(finish(attrs, square))
    }
}

/// Reject lists that carry both alignment modifiers.
fn check_alignment(entries: &[(&StyleId, &StyleEntry)]) -> Result<()> {
    let with = |modifier: LayoutModifier| {
        entries
            .iter()
            .filter(move |(_, entry)| entry.modifier == Some(modifier))
            .map(|(id, _)| id.to_string())
    };

    let left: Vec<String> = with(LayoutModifier::LeftAligned).collect();
    let right: Vec<String> = with(LayoutModifier::RightAligned).collect();

    if !left.is_empty() && !right.is_empty() {
        return Err(Error::conflicting_modifiers(left.into_iter().chain(right)));
    }
    Ok(())
}

/// Apply the square constraint: width takes the height when one is set,
/// otherwise the height takes the width.
fn finish(mut attrs: AttributeSet, square: bool) -> AttributeSet {
    if square {
        match (attrs.width, attrs.height) {
            (_, Some(height)) => attrs.width = Some(height),
            (Some(width), None) => attrs.height = Some(width),
            (None, None) => {}
        }
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::style_ids;
    use crate::types::{Color, LengthValue};

    fn registry() -> StyleRegistry {
        StyleRegistry::builder()
            .define("title", Style::new().font_size(32.0).color(Color::BLACK))
            .define("subtitle", Style::new().font_size(18.0))
            .define_adaptive(
                "titleColor",
                Style::new().color(Color::BLACK),
                Style::new().color(Color::WHITE),
            )
            .define_modifier(
                "image",
                Style::new().width(LengthValue::px(400.0)).height(LengthValue::px(200.0)),
                LayoutModifier::Natural,
            )
            .define_modifier(
                "tall",
                Style::new().height(LengthValue::px(300.0)),
                LayoutModifier::Square,
            )
            .define_modifier(
                "wideSquare",
                Style::new().width(LengthValue::px(120.0)),
                LayoutModifier::Square,
            )
            .define_modifier(
                "left",
                Style::new().margin_right(LengthValue::px(160.0)),
                LayoutModifier::LeftAligned,
            )
            .define_modifier(
                "right",
                Style::new().margin_left(LengthValue::px(160.0)),
                LayoutModifier::RightAligned,
            )
            .build()
            .unwrap()
    }

    #[test]
    fn empty_list_is_empty_set() {
        let registry = registry();
        let attrs = StyleComposer::new(&registry).compose(&[], ColorScheme::Dark).unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn later_identifiers_override() {
        let registry = registry();
        let attrs = StyleComposer::new(&registry)
            .compose(&style_ids!["title", "subtitle"], ColorScheme::Light)
            .unwrap();

        assert_eq!(attrs.font_size, Some(18.0));
        assert_eq!(attrs.color, Some(Color::BLACK));
    }

    #[test]
    fn scheme_override_wins_over_order() {
        let registry = registry();
        let composer = StyleComposer::new(&registry);

        // `title` sets a base color after `titleColor`, but the override still wins
        let dark = composer
            .compose(&style_ids!["titleColor", "title"], ColorScheme::Dark)
            .unwrap();
        assert_eq!(dark.color, Some(Color::WHITE));

        let light = composer
            .compose(&style_ids!["titleColor", "title"], ColorScheme::Light)
            .unwrap();
        assert_eq!(light.color, Some(Color::BLACK));
    }

    #[test]
    fn square_uses_height() {
        let registry = registry();
        let attrs = StyleComposer::new(&registry)
            .compose(&style_ids!["image", "tall"], ColorScheme::Light)
            .unwrap();

        assert_eq!(attrs.width, Some(LengthValue::px(300.0)));
        assert_eq!(attrs.height, Some(LengthValue::px(300.0)));
    }

    #[test]
    fn square_falls_back_to_width() {
        let registry = registry();
        let attrs = StyleComposer::new(&registry)
            .compose_one("wideSquare", ColorScheme::Light)
            .unwrap();

        assert_eq!(attrs.height, Some(LengthValue::px(120.0)));
    }

    #[test]
    fn modifiers_apply_in_stage_order() {
        let registry = registry();
        let composer = StyleComposer::new(&registry);

        let forward = composer
            .compose(&style_ids!["image", "tall", "left"], ColorScheme::Light)
            .unwrap();
        let reversed = composer
            .compose(&style_ids!["left", "tall", "image"], ColorScheme::Light)
            .unwrap();

        assert_eq!(forward, reversed);
        assert_eq!(forward.height, Some(LengthValue::px(300.0)));
    }

    #[test]
    fn conflicting_alignment() {
        let registry = registry();
        let err = StyleComposer::new(&registry)
            .compose(&style_ids!["image", "left", "right"], ColorScheme::Light)
            .unwrap_err();

        match err {
            Error::ConflictingLayoutModifiers { identifiers } => {
                assert_eq!(identifiers, ["left", "right"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_identifier_fails_fast() {
        let registry = registry();
        let err = StyleComposer::new(&registry)
            .compose(&style_ids!["title", "missing", "left", "right"], ColorScheme::Light)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnknownStyleIdentifier { ref identifier } if identifier == "missing"
        ));
    }
}
