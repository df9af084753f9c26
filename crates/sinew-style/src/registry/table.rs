//! The style registry and its builder.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use super::{StyleEntry, StyleId};
use crate::compose::LayoutModifier;
use crate::rules::StyleRule;
use crate::scheme::ColorScheme;
use crate::style::AttributeSet;
use crate::{Error, Result};

/// Immutable mapping from style identifiers to attribute sets.
///
/// A registry is built once, either from a stylesheet or through
/// [`StyleRegistry::builder`], and is only read afterwards. Lookups of
/// missing identifiers are not an error until a style list is composed.
///
/// # Example
///
/// ```
/// use sinew_style::prelude::*;
///
/// let registry = StyleRegistry::from_css(r#"
///     .sectionTitle { font-size: 24; font-weight: 600; }
///     .sectionTitleColor { color: black; }
///     @media (prefers-color-scheme: dark) {
///         .sectionTitleColor { color: white; }
///     }
/// "#).unwrap();
///
/// assert_eq!(registry.len(), 2);
/// let entry = registry.lookup("sectionTitleColor").unwrap();
/// assert_eq!(entry.variant(ColorScheme::Dark).color, Some(Color::WHITE));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: HashMap<StyleId, StyleEntry>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a registry programmatically.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Load a registry from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_css(&content)
    }

    /// Parse a registry from CSS text.
    ///
    /// Repeated rules for the same class merge in source order, as they
    /// would in a browser. Malformed rules and declarations are skipped with
    /// a warning, so this only returns `Ok`; see [`parse_css`] for what the
    /// `Result` is kept for. [`Self::from_file`] can still fail with
    /// [`Error::Io`].
    ///
    /// [`parse_css`]: crate::parser::parse_css
    pub fn from_css(css: &str) -> Result<Self> {
        let rules = crate::parser::parse_css(css)?;
        Ok(Self::from_rules(rules))
    }

    /// Build a registry from parsed rules, merging them in source order.
    ///
    /// A modifier on a scheme rule is ignored; modifiers belong to the
    /// entry and apply under every scheme.
    pub fn from_rules(rules: impl IntoIterator<Item = StyleRule>) -> Self {
        let mut rules: Vec<StyleRule> = rules.into_iter().collect();
        rules.sort_by_key(|rule| rule.order);

        let mut entries: HashMap<StyleId, StyleEntry> = HashMap::new();
        for rule in rules {
            let entry = entries.entry(rule.id.clone()).or_default();
            match rule.scheme {
                Some(scheme) => {
                    entry.variant_mut(scheme).merge(&rule.properties);
                    if let Some(modifier) = rule.modifier {
                        tracing::warn!(
                            style = %rule.id,
                            %scheme,
                            %modifier,
                            "ignoring scheme-specific layout modifier"
                        );
                    }
                }
                None => {
                    entry.base.merge(&rule.properties);
                    if rule.modifier.is_some() {
                        entry.modifier = rule.modifier;
                    }
                }
            }
        }

        tracing::debug!(styles = entries.len(), "built style registry");
        Self { entries }
    }

    /// Get an entry, if defined.
    pub fn get(&self, id: &str) -> Option<&StyleEntry> {
        self.entries.get(id)
    }

    /// Get an entry, failing with [`Error::UnknownStyleIdentifier`].
    pub fn lookup(&self, id: &str) -> Result<&StyleEntry> {
        self.get(id).ok_or_else(|| Error::unknown_identifier(id))
    }

    /// Check whether an identifier is defined.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of defined identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Defined identifiers, sorted by name.
    pub fn ids(&self) -> Vec<&StyleId> {
        let mut ids: Vec<&StyleId> = self.entries.keys().collect();
        ids.sort();
        ids
    }

    /// Iterate over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleId, &StyleEntry)> {
        self.entries.iter()
    }
}

/// Builder for a [`StyleRegistry`].
///
/// Unlike a stylesheet, the builder treats a second definition of the same
/// identifier as an authoring error.
///
/// ```
/// use sinew_style::prelude::*;
///
/// let registry = StyleRegistry::builder()
///     .define("image", Style::new().width(LengthValue::px(400.0)).height(LengthValue::px(200.0)))
///     .define_modifier(
///         "squareImage",
///         Style::new().width(LengthValue::px(200.0)),
///         LayoutModifier::Square,
///     )
///     .build()
///     .unwrap();
///
/// assert!(registry.contains("squareImage"));
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    definitions: Vec<Definition>,
}

#[derive(Debug)]
enum Definition {
    Entry(StyleId, StyleEntry),
    Override(StyleId, ColorScheme, AttributeSet),
}

impl RegistryBuilder {
    /// Define an entry with base attributes.
    pub fn define(self, id: impl Into<StyleId>, attrs: impl Into<AttributeSet>) -> Self {
        self.entry(id, StyleEntry::new(attrs.into()))
    }

    /// Define an entry whose attributes depend on the scheme.
    pub fn define_adaptive(
        self,
        id: impl Into<StyleId>,
        light: impl Into<AttributeSet>,
        dark: impl Into<AttributeSet>,
    ) -> Self {
        self.entry(id, StyleEntry::adaptive(light.into(), dark.into()))
    }

    /// Define an entry that carries a layout modifier.
    pub fn define_modifier(
        self,
        id: impl Into<StyleId>,
        attrs: impl Into<AttributeSet>,
        modifier: LayoutModifier,
    ) -> Self {
        self.entry(id, StyleEntry::new(attrs.into()).with_modifier(modifier))
    }

    /// Define a fully specified entry.
    pub fn entry(mut self, id: impl Into<StyleId>, entry: StyleEntry) -> Self {
        self.definitions.push(Definition::Entry(id.into(), entry));
        self
    }

    /// Add scheme overrides to an entry.
    ///
    /// The entry may be defined before or after the override; an override
    /// without any definition creates a scheme-only entry.
    pub fn override_scheme(
        mut self,
        id: impl Into<StyleId>,
        scheme: ColorScheme,
        attrs: impl Into<AttributeSet>,
    ) -> Self {
        self.definitions.push(Definition::Override(id.into(), scheme, attrs.into()));
        self
    }

    /// Finish building.
    ///
    /// Returns [`Error::DuplicateStyle`] if an identifier was defined twice.
    pub fn build(self) -> Result<StyleRegistry> {
        let mut entries: HashMap<StyleId, StyleEntry> = HashMap::new();
        let mut overrides = Vec::new();

        for definition in self.definitions {
            match definition {
                Definition::Entry(id, entry) => match entries.entry(id) {
                    Entry::Occupied(occupied) => {
                        return Err(Error::duplicate(occupied.key().as_str()));
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert(entry);
                    }
                },
                Definition::Override(id, scheme, attrs) => overrides.push((id, scheme, attrs)),
            }
        }

        for (id, scheme, attrs) in overrides {
            entries.entry(id).or_default().variant_mut(scheme).merge(&attrs);
        }

        Ok(StyleRegistry { entries })
    }
}
