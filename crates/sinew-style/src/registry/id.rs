//! Style identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Opaque name of a registry entry, such as `title` or `squareImage`.
///
/// Identifiers are compared by exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(String);

impl StyleId {
    /// Create a new identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StyleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StyleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StyleId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<StyleId> for String {
    fn from(id: StyleId) -> Self {
        id.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a `Vec<StyleId>` from string literals.
///
/// ```
/// use sinew_style::{style_ids, registry::StyleId};
///
/// let ids = style_ids!["image", "squareImage", "leftImage"];
/// assert_eq!(ids[1], StyleId::new("squareImage"));
/// ```
#[macro_export]
macro_rules! style_ids {
    ($($name:expr),* $(,)?) => {
        vec![$($crate::registry::StyleId::from($name)),*]
    };
}
