//! Styled document elements.

use std::fmt;

use sinew_style::registry::StyleId;

/// Opaque reference to an image resource, such as a bundled file name.
///
/// The handle is never decoded here; it is passed to the host's image
/// renderer as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// Create a new handle.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The resource name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a styled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Image,
}

/// Content of a styled element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    Text(String),
    Image(ImageHandle),
}

/// A text or image element with an ordered style list.
///
/// Style identifiers are not checked against a registry until the element
/// is rendered.
///
/// # Example
///
/// ```
/// use sinew_screen::element::{ElementKind, StyledElement};
///
/// let photo = StyledElement::image("woman_trainer.jpeg", ["image", "squareImage", "leftImage"]);
/// assert_eq!(photo.kind(), ElementKind::Image);
/// assert_eq!(photo.styles().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledElement {
    content: ElementContent,
    styles: Vec<StyleId>,
}

impl StyledElement {
    /// Create a text element.
    pub fn text<I>(text: impl Into<String>, styles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StyleId>,
    {
        Self::new(ElementContent::Text(text.into()), styles)
    }

    /// Create an image element.
    pub fn image<I>(source: impl Into<String>, styles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StyleId>,
    {
        Self::new(ElementContent::Image(ImageHandle::new(source)), styles)
    }

    /// Create an element from content and styles.
    pub fn new<I>(content: ElementContent, styles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StyleId>,
    {
        Self {
            content,
            styles: styles.into_iter().map(Into::into).collect(),
        }
    }

    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        match self.content {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Image(_) => ElementKind::Image,
        }
    }

    /// The element content.
    pub fn content(&self) -> &ElementContent {
        &self.content
    }

    /// The ordered style list.
    pub fn styles(&self) -> &[StyleId] {
        &self.styles
    }
}
