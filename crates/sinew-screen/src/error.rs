//! Error types for screen assembly.

/// Result type alias for screen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a document.
///
/// Both variants are authoring errors in the document or stylesheet; none
/// of them is transient.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element could not be styled.
    #[error("Failed to style {location}: {source}")]
    Element {
        location: String,
        #[source]
        source: sinew_style::Error,
    },

    /// A style error outside any element, such as a bad stylesheet.
    #[error(transparent)]
    Style(#[from] sinew_style::Error),
}

impl Error {
    /// Create an element error.
    pub fn element(location: impl Into<String>, source: sinew_style::Error) -> Self {
        Self::Element {
            location: location.into(),
            source,
        }
    }

    /// Prefix the location of an element error with an enclosing name.
    pub fn within(self, outer: &str) -> Self {
        match self {
            Self::Element { location, source } => Self::Element {
                location: format!("{outer} > {location}"),
                source,
            },
            other => other,
        }
    }

    /// The underlying style error.
    pub fn style_error(&self) -> &sinew_style::Error {
        match self {
            Self::Element { source, .. } => source,
            Self::Style(source) => source,
        }
    }
}
