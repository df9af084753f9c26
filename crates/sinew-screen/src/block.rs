//! Content blocks and the per-pass render context.

use std::fmt;

use sinew_style::compose::StyleComposer;
use sinew_style::registry::{StyleId, StyleRegistry};
use sinew_style::scheme::ColorScheme;
use sinew_style::style::AttributeSet;

use crate::document::FrameStyles;
use crate::element::{ElementContent, StyledElement};
use crate::host::ImageRenderer;
use crate::node::{RenderNode, TextNode, ViewNode};
use crate::{Error, Result};

/// State shared by everything rendered during one pass.
///
/// The scheme is fixed when the context is created, so every element of a
/// pass sees the same scheme.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    composer: StyleComposer<'a>,
    scheme: ColorScheme,
    images: &'a dyn ImageRenderer,
    frames: &'a FrameStyles,
}

impl<'a> RenderContext<'a> {
    /// Create a context for one render pass.
    pub fn new(
        registry: &'a StyleRegistry,
        scheme: ColorScheme,
        images: &'a dyn ImageRenderer,
        frames: &'a FrameStyles,
    ) -> Self {
        Self {
            composer: StyleComposer::new(registry),
            scheme,
            images,
            frames,
        }
    }

    /// The scheme of this pass.
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// The frame identifiers in use.
    pub fn frames(&self) -> &'a FrameStyles {
        self.frames
    }

    /// Compose a style list under this pass's scheme.
    pub fn compose(&self, ids: &[StyleId]) -> sinew_style::Result<AttributeSet> {
        self.composer.compose(ids, self.scheme)
    }

    /// Render a single element.
    pub fn render_element(&self, element: &StyledElement) -> sinew_style::Result<RenderNode> {
        let style = self.compose(element.styles())?;
        Ok(match element.content() {
            ElementContent::Text(text) => RenderNode::Text(TextNode::new(text.clone(), style)),
            ElementContent::Image(handle) => self.images.render_image(handle, &style),
        })
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("scheme", &self.scheme)
            .field("frames", self.frames)
            .finish_non_exhaustive()
    }
}

/// A named, ordered run of elements forming one screen's content.
///
/// Elements stack in the order they were added. Styles are only checked
/// when the block is rendered.
///
/// # Example
///
/// ```
/// use sinew_screen::block::ContentBlock;
/// use sinew_screen::element::StyledElement;
///
/// let block = ContentBlock::new("home")
///     .with(StyledElement::text("Welcome", ["title"]))
///     .with(StyledElement::image("trainer.jpeg", ["image", "squareImage"]));
///
/// assert_eq!(block.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    name: String,
    elements: Vec<StyledElement>,
}

impl ContentBlock {
    /// Create an empty block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Create a block from elements.
    pub fn from_elements(
        name: impl Into<String>,
        elements: impl IntoIterator<Item = StyledElement>,
    ) -> Self {
        Self {
            name: name.into(),
            elements: elements.into_iter().collect(),
        }
    }

    /// Append an element.
    pub fn with(mut self, element: StyledElement) -> Self {
        self.elements.push(element);
        self
    }

    /// The block name, used in error locations.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The elements in stacking order.
    pub fn elements(&self) -> &[StyledElement] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the block has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render the block as a container frame holding one node per element.
    ///
    /// The first element that fails to compose stops rendering; its error
    /// carries the location `name[index]`.
    pub fn render(&self, cx: &RenderContext<'_>) -> Result<ViewNode> {
        let style = cx
            .compose(&cx.frames().container)
            .map_err(|e| Error::element(&self.name, e))?;

        let children = self
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                cx.render_element(element)
                    .map_err(|e| Error::element(format!("{}[{index}]", self.name), e))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(block = %self.name, elements = children.len(), "rendered content block");
        Ok(ViewNode::new(style, children))
    }
}
