//! Collaborators provided by the host platform.
//!
//! Rendering needs three things from its environment: the current color
//! scheme, a way to turn an image handle into a node, and a scrollable
//! viewport. [`DefaultHost`] supplies pass-through versions of the last two
//! so a document can be built and inspected without a platform.

use sinew_style::scheme::{SchemeSource, SystemScheme};
use sinew_style::style::AttributeSet;

use crate::element::ImageHandle;
use crate::node::{ImageNode, RenderNode, ScrollNode};

/// Turns an image handle and its composed style into a node.
pub trait ImageRenderer {
    /// Render one image. The handle is opaque and not decoded.
    fn render_image(&self, handle: &ImageHandle, style: &AttributeSet) -> RenderNode;
}

/// Wraps a document in a scrollable viewport.
pub trait ScrollViewport {
    /// Wrap children in a viewport styled with `style`.
    fn render_scrollable(&self, style: AttributeSet, children: Vec<RenderNode>) -> RenderNode;
}

/// Everything a render pass needs from its environment.
pub trait Host: SchemeSource + ImageRenderer + ScrollViewport {}

impl<T> Host for T where T: SchemeSource + ImageRenderer + ScrollViewport {}

/// A host that asks `S` for the scheme and passes images and scrolling
/// through as plain nodes.
///
/// ```
/// use sinew_screen::host::DefaultHost;
/// use sinew_style::scheme::{ColorScheme, FixedScheme, SchemeSource};
///
/// let host = DefaultHost::new(FixedScheme(ColorScheme::Dark));
/// assert!(host.color_scheme().is_dark());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultHost<S = SystemScheme> {
    scheme: S,
}

impl<S> DefaultHost<S> {
    /// Create a host around a scheme source.
    pub fn new(scheme: S) -> Self {
        Self { scheme }
    }

    /// The scheme source.
    pub fn scheme_source(&self) -> &S {
        &self.scheme
    }
}

impl<S: SchemeSource> SchemeSource for DefaultHost<S> {
    fn color_scheme(&self) -> sinew_style::scheme::ColorScheme {
        self.scheme.color_scheme()
    }
}

impl<S> ImageRenderer for DefaultHost<S> {
    fn render_image(&self, handle: &ImageHandle, style: &AttributeSet) -> RenderNode {
        RenderNode::Image(ImageNode {
            handle: handle.clone(),
            style: style.clone(),
        })
    }
}

impl<S> ScrollViewport for DefaultHost<S> {
    fn render_scrollable(&self, style: AttributeSet, children: Vec<RenderNode>) -> RenderNode {
        RenderNode::Scroll(ScrollNode { style, children })
    }
}
