//! Sectioned, scheme-aware screens for Sinew.
//!
//! A screen is a [`DocumentDefinition`](document::DocumentDefinition): one
//! banner element followed by titled sections, each holding a content block
//! of styled text and images. A render pass asks the host for the color
//! scheme once, composes every element's style list against a
//! [`StyleRegistry`](sinew_style::registry::StyleRegistry), and hands the
//! resulting tree to the host's scrollable viewport.
//!
//! # Example
//!
//! ```
//! use sinew_screen::prelude::*;
//!
//! let host = DefaultHost::new(FixedScheme(ColorScheme::Light));
//! let rendered = sinew_screen::build_document_with(&host)?;
//!
//! let headers: Vec<&str> = rendered.section_headers().map(|h| h.text.as_str()).collect();
//! assert_eq!(headers, ["Home", "About"]);
//! # Ok::<(), sinew_screen::Error>(())
//! ```

pub mod app;
pub mod block;
pub mod chrome;
pub mod document;
pub mod element;
pub mod host;
pub mod node;
pub mod section;
pub mod tree;

mod error;

pub use app::{build_document, build_document_with};
pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::block::{ContentBlock, RenderContext};
    pub use crate::chrome::{Chrome, StatusBarStyle};
    pub use crate::document::{DocumentDefinition, FrameStyles, RenderedDocument, ScreenAssembler};
    pub use crate::element::{ElementContent, ElementKind, ImageHandle, StyledElement};
    pub use crate::host::{DefaultHost, Host, ImageRenderer, ScrollViewport};
    pub use crate::node::{ImageNode, RenderNode, ScrollNode, SectionFrame, TextNode, ViewNode};
    pub use crate::section::{Section, SectionContainer};
    pub use sinew_style::prelude::*;
}

static_assertions::assert_impl_all!(document::DocumentDefinition: Send, Sync);
static_assertions::assert_impl_all!(document::RenderedDocument: Send, Sync);
