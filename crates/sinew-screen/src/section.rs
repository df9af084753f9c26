//! Titled sections.

use crate::block::{ContentBlock, RenderContext};
use crate::node::{RenderNode, SectionFrame, TextNode, ViewNode};
use crate::{Error, Result};

/// A title over a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    body: ContentBlock,
}

impl Section {
    /// Create a section.
    pub fn new(title: impl Into<String>, body: ContentBlock) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// The section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The section body.
    pub fn body(&self) -> &ContentBlock {
        &self.body
    }
}

/// Renders sections into titled frames.
///
/// The header and the description frame both take their colors from the
/// scheme of the render context. The body block is rendered as is.
#[derive(Debug, Clone, Copy)]
pub struct SectionContainer<'c, 'a> {
    cx: &'c RenderContext<'a>,
}

impl<'c, 'a> SectionContainer<'c, 'a> {
    /// Create a container for a render pass.
    pub fn new(cx: &'c RenderContext<'a>) -> Self {
        Self { cx }
    }

    /// Render one section.
    ///
    /// Element errors are reported as `title > block[index]`.
    pub fn render(&self, section: &Section) -> Result<SectionFrame> {
        let frames = self.cx.frames();
        let frame_error = |part: &str, e: sinew_style::Error| {
            Error::element(format!("{} {part}", section.title), e)
        };

        let style = self
            .cx
            .compose(&frames.section_container)
            .map_err(|e| frame_error("container", e))?;
        let header_style = self
            .cx
            .compose(&frames.section_title)
            .map_err(|e| frame_error("title", e))?;
        let body_style = self
            .cx
            .compose(&frames.section_description)
            .map_err(|e| frame_error("description", e))?;

        let block = section
            .body
            .render(self.cx)
            .map_err(|e| e.within(&section.title))?;

        tracing::debug!(section = %section.title, scheme = %self.cx.scheme(), "rendered section");

        Ok(SectionFrame {
            title: section.title.clone(),
            style,
            header: TextNode::new(section.title.clone(), header_style),
            body: ViewNode::new(body_style, vec![RenderNode::View(block)]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FrameStyles;
    use crate::element::StyledElement;
    use crate::host::DefaultHost;
    use sinew_style::prelude::*;

    const CSS: &str = r#"
        .container { padding: 10; }
        .sectionContainer { margin-top: 32; padding-horizontal: 24; }
        .sectionTitle { font-size: 24; font-weight: 600; }
        .sectionDescription { margin-top: 8; font-size: 18; }
        .title { font-size: 32; }
        @media (prefers-color-scheme: light) {
            .sectionTitleColor { color: black; }
            .sectionDescriptionColor { color: gray; }
        }
        @media (prefers-color-scheme: dark) {
            .sectionTitleColor { color: white; }
            .sectionDescriptionColor { color: lightgray; }
        }
    "#;

    fn render(section: &Section, scheme: ColorScheme) -> Result<SectionFrame> {
        let registry = StyleRegistry::from_css(CSS).unwrap();
        let frames = FrameStyles::default();
        let host = DefaultHost::new(FixedScheme(scheme));
        let cx = RenderContext::new(&registry, scheme, &host, &frames);
        SectionContainer::new(&cx).render(section)
    }

    #[test]
    fn test_header_follows_scheme() {
        let block = ContentBlock::new("home").with(StyledElement::text("hi", ["title"]));
        let section = Section::new("Home", block);

        let light = render(&section, ColorScheme::Light).unwrap();
        let dark = render(&section, ColorScheme::Dark).unwrap();

        assert_eq!(light.header.text, "Home");
        assert_eq!(light.header.style.color, Some(Color::BLACK));
        assert_eq!(dark.header.style.color, Some(Color::WHITE));
        assert_ne!(light.body.style.color, dark.body.style.color);
        assert_eq!(light.header.style.font_size, dark.header.style.font_size);
        assert_eq!(light.style.padding_left, Some(LengthValue::px(24.0)));
    }

    #[test]
    fn test_body_wraps_block() {
        let block = ContentBlock::new("home").with(StyledElement::text("hi", ["title"]));
        let section = Section::new("Home", block);
        let frame = render(&section, ColorScheme::Light).unwrap();

        assert_eq!(frame.body.children.len(), 1);
        let block = &frame.body.children[0];
        assert_eq!(block.children().len(), 1);
    }

    #[test]
    fn test_block_error_names_section() {
        let block = ContentBlock::new("about").with(StyledElement::text("x", ["nope"]));
        let section = Section::new("About", block);
        let err = render(&section, ColorScheme::Light).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to style About > about[0]: Unknown style identifier 'nope'"
        );
    }
}
