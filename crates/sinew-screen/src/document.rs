//! Document definition and screen assembly.

use sinew_style::registry::{StyleId, StyleRegistry};
use sinew_style::scheme::ColorScheme;
use sinew_style::style::AttributeSet;
use sinew_style::style_ids;

use crate::block::RenderContext;
use crate::chrome::Chrome;
use crate::element::StyledElement;
use crate::host::Host;
use crate::node::{ImageNode, RenderNode, SectionFrame, TextNode, ViewNode};
use crate::section::{Section, SectionContainer};
use crate::tree::{TreeFormatOptions, TreeFormatter};
use crate::{Error, Result};

/// Style lists for the frames the assembler draws around content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStyles {
    /// Outer frame and scroll viewport.
    pub background: Vec<StyleId>,
    /// Content container, used for the document and each content block.
    pub container: Vec<StyleId>,
    /// Frame around the banner element.
    pub banner: Vec<StyleId>,
    /// Outer frame of each section.
    pub section_container: Vec<StyleId>,
    /// Section header text.
    pub section_title: Vec<StyleId>,
    /// Description frame around a section body.
    pub section_description: Vec<StyleId>,
}

impl Default for FrameStyles {
    fn default() -> Self {
        Self {
            background: style_ids!["background"],
            container: style_ids!["container"],
            banner: style_ids!["banner"],
            section_container: style_ids!["sectionContainer"],
            section_title: style_ids!["sectionTitle", "sectionTitleColor"],
            section_description: style_ids!["sectionDescription", "sectionDescriptionColor"],
        }
    }
}

/// The authored content of a screen: a banner followed by sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefinition {
    banner: StyledElement,
    sections: Vec<Section>,
}

impl DocumentDefinition {
    /// Create a document with a banner and no sections.
    pub fn new(banner: StyledElement) -> Self {
        Self {
            banner,
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// The banner element.
    pub fn banner(&self) -> &StyledElement {
        &self.banner
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// The scheme the pass was rendered under.
    pub scheme: ColorScheme,
    /// Status bar settings.
    pub chrome: Chrome,
    /// Background frame holding the scroll viewport.
    pub root: RenderNode,
}

impl RenderedDocument {
    /// Rendered sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionFrame> {
        self.root.descendants().filter_map(RenderNode::as_section)
    }

    /// Section headers in document order.
    pub fn section_headers(&self) -> impl Iterator<Item = &TextNode> {
        self.sections().map(|section| &section.header)
    }

    /// Image nodes in document order.
    pub fn images(&self) -> impl Iterator<Item = &ImageNode> {
        self.root.descendants().filter_map(RenderNode::as_image)
    }

    /// Format the tree for debugging.
    pub fn to_tree_string(&self, options: TreeFormatOptions) -> String {
        TreeFormatter::with_options(options).format(&self.root)
    }
}

/// Assembles documents into scrollable trees.
///
/// # Example
///
/// ```
/// use sinew_screen::prelude::*;
///
/// let registry = StyleRegistry::from_css(r#"
///     .background { flex: 1; }
///     .container { padding: 10; }
///     .banner { padding: 10; }
///     .bannerText { font-size: 16; }
///     .sectionContainer { margin-top: 32; }
///     .sectionTitle { font-size: 24; }
///     .sectionTitleColor { color: black; }
///     .sectionDescription { font-size: 18; }
///     .sectionDescriptionColor { color: gray; }
/// "#)?;
///
/// let document = DocumentDefinition::new(StyledElement::text("Sale!", ["bannerText"]))
///     .with_section(Section::new("Home", ContentBlock::new("home")));
///
/// let host = DefaultHost::new(FixedScheme(ColorScheme::Light));
/// let rendered = ScreenAssembler::new(&registry).assemble(&document, &host)?;
///
/// assert_eq!(rendered.section_headers().count(), 1);
/// # Ok::<(), sinew_screen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScreenAssembler<'r> {
    registry: &'r StyleRegistry,
    frames: FrameStyles,
}

impl<'r> ScreenAssembler<'r> {
    /// Create an assembler with the default frame styles.
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self::with_frames(registry, FrameStyles::default())
    }

    /// Create an assembler with custom frame styles.
    pub fn with_frames(registry: &'r StyleRegistry, frames: FrameStyles) -> Self {
        Self { registry, frames }
    }

    /// The frame styles in use.
    pub fn frames(&self) -> &FrameStyles {
        &self.frames
    }

    /// Run one render pass.
    ///
    /// The scheme is asked for once. The banner comes first, followed by
    /// each section in definition order, all inside the content container.
    /// The host wraps the container in its scrollable viewport.
    pub fn assemble<H: Host>(
        &self,
        document: &DocumentDefinition,
        host: &H,
    ) -> Result<RenderedDocument> {
        let scheme = host.color_scheme();
        let span = tracing::info_span!("render_pass", %scheme, sections = document.sections.len());
        let _enter = span.enter();

        let cx = RenderContext::new(self.registry, scheme, host, &self.frames);
        let frame = |ids: &[StyleId], location: &str| {
            cx.compose(ids).map_err(|e| Error::element(location, e))
        };

        let background = frame(&self.frames.background, "background")?;
        let container = frame(&self.frames.container, "container")?;

        let mut children = Vec::with_capacity(document.sections.len() + 1);
        children.push(self.render_banner(&cx, &document.banner)?);

        let sections = SectionContainer::new(&cx);
        for section in &document.sections {
            children.push(RenderNode::Section(sections.render(section)?));
        }

        let content = RenderNode::View(ViewNode::new(container, children));
        let viewport = host.render_scrollable(background.clone(), vec![content]);
        let chrome = Chrome::new(scheme, background.background_color.unwrap_or_default());

        tracing::debug!(status_bar = ?chrome.status_bar, "render pass complete");

        Ok(RenderedDocument {
            scheme,
            chrome,
            root: RenderNode::View(ViewNode::new(background, vec![viewport])),
        })
    }

    fn render_banner(&self, cx: &RenderContext<'_>, banner: &StyledElement) -> Result<RenderNode> {
        let style: AttributeSet = cx
            .compose(&self.frames.banner)
            .map_err(|e| Error::element("banner", e))?;
        let text = cx
            .render_element(banner)
            .map_err(|e| Error::element("banner text", e))?;

        Ok(RenderNode::View(ViewNode::new(style, vec![text])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ContentBlock;
    use crate::host::DefaultHost;
    use sinew_style::prelude::*;

    const CSS: &str = r#"
        .background { flex: 1; }
        .container { padding: 10; }
        .banner { background-color: #BCCDA9; }
        .bannerText { font-size: 16; }
        .sectionContainer { margin-top: 32; }
        .sectionTitle { font-size: 24; }
        .sectionDescription { font-size: 18; }
        .body { font-size: 18; }
        @media (prefers-color-scheme: light) {
            .background { background-color: white; }
            .sectionTitleColor { color: black; }
            .sectionDescriptionColor { color: gray; }
        }
        @media (prefers-color-scheme: dark) {
            .background { background-color: black; }
            .sectionTitleColor { color: white; }
            .sectionDescriptionColor { color: lightgray; }
        }
    "#;

    fn document() -> DocumentDefinition {
        DocumentDefinition::new(StyledElement::text("Sale", ["bannerText"]))
            .with_section(Section::new(
                "First",
                ContentBlock::new("first").with(StyledElement::text("one", ["body"])),
            ))
            .with_section(Section::new(
                "Second",
                ContentBlock::new("second").with(StyledElement::image("two.jpeg", ["body"])),
            ))
    }

    fn assemble(scheme: ColorScheme) -> Result<RenderedDocument> {
        let registry = StyleRegistry::from_css(CSS).unwrap();
        let host = DefaultHost::new(FixedScheme(scheme));
        ScreenAssembler::new(&registry).assemble(&document(), &host)
    }

    #[test]
    fn test_banner_precedes_sections() {
        let rendered = assemble(ColorScheme::Light).unwrap();

        let RenderNode::View(frame) = &rendered.root else {
            panic!("root should be the background frame");
        };
        let RenderNode::Scroll(scroll) = &frame.children[0] else {
            panic!("background frame should hold the viewport");
        };
        let content = &scroll.children[0];
        let labels: Vec<String> = content.children().iter().map(RenderNode::label).collect();

        assert_eq!(labels, ["View", "Section \"First\"", "Section \"Second\""]);
        assert_eq!(content.children()[0].children()[0].as_text().unwrap().text, "Sale");
    }

    #[test]
    fn test_chrome_tracks_background() {
        let light = assemble(ColorScheme::Light).unwrap();
        let dark = assemble(ColorScheme::Dark).unwrap();

        assert_eq!(light.chrome.background, Color::WHITE);
        assert_eq!(dark.chrome.background, Color::BLACK);
        assert_eq!(dark.chrome.status_bar, crate::chrome::StatusBarStyle::LightContent);
    }

    #[test]
    fn test_missing_frame_style() {
        let registry = StyleRegistry::from_css(".bannerText { font-size: 16; }").unwrap();
        let host = DefaultHost::new(FixedScheme(ColorScheme::Light));
        let err = ScreenAssembler::new(&registry).assemble(&document(), &host).unwrap_err();

        assert!(matches!(err, Error::Element { ref location, .. } if location == "background"));
    }

    #[test]
    fn test_accessors() {
        let rendered = assemble(ColorScheme::Dark).unwrap();
        let headers: Vec<&str> = rendered.section_headers().map(|h| h.text.as_str()).collect();

        assert_eq!(headers, ["First", "Second"]);
        assert_eq!(rendered.images().count(), 1);
        assert!(rendered.to_tree_string(TreeFormatOptions::default()).contains("Image two.jpeg"));
    }
}
