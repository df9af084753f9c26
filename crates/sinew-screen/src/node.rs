//! The rendered node tree handed to the host.

use sinew_style::style::AttributeSet;

use crate::element::ImageHandle;

/// A container with a composed style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewNode {
    pub style: AttributeSet,
    pub children: Vec<RenderNode>,
}

impl ViewNode {
    /// Create a view.
    pub fn new(style: AttributeSet, children: Vec<RenderNode>) -> Self {
        Self { style, children }
    }
}

/// A run of styled text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub style: AttributeSet,
}

impl TextNode {
    /// Create a text node.
    pub fn new(text: impl Into<String>, style: AttributeSet) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// An image placed with a composed style.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub handle: ImageHandle,
    pub style: AttributeSet,
}

/// The scrollable viewport wrapping a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollNode {
    pub style: AttributeSet,
    pub children: Vec<RenderNode>,
}

/// A titled section: header text above a description frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFrame {
    /// The section title.
    pub title: String,
    /// Style of the outer section container.
    pub style: AttributeSet,
    /// The scheme-colored title.
    pub header: TextNode,
    /// The scheme-colored description frame holding the content block.
    pub body: ViewNode,
}

/// One node of a rendered document.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    View(ViewNode),
    Text(TextNode),
    Image(ImageNode),
    Section(SectionFrame),
    Scroll(ScrollNode),
}

impl RenderNode {
    /// The composed style of this node.
    pub fn style(&self) -> &AttributeSet {
        match self {
            RenderNode::View(view) => &view.style,
            RenderNode::Text(text) => &text.style,
            RenderNode::Image(image) => &image.style,
            RenderNode::Section(section) => &section.style,
            RenderNode::Scroll(scroll) => &scroll.style,
        }
    }

    /// Child nodes.
    ///
    /// A section's header and description frame belong to the section
    /// itself; its children are the nodes inside the description frame.
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::View(view) => &view.children,
            RenderNode::Section(section) => &section.body.children,
            RenderNode::Scroll(scroll) => &scroll.children,
            RenderNode::Text(_) | RenderNode::Image(_) => &[],
        }
    }

    /// Short label for tree output.
    pub fn label(&self) -> String {
        match self {
            RenderNode::View(_) => "View".to_string(),
            RenderNode::Text(text) => format!("Text {:?}", text.text),
            RenderNode::Image(image) => format!("Image {}", image.handle),
            RenderNode::Section(section) => format!("Section {:?}", section.title),
            RenderNode::Scroll(_) => "Scroll".to_string(),
        }
    }

    /// Iterate over this node and all nodes below it, in preorder.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Borrow as a section, if this is one.
    pub fn as_section(&self) -> Option<&SectionFrame> {
        match self {
            RenderNode::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Borrow as an image, if this is one.
    pub fn as_image(&self) -> Option<&ImageNode> {
        match self {
            RenderNode::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Borrow as text, if this is a text node.
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            RenderNode::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Preorder iterator returned by [`RenderNode::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a RenderNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RenderNode {
        RenderNode::Text(TextNode::new(s, AttributeSet::new()))
    }

    #[test]
    fn descendants_are_preorder() {
        let tree = RenderNode::View(ViewNode::new(
            AttributeSet::new(),
            vec![
                RenderNode::View(ViewNode::new(AttributeSet::new(), vec![text("a"), text("b")])),
                text("c"),
            ],
        ));

        let texts: Vec<&str> = tree
            .descendants()
            .filter_map(RenderNode::as_text)
            .map(|t| t.text.as_str())
            .collect();

        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(tree.descendants().count(), 5);
    }

    #[test]
    fn section_children_are_body_children() {
        let section = RenderNode::Section(SectionFrame {
            title: "Home".into(),
            style: AttributeSet::new(),
            header: TextNode::new("Home", AttributeSet::new()),
            body: ViewNode::new(AttributeSet::new(), vec![text("inside")]),
        });

        assert_eq!(section.children().len(), 1);
        assert_eq!(section.label(), "Section \"Home\"");
    }
}
