//! Debug visualization for rendered trees.
//!
//! ```
//! use sinew_screen::node::{RenderNode, TextNode, ViewNode};
//! use sinew_screen::tree::{TreeFormatOptions, TreeFormatter, TreeStyle};
//! use sinew_style::style::AttributeSet;
//!
//! let tree = RenderNode::View(ViewNode::new(
//!     AttributeSet::new(),
//!     vec![RenderNode::Text(TextNode::new("hello", AttributeSet::new()))],
//! ));
//!
//! let options = TreeFormatOptions { style: TreeStyle::Ascii, ..TreeFormatOptions::minimal() };
//! assert_eq!(TreeFormatter::with_options(options).format(&tree), "View\n`-- Text \"hello\"\n");
//! ```

use std::fmt::Write as FmtWrite;

use sinew_style::style::{AttributeValue, Property};

use crate::node::RenderNode;

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for tree output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to print the composed properties under each node.
    pub show_properties: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_properties: false,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_properties: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self::default()
    }
}

/// Formats a [`RenderNode`] tree as indented text.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    options: TreeFormatOptions,
}

impl TreeFormatter {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a tree.
    pub fn format(&self, root: &RenderNode) -> String {
        let mut output = String::new();
        self.format_into(root, &mut Vec::new(), &mut output);
        output
    }

    // `trail` holds, for each ancestor level, whether that ancestor was the
    // last of its siblings.
    fn format_into(&self, node: &RenderNode, trail: &mut Vec<bool>, output: &mut String) {
        if self.options.max_depth.is_some_and(|max| trail.len() > max) {
            return;
        }

        output.push_str(&self.prefix(trail));
        output.push_str(&node.label());
        output.push('\n');

        if self.options.show_properties {
            let indent = self.continuation(trail);
            for (property, value) in node.style().iter() {
                let value = display_value(property, value);
                let _ = writeln!(output, "{indent}  .{} = {value}", property.css_name());
            }
            if let RenderNode::Section(section) = node {
                let _ = writeln!(output, "{indent}  header {:?}", section.header.text);
                for (property, value) in section.header.style.iter() {
                    let value = display_value(property, value);
                    let _ = writeln!(output, "{indent}    .{} = {value}", property.css_name());
                }
            }
        }

        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            trail.push(i + 1 == children.len());
            self.format_into(child, trail, output);
            trail.pop();
        }
    }

    /// Build the prefix string for a tree node.
    fn prefix(&self, trail: &[bool]) -> String {
        let Some((&is_last, ancestors)) = trail.split_last() else {
            return String::new();
        };

        let (tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|-- ", "`-- "),
            TreeStyle::Unicode => ("\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
        };

        let mut prefix = self.continuation(ancestors);
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }

    /// Indentation that continues the branches of open ancestors.
    fn continuation(&self, trail: &[bool]) -> String {
        let branch = match self.options.style {
            TreeStyle::Ascii => "|   ",
            TreeStyle::Unicode => "\u{2502}   ",
        };

        trail
            .iter()
            .map(|&last| if last { "    " } else { branch })
            .collect()
    }
}

fn display_value(property: Property, value: AttributeValue) -> String {
    match value {
        AttributeValue::Number(n) if property == Property::FontSize => format!("{n}px"),
        AttributeValue::Number(n) => n.to_string(),
        AttributeValue::Length(length) => format!("{length:?}"),
        AttributeValue::Color(color) => color.to_hex(),
        AttributeValue::Weight(weight) => weight.value().to_string(),
        AttributeValue::Direction(direction) => format!("{direction:?}"),
        AttributeValue::Justify(justify) => format!("{justify:?}"),
        AttributeValue::Align(align) => format!("{align:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{TextNode, ViewNode};
    use sinew_style::prelude::*;

    fn leaf(text: &str) -> RenderNode {
        RenderNode::Text(TextNode::new(text, AttributeSet::new()))
    }

    fn sample() -> RenderNode {
        RenderNode::View(ViewNode::new(
            AttributeSet::new(),
            vec![
                RenderNode::View(ViewNode::new(AttributeSet::new(), vec![leaf("a")])),
                leaf("b"),
            ],
        ))
    }

    #[test]
    fn ascii_branches() {
        let formatter = TreeFormatter::with_options(TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..Default::default()
        });

        assert_eq!(
            formatter.format(&sample()),
            "View\n|-- View\n|   `-- Text \"a\"\n`-- Text \"b\"\n"
        );
    }

    #[test]
    fn max_depth_truncates() {
        let formatter = TreeFormatter::with_options(TreeFormatOptions {
            style: TreeStyle::Ascii,
            max_depth: Some(1),
            ..Default::default()
        });

        assert_eq!(formatter.format(&sample()), "View\n|-- View\n`-- Text \"b\"\n");
    }

    #[test]
    fn detailed_lists_properties() {
        let node = RenderNode::Text(TextNode::new(
            "title",
            Style::new().font_size(32.0).color(Color::BLACK).build(),
        ));
        let output = TreeFormatter::with_options(TreeFormatOptions::detailed()).format(&node);

        assert!(output.contains(".font-size = 32px"));
        assert!(output.contains(".color = #000000"));
    }
}
