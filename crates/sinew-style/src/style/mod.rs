//! Attribute sets and the style builder.

mod attributes;
mod builder;

pub use attributes::{AttributeSet, AttributeValue, Property};
pub use builder::Style;
