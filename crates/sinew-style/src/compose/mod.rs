//! Style list composition and layout modifiers.

mod composer;
mod modifier;

pub use composer::StyleComposer;
pub use modifier::LayoutModifier;
