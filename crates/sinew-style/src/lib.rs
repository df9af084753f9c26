//! Adaptive style composition for Sinew screens.
//!
//! This crate provides the styling half of Sinew, featuring:
//!
//! - **Registry**: Named, immutable attribute sets loaded from CSS or built in Rust
//! - **Color schemes**: Light/dark variants resolved per render pass
//! - **Composition**: Ordered style lists merged property by property
//! - **Layout modifiers**: Natural, square and aligned image geometry
//!
//! # Example
//!
//! ```
//! use sinew_style::prelude::*;
//!
//! let registry = StyleRegistry::from_css(r#"
//!     .sectionTitle { font-size: 24; font-weight: 600; }
//!     .sectionTitleColor { color: black; }
//!     @media (prefers-color-scheme: dark) {
//!         .sectionTitleColor { color: white; }
//!     }
//! "#)?;
//!
//! let composer = StyleComposer::new(&registry);
//! let header = composer.compose(
//!     &style_ids!["sectionTitle", "sectionTitleColor"],
//!     ColorScheme::Dark,
//! )?;
//!
//! assert_eq!(header.color, Some(Color::WHITE));
//! assert_eq!(header.font_weight, Some(FontWeight::SEMI_BOLD));
//! # Ok::<(), sinew_style::Error>(())
//! ```

pub mod compose;
pub mod parser;
pub mod registry;
pub mod rules;
pub mod scheme;
pub mod style;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::compose::{LayoutModifier, StyleComposer};
    pub use crate::registry::{StyleEntry, StyleId, StyleRegistry};
    pub use crate::scheme::{ColorScheme, FixedScheme, SchemeSource, SystemScheme};
    pub use crate::style::{AttributeSet, AttributeValue, Property, Style};
    pub use crate::style_ids;
    pub use crate::types::{
        AlignItems, Color, EdgeValues, FlexDirection, FontWeight, JustifyContent, LengthValue,
    };
}

static_assertions::assert_impl_all!(registry::StyleRegistry: Send, Sync);
static_assertions::assert_impl_all!(style::AttributeSet: Send, Sync);
