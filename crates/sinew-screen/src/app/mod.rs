//! The built-in Sinew Strength screen.
//!
//! The stylesheet and the document are built once per process and shared
//! by every render pass. Only the scheme changes between passes.

use std::sync::OnceLock;

use sinew_style::registry::StyleRegistry;
use sinew_style::scheme::SystemScheme;

use crate::block::ContentBlock;
use crate::document::{DocumentDefinition, RenderedDocument, ScreenAssembler};
use crate::element::StyledElement;
use crate::host::{DefaultHost, Host};
use crate::section::Section;
use crate::Result;

/// The built-in stylesheet.
pub const STYLESHEET: &str = include_str!("sinew.css");

const HOMEPAGE_TRAINER: &str = "homepage_trainer.jpeg";
const WOMAN_TRAINER: &str = "woman_trainer.jpeg";

static REGISTRY: OnceLock<StyleRegistry> = OnceLock::new();
static DOCUMENT: OnceLock<DocumentDefinition> = OnceLock::new();

/// The registry parsed from [`STYLESHEET`].
pub fn registry() -> Result<&'static StyleRegistry> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }

    let registry = StyleRegistry::from_css(STYLESHEET)?;
    tracing::debug!(styles = registry.len(), "loaded built-in stylesheet");
    Ok(REGISTRY.get_or_init(|| registry))
}

/// The Sinew Strength document.
pub fn document() -> &'static DocumentDefinition {
    DOCUMENT.get_or_init(sinew_document)
}

/// Render the built-in document under the system color scheme.
pub fn build_document() -> Result<RenderedDocument> {
    build_document_with(&DefaultHost::new(SystemScheme))
}

/// Render the built-in document with a custom host.
pub fn build_document_with<H: Host>(host: &H) -> Result<RenderedDocument> {
    ScreenAssembler::new(registry()?).assemble(document(), host)
}

fn sinew_document() -> DocumentDefinition {
    DocumentDefinition::new(StyledElement::text(
        "Sign up now and receive a 50% discount!",
        ["bannerText"],
    ))
    .with_section(Section::new("Home", home()))
    .with_section(Section::new("About", about()))
}

fn home() -> ContentBlock {
    ContentBlock::new("home")
        .with(StyledElement::text("Welcome to Sinew Strength App!", ["title"]))
        .with(StyledElement::text("Ready to go to the next level.", ["subtitle"]))
        .with(StyledElement::image(HOMEPAGE_TRAINER, ["image"]))
        .with(StyledElement::image(WOMAN_TRAINER, ["image", "squareImage", "leftImage"]))
        .with(StyledElement::image(WOMAN_TRAINER, ["image", "squareImage", "leftImage"]))
}

fn about() -> ContentBlock {
    ContentBlock::new("about")
        .with(StyledElement::text("About Sinew Strength", ["title"]))
        .with(StyledElement::image(HOMEPAGE_TRAINER, ["image", "titleImage"]))
        .with(StyledElement::text(
            "Coaching, programming and progress tracking in one place.",
            ["subtitle"],
        ))
        .with(StyledElement::text("Certified trainers, every session.", ["subtitle", "highlight"]))
        .with(StyledElement::image(WOMAN_TRAINER, ["image", "squareImage", "rightImage"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinew_style::prelude::*;

    #[test]
    fn test_stylesheet_defines_every_referenced_style() {
        let registry = registry().unwrap();
        let document = document();

        let referenced = document
            .sections()
            .iter()
            .flat_map(|section| section.body().elements())
            .chain(std::iter::once(document.banner()))
            .flat_map(|element| element.styles());

        for id in referenced {
            assert!(registry.contains(id.as_str()), "missing style {id}");
        }
    }

    #[test]
    fn test_registry_is_shared() {
        let first = registry().unwrap() as *const StyleRegistry;
        let second = registry().unwrap() as *const StyleRegistry;
        assert_eq!(first, second);
    }

    #[test]
    fn test_stylesheet_values() {
        let registry = registry().unwrap();
        let composer = StyleComposer::new(registry);

        let banner = composer.compose_one("banner", ColorScheme::Light).unwrap();
        assert_eq!(banner.background_color, Color::from_hex("#BCCDA9"));
        assert_eq!(banner.flex_direction, Some(FlexDirection::Row));

        let title = composer.compose_one("title", ColorScheme::Dark).unwrap();
        assert_eq!(title.color, Some(Color::from_rgb8(83, 104, 120)));
        assert_eq!(title.font_weight, Some(FontWeight::SEMI_BOLD));

        let background = composer.compose_one("background", ColorScheme::Dark).unwrap();
        assert_eq!(background.background_color, Some(Color::BLACK));
        assert_eq!(background.flex, Some(1.0));
    }
}
