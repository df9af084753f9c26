//! Registry loading tests.

use std::io::Write;

use sinew_style::prelude::*;
use sinew_style::Error;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        ".banner {{ flex-direction: row; background-color: #BCCDA9; padding: 10; }}\n\
         .bannerText {{ flex: 1; font-size: 16; font-weight: bold; color: #333; }}"
    )
    .expect("Failed to write stylesheet");

    let registry = StyleRegistry::from_file(file.path()).expect("Failed to load stylesheet");

    assert_eq!(registry.len(), 2);
    let banner = registry.lookup("banner").unwrap();
    assert_eq!(banner.base.flex_direction, Some(FlexDirection::Row));
    assert_eq!(banner.base.background_color, Some(Color::from_rgb8(0xBC, 0xCD, 0xA9)));
    assert_eq!(registry.lookup("bannerText").unwrap().base.font_weight, Some(FontWeight::BOLD));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.css");

    match StyleRegistry::from_file(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_repeated_classes_merge() {
    let registry = StyleRegistry::from_css(
        r#"
        .container { flex: 1; justify-content: center; }
        .container { align-items: center; padding: 10; }
        "#,
    )
    .unwrap();

    let base = &registry.lookup("container").unwrap().base;
    assert_eq!(base.flex, Some(1.0));
    assert_eq!(base.justify_content, Some(JustifyContent::Center));
    assert_eq!(base.align_items, Some(AlignItems::Center));
    assert_eq!(base.padding_bottom, Some(LengthValue::px(10.0)));
}

#[test]
fn test_scheme_only_entry() {
    let registry = StyleRegistry::from_css(
        r#"
        @media (prefers-color-scheme: light) { .background { background-color: white; } }
        @media (prefers-color-scheme: dark) { .background { background-color: black; } }
        "#,
    )
    .unwrap();

    let entry = registry.lookup("background").unwrap();
    assert!(entry.base.is_empty());
    assert!(entry.has_scheme_override());
    assert_eq!(entry.resolve(ColorScheme::Light).background_color, Some(Color::WHITE));
    assert_eq!(entry.resolve(ColorScheme::Dark).background_color, Some(Color::BLACK));
}

#[test]
fn test_malformed_stylesheet_still_loads() {
    let registry = StyleRegistry::from_css(
        r#"
        .good { font-size: 18; }
        .broken { font-size: ; color: ???; }
        div > .nope { color: red; }
        .alsoGood { font-weight: 400 }
        "#,
    )
    .unwrap();

    assert!(registry.contains("good"));
    assert!(registry.contains("broken"));
    assert!(registry.lookup("broken").unwrap().base.is_empty());
    assert!(!registry.contains("nope"));
    assert_eq!(registry.lookup("alsoGood").unwrap().base.font_weight, Some(FontWeight::NORMAL));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry =
        std::sync::Arc::new(StyleRegistry::from_css(".title { font-size: 32; }").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                StyleComposer::new(&registry)
                    .compose(&style_ids!["title"], ColorScheme::Light)
                    .map(|attrs| attrs.font_size)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), Some(32.0));
    }
}

#[test]
fn test_scheme_block_layout_modifier_is_skipped() {
    let registry = StyleRegistry::from_css(
        r#"
        .hero { width: 400; height: 120; }
        @media (prefers-color-scheme: dark) {
            .hero { -sinew-layout: square; color: white; }
        }
        "#,
    )
    .unwrap();

    let entry = registry.lookup("hero").unwrap();
    assert_eq!(entry.modifier, None);
    assert_eq!(entry.dark.color, Some(Color::WHITE));

    let composer = StyleComposer::new(&registry);
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let attrs = composer.compose(&style_ids!["hero"], scheme).unwrap();
        assert_eq!(attrs.width, Some(LengthValue::px(400.0)));
        assert_eq!(attrs.height, Some(LengthValue::px(120.0)));
    }
}

#[test]
fn test_scheme_block_alignment_does_not_conflict() {
    let registry = StyleRegistry::from_css(
        r#"
        .a { margin-right: 160; -sinew-layout: left; }
        .b { margin-top: 16; }
        @media (prefers-color-scheme: dark) {
            .b { -sinew-layout: right; }
        }
        "#,
    )
    .unwrap();

    let composer = StyleComposer::new(&registry);
    let light = composer.compose(&style_ids!["a", "b"], ColorScheme::Light).unwrap();
    let dark = composer.compose(&style_ids!["a", "b"], ColorScheme::Dark).unwrap();

    assert_eq!(light, dark);
    assert_eq!(light.margin_right, Some(LengthValue::px(160.0)));
}

#[test]
fn test_hand_built_scheme_rule_modifier_is_ignored() {
    use sinew_style::rules::StyleRule;

    let registry = StyleRegistry::from_rules([
        StyleRule::new("thumb", Style::new().width(LengthValue::px(300.0)).build(), 0),
        StyleRule::new("thumb", Style::new().color(Color::WHITE).build(), 1)
            .with_scheme(ColorScheme::Dark)
            .with_modifier(LayoutModifier::Square),
    ]);

    let entry = registry.lookup("thumb").unwrap();
    assert_eq!(entry.modifier, None);
    assert_eq!(entry.resolve(ColorScheme::Dark).color, Some(Color::WHITE));
}
