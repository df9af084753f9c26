//! Stylesheet parser using the `cssparser` crate.
//!
//! The accepted language is a small subset of CSS: class selector lists,
//! flexbox and box-model declarations, colors, and
//! `@media (prefers-color-scheme: ...)` blocks for scheme variants. A
//! vendor declaration, `-sinew-layout`, tags an entry with a
//! [`LayoutModifier`].

use crate::compose::LayoutModifier;
use crate::registry::StyleId;
use crate::rules::StyleRule;
use crate::scheme::ColorScheme;
use crate::style::AttributeSet;
use crate::types::{
    AlignItems, Color, EdgeValues, FlexDirection, FontWeight, JustifyContent, LengthValue,
};
use crate::{Error, Result};
use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, SourceLocation, Token};

type ParseResult<'i, T> = std::result::Result<T, CssParseError<'i, ()>>;

/// Parse a stylesheet string into a list of style rules.
///
/// A rule with a selector list (`.a, .b { ... }`) produces one rule per
/// class. Rules inside a `prefers-color-scheme` block carry that scheme.
///
/// # Error Recovery
///
/// Malformed input never fails the whole parse. Instead the parser:
/// 1. Logs the problem via `tracing::warn!`
/// 2. Skips the offending declaration, or the whole rule when the selector
///    or at-rule is unsupported
/// 3. Continues with what follows
///
/// The result is therefore always `Ok` today. Skipped input is described by
/// [`Error::Parse`] and [`Error::InvalidValue`] in the warning text. The
/// `Result` return leaves room for a strict mode that reports the first
/// such error instead of skipping it.
///
/// # Example
///
/// ```
/// use sinew_style::parser::parse_css;
///
/// let rules = parse_css(".title { font-size: 32; } .subtitle { font-size: 18; }").unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    parse_rule_list(&mut parser, None, &mut rules, &mut order);

    tracing::debug!(rules = rules.len(), "parsed stylesheet");
    Ok(rules)
}

/// Parse rules until the input (or enclosing block) is exhausted.
fn parse_rule_list(
    parser: &mut Parser<'_, '_>,
    scheme: Option<ColorScheme>,
    rules: &mut Vec<StyleRule>,
    order: &mut u32,
) {
    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let location = parser.current_source_location();
        let state = parser.state();

        let result = match parser.next().cloned() {
            Ok(Token::AtKeyword(name)) => {
                if scheme.is_none() && name.eq_ignore_ascii_case("media") {
                    parse_media_rule(parser, rules, order)
                } else {
                    Err(error_at(format!("Unsupported at-rule '@{}'", name), location))
                }
            }
            _ => {
                parser.reset(&state);
                parse_rule(parser, scheme, *order).map(|parsed| {
                    *order += parsed.len() as u32;
                    rules.extend(parsed);
                })
            }
        };

        if let Err(e) = result {
            tracing::warn!("Skipping CSS rule: {}", e);
            skip_to_next_rule(parser);
        }
    }
}

/// Parse `@media (prefers-color-scheme: light|dark) { rules }`.
///
/// The `@media` keyword has already been consumed.
fn parse_media_rule(
    parser: &mut Parser<'_, '_>,
    rules: &mut Vec<StyleRule>,
    order: &mut u32,
) -> Result<()> {
    let location = parser.current_source_location();

    let scheme = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            p.expect_parenthesis_block()?;
            p.parse_nested_block(parse_scheme_feature)
        })
        .map_err(|_: CssParseError<'_, ()>| {
            error_at("Expected media query '(prefers-color-scheme: light | dark)'", location)
        })?;

    parser
        .expect_curly_bracket_block()
        .map_err(|_| error_at("Expected '{' after media query", location))?;

    parser
        .parse_nested_block(|block| {
            parse_rule_list(block, Some(scheme), rules, order);
            Ok::<_, CssParseError<'_, ()>>(())
        })
        .map_err(|_| error_at("Malformed media block", location))
}

fn parse_scheme_feature<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, ColorScheme> {
    let feature = parser.expect_ident()?.clone();
    if !feature.eq_ignore_ascii_case("prefers-color-scheme") {
        return Err(parser.new_custom_error(()));
    }
    parser.expect_colon()?;
    let value = parser.expect_ident()?.clone();
    let scheme = ColorScheme::from_css(&value).ok_or_else(|| parser.new_custom_error(()))?;
    parser.expect_exhausted()?;
    Ok(scheme)
}

/// Parse a single rule: `.class[, .class]* { declarations }`.
fn parse_rule(
    parser: &mut Parser<'_, '_>,
    scheme: Option<ColorScheme>,
    order: u32,
) -> Result<Vec<StyleRule>> {
    let location = parser.current_source_location();

    let ids = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, parse_selectors)
        .map_err(|_| error_at("Expected a list of class selectors", location))?;

    parser
        .expect_curly_bracket_block()
        .map_err(|_| error_at("Expected '{' after selector", location))?;

    let declarations = parser
        .parse_nested_block(|block| {
            Ok::<_, CssParseError<'_, ()>>(parse_declarations(block, scheme))
        })
        .map_err(|_| error_at("Malformed declaration block", location))?;

    Ok(ids
        .into_iter()
        .zip(order..)
        .map(|(id, order)| StyleRule {
            id,
            scheme,
            properties: declarations.properties.clone(),
            modifier: declarations.modifier,
            order,
        })
        .collect())
}

/// Parse a comma-separated list of plain class selectors.
fn parse_selectors<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<StyleId>> {
    let mut ids = vec![];
    let mut expect_class = true;

    loop {
        let token = match parser.next() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::Delim('.') if expect_class => match parser.next_including_whitespace()?.clone() {
                Token::Ident(name) => {
                    ids.push(StyleId::new(name.to_string()));
                    expect_class = false;
                }
                _ => return Err(parser.new_custom_error(())),
            },
            Token::Comma if !expect_class => expect_class = true,
            _ => return Err(parser.new_custom_error(())),
        }
    }

    if expect_class {
        return Err(parser.new_custom_error(()));
    }
    Ok(ids)
}

#[derive(Debug, Default)]
struct Declarations {
    properties: AttributeSet,
    modifier: Option<LayoutModifier>,
}

impl Declarations {
    fn merge(&mut self, other: Declarations) {
        self.properties.merge(&other.properties);
        if other.modifier.is_some() {
            self.modifier = other.modifier;
        }
    }
}

/// Parse the declarations of a block, skipping the ones that fail.
///
/// Each declaration is parsed up to its `;`, so a bad value never consumes
/// the declaration after it. Layout modifiers apply to every scheme, so
/// `-sinew-layout` is skipped inside a color-scheme block.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
    scheme: Option<ColorScheme>,
) -> Declarations {
    let mut declarations = Declarations::default();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let location = parser.current_source_location();
        let name = match parser.next().cloned() {
            Ok(Token::Ident(name)) => name.to_string(),
            Ok(Token::Semicolon) => continue,
            _ => {
                tracing::warn!("{}", error_at("Expected a property name", location));
                skip_declaration(parser);
                continue;
            }
        };

        if parser.expect_colon().is_err() {
            tracing::warn!("{}", error_at(format!("Expected ':' after '{}'", name), location));
            skip_declaration(parser);
            continue;
        }

        if let Some(scheme) = scheme.filter(|_| name.eq_ignore_ascii_case("-sinew-layout")) {
            tracing::warn!(
                line = location.line + 1,
                column = location.column,
                %scheme,
                "Skipping declaration: {}",
                Error::invalid_value(&name, "layout modifiers cannot depend on the color scheme")
            );
            skip_declaration(parser);
            continue;
        }

        let mut parsed = Declarations::default();
        let outcome = parser.parse_until_after(Delimiter::Semicolon, |p| -> ParseResult<'i, bool> {
            let known = parse_property_value(p, &name, &mut parsed)?;
            if known {
                p.expect_exhausted()?;
            }
            Ok(known)
        });

        let message = match outcome {
            Ok(true) => {
                declarations.merge(parsed);
                continue;
            }
            Ok(false) => "unsupported property",
            Err(_) => "malformed value",
        };

        tracing::warn!(
            line = location.line + 1,
            column = location.column,
            "Skipping declaration: {}",
            Error::invalid_value(&name, message)
        );
    }

    declarations
}

/// Parse a single property value.
///
/// Returns `Ok(false)` if the property is not supported.
fn parse_property_value<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
    decl: &mut Declarations,
) -> ParseResult<'i, bool> {
    let props = &mut decl.properties;

    match name.to_ascii_lowercase().as_str() {
        // === Flex layout ===
        "flex" => props.flex = Some(parse_number(parser)?),
        "flex-direction" => {
            props.flex_direction = Some(parse_keyword(parser, FlexDirection::from_css)?)
        }
        "justify-content" => {
            props.justify_content = Some(parse_keyword(parser, JustifyContent::from_css)?)
        }
        "align-items" => props.align_items = Some(parse_keyword(parser, AlignItems::from_css)?),

        // === Size ===
        "width" => props.width = Some(parse_length(parser)?),
        "height" => props.height = Some(parse_length(parser)?),

        // === Spacing ===
        "margin" => props.set_margin(parse_edge_values(parser)?),
        "margin-top" => props.margin_top = Some(parse_length(parser)?),
        "margin-right" => props.margin_right = Some(parse_length(parser)?),
        "margin-bottom" => props.margin_bottom = Some(parse_length(parser)?),
        "margin-left" => props.margin_left = Some(parse_length(parser)?),
        "margin-horizontal" => {
            let value = parse_length(parser)?;
            props.margin_left = Some(value);
            props.margin_right = Some(value);
        }
        "margin-vertical" => {
            let value = parse_length(parser)?;
            props.margin_top = Some(value);
            props.margin_bottom = Some(value);
        }

        "padding" => props.set_padding(parse_edge_values(parser)?),
        "padding-top" => props.padding_top = Some(parse_length(parser)?),
        "padding-right" => props.padding_right = Some(parse_length(parser)?),
        "padding-bottom" => props.padding_bottom = Some(parse_length(parser)?),
        "padding-left" => props.padding_left = Some(parse_length(parser)?),
        "padding-horizontal" => {
            let value = parse_length(parser)?;
            props.padding_left = Some(value);
            props.padding_right = Some(value);
        }
        "padding-vertical" => {
            let value = parse_length(parser)?;
            props.padding_top = Some(value);
            props.padding_bottom = Some(value);
        }

        // === Colors ===
        "background-color" | "background" => props.background_color = Some(parse_color(parser)?),
        "color" => props.color = Some(parse_color(parser)?),

        // === Typography ===
        "font-size" => props.font_size = Some(parse_font_size(parser)?),
        "font-weight" => props.font_weight = Some(parse_font_weight(parser)?),

        "-sinew-layout" => decl.modifier = Some(parse_keyword(parser, LayoutModifier::from_css)?),

        _ => return Ok(false),
    }

    Ok(true)
}

/// Parse a bare number.
fn parse_number<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    Ok(parser.expect_number()?)
}

/// Parse an identifier and map it through a keyword table.
fn parse_keyword<'i, T>(
    parser: &mut Parser<'i, '_>,
    lookup: fn(&str) -> Option<T>,
) -> ParseResult<'i, T> {
    let ident = parser.expect_ident()?.clone();
    lookup(&ident).ok_or_else(|| parser.new_custom_error(()))
}

/// Parse a length value. Unitless numbers are pixels.
fn parse_length<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, LengthValue> {
    let token = parser.next()?.clone();

    match token {
        Token::Number { value, .. } if value == 0.0 => Ok(LengthValue::Zero),
        Token::Number { value, .. } => Ok(LengthValue::Px(value)),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => {
            Ok(LengthValue::Px(value))
        }
        Token::Percentage { unit_value, .. } => Ok(LengthValue::Percent(unit_value * 100.0)),
        Token::Ident(s) if s.eq_ignore_ascii_case("auto") => Ok(LengthValue::Auto),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse 1-4 lengths for the margin and padding shorthands.
fn parse_edge_values<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, EdgeValues> {
    let mut values = vec![];

    while values.len() < 4 {
        match parser.try_parse(parse_length) {
            Ok(value) => values.push(value),
            Err(_) => break,
        }
    }

    EdgeValues::from_shorthand(&values).ok_or_else(|| parser.new_custom_error(()))
}

/// Parse a font size in pixels.
fn parse_font_size<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    match parse_length(parser)? {
        LengthValue::Px(size) => Ok(size),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a color value.
fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Color> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Color::from_hex(&hash).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => Color::named(&name).ok_or_else(|| parser.new_custom_error(())),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                p.expect_exhausted()?;
                Ok(Color::new(r, g, b, a))
            })
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_color_component<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    match *parser.next()? {
        Token::Number { value, .. } => Ok((value / 255.0).clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    match *parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a numeric or keyword font weight.
fn parse_font_weight<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, FontWeight> {
    let token = parser.next()?.clone();

    match token {
        Token::Number {
            int_value: Some(n), ..
        } => u16::try_from(n)
            .map(FontWeight::new)
            .map_err(|_| parser.new_custom_error(())),
        Token::Ident(name) => {
            FontWeight::from_css(&name).ok_or_else(|| parser.new_custom_error(()))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            // Blocks are consumed whole by `next`
            Ok(Token::CurlyBracketBlock) | Err(_) => return,
            Ok(Token::Semicolon) => return,
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    let _ = parser.parse_until_after(Delimiter::Semicolon, |_| Ok::<_, CssParseError<'_, ()>>(()));
}

fn error_at(message: impl Into<String>, location: SourceLocation) -> Error {
    Error::parse(message, location.line + 1, location.column)
}
