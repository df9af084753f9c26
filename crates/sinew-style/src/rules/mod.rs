//! Parsed style rules.

mod rule;

pub use rule::StyleRule;
