//! Style property value types.

mod color;
mod value;

pub use color::{Color, FontWeight};
pub use value::{AlignItems, EdgeValues, FlexDirection, JustifyContent, LengthValue};
