//! The immutable style registry.

mod entry;
mod id;
mod table;

pub use entry::StyleEntry;
pub use id::StyleId;
pub use table::{RegistryBuilder, StyleRegistry};
