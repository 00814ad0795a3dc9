//! Configuration loader, schema types and the style-sheet bootstrap.
//!
//! This module exposes the settings that drive the polling loop and
//! helpers to locate and load them from disk.

mod load;
mod schema;
mod style;

pub use load::*;
pub use schema::*;
pub use style::*;
