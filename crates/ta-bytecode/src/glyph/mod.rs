//! Per-glyph instruction assembly.

pub mod composite;
mod driver;
pub mod scaler;

pub use driver::{GlyphDriver, GlyphInput};
