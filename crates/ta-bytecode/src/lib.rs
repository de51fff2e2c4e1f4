//! TrueType auto-hinting bytecode emission.
//!
//! Given an outline's segments, edges and blue-zone associations, plus a
//! [`HintSource`] able to replay an auto-hinter's analysis at any ppem, this
//! crate assembles the four bytecode streams a hinted TrueType font needs:
//! `fpgm` ([`program::fpgm`]), `prep` ([`program::prep`]), `cvt`
//! ([`program::cvt`]) and each glyph's own `glyf` instructions
//! ([`glyph::GlyphDriver`]).
//!
//! This crate does not itself run font outline analysis, stem detection or
//! blue-zone fitting; it turns the *results* of that analysis into
//! bytecode.

mod actions;
mod bci;
mod control;
mod errors;
mod glyph;
mod hints;
mod opcodes;
mod point_hints;
mod point_index;
mod push;
mod records;
mod segments;
mod style;
#[cfg(test)]
mod tests;

pub mod program;

pub use crate::actions::{Action, ActionRecorder};
pub use crate::control::{
    build_delta_exceptions, ControlCursor, ControlKind, Ctrl, CONTROL_DELTA_PPEM_MIN,
};
pub use crate::errors::HintError;
pub use crate::glyph::composite::SubglyphShift;
pub use crate::glyph::{GlyphDriver, GlyphInput};
pub use crate::hints::{BlueAssociation, Edge, EdgeFlags, OrderedPointSets, Point, PointFlags, Segment};
pub use crate::opcodes::Opcode;
pub use crate::point_index::remap as remap_point_index;
pub use crate::style::Style;

/// Replays one ppem's worth of auto-hinting analysis into an
/// [`ActionRecorder`].
///
/// Implementors wrap whatever outline-analysis engine produced the
/// segments, edges and point classifications this crate was handed; `prime`
/// is called once per ppem in a glyph's hinting range, in ascending order,
/// and must report every action exactly as that ppem's analysis found it.
pub trait HintSource {
    /// Re-runs the analysis at `ppem`, recording every action into
    /// `recorder`.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::Source`] if the analysis cannot be completed at
    /// this ppem.
    fn prime(&mut self, ppem: u16, recorder: &mut ActionRecorder<'_>) -> Result<(), HintError>;
}
