//! Top-level per-glyph orchestration: sweeps every hinted ppem, records
//! that ppem's actions, deduplicates the results into ranges, and emits the
//! finished `glyf` instruction stream — or one of the cheaper fallback
//! programs for glyphs that don't go through the full hinting ladder.

use crate::actions::ActionRecorder;
use crate::bci;
use crate::errors::HintError;
use crate::glyph::composite::{self, SubglyphShift};
use crate::glyph::scaler;
use crate::hints::{Edge, Segment};
use crate::opcodes::Opcode;
use crate::point_hints;
use crate::push::emit_push;
use crate::records::{self, PpemHints};
use crate::segments;
use crate::style::Style;
use crate::HintSource;

/// Everything [`GlyphDriver::build_program`] needs about one glyph, gathered
/// from the font's own outline tables plus the auto-hinter's analysis.
pub struct GlyphInput<'a> {
    /// Whether the glyph has no outline at all (e.g. space).
    pub is_empty: bool,
    /// Whether the glyph is a composite (built from subglyphs).
    pub is_composite: bool,
    /// The style this glyph was classified into.
    pub style: Style,
    /// The glyph's segments, in the order [`crate::segments::build`] expects.
    pub segments: &'a [Segment],
    /// Indices into `segments` that wrap their contour's boundary.
    pub wrap_around_segments: &'a [u16],
    /// Ascending last-point index of every contour.
    pub contour_ends: &'a [u16],
    /// The glyph's edges.
    pub edges: &'a [Edge],
    /// Cumulative per-subglyph point counts, for composite remapping; empty
    /// for simple glyphs.
    pub pointsums: &'a [u32],
    /// Each contour's points as `(point_index, y_coordinate)`, used only by
    /// the scaler fallback.
    pub contours: &'a [Vec<(u16, i32)>],
    /// If this is a composite glyph whose subglyphs were already hinted
    /// independently, the per-subglyph shift to apply instead of running
    /// the hinting ladder again.
    pub subglyph_shifts: Option<&'a [SubglyphShift]>,
}

/// Drives one glyph's ppem sweep and assembles its final instruction
/// stream.
pub struct GlyphDriver {
    /// Smallest ppem the hinting ladder is built for.
    pub hinting_range_min: u16,
    /// Largest ppem the hinting ladder is built for.
    pub hinting_range_max: u16,
}

impl GlyphDriver {
    /// Builds the complete `glyf` instruction stream for one glyph.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::InvalidArgument`] if an edge references a
    /// segment index out of range for `input.segments`, and propagates
    /// whatever [`HintSource::prime`] returns.
    pub fn build_program<S: HintSource>(
        &self,
        input: &GlyphInput<'_>,
        source: &mut S,
    ) -> Result<Vec<u8>, HintError> {
        if input.is_empty {
            return Ok(Vec::new());
        }
        validate(input)?;
        if let Some(shifts) = input.subglyph_shifts {
            return Ok(build_composite_shift_program(shifts));
        }
        if !input.style.is_hinted() {
            return Ok(build_scaler_program(input));
        }

        let seg_build = segments::build(
            input.segments,
            input.wrap_around_segments,
            input.contour_ends,
            input.is_composite,
        );

        #[allow(clippy::cast_possible_truncation)] // a glyph never has > u16::MAX segments
        let num_segments = input.segments.len() as u16;

        let mut sweep = Vec::new();
        for ppem in self.hinting_range_min..=self.hinting_range_max {
            let mut recorder =
                ActionRecorder::new(input.edges, num_segments, input.wrap_around_segments);
            source.prime(ppem, &mut recorder)?;

            let point_args = point_hints::emit(recorder.point_sets(), input.edges, input.pointsums);
            let point_need_words = point_args.iter().any(|&a| a > 0xFF);
            let (action_args, _sets) = recorder.into_parts();
            let action_need_words = action_args.iter().any(|&a| a > 0xFF);

            sweep.push(PpemHints {
                ppem,
                point_args,
                action_args,
                point_need_words,
                action_need_words,
            });
        }

        let records = records::dedup(sweep);
        if records.len() == 1 && records[0].action_args.is_empty() && records[0].point_args.is_empty()
        {
            return Ok(build_scaler_program(input));
        }

        let mut buf = Vec::new();
        emit_push(&mut buf, &seg_build.args, seg_build.need_words, true);
        emit_push(&mut buf, &[u32::from(seg_build.function_number)], false, true);
        buf.push(Opcode::Call.byte());
        buf.extend(records::emit(&records));
        Ok(buf)
    }
}

/// Rejects caller-supplied edges that reference a segment index out of
/// range, rather than panicking deep inside [`crate::actions`] once the
/// sweep is under way.
fn validate(input: &GlyphInput<'_>) -> Result<(), HintError> {
    let num_segments = input.segments.len();
    for edge in input.edges {
        for &seg in &edge.segments {
            if usize::from(seg) >= num_segments {
                return Err(HintError::InvalidArgument {
                    reason: "edge references an out-of-range segment index",
                });
            }
        }
    }
    Ok(())
}

fn build_scaler_program(input: &GlyphInput<'_>) -> Vec<u8> {
    let (args, need_words) = scaler::build(input.contours, input.pointsums);
    let function_number = if input.is_composite {
        bci::SCALE_COMPOSITE_GLYPH
    } else {
        bci::SCALE_GLYPH
    };

    let mut buf = Vec::new();
    emit_push(&mut buf, &args, need_words, true);
    emit_push(&mut buf, &[u32::from(function_number)], false, true);
    buf.push(Opcode::Call.byte());
    buf
}

fn build_composite_shift_program(shifts: &[SubglyphShift]) -> Vec<u8> {
    let (args, need_words) = composite::build(shifts);

    let mut buf = Vec::new();
    emit_push(&mut buf, &args, need_words, true);
    emit_push(&mut buf, &[u32::from(bci::SHIFT_SUBGLYPH)], false, true);
    buf.push(Opcode::Call.byte());
    buf
}
