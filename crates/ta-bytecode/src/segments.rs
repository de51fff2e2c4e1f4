//! Builds the push arguments and function selection for a glyph's
//! `bci_create_segments_*` call.
//!
//! Up to the first nine *consecutive, eligible* segments are packed one
//! nibble-byte each; a wrap-around segment (one whose `first` comes after
//! its `last`) is never eligible, so it always ends packing. Every segment
//! past the packed prefix is pushed as an explicit `(first, last)` pair, and
//! a wrap-around segment among them additionally carries its contour's
//! boundary points so the glyph program can recover both physical runs.
//! Each wrap-around segment's second run is then re-emitted, once more, as
//! an independent `(contour_start, last)` pair appended after every other
//! segment, so edges can link to it by index `num_segments + wrap_offset`.

use crate::bci;
use crate::hints::Segment;
use crate::style;

/// Segments beyond which nibble packing stops, even if later segments would
/// individually qualify.
const MAX_PACKED_SEGMENTS: usize = 9;

/// The outcome of [`build`]: which `bci_create_segments_*` function to call,
/// with what push arguments, and whether those arguments need word-sized
/// pushes.
pub struct GlyphSegments {
    /// The `fpgm` function number to `CALL`.
    pub function_number: u8,
    /// Push arguments, in the order they are pushed (the first value here
    /// ends up deepest on the stack; `style_cvt_offset` is pushed last, with
    /// `function_number` pushed separately right after it).
    pub args: Vec<u32>,
    /// Whether any pushed point index exceeds `0xFF`.
    pub need_words: bool,
}

/// Returns `(contour_start, contour_end)` for the contour containing point
/// `first`, given the ascending last-point index of every contour.
fn contour_bounds(first: u16, contour_ends: &[u16]) -> (u16, u16) {
    let mut start = 0;
    for &end in contour_ends {
        if first <= end {
            return (start, end);
        }
        start = end + 1;
    }
    (start, first)
}

/// Greedily packs a prefix of `segments` into one nibble byte each.
///
/// A segment packs iff `first - base` and `last - first` both fit in 4 bits
/// and `first <= last` (wrap-around segments never qualify); `base` starts
/// at 0 and becomes the packed segment's `last` afterwards. Packing stops,
/// for good, at the first segment that fails any of these.
fn pack_nibbles(segments: &[Segment]) -> Vec<u8> {
    let mut packed = Vec::new();
    let mut base = 0u16;
    for &seg in segments {
        if packed.len() >= MAX_PACKED_SEGMENTS || seg.is_wrap_around() || seg.first < base {
            break;
        }
        let low = seg.first - base;
        let high = seg.last - seg.first;
        if low >= 16 || high >= 16 {
            break;
        }
        packed.push((16 * high + low) as u8);
        base = seg.last;
    }
    packed
}

/// Builds the `bci_create_segments_*` call for one glyph outline.
///
/// `wrap_around` lists the indices into `segments` (ascending) whose `first`
/// is after their `last`; `contour_ends` lists the ascending last-point
/// index of every contour in the outline, used to recover those segments'
/// contour boundaries.
#[must_use]
pub fn build(
    segments: &[Segment],
    wrap_around: &[u16],
    contour_ends: &[u16],
    is_composite: bool,
) -> GlyphSegments {
    let packed = pack_nibbles(segments);
    let num_packed = packed.len();

    let base_fn = if is_composite {
        bci::CREATE_SEGMENTS_COMPOSITE_0
    } else {
        bci::CREATE_SEGMENTS_0
    };
    #[allow(clippy::cast_possible_truncation)] // num_packed <= MAX_PACKED_SEGMENTS
    let function_number = base_fn + num_packed as u8;

    let mut unpacked = Vec::new();
    for &seg in &segments[num_packed..] {
        unpacked.push(u32::from(seg.first));
        unpacked.push(u32::from(seg.last));
        if seg.is_wrap_around() {
            let (contour_start, contour_end) = contour_bounds(seg.first, contour_ends);
            unpacked.push(u32::from(contour_end));
            unpacked.push(u32::from(contour_start));
        }
    }

    let mut split_halves = Vec::new();
    for &seg in segments {
        if seg.is_wrap_around() {
            let (contour_start, _) = contour_bounds(seg.first, contour_ends);
            split_halves.push(u32::from(contour_start));
            split_halves.push(u32::from(seg.last));
        }
    }

    #[allow(clippy::cast_possible_truncation)] // a glyph never has u16::MAX segments
    let total_num_segments = segments.len() as u32 + wrap_around.len() as u32;

    let need_words = segments
        .iter()
        .any(|s| s.first > 0xFF || s.last > 0xFF)
        || contour_ends.iter().any(|&end| end > 0xFF);

    let mut args = Vec::with_capacity(split_halves.len() + unpacked.len() + num_packed + 2);
    args.extend(split_halves);
    args.extend(unpacked);
    args.extend(packed.into_iter().map(u32::from));
    args.push(total_num_segments);
    args.push(u32::from(style::CVT_SCALING_VALUE_OFFSET));

    GlyphSegments {
        function_number,
        args,
        need_words,
    }
}
