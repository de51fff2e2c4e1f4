//! Composite point-index remapping.
//!
//! Every subglyph of a composite is padded with at least one synthetic
//! point (its own phantom point), which shifts every point index that comes
//! after it. [`remap`] translates a raw point index into the composite's
//! flat numbering given the subglyphs' cumulative point counts.

/// Remaps `idx` using the cumulative per-subglyph point counts `pointsums`.
///
/// `pointsums[i]` is the number of points contributed by subglyphs `0..=i`
/// (including the synthetic point each subglyph gets). For a simple glyph,
/// pass an empty slice; `remap` is then the identity.
///
/// Given the smallest `n` with `idx < pointsums[n]`, the remapped index is
/// `idx + n`. If `idx` is at or beyond every cumulative sum (should not
/// happen for well-formed input), it is shifted by the full subglyph count.
#[must_use]
pub fn remap(pointsums: &[u32], idx: u32) -> u32 {
    let n = pointsums.partition_point(|&sum| sum <= idx);
    idx + n as u32
}
