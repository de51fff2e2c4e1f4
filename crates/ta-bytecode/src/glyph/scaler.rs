//! Builds the push arguments for `bci_scale_glyph`/`bci_scale_composite_glyph`:
//! glyphs with no style, or styles too small to bother hinting, are only
//! scaled, using each contour's extremal y points to keep curves from
//! self-intersecting after rounding.

use crate::point_index::remap;

/// The two points of one contour that carry its minimum and maximum y
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourExtrema {
    /// Raw point index of the contour's lowest point.
    pub min_y_point: u16,
    /// Raw point index of the contour's highest point.
    pub max_y_point: u16,
}

/// Finds a contour's y extrema. `points` is `(point_index, y_coordinate)`
/// pairs in the glyph's raw numbering; ties are broken by the smaller point
/// index, so the result is deterministic regardless of point order.
///
/// # Panics
///
/// Panics if `points` is empty; a contour always has at least one point.
#[must_use]
pub fn find_extrema(points: &[(u16, i32)]) -> ContourExtrema {
    let mut min = points[0];
    let mut max = points[0];
    for &(idx, y) in &points[1..] {
        if y < min.1 || (y == min.1 && idx < min.0) {
            min = (idx, y);
        }
        if y > max.1 || (y == max.1 && idx < max.0) {
            max = (idx, y);
        }
    }
    ContourExtrema {
        min_y_point: min.0,
        max_y_point: max.0,
    }
}

/// Builds the `bci_scale_glyph`/`bci_scale_composite_glyph` push arguments:
/// contour count, then each contour's `(max_y_point, min_y_point)` pair,
/// remapped through `pointsums`.
#[must_use]
pub fn build(contours: &[Vec<(u16, i32)>], pointsums: &[u32]) -> (Vec<u32>, bool) {
    let extrema: Vec<ContourExtrema> = contours.iter().map(|c| find_extrema(c)).collect();

    let remapped: Vec<(u32, u32)> = extrema
        .iter()
        .map(|e| {
            (
                remap(pointsums, u32::from(e.max_y_point)),
                remap(pointsums, u32::from(e.min_y_point)),
            )
        })
        .collect();
    let need_words = remapped.iter().any(|&(a, b)| a > 0xFF || b > 0xFF);

    let mut args = Vec::with_capacity(1 + remapped.len() * 2);
    #[allow(clippy::cast_possible_truncation)] // a glyph never has > u32::MAX contours
    args.push(contours.len() as u32);
    for &(max_y, min_y) in remapped.iter().rev() {
        args.push(max_y);
        args.push(min_y);
    }
    (args, need_words)
}
