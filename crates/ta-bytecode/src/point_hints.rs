//! Emits the point-hints push-argument block: the interpolation points an
//! [`crate::actions::ActionRecorder`] collected into its
//! [`crate::hints::OrderedPointSets`], remapped into composite point
//! numbering.
//!
//! If no interpolation points were collected at all, [`emit`] returns an
//! empty argument list; callers must treat that as "no point-hints block",
//! not as a zero-length block (see [`crate::push::optimize_push`]'s
//! `pos[0] == pos[1]` convention).

use crate::bci;
use crate::hints::{Edge, OrderedPointSets};
use crate::point_index::remap;
use std::collections::{BTreeMap, BTreeSet};

/// Builds the point-hints push arguments for one glyph at one ppem.
///
/// `edges` is the glyph's full edge list: `ip_before`/`ip_after` anchor to
/// its overall first and last edge, and `ip_on`/`ip_between` resolve each
/// edge index they were recorded against back to that edge's segment.
#[must_use]
pub fn emit(sets: &OrderedPointSets, edges: &[Edge], pointsums: &[u32]) -> Vec<u32> {
    if sets.is_empty() {
        return Vec::new();
    }

    let mut args = Vec::new();
    if !sets.ip_before.is_empty() {
        let edge = edges.first().expect("ip_before points require an edge");
        emit_anchored_group(&mut args, bci::IP_BEFORE, edge, &sets.ip_before, pointsums);
    }
    if !sets.ip_after.is_empty() {
        let edge = edges.last().expect("ip_after points require an edge");
        emit_anchored_group(&mut args, bci::IP_AFTER, edge, &sets.ip_after, pointsums);
    }
    if !sets.ip_on.is_empty() {
        emit_on(&mut args, edges, &sets.ip_on, pointsums);
    }
    if !sets.ip_between.is_empty() {
        emit_between(&mut args, edges, &sets.ip_between, pointsums);
    }
    args
}

/// `ip_before`/`ip_after`: a single record naming one edge.
fn emit_anchored_group(
    args: &mut Vec<u32>,
    action_code: u8,
    edge: &Edge,
    points: &BTreeSet<u16>,
    pointsums: &[u32],
) {
    args.push(0); // separator
    args.push(u32::from(action_code));
    args.push(u32::from(edge.anchor_segment()));
    push_points(args, points, pointsums);
}

/// `ip_on`: one record for every distinct edge, preceded by the edge count.
fn emit_on(
    args: &mut Vec<u32>,
    edges: &[Edge],
    group: &BTreeMap<u16, BTreeSet<u16>>,
    pointsums: &[u32],
) {
    args.push(0); // separator
    args.push(u32::from(bci::IP_ON));
    #[allow(clippy::cast_possible_truncation)] // a glyph never has > u32::MAX edges
    args.push(group.len() as u32);
    for (&edge_idx, points) in group {
        let edge = &edges[usize::from(edge_idx)];
        args.push(u32::from(edge.anchor_segment()));
        push_points(args, points, pointsums);
    }
}

/// `ip_between`: one record for every distinct `(before, after)` edge pair,
/// preceded by the pair count; each pair pushes `after`'s segment before
/// `before`'s.
fn emit_between(
    args: &mut Vec<u32>,
    edges: &[Edge],
    group: &BTreeMap<(u16, u16), BTreeSet<u16>>,
    pointsums: &[u32],
) {
    args.push(0); // separator
    args.push(u32::from(bci::IP_BETWEEN));
    #[allow(clippy::cast_possible_truncation)] // a glyph never has > u32::MAX edge pairs
    args.push(group.len() as u32);
    for (&(before_edge, after_edge), points) in group {
        let before = &edges[usize::from(before_edge)];
        let after = &edges[usize::from(after_edge)];
        args.push(u32::from(after.anchor_segment()));
        args.push(u32::from(before.anchor_segment()));
        push_points(args, points, pointsums);
    }
}

fn push_points(args: &mut Vec<u32>, points: &BTreeSet<u16>, pointsums: &[u32]) {
    #[allow(clippy::cast_possible_truncation)] // a glyph never has > u32::MAX points
    args.push(points.len() as u32);
    for &point in points {
        args.push(remap(pointsums, u32::from(point)));
    }
}
