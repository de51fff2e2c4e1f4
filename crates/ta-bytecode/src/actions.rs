//! Hinting actions and the recorder that turns a stream of them into the
//! push-argument list a glyph's hint program is built from.
//!
//! A [`crate::HintSource`] replays one ppem's worth of analysis as a
//! sequence of [`Action`]s. Interpolation actions (`IpBefore`, `IpAfter`,
//! `IpOn`, `IpBetween`) are collected into an [`crate::hints::OrderedPointSets`]
//! for [`crate::point_hints`] to emit later; every other action names the
//! edges it concerns and is encoded immediately into the recorder's
//! argument buffer.

use crate::bci;
use crate::hints::{Edge, OrderedPointSets};

/// One hinting action reported by a [`crate::HintSource`] while replaying a
/// ppem's analysis.
///
/// Edges are referenced by index into the glyph's edge list; points are raw
/// (pre composite-remap) point indices. None of the non-interpolation
/// actions carry a point: they act on one or more edges, which is why they
/// have no `point` field (only the four `Ip*` actions and `Bound` do).
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum Action {
    /// `stem_edge` is linked to the reference point `base_edge` placed.
    Link { base_edge: u16, stem_edge: u16 },
    /// `edge` is anchored, establishing RP0/RP1 for later actions; `edge2`
    /// contributes the serif flag bit.
    Anchor { edge: u16, edge2: u16 },
    /// `edge` is adjusted relative to the reference point `edge2` placed,
    /// optionally bounded below by `edge_minus_one`.
    Adjust {
        edge: u16,
        edge2: u16,
        edge_minus_one: Option<u16>,
    },
    /// `edge` is anchored directly to `blue_edge`'s blue-zone CVT entry,
    /// pre-resolved to `blue_cvt_idx`.
    BlueAnchor {
        edge: u16,
        blue_edge: u16,
        blue_cvt_idx: u16,
    },
    /// `edge` and `edge2` form a stem whose width is adjusted together,
    /// optionally bounded below by `edge_minus_one`.
    Stem {
        edge: u16,
        edge2: u16,
        edge_minus_one: Option<u16>,
    },
    /// `edge` is snapped onto its pre-resolved blue-zone CVT entry.
    Blue { edge: u16, blue_cvt_idx: u16 },
    /// `serif` is a serif's own edge, linked through `base`.
    Serif {
        serif: u16,
        base: u16,
        lower_bound: Option<u16>,
        upper_bound: Option<u16>,
    },
    /// `edge` is anchored on the far side of a serif.
    SerifAnchor {
        edge: u16,
        lower_bound: Option<u16>,
        upper_bound: Option<u16>,
    },
    /// First pass of a two-pass serif link, bracketed by `before` and
    /// `after`.
    SerifLink1 {
        before: u16,
        edge: u16,
        after: u16,
        lower_bound: Option<u16>,
        upper_bound: Option<u16>,
    },
    /// Second pass of a two-pass serif link.
    SerifLink2 {
        edge: u16,
        lower_bound: Option<u16>,
        upper_bound: Option<u16>,
    },
    /// `point` interpolates before the glyph's first edge.
    IpBefore { point: u16 },
    /// `point` interpolates after the glyph's last edge.
    IpAfter { point: u16 },
    /// `point` interpolates onto a single edge.
    IpOn { point: u16, edge: u16 },
    /// `point` interpolates between two edges.
    IpBetween {
        point: u16,
        before_edge: u16,
        after_edge: u16,
    },
    /// A contour's extremal point, recorded for bookkeeping only; never
    /// contributes bytecode of its own.
    Bound { point: u16 },
}

/// Collects a ppem's worth of [`Action`]s into push arguments plus ordered
/// interpolation point sets.
///
/// The argument buffer is meant to be handed to [`crate::push::emit_push`]
/// wholesale; it is not itself bytecode.
pub struct ActionRecorder<'a> {
    edges: &'a [Edge],
    num_segments: u16,
    wrap_around_segments: &'a [u16],
    args: Vec<u32>,
    sets: OrderedPointSets,
    num_actions: u32,
}

impl<'a> ActionRecorder<'a> {
    /// Creates a recorder for a glyph whose edges are `edges`, built from
    /// `num_segments` segments, `wrap_around_segments` of which (sorted
    /// ascending) wrap around their contour's boundary.
    #[must_use]
    pub fn new(edges: &'a [Edge], num_segments: u16, wrap_around_segments: &'a [u16]) -> Self {
        Self {
            edges,
            num_segments,
            wrap_around_segments,
            args: Vec::new(),
            sets: OrderedPointSets::new(),
            num_actions: 0,
        }
    }

    /// Discards everything recorded so far, keeping allocations for reuse
    /// across ppem values.
    pub fn rewind(&mut self) {
        self.args.clear();
        self.sets.clear();
        self.num_actions = 0;
    }

    /// Records one action.
    pub fn record(&mut self, action: Action) {
        match action {
            Action::Bound { .. } => {}
            Action::IpBefore { point } => self.sets.insert_before(point),
            Action::IpAfter { point } => self.sets.insert_after(point),
            Action::IpOn { point, edge } => self.sets.insert_on(edge, point),
            Action::IpBetween {
                point,
                before_edge,
                after_edge,
            } => self.sets.insert_between(before_edge, after_edge, point),
            other => self.record_edge_action(other),
        }
    }

    fn record_edge_action(&mut self, action: Action) {
        self.args.push(0); // separator between action records
        match action {
            Action::Link {
                base_edge,
                stem_edge,
            } => {
                let bits = u32::from(self.is_serif(stem_edge)) | (u32::from(self.is_round(base_edge)) << 1);
                self.args.push(u32::from(bci::LINK) + bits);
                self.args.push(self.edge_seg(base_edge));
                self.args.push(self.edge_seg(stem_edge));
                self.push_edge_segments(stem_edge);
            }
            Action::Anchor { edge, edge2 } => {
                let bits = u32::from(self.is_serif(edge2)) | (u32::from(self.is_round(edge)) << 1);
                self.args.push(u32::from(bci::ANCHOR) + bits);
                self.args.push(self.edge_seg(edge));
                self.args.push(self.edge_seg(edge2));
                self.push_edge_segments(edge);
            }
            Action::Adjust {
                edge,
                edge2,
                edge_minus_one,
            } => {
                let bits = u32::from(self.is_serif(edge2))
                    | (u32::from(self.is_round(edge)) << 1)
                    | (u32::from(edge_minus_one.is_some()) << 2);
                self.args.push(u32::from(bci::ADJUST) + bits);
                self.args.push(self.edge_seg(edge));
                self.args.push(self.edge_seg(edge2));
                if let Some(edge_minus_one) = edge_minus_one {
                    self.args.push(self.edge_seg(edge_minus_one));
                }
                self.push_edge_segments(edge);
            }
            Action::BlueAnchor {
                edge,
                blue_edge,
                blue_cvt_idx,
            } => {
                self.args.push(u32::from(bci::BLUE_ANCHOR));
                self.args.push(self.edge_seg(blue_edge));
                self.args.push(u32::from(blue_cvt_idx));
                self.args.push(self.edge_seg(edge));
                self.push_edge_segments(edge);
            }
            Action::Stem {
                edge,
                edge2,
                edge_minus_one,
            } => {
                let bits = u32::from(self.is_serif(edge2))
                    | (u32::from(self.is_round(edge)) << 1)
                    | (u32::from(edge_minus_one.is_some()) << 2);
                self.args.push(u32::from(bci::STEM) + bits);
                self.args.push(self.edge_seg(edge));
                self.args.push(self.edge_seg(edge2));
                if let Some(edge_minus_one) = edge_minus_one {
                    self.args.push(self.edge_seg(edge_minus_one));
                }
                self.push_edge_segments(edge);
                self.push_edge_segments(edge2);
            }
            Action::Blue { edge, blue_cvt_idx } => {
                self.args.push(u32::from(bci::BLUE));
                self.args.push(u32::from(blue_cvt_idx));
                self.args.push(self.edge_seg(edge));
                self.push_edge_segments(edge);
            }
            Action::Serif {
                serif,
                base,
                lower_bound,
                upper_bound,
            } => {
                let bits = self.bound_bits(lower_bound, upper_bound);
                self.args.push(u32::from(bci::SERIF) + bits);
                self.args.push(self.edge_seg(serif));
                self.args.push(self.edge_seg(base));
                self.push_bounds(lower_bound, upper_bound);
                self.push_edge_segments(serif);
            }
            Action::SerifAnchor {
                edge,
                lower_bound,
                upper_bound,
            } => {
                let bits = self.bound_bits(lower_bound, upper_bound);
                self.args.push(u32::from(bci::SERIF_ANCHOR) + bits);
                self.args.push(self.edge_seg(edge));
                self.push_bounds(lower_bound, upper_bound);
                self.push_edge_segments(edge);
            }
            Action::SerifLink1 {
                before,
                edge,
                after,
                lower_bound,
                upper_bound,
            } => {
                let bits = self.bound_bits(lower_bound, upper_bound);
                self.args.push(u32::from(bci::SERIF_LINK1) + bits);
                self.args.push(self.edge_seg(before));
                self.args.push(self.edge_seg(edge));
                self.args.push(self.edge_seg(after));
                self.push_bounds(lower_bound, upper_bound);
                self.push_edge_segments(edge);
            }
            Action::SerifLink2 {
                edge,
                lower_bound,
                upper_bound,
            } => {
                let bits = self.bound_bits(lower_bound, upper_bound);
                self.args.push(u32::from(bci::SERIF_LINK2) + bits);
                self.args.push(self.edge_seg(edge));
                self.push_bounds(lower_bound, upper_bound);
                self.push_edge_segments(edge);
            }
            Action::Bound { .. }
            | Action::IpBefore { .. }
            | Action::IpAfter { .. }
            | Action::IpOn { .. }
            | Action::IpBetween { .. } => {
                unreachable!("interpolation and bound actions are handled by `record`")
            }
        }
        self.num_actions += 1;
    }

    fn is_serif(&self, edge_idx: u16) -> bool {
        self.edges[usize::from(edge_idx)].is_serif()
    }

    fn is_round(&self, edge_idx: u16) -> bool {
        self.edges[usize::from(edge_idx)].is_round()
    }

    fn bound_bits(&self, lower_bound: Option<u16>, upper_bound: Option<u16>) -> u32 {
        u32::from(lower_bound.is_some()) | (u32::from(upper_bound.is_some()) << 1)
    }

    fn push_bounds(&mut self, lower_bound: Option<u16>, upper_bound: Option<u16>) {
        if let Some(lower_bound) = lower_bound {
            self.args.push(self.edge_seg(lower_bound));
        }
        if let Some(upper_bound) = upper_bound {
            self.args.push(self.edge_seg(upper_bound));
        }
    }

    /// The segment index of an edge's anchor segment, as a plain (non-wrap-
    /// adjusted) reference.
    fn edge_seg(&self, edge_idx: u16) -> u32 {
        u32::from(self.edges[usize::from(edge_idx)].anchor_segment())
    }

    fn is_wrap_around(&self, seg_idx: u16) -> bool {
        self.wrap_around_segments.contains(&seg_idx)
    }

    /// The synthetic index a wrap-around segment's second physical half is
    /// addressed by: `num_segments + position among wrap-around segments`.
    fn wrap_tail_index(&self, seg_idx: u16) -> u32 {
        let pos = self
            .wrap_around_segments
            .iter()
            .position(|&s| s == seg_idx)
            .expect("seg_idx is a wrap-around segment");
        u32::from(self.num_segments) + pos as u32
    }

    /// Serializes an edge's segment list: the anchor segment, the segment
    /// count (a wrap-around segment counts twice), then every other segment
    /// in the edge's circular link list — each segment's raw index,
    /// followed by its synthetic tail index if it wraps around.
    fn push_edge_segments(&mut self, edge_idx: u16) {
        let edge = &self.edges[usize::from(edge_idx)];
        let num_segs: u32 = edge
            .segments
            .iter()
            .map(|&s| if self.is_wrap_around(s) { 2 } else { 1 })
            .sum();

        let anchor = edge.anchor_segment();
        self.args.push(u32::from(anchor));
        self.args.push(num_segs);
        if self.is_wrap_around(anchor) {
            self.args.push(self.wrap_tail_index(anchor));
        }

        for &seg in &edge.segments[1..] {
            self.args.push(u32::from(seg));
            if self.is_wrap_around(seg) {
                self.args.push(self.wrap_tail_index(seg));
            }
        }
    }

    /// The recorded push arguments, not yet turned into bytecode.
    #[must_use]
    pub fn args(&self) -> &[u32] {
        &self.args
    }

    /// The points collected for interpolation actions.
    #[must_use]
    pub fn point_sets(&self) -> &OrderedPointSets {
        &self.sets
    }

    /// How many non-interpolation, non-bound actions were recorded.
    #[must_use]
    pub fn num_actions(&self) -> u32 {
        self.num_actions
    }

    /// Consumes the recorder, returning its argument buffer and point sets.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u32>, OrderedPointSets) {
        (self.args, self.sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::EdgeFlags;

    fn edge(segments: &[u16]) -> Edge {
        Edge {
            segments: segments.to_vec(),
            flags: EdgeFlags::NONE,
            blue: None,
        }
    }

    fn edge_with_flags(segments: &[u16], flags: EdgeFlags) -> Edge {
        Edge {
            segments: segments.to_vec(),
            flags,
            blue: None,
        }
    }

    #[test]
    fn anchor_emits_separator_code_edge_segs_and_segment_list() {
        let edges = [edge(&[0, 1]), edge(&[2])];
        let mut rec = ActionRecorder::new(&edges, 3, &[]);
        rec.record(Action::Anchor { edge: 0, edge2: 1 });

        // separator, code, edge_seg(0)=0, edge2_seg(1)=2, then segment list
        // for edge 0: anchor=0, num_segs=2, other seg=1.
        assert_eq!(rec.args(), &[0, u32::from(bci::ANCHOR), 0, 2, 0, 2, 1]);
        assert_eq!(rec.num_actions(), 1);
    }

    #[test]
    fn link_sets_serif_and_round_flag_bits_from_edge_flags() {
        let edges = [
            edge_with_flags(&[0], EdgeFlags::ROUND),
            edge_with_flags(&[1], EdgeFlags::SERIF),
        ];
        let mut rec = ActionRecorder::new(&edges, 2, &[]);
        rec.record(Action::Link {
            base_edge: 0,
            stem_edge: 1,
        });

        // bit0 = stem_edge (1) is serif, bit1 = base_edge (0) is round.
        assert_eq!(rec.args()[1], u32::from(bci::LINK) + 0b11);
    }

    #[test]
    fn adjust_with_edge_minus_one_sets_bit_and_pushes_its_seg() {
        let edges = [edge(&[0]), edge(&[1]), edge(&[2])];
        let mut rec = ActionRecorder::new(&edges, 3, &[]);
        rec.record(Action::Adjust {
            edge: 0,
            edge2: 1,
            edge_minus_one: Some(2),
        });

        assert_eq!(rec.args()[1], u32::from(bci::ADJUST) + 0b100);
        // edge_seg(0), edge2_seg(1), edge_minus_one_seg(2), then segment list
        assert_eq!(rec.args()[2..5], [0, 1, 2]);
    }

    #[test]
    fn blue_anchor_pushes_blue_seg_cvt_index_then_edge_seg() {
        let edges = [edge(&[0]), edge(&[1])];
        let mut rec = ActionRecorder::new(&edges, 2, &[]);
        rec.record(Action::BlueAnchor {
            edge: 0,
            blue_edge: 1,
            blue_cvt_idx: 9,
        });

        assert_eq!(rec.args(), &[0, u32::from(bci::BLUE_ANCHOR), 1, 9, 0, 0, 1]);
    }

    #[test]
    fn stem_emits_segment_lists_for_both_edges() {
        let edges = [edge(&[0]), edge(&[1, 2])];
        let mut rec = ActionRecorder::new(&edges, 3, &[]);
        rec.record(Action::Stem {
            edge: 0,
            edge2: 1,
            edge_minus_one: None,
        });

        // code, edge_seg(0), edge2_seg(1), segs(edge 0): [0,1], segs(edge 1): [1,2,2]
        assert_eq!(
            rec.args(),
            &[0, u32::from(bci::STEM), 0, 1, 0, 1, 1, 2, 2]
        );
    }

    #[test]
    fn serif_link1_pushes_before_edge_after_in_order() {
        let edges = [edge(&[0]), edge(&[1]), edge(&[2])];
        let mut rec = ActionRecorder::new(&edges, 3, &[]);
        rec.record(Action::SerifLink1 {
            before: 0,
            edge: 1,
            after: 2,
            lower_bound: None,
            upper_bound: None,
        });

        assert_eq!(rec.args()[2..5], [0, 1, 2]);
    }

    #[test]
    fn serif_anchor_bound_bits_and_pushes_only_present_bounds() {
        let edges = [edge(&[0]), edge(&[1]), edge(&[2])];
        let mut rec = ActionRecorder::new(&edges, 3, &[]);
        rec.record(Action::SerifAnchor {
            edge: 0,
            lower_bound: None,
            upper_bound: Some(2),
        });

        assert_eq!(rec.args()[1], u32::from(bci::SERIF_ANCHOR) + 0b10);
        // edge_seg, upper_bound_seg, then segment list
        assert_eq!(rec.args()[2..4], [0, 2]);
    }

    #[test]
    fn wrap_around_segment_in_edge_list_emits_raw_then_tail_index() {
        // segment 1 out of 3 wraps; its tail index is 3 (num_segments) + 0.
        let edges = [edge(&[0, 1])];
        let mut rec = ActionRecorder::new(&edges, 3, &[1]);
        rec.record(Action::Blue {
            edge: 0,
            blue_cvt_idx: 5,
        });

        // anchor=0 (not wrap), num_segs=1+2=3, then other seg 1 (raw) + tail 3.
        assert_eq!(
            rec.args(),
            &[0, u32::from(bci::BLUE), 5, 0, 0, 3, 1, 3]
        );
    }

    #[test]
    fn wrap_around_anchor_segment_also_gets_a_tail_index() {
        let edges = [edge(&[1])];
        let mut rec = ActionRecorder::new(&edges, 3, &[1]);
        rec.record(Action::Blue {
            edge: 0,
            blue_cvt_idx: 0,
        });

        // anchor=1 (wraps), num_segs=2, tail index = 3 + 0.
        assert_eq!(rec.args(), &[0, u32::from(bci::BLUE), 0, 1, 1, 2, 3]);
    }

    #[test]
    fn interpolation_actions_go_to_point_sets_not_args() {
        let edges: [Edge; 0] = [];
        let mut rec = ActionRecorder::new(&edges, 0, &[]);
        rec.record(Action::IpOn { point: 4, edge: 2 });

        assert!(rec.args().is_empty());
        assert_eq!(
            rec.point_sets().ip_on[&2].iter().copied().collect::<Vec<_>>(),
            vec![4]
        );
    }

    #[test]
    fn ip_before_and_after_are_flat_point_sets() {
        let edges: [Edge; 0] = [];
        let mut rec = ActionRecorder::new(&edges, 0, &[]);
        rec.record(Action::IpBefore { point: 4 });
        rec.record(Action::IpAfter { point: 9 });

        assert_eq!(
            rec.point_sets().ip_before.iter().copied().collect::<Vec<_>>(),
            vec![4]
        );
        assert_eq!(
            rec.point_sets().ip_after.iter().copied().collect::<Vec<_>>(),
            vec![9]
        );
    }

    #[test]
    fn bound_action_is_ignored() {
        let edges: [Edge; 0] = [];
        let mut rec = ActionRecorder::new(&edges, 0, &[]);
        rec.record(Action::Bound { point: 0 });

        assert!(rec.args().is_empty());
        assert_eq!(rec.num_actions(), 0);
    }

    #[test]
    fn rewind_clears_args_and_sets() {
        let edges = [edge(&[0])];
        let mut rec = ActionRecorder::new(&edges, 1, &[]);
        rec.record(Action::Anchor { edge: 0, edge2: 0 });
        rec.record(Action::IpOn { point: 1, edge: 0 });

        rec.rewind();

        assert!(rec.args().is_empty());
        assert!(rec.point_sets().is_empty());
        assert_eq!(rec.num_actions(), 0);
    }
}
