//! End-to-end tests over the public API: a synthetic glyph driven through a
//! fake [`crate::HintSource`], plus the three program-wide tables.

use crate::{
    control::{build_delta_exceptions, ControlKind, Ctrl, CONTROL_DELTA_PPEM_MIN},
    program::{cvt, fpgm, prep},
    Action, ActionRecorder, Edge, EdgeFlags, GlyphDriver, GlyphInput, HintError, HintSource,
    Opcode, Segment, Style,
};

/// A fixed hinting plan: stem width `edge 0`/`edge 1` adjusted together from
/// `hinting_range_min` up, with one point interpolated onto `edge 0`.
struct FixedStem {
    hinting_range_min: u16,
}

impl HintSource for FixedStem {
    fn prime(&mut self, ppem: u16, recorder: &mut ActionRecorder<'_>) -> Result<(), HintError> {
        if ppem < self.hinting_range_min {
            return Ok(());
        }
        recorder.record(Action::Anchor { edge: 0, edge2: 0 });
        recorder.record(Action::Stem {
            edge: 0,
            edge2: 1,
            edge_minus_one: None,
        });
        recorder.record(Action::IpOn { point: 1, edge: 0 });
        Ok(())
    }
}

fn stem_glyph() -> (Vec<Segment>, Vec<Edge>) {
    let segments = vec![Segment { first: 0, last: 1 }, Segment { first: 2, last: 3 }];
    let edges = vec![
        Edge {
            segments: vec![0],
            flags: EdgeFlags::NONE,
            blue: None,
        },
        Edge {
            segments: vec![1],
            flags: EdgeFlags::NONE,
            blue: None,
        },
    ];
    (segments, edges)
}

#[test]
fn hinted_glyph_builds_a_call_chain_per_ppem_range() {
    let (segments, edges) = stem_glyph();
    let contours = vec![vec![(0u16, 0i32), (1, 10), (2, 5), (3, -5)]];
    let input = GlyphInput {
        is_empty: false,
        is_composite: false,
        style: Style::LatinDefault,
        segments: &segments,
        wrap_around_segments: &[],
        contour_ends: &[3],
        edges: &edges,
        pointsums: &[],
        contours: &contours,
        subglyph_shifts: None,
    };
    let driver = GlyphDriver {
        hinting_range_min: 8,
        hinting_range_max: 12,
    };
    let mut source = FixedStem { hinting_range_min: 8 };

    let program = driver.build_program(&input, &mut source).unwrap();

    // every ppem in range produces the same actions, so the whole sweep
    // collapses into a single record with no conditional at all.
    assert!(!program.contains(&Opcode::If.byte()));
    assert!(program.ends_with(&[Opcode::Call.byte()]));
}

#[test]
fn glyph_with_no_style_only_scales() {
    let contours = vec![vec![(0u16, 0i32), (1, 10)]];
    let input = GlyphInput {
        is_empty: false,
        is_composite: false,
        style: Style::None,
        segments: &[],
        wrap_around_segments: &[],
        contour_ends: &[1],
        edges: &[],
        pointsums: &[],
        contours: &contours,
        subglyph_shifts: None,
    };
    let driver = GlyphDriver {
        hinting_range_min: 8,
        hinting_range_max: 20,
    };
    let mut source = FixedStem { hinting_range_min: 8 };

    let program = driver.build_program(&input, &mut source).unwrap();
    assert!(!program.contains(&Opcode::Mppem.byte()));
}

#[test]
fn empty_glyph_has_no_instructions() {
    let input = GlyphInput {
        is_empty: true,
        is_composite: false,
        style: Style::LatinDefault,
        segments: &[],
        wrap_around_segments: &[],
        contour_ends: &[],
        edges: &[],
        pointsums: &[],
        contours: &[],
        subglyph_shifts: None,
    };
    let driver = GlyphDriver {
        hinting_range_min: 8,
        hinting_range_max: 20,
    };
    let mut source = FixedStem { hinting_range_min: 8 };

    let program = driver.build_program(&input, &mut source).unwrap();
    assert!(program.is_empty());
}

#[test]
fn fpgm_prep_and_cvt_assemble_independently() {
    let fpgm_bytes = fpgm::build();
    assert!(fpgm_bytes.contains(&Opcode::Fdef.byte()));

    let prep_bytes = prep::build(&prep::PrepConfig {
        num_cvt_entries: 8,
        blue_zone_count: 2,
    });
    assert!(prep_bytes.contains(&Opcode::Loopcall.byte()));

    let cvt_bytes = cvt::build(&cvt::CvtInput {
        horiz_std_width: Some(75),
        ..cvt::CvtInput::default()
    })
    .unwrap();
    assert_eq!(cvt_bytes.len() % 4, 0);
}

#[test]
fn control_instructions_compile_to_delta_exceptions() {
    let records = vec![Ctrl {
        kind: ControlKind::DeltaBeforeIup,
        font_idx: 0,
        glyph_idx: 5,
        point_idx: 12,
        ppem: CONTROL_DELTA_PPEM_MIN + 2,
        x_shift: 0,
        y_shift: 3,
    }];

    let buf = build_delta_exceptions(&records, ControlKind::DeltaBeforeIup);
    assert!(buf.contains(&Opcode::Deltap1.byte()));
    assert!(!buf.contains(&Opcode::Deltap2.byte()));
}
