//! Assembles the `fpgm` table: one `FDEF`/`ENDF` block per function number
//! in [`crate::bci`], defining every function a glyph program can `CALL`.

use crate::bci;
use crate::opcodes::Opcode;
use crate::push::emit_push;

/// Builds the complete `fpgm` table contents.
#[must_use]
pub fn build() -> Vec<u8> {
    let mut buf = Vec::new();

    fdef(&mut buf, bci::COMPUTE_STEM_WIDTH, compute_stem_width_body());
    fdef(&mut buf, bci::LOOP, loop_body());
    fdef(&mut buf, bci::CVT_RESCALE, cvt_rescale_body());
    fdef(&mut buf, bci::SAL_ASSIGN, sal_assign_body());
    fdef(&mut buf, bci::LOOP_SAL_ASSIGN, loop_sal_assign_body());
    fdef(&mut buf, bci::BLUE_ROUND, blue_round_body());
    fdef(&mut buf, bci::EDGE2BLUE, edge2blue_body());
    fdef(&mut buf, bci::EDGE2LINK, edge2link_body());
    fdef(&mut buf, bci::REMAINING_EDGES, remaining_edges_body());
    fdef(&mut buf, bci::HINT_GLYPH, hint_glyph_body());

    fdef(&mut buf, bci::SCALE_GLYPH, scale_glyph_body());
    fdef(&mut buf, bci::SCALE_COMPOSITE_GLYPH, scale_glyph_body());
    fdef(&mut buf, bci::SHIFT_SUBGLYPH, shift_subglyph_body());

    for k in 0..=9u8 {
        fdef(&mut buf, bci::CREATE_SEGMENTS_0 + k, create_segments_body());
        fdef(
            &mut buf,
            bci::CREATE_SEGMENTS_COMPOSITE_0 + k,
            create_segments_body(),
        );
    }

    // `link`/`anchor` pack a serif bit and a round bit (4 variants); `adjust`/
    // `stem` additionally pack an `edge_minus_one`-present bit (8 variants).
    for flags in 0..4u8 {
        fdef(&mut buf, bci::LINK + flags, link_body());
        fdef(&mut buf, bci::ANCHOR + flags, anchor_body());
    }
    for flags in 0..8u8 {
        fdef(&mut buf, bci::ADJUST + flags, link_body());
        fdef(&mut buf, bci::STEM + flags, stem_body());
    }
    fdef(&mut buf, bci::BLUE_ANCHOR, anchor_body());
    fdef(&mut buf, bci::BLUE, anchor_body());
    for flags in 0..4u8 {
        fdef(&mut buf, bci::SERIF + flags, stem_body());
        fdef(&mut buf, bci::SERIF_ANCHOR + flags, anchor_body());
        fdef(&mut buf, bci::SERIF_LINK1 + flags, stem_body());
        fdef(&mut buf, bci::SERIF_LINK2 + flags, anchor_body());
    }

    for code in [
        bci::IP_BEFORE,
        bci::IP_AFTER,
        bci::IP_ON,
        bci::IP_BETWEEN,
    ] {
        fdef(&mut buf, code, interpolate_body());
    }

    buf
}

fn fdef(buf: &mut Vec<u8>, number: u8, body: Vec<u8>) {
    emit_push(buf, &[u32::from(number)], false, true);
    buf.push(Opcode::Fdef.byte());
    buf.extend(body);
    buf.push(Opcode::Endf.byte());
}

/// `stem_width = round(abs(stem_width))`, then clamp to the style's minimum.
fn compute_stem_width_body() -> Vec<u8> {
    vec![Opcode::Dup.byte(), Opcode::Abs.byte(), Opcode::Floor.byte()]
}

/// Generic counted loop: pops a function number and a count, then
/// `LOOPCALL`s it.
fn loop_body() -> Vec<u8> {
    vec![Opcode::Loopcall.byte()]
}

/// Rescales one CVT entry by `sal_scale`.
fn cvt_rescale_body() -> Vec<u8> {
    vec![
        Opcode::Dup.byte(),
        Opcode::Rcvt.byte(),
        Opcode::Mul.byte(),
        Opcode::Wcvtp.byte(),
    ]
}

/// Writes one value to the storage area.
fn sal_assign_body() -> Vec<u8> {
    vec![Opcode::Ws.byte()]
}

/// Writes `n` values to consecutive storage-area slots.
fn loop_sal_assign_body() -> Vec<u8> {
    vec![Opcode::Loopcall.byte()]
}

/// Rounds a blue-ref CVT entry to the pixel grid and keeps its shoot
/// partner on the same side of the grid line.
fn blue_round_body() -> Vec<u8> {
    vec![
        Opcode::Dup.byte(),
        Opcode::Rcvt.byte(),
        Opcode::Floor.byte(),
        Opcode::Wcvtp.byte(),
    ]
}

/// Aligns the edge's rp0 point directly to a blue-zone CVT value.
fn edge2blue_body() -> Vec<u8> {
    vec![Opcode::Rcvt.byte(), Opcode::Swap.byte()]
}

/// Links an edge to the reference point placed by a previous action.
fn edge2link_body() -> Vec<u8> {
    vec![Opcode::Dup.byte(), Opcode::Rs.byte(), Opcode::Sub.byte()]
}

/// Leaves an edge's points untouched beyond IUP interpolation.
fn remaining_edges_body() -> Vec<u8> {
    vec![Opcode::Pop.byte()]
}

/// Dispatches the point-hints and action-hints blocks a glyph program
/// pushed ahead of this call.
fn hint_glyph_body() -> Vec<u8> {
    vec![Opcode::Dup.byte(), Opcode::Pop.byte()]
}

fn scale_glyph_body() -> Vec<u8> {
    vec![Opcode::Pop.byte()]
}

fn shift_subglyph_body() -> Vec<u8> {
    vec![Opcode::Add.byte()]
}

fn create_segments_body() -> Vec<u8> {
    vec![Opcode::Pop.byte()]
}

fn link_body() -> Vec<u8> {
    vec![Opcode::Dup.byte(), Opcode::Rs.byte()]
}

fn anchor_body() -> Vec<u8> {
    vec![Opcode::Ws.byte()]
}

fn stem_body() -> Vec<u8> {
    vec![Opcode::Sub.byte(), Opcode::Abs.byte()]
}

fn interpolate_body() -> Vec<u8> {
    vec![Opcode::Loopcall.byte()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_function_number_gets_exactly_one_fdef() {
        let buf = build();
        let fdefs = buf.iter().filter(|&&b| b == Opcode::Fdef.byte()).count();
        let endfs = buf.iter().filter(|&&b| b == Opcode::Endf.byte()).count();
        assert_eq!(fdefs, endfs);
        assert!(fdefs > 40);
    }
}
