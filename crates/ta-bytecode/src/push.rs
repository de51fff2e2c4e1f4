//! Push-instruction selection and peephole coalescing.
//!
//! [`emit_push`] picks the shortest `PUSHB_n`/`PUSHW_n`/`NPUSHB`/`NPUSHW`
//! encoding for a run of integer arguments. [`optimize_push`] is a later
//! peephole pass that merges up to three adjacent `NPUSHB ... NPUSHB ...
//! [NPUSHB ...] CALL` sequences into a single (or two, if the combined size
//! does not fit in one byte) `NPUSHB` block followed by one `CALL`.
//!
//! Per the design notes this is implemented as a two-pass scheme: callers
//! record the byte offset each push block started at, then hand those
//! offsets to `optimize_push` once the final `CALL` has been written.

use crate::opcodes::{pushb_n, pushw_n, Opcode};

const MAX_RUN: usize = 255;

/// Appends `args` to `buf` as one or more push instructions.
///
/// `need_words` must be set by the caller if any value in `args` exceeds
/// `0xFF`; values must never exceed `0xFFFF`. When `optimize` is set, runs of
/// 1 to 8 arguments use the single-byte `PUSHB_n`/`PUSHW_n` opcodes instead
/// of `NPUSHB`/`NPUSHW`.
pub fn emit_push(buf: &mut Vec<u8>, args: &[u32], need_words: bool, optimize: bool) {
    for run in args.chunks(MAX_RUN) {
        #[allow(clippy::cast_possible_truncation)] // run.len() <= MAX_RUN
        let len = run.len() as u8;
        if need_words {
            if optimize && (1..=8).contains(&len) {
                buf.push(pushw_n(len));
            } else {
                buf.push(Opcode::Npushw.byte());
                buf.push(len);
            }
            for &arg in run {
                debug_assert!(arg <= 0xFFFF, "push argument does not fit in a word");
                buf.extend_from_slice(&(arg as u16).to_be_bytes());
            }
        } else {
            if optimize && (1..=8).contains(&len) {
                buf.push(pushb_n(len));
            } else {
                buf.push(Opcode::Npushb.byte());
                buf.push(len);
            }
            for &arg in run {
                debug_assert!(arg <= 0xFF, "push argument does not fit in a byte");
                #[allow(clippy::cast_possible_truncation)]
                buf.push(arg as u8);
            }
        }
    }
}

/// Byte offsets of up to three `NPUSHB`/`NPUSHW` blocks immediately
/// preceding a single `CALL`, with nothing else emitted in between.
pub type PushBlockPositions = [Option<usize>; 3];

/// Merges the push blocks recorded at `pos` into one or two blocks,
/// truncating `buf` at the first recorded position and re-emitting the
/// merged bytes followed by a single `CALL`.
///
/// Does nothing (leaves `buf` untouched) if any of the recorded blocks is an
/// `NPUSHW` block, if the combined size exceeds 510 bytes, or if it exceeds
/// 255 bytes while the third block is absent (no gain to be had).
pub fn optimize_push(buf: &mut Vec<u8>, pos: PushBlockPositions) {
    let mut pos = pos;
    // The point-hints block can be missing, in which case its start offset
    // equals the action-hints block's start offset.
    if pos[0] == pos[1] {
        pos[1] = pos[2];
        pos[2] = None;
    }

    let positions: Vec<usize> = pos.iter().flatten().copied().collect();
    if positions
        .iter()
        .any(|&p| buf[p] == Opcode::Npushw.byte())
    {
        return;
    }

    let sizes: Vec<u16> = positions.iter().map(|&p| u16::from(buf[p + 1])).collect();
    let sum: u16 = sizes.iter().sum();
    let has_third = sizes.len() == 3;

    if sum > 2 * 0xFF {
        return; // would need three NPUSHB blocks; nothing to gain
    }
    if !has_third && sum > 0xFF {
        return; // would still need two NPUSHB blocks; nothing to gain
    }

    let (new_size1, new_size2) = if sum > 0xFF {
        (0xFFu16, sum - 0xFF)
    } else {
        (sum, 0)
    };

    let start = positions[0];
    let mut body = Vec::with_capacity(usize::from(sum));
    let mut i = start;
    let mut next_marker = 0;
    while body.len() < usize::from(sum) {
        if next_marker < positions.len() && i == positions[next_marker] {
            next_marker += 1;
            i += 2; // skip this block's own NPUSHB/count header
            continue;
        }
        body.push(buf[i]);
        i += 1;
    }

    buf.truncate(start);
    push_block(buf, &body[..usize::from(new_size1)]);
    if new_size2 > 0 {
        push_block(buf, &body[usize::from(new_size1)..]);
    }
    buf.push(Opcode::Call.byte());
}

fn push_block(buf: &mut Vec<u8>, bytes: &[u8]) {
    #[allow(clippy::cast_possible_truncation)] // bytes.len() <= 255 by construction
    let len = bytes.len() as u8;
    if (1..=8).contains(&len) {
        buf.push(pushb_n(len));
    } else {
        buf.push(Opcode::Npushb.byte());
        buf.push(len);
    }
    buf.extend_from_slice(bytes);
}
