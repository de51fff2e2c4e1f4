//! User-supplied point-shift overrides ("control instructions") and the
//! `DELTAP1`/`DELTAP2`/`DELTAP3` exceptions they compile to.
//!
//! Delta exceptions only cover a 48-ppem window starting at
//! [`CONTROL_DELTA_PPEM_MIN`], split into three 16-ppem buckets, one per
//! `DELTAPn` opcode (`DELTAP1` covers the first 16 ppems, `DELTAP2` the
//! next 16, `DELTAP3` the last 16). Shifts are eighths of a pixel in
//! `-8..=8`, excluding `0` (a zero shift is simply not recorded).

use crate::opcodes::Opcode;
use crate::push::emit_push;

/// Smallest ppem a control instruction's delta exception can target.
pub const CONTROL_DELTA_PPEM_MIN: u16 = 9;

/// What a control instruction does; mirrors the source grammar's
/// `Control_Type` tag.
///
/// Only the two delta variants are implemented; a font-maker-supplied
/// single-point-segment override exists in the grammar but was never
/// implemented upstream either, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControlKind {
    /// Shift applied before `IUP` runs over the glyph's untouched points.
    DeltaBeforeIup,
    /// Shift applied after `IUP` runs.
    DeltaAfterIup,
}

/// One user-supplied point-shift override for a single glyph at a single
/// ppem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl {
    /// Whether this shift applies before or after the glyph's `IUP` call.
    pub kind: ControlKind,
    /// Which font in a TTC this instruction applies to.
    pub font_idx: u32,
    /// Which glyph this instruction applies to.
    pub glyph_idx: u32,
    /// Which point (pre composite-remap) this instruction shifts.
    pub point_idx: u16,
    /// The ppem this instruction applies at.
    pub ppem: u16,
    /// Horizontal shift in eighths of a pixel, `-8..=8`, `0` meaning none.
    pub x_shift: i8,
    /// Vertical shift in eighths of a pixel, `-8..=8`, `0` meaning none.
    pub y_shift: i8,
}

/// A read-only forward cursor over a font's control instructions, kept
/// sorted by `(font_idx, glyph_idx, ppem, point_idx)`.
pub struct ControlCursor<'a> {
    records: &'a [Ctrl],
    pos: usize,
}

impl<'a> ControlCursor<'a> {
    /// Wraps an already-sorted slice of control instructions.
    #[must_use]
    pub fn new(records: &'a [Ctrl]) -> Self {
        Self { records, pos: 0 }
    }

    /// The next unconsumed instruction, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Ctrl> {
        self.records.get(self.pos)
    }

    /// Consumes the instruction last returned by [`Self::peek`].
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Every remaining instruction for `glyph_idx` in `font_idx`, consuming
    /// them as it goes.
    pub fn take_glyph(&mut self, font_idx: u32, glyph_idx: u32) -> Vec<Ctrl> {
        let mut out = Vec::new();
        while let Some(&ctrl) = self.peek() {
            if ctrl.font_idx != font_idx || ctrl.glyph_idx != glyph_idx {
                break;
            }
            out.push(ctrl);
            self.advance();
        }
        out
    }
}

/// A point/encoded-shift pair ready to be pushed ahead of a `DELTAPn`.
type DeltaPair = (u16, u8);

/// Compiles one glyph's control instructions of the given `kind` into
/// `DELTAP1`/`DELTAP2`/`DELTAP3` bytecode.
///
/// Records of a different `kind` are skipped: a glyph program calls this
/// once for `DeltaBeforeIup` records and once for `DeltaAfterIup` records,
/// splicing each result on its side of the glyph's own `IUP` call.
/// Instructions at a ppem outside the 48-ppem window starting at
/// [`CONTROL_DELTA_PPEM_MIN`] are silently dropped, matching the window any
/// `DELTAPn` opcode can address.
#[must_use]
pub fn build_delta_exceptions(records: &[Ctrl], kind: ControlKind) -> Vec<u8> {
    let mut x_buckets: [Vec<DeltaPair>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut y_buckets: [Vec<DeltaPair>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for ctrl in records {
        if ctrl.kind != kind {
            continue;
        }
        let Some(offset) = ctrl.ppem.checked_sub(CONTROL_DELTA_PPEM_MIN) else {
            continue;
        };
        let bucket = offset / 16;
        if bucket > 2 {
            continue;
        }
        let remainder = (offset % 16) as u8;

        if let Some(pair) = encode(ctrl.point_idx, remainder, ctrl.x_shift) {
            x_buckets[bucket as usize].push(pair);
        }
        if let Some(pair) = encode(ctrl.point_idx, remainder, ctrl.y_shift) {
            y_buckets[bucket as usize].push(pair);
        }
    }

    let mut buf = Vec::new();
    emit_axis(&mut buf, Opcode::SvtcaX, &x_buckets);
    emit_axis(&mut buf, Opcode::SvtcaY, &y_buckets);
    buf
}

fn encode(point: u16, remainder: u8, shift: i8) -> Option<DeltaPair> {
    if shift == 0 {
        return None;
    }
    let shift_idx = if shift > 0 { shift + 7 } else { shift + 8 } as u8;
    let arg = (remainder << 4) | shift_idx;
    Some((point, arg))
}

fn emit_axis(buf: &mut Vec<u8>, set_axis: Opcode, buckets: &[Vec<DeltaPair>; 3]) {
    if buckets.iter().all(Vec::is_empty) {
        return;
    }
    buf.push(set_axis.byte());
    for (bucket_idx, opcode) in [
        (2, Opcode::Deltap3),
        (1, Opcode::Deltap2),
        (0, Opcode::Deltap1),
    ] {
        let pairs = &buckets[bucket_idx];
        if pairs.is_empty() {
            continue;
        }
        let need_words = pairs.iter().any(|&(point, _)| point > 0xFF);
        let mut args = Vec::with_capacity(pairs.len() * 2 + 1);
        #[allow(clippy::cast_possible_truncation)] // a glyph never has > u32::MAX points
        args.push(pairs.len() as u32);
        for &(point, arg) in pairs {
            args.push(u32::from(point));
            args.push(u32::from(arg));
        }
        emit_push(buf, &args, need_words, true);
        buf.push(opcode.byte());
    }
}
