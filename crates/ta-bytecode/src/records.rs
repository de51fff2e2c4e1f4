//! Deduplicates per-ppem hint data into ranges and emits the size-gated
//! `MPPEM ... LT IF ... ELSE ... EIF` ladder that picks the right range at
//! run time.
//!
//! Adjacent ppem values that produce byte-identical point-hints and
//! action-hints arguments collapse into a single range; only the ranges'
//! *lower* boundaries ever need to be tested, since ppem sweeps bottom to
//! top and the ladder is walked top to bottom (the widest, most likely
//! range last, with no condition at all).

use crate::bci;
use crate::opcodes::Opcode;
use crate::push::{emit_push, optimize_push};

/// One contiguous ppem range sharing the same point-hints and action-hints
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintsRecord {
    /// The smallest ppem in this range.
    pub start_ppem: u16,
    /// Point-hints push arguments ([`crate::point_hints::emit`]'s output).
    pub point_args: Vec<u32>,
    /// Action-hints push arguments ([`crate::actions::ActionRecorder::args`]).
    pub action_args: Vec<u32>,
    /// Whether `point_args` needs word-sized pushes.
    pub point_need_words: bool,
    /// Whether `action_args` needs word-sized pushes.
    pub action_need_words: bool,
}

/// One ppem's hint data, before deduplication.
pub struct PpemHints {
    /// The ppem this data was computed at.
    pub ppem: u16,
    /// See [`HintsRecord::point_args`].
    pub point_args: Vec<u32>,
    /// See [`HintsRecord::action_args`].
    pub action_args: Vec<u32>,
    /// See [`HintsRecord::point_need_words`].
    pub point_need_words: bool,
    /// See [`HintsRecord::action_need_words`].
    pub action_need_words: bool,
}

/// Collapses a ppem sweep into ranges, dropping ppem values whose hint data
/// exactly matches the range already open.
///
/// `sweep` must be in ascending ppem order.
#[must_use]
pub fn dedup(sweep: Vec<PpemHints>) -> Vec<HintsRecord> {
    let mut out: Vec<HintsRecord> = Vec::with_capacity(sweep.len());
    for hints in sweep {
        let is_different = out.last().is_none_or(|last| {
            last.point_args != hints.point_args || last.action_args != hints.action_args
        });
        if is_different {
            out.push(HintsRecord {
                start_ppem: hints.ppem,
                point_args: hints.point_args,
                action_args: hints.action_args,
                point_need_words: hints.point_need_words,
                action_need_words: hints.action_need_words,
            });
        }
    }
    out
}

/// Emits the full `IF`/`ELSE` ladder over `records`, calling
/// `bci_hint_glyph` once per range with that range's arguments on the stack.
#[must_use]
pub fn emit(records: &[HintsRecord]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut open_ifs = 0u32;

    for (i, record) in records.iter().enumerate() {
        let is_last = i + 1 == records.len();
        if !is_last {
            let threshold = records[i + 1].start_ppem;
            emit_push(&mut buf, &[u32::from(threshold)], threshold > 0xFF, true);
            buf.push(Opcode::Mppem.byte());
            buf.push(Opcode::Lt.byte());
            buf.push(Opcode::If.byte());
        }

        emit_record_body(&mut buf, record);

        if !is_last {
            buf.push(Opcode::Else.byte());
            open_ifs += 1;
        }
    }

    for _ in 0..open_ifs {
        buf.push(Opcode::Eif.byte());
    }

    buf
}

fn emit_record_body(buf: &mut Vec<u8>, record: &HintsRecord) {
    let pos0 = buf.len();
    if !record.point_args.is_empty() {
        emit_push(buf, &record.point_args, record.point_need_words, true);
    }
    let pos1 = buf.len();
    emit_push(buf, &record.action_args, record.action_need_words, true);
    let pos2 = buf.len();
    emit_push(buf, &[u32::from(bci::HINT_GLYPH)], false, true);
    buf.push(Opcode::Call.byte());

    optimize_push(buf, [Some(pos0), Some(pos1), Some(pos2)]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(ppem: u16, point_args: Vec<u32>, action_args: Vec<u32>) -> PpemHints {
        PpemHints {
            ppem,
            point_args,
            action_args,
            point_need_words: false,
            action_need_words: false,
        }
    }

    #[test]
    fn identical_adjacent_ppems_collapse_into_one_range() {
        let sweep = vec![
            hints(8, vec![], vec![1]),
            hints(9, vec![], vec![1]),
            hints(10, vec![], vec![2]),
        ];
        let records = dedup(sweep);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start_ppem, 8);
        assert_eq!(records[1].start_ppem, 10);
    }

    #[test]
    fn single_record_emits_no_conditional() {
        let records = vec![HintsRecord {
            start_ppem: 8,
            point_args: vec![],
            action_args: vec![1, 2],
            point_need_words: false,
            action_need_words: false,
        }];
        let buf = emit(&records);

        assert!(!buf.contains(&Opcode::If.byte()));
        assert!(!buf.contains(&Opcode::Eif.byte()));
        assert_eq!(*buf.last().unwrap(), Opcode::Call.byte());
    }

    #[test]
    fn two_records_emit_one_if_else_eif() {
        let records = vec![
            HintsRecord {
                start_ppem: 8,
                point_args: vec![],
                action_args: vec![1],
                point_need_words: false,
                action_need_words: false,
            },
            HintsRecord {
                start_ppem: 12,
                point_args: vec![],
                action_args: vec![2],
                point_need_words: false,
                action_need_words: false,
            },
        ];
        let buf = emit(&records);

        assert_eq!(buf.iter().filter(|&&b| b == Opcode::If.byte()).count(), 1);
        assert_eq!(buf.iter().filter(|&&b| b == Opcode::Else.byte()).count(), 1);
        assert_eq!(buf.iter().filter(|&&b| b == Opcode::Eif.byte()).count(), 1);
        // the threshold pushed for the IF is the second record's start ppem
        assert!(buf.contains(&12));
    }
}
