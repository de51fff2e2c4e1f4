//! Assembles the `prep` table: the per-run setup that rescales `cvt` entries
//! for the current ppem and, for styles with blue zones, rounds those zones
//! to the pixel grid before any glyph is hinted.

use crate::bci;
use crate::opcodes::Opcode;
use crate::push::emit_push;

/// The values [`build`] needs to know how much of `cvt` to touch.
#[derive(Debug, Clone, Copy)]
pub struct PrepConfig {
    /// Total number of entries in the `cvt` table.
    pub num_cvt_entries: u16,
    /// Number of blue-zone reference/shoot pairs across every style with at
    /// least one, `0` if no style defines blue zones.
    pub blue_zone_count: u16,
}

/// Builds the `prep` table contents.
#[must_use]
pub fn build(config: &PrepConfig) -> Vec<u8> {
    let mut buf = Vec::new();

    if config.num_cvt_entries > 0 {
        emit_push(
            &mut buf,
            &[
                0, // first cvt index bci_cvt_rescale touches
                u32::from(bci::CVT_RESCALE),
                u32::from(config.num_cvt_entries),
            ],
            config.num_cvt_entries > 0xFF,
            true,
        );
        buf.push(Opcode::Loopcall.byte());
    }

    if config.blue_zone_count > 0 {
        emit_push(
            &mut buf,
            &[
                0, // first blue-zone cvt index bci_blue_round touches
                u32::from(bci::BLUE_ROUND),
                u32::from(config.blue_zone_count),
            ],
            config.blue_zone_count > 0xFF,
            true,
        );
        buf.push(Opcode::Loopcall.byte());
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_cvt_and_no_blue_zones_emits_nothing() {
        let buf = build(&PrepConfig {
            num_cvt_entries: 0,
            blue_zone_count: 0,
        });
        assert!(buf.is_empty());
    }

    #[test]
    fn cvt_rescale_loop_runs_before_blue_round_loop() {
        let buf = build(&PrepConfig {
            num_cvt_entries: 8,
            blue_zone_count: 4,
        });
        let loopcalls: Vec<usize> = buf
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == Opcode::Loopcall.byte())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(loopcalls.len(), 2);
        assert!(buf.contains(&bci::CVT_RESCALE));
        assert!(buf.contains(&bci::BLUE_ROUND));
    }

    #[test]
    fn no_blue_zones_skips_blue_round_loop() {
        let buf = build(&PrepConfig {
            num_cvt_entries: 2,
            blue_zone_count: 0,
        });
        assert!(!buf.contains(&bci::BLUE_ROUND));
    }
}
