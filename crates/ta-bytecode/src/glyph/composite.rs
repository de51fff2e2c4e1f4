//! Builds the push arguments for `bci_shift_subglyph`: each subglyph of an
//! already-hinted composite is nudged vertically by a fixed shift and its
//! contours marked as "done", so the outer hinting loop skips them.

/// One subglyph's vertical shift and how many contours it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubglyphShift {
    /// Vertical shift in F26Dot6 units, applied after the subglyph's own
    /// hinting has already run.
    pub y_shift: i32,
    /// How many contours this subglyph owns, so the caller can skip them in
    /// the parent glyph's own contour loop.
    pub num_contours: u16,
}

/// Builds the `bci_shift_subglyph` push arguments: one
/// `(num_contours, y_shift)` pair per subglyph, pushed in reverse so the
/// first subglyph ends up on top of the stack.
#[must_use]
pub fn build(shifts: &[SubglyphShift]) -> (Vec<u32>, bool) {
    let need_words = shifts
        .iter()
        .any(|s| s.y_shift.unsigned_abs() > 0xFF || s.num_contours > 0xFF);

    let mut args = Vec::with_capacity(shifts.len() * 2);
    for shift in shifts.iter().rev() {
        args.push(encode_signed(shift.y_shift));
        args.push(u32::from(shift.num_contours));
    }
    (args, need_words)
}

/// Encodes a signed shift as the two's-complement 16-bit pattern a `PUSHW`
/// slot carries; the hint program reinterprets it as signed on read.
fn encode_signed(value: i32) -> u32 {
    u32::from(value as i16 as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_pairs_in_reverse_subglyph_order() {
        let shifts = [
            SubglyphShift {
                y_shift: 5,
                num_contours: 2,
            },
            SubglyphShift {
                y_shift: -3,
                num_contours: 1,
            },
        ];
        let (args, need_words) = build(&shifts);

        assert_eq!(args[0], encode_signed(-3));
        assert_eq!(args[1], 1);
        assert_eq!(args[2], encode_signed(5));
        assert_eq!(args[3], 2);
        assert!(!need_words);
    }

    #[test]
    fn negative_shift_round_trips_through_two_complement() {
        let encoded = encode_signed(-1);
        assert_eq!(encoded as u16 as i16, -1);
    }

    #[test]
    fn large_contour_count_requires_words() {
        let shifts = [SubglyphShift {
            y_shift: 0,
            num_contours: 300,
        }];
        let (_, need_words) = build(&shifts);
        assert!(need_words);
    }
}
