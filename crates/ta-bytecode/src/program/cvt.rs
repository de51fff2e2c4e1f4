//! Builds the `cvt` table: one signed 16-bit entry per value, laid out as
//! `[horiz_std_width, vert_std_width, horiz_widths*, vert_widths*,
//! blue_refs*, blue_shoots*]` and padded with zero entries to a multiple of
//! 4 bytes.

use crate::errors::HintError;

/// Standard width fallback used when a style has no measured stem width of
/// its own.
pub const FALLBACK_STD_WIDTH: u16 = 50;

/// The per-style values a `cvt` table is built from.
#[derive(Debug, Clone, Default)]
pub struct CvtInput {
    /// Measured horizontal standard stem width, if any.
    pub horiz_std_width: Option<u16>,
    /// Measured vertical standard stem width, if any.
    pub vert_std_width: Option<u16>,
    /// Additional horizontal stem widths beyond the standard one.
    pub horiz_widths: Vec<u16>,
    /// Additional vertical stem widths beyond the standard one.
    pub vert_widths: Vec<u16>,
    /// Blue-zone reference values, font design units.
    pub blue_refs: Vec<i32>,
    /// Blue-zone overshoot ("shoot") values, font design units.
    pub blue_shoots: Vec<i32>,
}

/// Builds the `cvt` table contents.
///
/// # Errors
///
/// Returns [`HintError::HinterOverflow`] if any value does not fit in a
/// signed 16-bit `cvt` entry.
pub fn build(input: &CvtInput) -> Result<Vec<u8>, HintError> {
    let mut values: Vec<i32> = Vec::new();
    values.push(i32::from(
        input.horiz_std_width.unwrap_or(FALLBACK_STD_WIDTH),
    ));
    values.push(i32::from(
        input.vert_std_width.unwrap_or(FALLBACK_STD_WIDTH),
    ));
    values.extend(input.horiz_widths.iter().map(|&w| i32::from(w)));
    values.extend(input.vert_widths.iter().map(|&w| i32::from(w)));
    values.extend(&input.blue_refs);
    values.extend(&input.blue_shoots);

    let mut buf = Vec::with_capacity(values.len() * 2 + 2);
    for &value in &values {
        if !(i32::from(i16::MIN)..=i32::from(i16::MAX)).contains(&value) {
            #[allow(clippy::cast_sign_loss)]
            return Err(HintError::overflow("cvt", value as u32));
        }
        #[allow(clippy::cast_possible_truncation)]
        buf.extend_from_slice(&(value as i16).to_be_bytes());
    }
    while buf.len() % 4 != 0 {
        buf.extend_from_slice(&0i16.to_be_bytes());
    }
    Ok(buf)
}
