//! Function-number allocation for the `fpgm` functions this crate both
//! defines (see [`crate::program::fpgm`]) and calls from glyph programs.
//!
//! Flag bits are packed into the low bits of an action's function number
//! (`action_base + flag_bits`), so each action family reserves a block of 8
//! consecutive numbers regardless of how many flag combinations it actually
//! uses.

/// Stem-width rounding ladder.
pub const COMPUTE_STEM_WIDTH: u8 = 0;
/// Generic loop primitive driven by `sal_counter`/`sal_limit`.
pub const LOOP: u8 = 1;
/// Rescales one CVT entry by `sal_scale / 0x10000`.
pub const CVT_RESCALE: u8 = 2;
/// Bulk write to the storage area.
pub const SAL_ASSIGN: u8 = 3;
/// Looped bulk write to the storage area.
pub const LOOP_SAL_ASSIGN: u8 = 4;
/// Rounds a blue-ref CVT entry and snaps its shoot partner.
pub const BLUE_ROUND: u8 = 5;
/// Aligns an edge to its associated blue zone.
pub const EDGE2BLUE: u8 = 6;
/// Links an edge to another edge already placed.
pub const EDGE2LINK: u8 = 7;
/// Handles edges with no explicit action.
pub const REMAINING_EDGES: u8 = 8;
/// Top-level per-glyph hinting dispatcher.
pub const HINT_GLYPH: u8 = 9;

/// Scales a simple glyph without running the hinting ladder.
pub const SCALE_GLYPH: u8 = 10;
/// Scales a composite glyph without running the hinting ladder.
pub const SCALE_COMPOSITE_GLYPH: u8 = 11;
/// Shifts one subglyph of a composite by its y offset.
pub const SHIFT_SUBGLYPH: u8 = 12;

/// First of 10 function numbers (`+0..=9` packed segments) for simple glyphs.
pub const CREATE_SEGMENTS_0: u8 = 20;
/// First of 10 function numbers for composite glyphs.
pub const CREATE_SEGMENTS_COMPOSITE_0: u8 = 30;

const ACTION_BASE: u8 = 40;
const ACTION_SLOT: u8 = 8;

/// Function number for [`crate::actions::Action::Link`], before flag bits.
pub const LINK: u8 = ACTION_BASE;
/// Function number for [`crate::actions::Action::Anchor`], before flag bits.
pub const ANCHOR: u8 = ACTION_BASE + ACTION_SLOT;
/// Function number for [`crate::actions::Action::Adjust`], before flag bits.
pub const ADJUST: u8 = ACTION_BASE + 2 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::BlueAnchor`].
pub const BLUE_ANCHOR: u8 = ACTION_BASE + 3 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::Stem`], before flag bits.
pub const STEM: u8 = ACTION_BASE + 4 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::Blue`].
pub const BLUE: u8 = ACTION_BASE + 5 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::Serif`], before flag bits.
pub const SERIF: u8 = ACTION_BASE + 6 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::SerifAnchor`], before flag bits.
pub const SERIF_ANCHOR: u8 = ACTION_BASE + 7 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::SerifLink1`], before flag bits.
pub const SERIF_LINK1: u8 = ACTION_BASE + 8 * ACTION_SLOT;
/// Function number for [`crate::actions::Action::SerifLink2`], before flag bits.
pub const SERIF_LINK2: u8 = ACTION_BASE + 9 * ACTION_SLOT;

/// Action code for a collected "before first edge" interpolation record.
pub const IP_BEFORE: u8 = ACTION_BASE + 10 * ACTION_SLOT;
/// Action code for a collected "after last edge" interpolation record.
pub const IP_AFTER: u8 = ACTION_BASE + 11 * ACTION_SLOT;
/// Action code for a collected "on edge" interpolation record.
pub const IP_ON: u8 = ACTION_BASE + 12 * ACTION_SLOT;
/// Action code for a collected "between edges" interpolation record.
pub const IP_BETWEEN: u8 = ACTION_BASE + 13 * ACTION_SLOT;
