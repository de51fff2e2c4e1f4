//! Assembles the three tables every style-hinted font shares: `fpgm`
//! (function definitions), `prep` (per-run setup) and `cvt` (the values
//! those functions read and write).

pub mod cvt;
pub mod fpgm;
pub mod prep;
