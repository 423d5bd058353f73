//! Core traits for the demapper
//!
//! `ConstellationPoint` abstracts over 1-D (PAM) and 2-D (QAM) points so the
//! energy estimate and the LLR kernel are written once. `Constellation` is
//! the slice-level view: order, bits per symbol, hard decision.

mod constellation;
mod point;

pub use constellation::Constellation;
pub use point::ConstellationPoint;
