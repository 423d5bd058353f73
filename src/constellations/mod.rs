//! Gray-labeled constellation builders
//!
//! The decoders never derive labels themselves; they trust index order.
//! These builders produce point slices whose index order is a proper
//! Gray labeling:
//! - M-PAM on the odd integers {-(M-1), ..., -1, 1, ..., M-1}
//! - square M-QAM as the product of two Gray PAMs (I bits first)

mod gray;
mod pam;
mod qam;

pub use gray::{gray_decode, gray_encode, label_bit};
pub use pam::gray_pam;
pub use qam::gray_qam;

use crate::demod::symbol_energy;
use crate::traits::ConstellationPoint;

/// Scale a constellation to unit mean energy under the prior `pk`
pub fn normalize_energy<P: ConstellationPoint>(points: &[P], pk: &[f64]) -> Vec<P> {
    let es = symbol_energy(points, pk);
    let k = 1.0 / es.sqrt();
    points.iter().map(|p| p.scaled(k)).collect()
}
