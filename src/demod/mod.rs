//! Soft demapping: received samples → bit-wise LLRs
//!
//! Both decoders share one kernel (`kernel.rs`). They differ only in the
//! noise model (one σ for PAM, one variance per sample for QAM) and in
//! whether a prior weights each point.
//!
//! Output layout is symbol-major, bit-minor: LLRs of sample 0 (bit 0 = label
//! MSB first), then sample 1, and so on. LLR sign convention is
//! ln P(bit=1|y) − ln P(bit=0|y), so positive means "1".

mod energy;
mod kernel;
mod pam;
mod qam;


pub use energy::{sigma_from_snr_db, symbol_energy, uniform_prior};
pub use pam::{pam_llr, pam_llr_from_snr, pam_soft_decode};
pub use qam::{qam_llr, qam_soft_decode};
