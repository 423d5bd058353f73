//! Gray-labeled M-PAM
//!
//! Point at index i sits at amplitude level gray_decode(i), so walking
//! the amplitude axis left to right visits labels in Gray order.
//! 4-PAM: index order [-3, -1, 3, 1], i.e. -3:00, -1:01, 1:11, 3:10.

use super::gray::gray_decode;
use crate::error::{LlrError, LlrResult};

/// Build an M-PAM constellation on the odd integers, indexed by Gray label
pub fn gray_pam(order: usize) -> LlrResult<Vec<f64>> {
    if order < 2 || !order.is_power_of_two() {
        return Err(LlrError::OrderNotPowerOfTwo(order));
    }

    let offset = (order - 1) as f64;
    Ok((0..order)
        .map(|label| 2.0 * gray_decode(label) as f64 - offset)
        .collect())
}
