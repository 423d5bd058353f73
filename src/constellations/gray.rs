//! Binary-reflected Gray code helpers
//!
//! Bit convention: bit 0 of an m-bit label is its most-significant bit.
//! LLR output is ordered the same way.

/// Binary index to Gray code
#[inline]
pub fn gray_encode(n: usize) -> usize {
    n ^ (n >> 1)
}

/// Gray code back to binary index
#[inline]
pub fn gray_decode(g: usize) -> usize {
    let mut n = g;
    let mut shift = g >> 1;
    while shift != 0 {
        n ^= shift;
        shift >>= 1;
    }
    n
}

/// Bit `bit` (0 = MSB) of the m-bit label `index`
#[inline]
pub fn label_bit(index: usize, bit: usize, m: usize) -> bool {
    (index >> (m - 1 - bit)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_sequence() {
        let codes: Vec<usize> = (0..8).map(gray_encode).collect();
        assert_eq!(codes, vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn test_gray_inverse() {
        for n in 0..256 {
            assert_eq!(gray_decode(gray_encode(n)), n, "index {}", n);
        }
    }

    #[test]
    fn test_adjacent_codes_differ_in_one_bit() {
        for n in 0..63 {
            let diff = gray_encode(n) ^ gray_encode(n + 1);
            assert_eq!(diff.count_ones(), 1, "codes {} and {}", n, n + 1);
        }
    }

    #[test]
    fn test_label_bit_msb_first() {
        // 0b10 in a 2-bit label: bit 0 set, bit 1 clear
        assert!(label_bit(2, 0, 2));
        assert!(!label_bit(2, 1, 2));

        // 0b011 in a 3-bit label
        assert!(!label_bit(3, 0, 3));
        assert!(label_bit(3, 1, 3));
        assert!(label_bit(3, 2, 3));
    }
}
