//! Bit and byte width helpers.
//!
//! `log2` and `log4` give the number of binary and base-4 digits needed to
//! address `n` distinct values, `byte_width` maps a bit width onto the
//! smallest native unsigned integer able to hold it.

use crate::error::{EstimateError, Result};

/// Widest field supported by any native container
pub const MAX_FIELD_BITS: u32 = 64;

/// Return minimum number of bits needed to address `n` distinct values.
///
/// `log2(1) = 0`, `log2(2) = 1`, `log2(5) = 3`. Zero is treated like one.
#[inline]
pub fn log2(n: u64) -> u32 {
    if n <= 1 {
        return 0;
    }
    u64::BITS - (n - 1).leading_zeros()
}

/// Return minimum number of base-4 digits needed to address `n` distinct values.
///
/// `log4(1) = 0`, `log4(4) = 1`, `log4(5) = 2`. Zero is treated like one.
#[inline]
pub fn log4(n: u64) -> u32 {
    log2(n).div_ceil(2)
}

/// Return minimum bit width used for a field indexing `n` elements.
///
/// Unlike `log2` this never returns zero, a field is at least one bit wide.
#[inline]
pub fn min_bits(n: u64) -> u32 {
    log2(n).max(1)
}

/// Return number of bytes of the smallest native container holding `bits`.
#[inline]
pub fn byte_width(bits: u32) -> Result<u32> {
    match bits {
        0..=8 => Ok(1),
        9..=16 => Ok(2),
        17..=32 => Ok(4),
        33..=MAX_FIELD_BITS => Ok(8),
        _ => Err(EstimateError::UnsupportedWidth { bits }),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1 => 0)]
    #[test_case(2 => 1)]
    #[test_case(3 => 2)]
    #[test_case(4 => 2)]
    #[test_case(5 => 3)]
    #[test_case(1 << 20 => 20)]
    #[test_case((1 << 20) + 1 => 21)]
    #[test_case(2_000_000 => 21)]
    #[test_case(u64::MAX => 64)]
    fn test_log2(n: u64) -> u32 {
        log2(n)
    }

    #[test_case(1 => 0)]
    #[test_case(2 => 1)]
    #[test_case(3 => 1)]
    #[test_case(4 => 1)]
    #[test_case(5 => 2)]
    #[test_case(16 => 2)]
    #[test_case(17 => 3)]
    #[test_case(2_000_000 => 11)]
    fn test_log4(n: u64) -> u32 {
        log4(n)
    }

    /// Reference definitions: `1 + log(ceil(n / base))` recursion.
    fn log2_recursive(n: u64) -> u32 {
        if n == 1 {
            0
        } else {
            1 + log2_recursive(n.div_ceil(2))
        }
    }

    fn log4_recursive(n: u64) -> u32 {
        if n == 1 {
            0
        } else if n < 4 {
            1
        } else {
            1 + log4_recursive(n.div_ceil(4))
        }
    }

    #[test]
    fn test_closed_forms_match_recursion() {
        for n in (1..5000).chain([65_535, 65_536, 65_537, 4_194_303, 4_194_305]) {
            assert_eq!(log2(n), log2_recursive(n), "log2({})", n);
            assert_eq!(log4(n), log4_recursive(n), "log4({})", n);
        }
    }

    #[test]
    fn test_logs_non_decreasing() {
        let mut prev = (0, 0);
        for n in 1..100_000 {
            let cur = (log2(n), log4(n));
            assert!(cur.0 >= prev.0 && cur.1 >= prev.1, "n = {}", n);
            prev = cur;
        }
    }

    #[test]
    fn test_zero_is_treated_like_one() {
        assert_eq!(log2(0), 0);
        assert_eq!(log4(0), 0);
        assert_eq!(min_bits(0), 1);
        assert_eq!(min_bits(1), 1);
        assert_eq!(min_bits(1000), 10);
    }

    #[test]
    fn test_byte_width() {
        for bits in 1..=8 {
            assert_eq!(byte_width(bits), Ok(1));
        }
        for bits in 9..=16 {
            assert_eq!(byte_width(bits), Ok(2));
        }
        for bits in 17..=32 {
            assert_eq!(byte_width(bits), Ok(4));
        }
        for bits in 33..=64 {
            assert_eq!(byte_width(bits), Ok(8));
        }
        assert_eq!(
            byte_width(65),
            Err(EstimateError::UnsupportedWidth { bits: 65 })
        );
    }
}
