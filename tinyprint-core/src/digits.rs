//! Decimal digit table
//!
//! Descending powers of ten covering the full `u32` range. The decimal
//! renderer walks this table and extracts each digit by repeated
//! subtraction, so no divide instruction is needed (AVR and Cortex-M0
//! have none).

/// Powers of ten, `10^9` down to `10^0`
pub const POWERS_OF_TEN: [u32; 10] = [
    1_000_000_000,
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
    1,
];

/// Index of the last table entry (`10^0`)
pub const LAST_POWER: usize = POWERS_OF_TEN.len() - 1;

/// `10^exp` for `exp` in `0..=9`
///
/// Larger exponents saturate at `10^9`.
pub fn pow10(exp: u8) -> u32 {
    let exp = (exp as usize).min(LAST_POWER);
    POWERS_OF_TEN[LAST_POWER - exp]
}

/// Number of decimal digits in `n` (`0` has one digit)
pub fn decimal_len(n: u32) -> usize {
    POWERS_OF_TEN
        .iter()
        .position(|&power| n >= power)
        .map_or(1, |i| POWERS_OF_TEN.len() - i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_descending_powers() {
        assert_eq!(POWERS_OF_TEN.len(), 10);
        for pair in POWERS_OF_TEN.windows(2) {
            assert_eq!(pair[0], pair[1] * 10);
        }
        assert_eq!(POWERS_OF_TEN[LAST_POWER], 1);
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(2), 100);
        assert_eq!(pow10(9), 1_000_000_000);
        assert_eq!(pow10(12), 1_000_000_000);
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(999_999), 6);
        assert_eq!(decimal_len(1_000_000_000), 10);
        assert_eq!(decimal_len(u32::MAX), 10);
    }
}
