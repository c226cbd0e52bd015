//! Formatter configuration
//!
//! There is no runtime configuration file: limits are compile-time
//! constants and the only per-sink choice is how literal newlines are
//! delivered.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction digits used by `%f`, `%e` and `%E` when no precision is given
pub const DEFAULT_PRECISION: u8 = 6;

/// Largest honoured precision
///
/// `10^9` is the largest power of ten in the digit table; anything above
/// is clamped to this.
pub const MAX_PRECISION: u8 = 9;

/// Largest honoured field width
///
/// Wider requests are clamped to this while parsing, so a runaway width
/// in a format string costs at most this many fill bytes.
pub const MAX_WIDTH: usize = 255;

/// Digits printed after the exponent sign in scientific notation
pub const EXPONENT_DIGITS: usize = 2;

/// How a sink wants newline literals from the format string delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NewlineMode {
    /// Pass `\n` through unchanged (buffers, host-side capture)
    #[default]
    Lf,
    /// Expand `\n` to `\r\n` (serial terminals)
    CrLf,
}

impl NewlineMode {
    /// Bytes to emit for one newline literal
    pub fn sequence(self) -> &'static [u8] {
        match self {
            NewlineMode::Lf => b"\n",
            NewlineMode::CrLf => b"\r\n",
        }
    }
}

/// Clamp a requested precision to what the renderers support
pub fn clamp_precision(precision: Option<u8>) -> u8 {
    precision.unwrap_or(DEFAULT_PRECISION).min(MAX_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_sequences() {
        assert_eq!(NewlineMode::Lf.sequence(), b"\n");
        assert_eq!(NewlineMode::CrLf.sequence(), b"\r\n");
        assert_eq!(NewlineMode::default(), NewlineMode::Lf);
    }

    #[test]
    fn test_clamp_precision() {
        assert_eq!(clamp_precision(None), 6);
        assert_eq!(clamp_precision(Some(0)), 0);
        assert_eq!(clamp_precision(Some(3)), 3);
        assert_eq!(clamp_precision(Some(40)), MAX_PRECISION);
    }
}
