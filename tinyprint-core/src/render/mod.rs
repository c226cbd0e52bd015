//! Number renderers
//!
//! Pure functions from a value plus field options to bytes on a sink.
//! None of them allocate; scratch space is a small stack array.
//!
//! Signs always come first, then padding, then digits, so `%5d` of `-42`
//! prints `-  42`.

pub mod decimal;
pub mod fixed;
pub mod radix;
pub mod scientific;

pub use decimal::{write_decimal, write_signed, write_unsigned};
pub use fixed::{scale, write_fixed, write_float};
pub use radix::{write_hex, write_octal, write_pointer};
pub use scientific::{normalize, write_scientific};

use crate::directive::{Case, Pad};
use crate::sink::Sink;

/// Emit `count` copies of the pad byte
pub(crate) fn write_fill<S: Sink + ?Sized>(sink: &mut S, pad: Pad, count: usize) {
    let byte = pad.byte();
    for _ in 0..count {
        sink.put(byte);
    }
}

/// Sign for a value given its negativity and the `+` flag
pub(crate) fn sign_byte(negative: bool, force_sign: bool) -> Option<u8> {
    if negative {
        Some(b'-')
    } else if force_sign {
        Some(b'+')
    } else {
        None
    }
}

/// `nan`, `inf` or `-inf`, right-aligned in `width` with spaces
///
/// The integer scaling used for `%f`/`%e` has no representation for
/// these, and normalising an infinity would never terminate.
pub fn write_non_finite<S: Sink + ?Sized>(
    sink: &mut S,
    value: f32,
    case: Case,
    width: usize,
    force_sign: bool,
) {
    let nan = value.is_nan();
    let sign = if nan {
        None
    } else {
        sign_byte(value.is_sign_negative(), force_sign)
    };
    let word: &[u8] = match (nan, case) {
        (true, Case::Lower) => b"nan",
        (true, Case::Upper) => b"NAN",
        (false, Case::Lower) => b"inf",
        (false, Case::Upper) => b"INF",
    };

    let len = word.len() + usize::from(sign.is_some());
    if let Some(sign) = sign {
        sink.put(sign);
    }
    write_fill(sink, Pad::Space, width.saturating_sub(len));
    sink.put_all(word);
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn non_finite(value: f32, case: Case, width: usize, force_sign: bool) -> Vec<u8, 16> {
        let mut out = Vec::new();
        write_non_finite(&mut out, value, case, width, force_sign);
        out
    }

    #[test]
    fn test_non_finite_words() {
        assert_eq!(non_finite(f32::NAN, Case::Lower, 0, true).as_slice(), b"nan");
        assert_eq!(non_finite(f32::INFINITY, Case::Upper, 0, false).as_slice(), b"INF");
        assert_eq!(non_finite(f32::NEG_INFINITY, Case::Lower, 0, false).as_slice(), b"-inf");
        assert_eq!(non_finite(f32::INFINITY, Case::Lower, 0, true).as_slice(), b"+inf");
    }

    #[test]
    fn test_non_finite_width() {
        assert_eq!(non_finite(f32::NEG_INFINITY, Case::Lower, 6, false).as_slice(), b"-  inf");
    }
}
