//! Scientific notation renderer
//!
//! The magnitude is brought into `[1, 10)` by repeated division or
//! multiplication by ten, then printed through the fixed-point path
//! followed by the exponent. The exponent always has a sign and exactly
//! two digits, which covers every finite `f32`.
//!
//! Rounding happens after normalisation and is not re-normalised, so
//! `9.9996` at precision 3 prints `10.000e+00`.

use super::fixed::{scale, write_magnitude};
use super::{sign_byte, write_non_finite};
use crate::config::{EXPONENT_DIGITS, MAX_PRECISION};
use crate::directive::{Case, Pad};
use crate::sink::Sink;

/// Bring a positive, finite, non-zero `magnitude` into `[1, 10)`
///
/// Returns the mantissa and the power of ten it was scaled by.
pub fn normalize(mut magnitude: f32) -> (f32, i32) {
    let mut exponent = 0;
    while magnitude >= 10.0 {
        magnitude /= 10.0;
        exponent += 1;
    }
    while magnitude < 1.0 {
        magnitude *= 10.0;
        exponent -= 1;
    }
    (magnitude, exponent)
}

/// `%e` / `%E`
///
/// Exact zero prints `0.` + `precision` zeros + `e+00` with no sign, even
/// under `force_sign`.
pub fn write_scientific<S: Sink + ?Sized>(
    sink: &mut S,
    value: f32,
    precision: u8,
    case: Case,
    width: usize,
    pad: Pad,
    force_sign: bool,
) {
    if !value.is_finite() {
        write_non_finite(sink, value, case, width, force_sign);
        return;
    }
    let precision = precision.min(MAX_PRECISION);

    let (sign, mantissa, exponent) = if value == 0.0 {
        (None, 0.0, 0)
    } else {
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        let (mantissa, exponent) = normalize(magnitude);
        (sign_byte(negative, force_sign), mantissa, exponent)
    };

    // The exponent suffix is fixed-size; the mantissa field takes the rest
    let mantissa_width = width.saturating_sub(2 + EXPONENT_DIGITS);
    let scaled = scale(mantissa, precision).unsigned_abs();
    write_magnitude(sink, scaled, precision, mantissa_width, pad, sign);

    sink.put(match case {
        Case::Lower => b'e',
        Case::Upper => b'E',
    });
    sink.put(if exponent < 0 { b'-' } else { b'+' });
    let exponent = exponent.unsigned_abs();
    sink.put(b'0' + ((exponent / 10) % 10) as u8);
    sink.put(b'0' + (exponent % 10) as u8);
}
