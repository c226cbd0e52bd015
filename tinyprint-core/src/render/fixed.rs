//! Fixed-point renderer
//!
//! Floats are never formatted directly. The caller scales the value by
//! `10^precision` and rounds once with add-half-then-truncate (see
//! [`scale`]); this module only splits the resulting integer into
//! `integer.fraction`.
//!
//! Scaling happens in single precision, so output is an approximation of
//! the binary value: `1.005` at precision 2 prints `1.01` because the
//! `f32` product lands on `100.5`. The same rule truncates toward zero
//! for negatives, so `-1.005` prints `-1.00`.

use super::{sign_byte, write_fill, write_non_finite};
use crate::config::MAX_PRECISION;
use crate::digits::{decimal_len, pow10};
use crate::directive::{Case, Pad};
use crate::render::decimal::write_decimal;
use crate::sink::Sink;

/// `value * 10^precision`, rounded by adding 0.5 and truncating
///
/// Out-of-range products saturate.
pub fn scale(value: f32, precision: u8) -> i64 {
    (value * pow10(precision) as f32 + 0.5) as i64
}

/// Render an already scaled value with `precision` fraction digits
///
/// The `.` is always printed, even at precision 0.
pub fn write_fixed<S: Sink + ?Sized>(
    sink: &mut S,
    scaled: i64,
    precision: u8,
    width: usize,
    pad: Pad,
    force_sign: bool,
) {
    let sign = sign_byte(scaled < 0, force_sign);
    write_magnitude(sink, scaled.unsigned_abs(), precision, width, pad, sign);
}

/// `%f`: scale, round and render `value`
pub fn write_float<S: Sink + ?Sized>(
    sink: &mut S,
    value: f32,
    precision: u8,
    width: usize,
    pad: Pad,
    force_sign: bool,
) {
    if !value.is_finite() {
        write_non_finite(sink, value, Case::Lower, width, force_sign);
        return;
    }
    let precision = precision.min(MAX_PRECISION);
    write_fixed(sink, scale(value, precision), precision, width, pad, force_sign);
}

/// Sign, padding, integer part, `.`, fraction
///
/// Padding is applied to the integer part so the whole field reaches
/// `width`, for zeros as well as spaces. A magnitude whose integer part
/// exceeds `u32::MAX` saturates to `4294967295.999...`.
pub(crate) fn write_magnitude<S: Sink + ?Sized>(
    sink: &mut S,
    magnitude: u64,
    precision: u8,
    width: usize,
    pad: Pad,
    sign: Option<u8>,
) {
    let precision = precision.min(MAX_PRECISION);
    let scale = u64::from(pow10(precision));
    let magnitude = magnitude.min(u64::from(u32::MAX) * scale + (scale - 1));
    let int_part = (magnitude / scale) as u32;
    let frac_part = magnitude % scale;

    let int_width = width.saturating_sub(1 + precision as usize);
    match pad {
        Pad::Space => write_decimal(sink, int_part, int_width, pad, sign),
        Pad::Zero => {
            let used = usize::from(sign.is_some()) + decimal_len(int_part);
            if let Some(sign) = sign {
                sink.put(sign);
            }
            write_fill(sink, pad, int_width.saturating_sub(used));
            write_decimal(sink, int_part, 0, Pad::Space, None);
        }
    }
    sink.put(b'.');

    // Most significant fraction digit first, zero-filled to `precision`
    let mut divisor = scale / 10;
    for _ in 0..precision {
        sink.put(b'0' + ((frac_part / divisor) % 10) as u8);
        divisor /= 10;
    }
}
