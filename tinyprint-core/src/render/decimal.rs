//! Decimal renderer
//!
//! Digits come from walking [`POWERS_OF_TEN`] and counting how many
//! times each power can be subtracted, so the loop needs neither a
//! divide nor a modulo instruction. Leading zero digits are suppressed
//! until the first non-zero digit or the units place, which guarantees
//! that `0` prints as `"0"`.
//!
//! Under the `0` flag nothing is suppressed: every table position is
//! printed, so a zero-padded value is always ten digits wide whatever
//! the requested width (`%05d` of `42` is `0000000042`). Space padding
//! is the only fill bounded by width.

use super::{sign_byte, write_fill};
use crate::digits::{decimal_len, LAST_POWER, POWERS_OF_TEN};
use crate::directive::Pad;
use crate::sink::Sink;

/// Write `sign` (if any), padding, then the digits of `n`
///
/// With [`Pad::Space`] the field is padded so that sign plus digits reach
/// `width`. With [`Pad::Zero`] every leading position of the table is
/// printed as `0` and `width` is not consulted. A longer number is never
/// cut.
pub fn write_decimal<S: Sink + ?Sized>(
    sink: &mut S,
    mut n: u32,
    width: usize,
    pad: Pad,
    sign: Option<u8>,
) {
    if let Some(sign) = sign {
        sink.put(sign);
    }
    if pad == Pad::Space {
        let used = usize::from(sign.is_some()) + decimal_len(n);
        write_fill(sink, pad, width.saturating_sub(used));
    }

    let mut started = false;
    for (i, &power) in POWERS_OF_TEN.iter().enumerate() {
        let mut count = 0u8;
        while n >= power {
            n -= power;
            count += 1;
        }
        if count > 0 || started || i == LAST_POWER {
            sink.put(b'0' + count);
            started = true;
        } else if pad == Pad::Zero {
            sink.put(b'0');
        }
    }
}

/// `%d`: minus for negatives, plus for the rest under `force_sign`
pub fn write_signed<S: Sink + ?Sized>(
    sink: &mut S,
    value: i32,
    width: usize,
    pad: Pad,
    force_sign: bool,
) {
    let sign = sign_byte(value < 0, force_sign);
    write_decimal(sink, value.unsigned_abs(), width, pad, sign);
}

/// `%u`: never signed
pub fn write_unsigned<S: Sink + ?Sized>(sink: &mut S, value: u32, width: usize, pad: Pad) {
    write_decimal(sink, value, width, pad, None);
}
