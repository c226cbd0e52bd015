//! Hexadecimal and octal renderers
//!
//! Digits are peeled off least-significant first with shifts and masks
//! into a stack buffer sized for a `u64`, then emitted in reverse.
//!
//! With the `#` flag the radix prefix (`0X` for hex, `0` for octal) is
//! written *before* the padding, and the width is compared against the
//! digit count alone. So `%#06x` of `0xFF` prints `0X0000FF`. Output
//! layout depends on this; keep it.

use super::write_fill;
use crate::directive::{Case, Pad};
use crate::sink::Sink;

const HEX_DIGITS_MAX: usize = (u64::BITS as usize).div_ceil(4);
const OCTAL_DIGITS_MAX: usize = (u64::BITS as usize).div_ceil(3);

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Fill `buf` with the digits of `n`, least significant first
///
/// `shift` is the bits per digit. Returns the digit count; zero yields
/// a single `'0'`.
fn collect_digits(mut n: u64, shift: u32, table: &[u8; 16], buf: &mut [u8]) -> usize {
    let mask = (1u64 << shift) - 1;
    let mut len = 0;
    loop {
        buf[len] = table[(n & mask) as usize];
        len += 1;
        n >>= shift;
        if n == 0 {
            return len;
        }
    }
}

fn emit<S: Sink + ?Sized>(sink: &mut S, prefix: &[u8], reversed: &[u8], width: usize, pad: Pad) {
    sink.put_all(prefix);
    write_fill(sink, pad, width.saturating_sub(reversed.len()));
    for &digit in reversed.iter().rev() {
        sink.put(digit);
    }
}

/// `%x` / `%X`
pub fn write_hex<S: Sink + ?Sized>(
    sink: &mut S,
    n: u64,
    width: usize,
    pad: Pad,
    alternate: bool,
    case: Case,
) {
    let table = match case {
        Case::Lower => LOWER_DIGITS,
        Case::Upper => UPPER_DIGITS,
    };
    let mut buf = [0u8; HEX_DIGITS_MAX];
    let len = collect_digits(n, 4, table, &mut buf);
    let prefix: &[u8] = if alternate { b"0X" } else { b"" };
    emit(sink, prefix, &buf[..len], width, pad);
}

/// `%o`
pub fn write_octal<S: Sink + ?Sized>(sink: &mut S, n: u64, width: usize, pad: Pad, alternate: bool) {
    let mut buf = [0u8; OCTAL_DIGITS_MAX];
    let len = collect_digits(n, 3, LOWER_DIGITS, &mut buf);
    let prefix: &[u8] = if alternate { b"0" } else { b"" };
    emit(sink, prefix, &buf[..len], width, pad);
}

/// `%p`: `0x` followed by the address in upper-case hex, never padded
pub fn write_pointer<S: Sink + ?Sized>(sink: &mut S, address: usize) {
    sink.put_all(b"0x");
    write_hex(sink, address as u64, 0, Pad::Zero, false, Case::Upper);
}
