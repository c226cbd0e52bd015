//! Format engine
//!
//! Drives the directive parser over a format string and dispatches each
//! conversion to its renderer. Output goes to the sink one byte at a
//! time, in order, with nothing buffered in between.

use crate::args::{Arg, ArgCursor};
use crate::directive::{Case, Conversion, Directive, Directives, Specifier};
use crate::error::FormatError;
use crate::render::{
    write_float, write_hex, write_octal, write_pointer, write_scientific, write_signed,
    write_unsigned,
};
use crate::sink::{BufferSink, Sink};

/// Render `format` with `args` into `sink`
///
/// Literal newlines are delivered according to the sink's
/// [`newline_mode`](Sink::newline_mode). An unknown specifier is echoed
/// back and takes no argument; `%%` prints `%`.
///
/// Arguments must line up with the directives: the first one that does
/// not stops rendering with an error, leaving earlier output in place.
/// Extra arguments are ignored.
pub fn render<S: Sink + ?Sized>(
    sink: &mut S,
    format: &str,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    render_bytes(sink, format.as_bytes(), args)
}

/// [`render`] for a byte format string, read up to the first zero byte
pub fn render_bytes<S: Sink + ?Sized>(
    sink: &mut S,
    format: &[u8],
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    let newline = sink.newline_mode().sequence();
    let mut cursor = ArgCursor::new(args);

    for directive in Directives::new(format) {
        match directive {
            Directive::Literal(b'\n') => sink.put_all(newline),
            Directive::Literal(byte) => sink.put(byte),
            Directive::Conversion(conversion) => convert(sink, &conversion, &mut cursor)?,
        }
    }
    Ok(())
}

fn convert<S: Sink + ?Sized>(
    sink: &mut S,
    conversion: &Conversion,
    args: &mut ArgCursor<'_, '_>,
) -> Result<(), FormatError> {
    let flags = conversion.flags;
    let width = conversion.width;
    let pad = flags.pad();

    match conversion.specifier {
        Specifier::Char => sink.put(args.next_char()?),
        Specifier::String => puts(sink, args.next_str()?),
        Specifier::SignedInt => {
            write_signed(sink, args.next_signed()?, width, pad, flags.force_sign)
        }
        Specifier::UnsignedInt => write_unsigned(sink, args.next_unsigned()?, width, pad),
        Specifier::HexLower => write_hex(
            sink,
            args.next_unsigned()?.into(),
            width,
            pad,
            flags.alternate,
            Case::Lower,
        ),
        Specifier::HexUpper => write_hex(
            sink,
            args.next_unsigned()?.into(),
            width,
            pad,
            flags.alternate,
            Case::Upper,
        ),
        Specifier::Octal => {
            write_octal(sink, args.next_unsigned()?.into(), width, pad, flags.alternate)
        }
        Specifier::Pointer => write_pointer(sink, args.next_pointer()?),
        Specifier::Fixed => write_float(
            sink,
            args.next_float()?,
            conversion.float_precision(),
            width,
            pad,
            flags.force_sign,
        ),
        Specifier::Scientific(case) => write_scientific(
            sink,
            args.next_float()?,
            conversion.float_precision(),
            case,
            width,
            pad,
            flags.force_sign,
        ),
        Specifier::Percent => sink.put(b'%'),
        Specifier::Unrecognized(byte) => {
            trace!("unrecognized specifier {}, echoing", byte);
            sink.put(byte);
        }
    }
    Ok(())
}

/// Write a byte string up to its first zero byte, uninterpreted
///
/// No directives, no newline expansion.
pub fn puts<S: Sink + ?Sized>(sink: &mut S, text: &[u8]) {
    for &byte in text.iter().take_while(|&&byte| byte != 0) {
        sink.put(byte);
    }
}

/// Write a signed decimal with no padding
pub fn print_dec<S: Sink + ?Sized>(sink: &mut S, value: i32) {
    write_signed(sink, value, 0, Default::default(), false);
}

/// Render into `buf`, null-terminate, and return the bytes written
///
/// At most `buf.len() - 1` bytes are kept; the excess is dropped and the
/// count reflects only what landed. The terminator is written even when
/// an argument error cuts rendering short.
pub fn format_into(buf: &mut [u8], format: &str, args: &[Arg<'_>]) -> Result<usize, FormatError> {
    let mut sink = BufferSink::new(buf);
    let result = render(&mut sink, format, args);
    let written = sink.finish();
    result.map(|()| written)
}

/// Render into a fresh `heapless::Vec`, dropping bytes past `N`
pub fn format_heapless<const N: usize>(
    format: &str,
    args: &[Arg<'_>],
) -> Result<heapless::Vec<u8, N>, FormatError> {
    let mut out = heapless::Vec::new();
    render(&mut out, format, args)?;
    Ok(out)
}

/// Output handle owning its sink
///
/// Redirecting output means building a `Printer` over another sink;
/// there is no global "current output".
pub struct Printer<S> {
    sink: S,
}

impl<S: Sink> Printer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Formatted output, see [`render`]
    pub fn printf(&mut self, format: &str, args: &[Arg<'_>]) -> Result<(), FormatError> {
        render(&mut self.sink, format, args)
    }

    /// Raw output, see [`puts`](fn@puts)
    pub fn puts(&mut self, text: &[u8]) {
        puts(&mut self.sink, text)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
