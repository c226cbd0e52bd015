//! Integer-only printf engine for microcontrollers
//!
//! Renders `printf`-style format strings one byte at a time into a
//! [`Sink`] without a heap or a floating-point formatting library:
//!
//! - Directive parsing (flags, width, precision, `l`, specifier)
//! - Decimal by power-of-ten table subtraction
//! - Hex and octal by shifting, with the radix prefix ahead of padding
//! - Fixed-point and scientific floats through pre-scaled integers
//! - Sinks for serial streams, fixed buffers and closures
//!
//! ```
//! use tinyprint_core::{format_into, Arg};
//!
//! let mut buf = [0u8; 32];
//! let n = format_into(&mut buf, "t=%+.2f C", &[Arg::Float(21.5)]).unwrap();
//! assert_eq!(&buf[..n], b"t=+21.50 C");
//! ```

#![no_std]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module
mod fmt;

pub mod args;
pub mod config;
pub mod digits;
pub mod directive;
pub mod engine;
pub mod error;
pub mod render;
pub mod sink;

pub use args::{Arg, ArgCursor, ArgKind};
pub use config::NewlineMode;
pub use engine::{format_heapless, format_into, print_dec, puts, render, render_bytes, Printer};
pub use error::FormatError;
pub use sink::{BufferSink, FnSink, Sink, StreamSink};

/// Render into a sink, converting each argument with [`Arg::from`]
///
/// ```
/// use tinyprint_core::render;
///
/// let mut out = heapless::Vec::<u8, 16>::new();
/// render!(&mut out, "%s=%u", "n", 7u32).unwrap();
/// assert_eq!(out.as_slice(), b"n=7");
/// ```
#[macro_export]
macro_rules! render {
    ($sink:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::render($sink, $format, &[$($crate::Arg::from($arg)),*])
    };
}
