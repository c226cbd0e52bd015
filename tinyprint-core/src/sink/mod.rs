//! Byte sinks
//!
//! The engine hands every byte it produces to a [`Sink`], one call per
//! byte, in order. Sinks never fail from the engine's point of view: a
//! sink either accepts the byte, blocks until it can, or drops it.
//!
//! - [`BufferSink`] - fixed caller-owned buffer, null-terminated
//! - [`StreamSink`] - forwards to a [`UartTx`](tinyprint_hal::UartTx)
//! - [`FnSink`] - any `FnMut(u8)`
//! - `heapless::Vec<u8, N>` - drops bytes once full

pub mod buffer;
pub mod stream;

pub use buffer::BufferSink;
pub use stream::StreamSink;

use crate::config::NewlineMode;

/// Destination for rendered bytes
pub trait Sink {
    /// Accept one byte
    fn put(&mut self, byte: u8);

    /// Accept several bytes in order
    fn put_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put(byte);
        }
    }

    /// How newline literals from the format string should be delivered
    fn newline_mode(&self) -> NewlineMode {
        NewlineMode::Lf
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put(&mut self, byte: u8) {
        S::put(self, byte)
    }

    fn put_all(&mut self, bytes: &[u8]) {
        S::put_all(self, bytes)
    }

    fn newline_mode(&self) -> NewlineMode {
        S::newline_mode(self)
    }
}

impl<const N: usize> Sink for heapless::Vec<u8, N> {
    fn put(&mut self, byte: u8) {
        // Full vector: byte is dropped
        let _ = self.push(byte);
    }
}

/// Sink backed by a closure
///
/// Handy for bridging to an output routine that is just a function, such
/// as a display driver's `putc`.
pub struct FnSink<F> {
    f: F,
    newline: NewlineMode,
}

impl<F: FnMut(u8)> FnSink<F> {
    /// Wrap a closure; newlines pass through unchanged
    pub fn new(f: F) -> Self {
        Self {
            f,
            newline: NewlineMode::Lf,
        }
    }

    /// Wrap a closure with an explicit newline mode
    pub fn with_newline(f: F, newline: NewlineMode) -> Self {
        Self { f, newline }
    }
}

impl<F: FnMut(u8)> Sink for FnSink<F> {
    fn put(&mut self, byte: u8) {
        (self.f)(byte)
    }

    fn newline_mode(&self) -> NewlineMode {
        self.newline
    }
}
