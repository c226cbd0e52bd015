//! Bounded buffer sink
//!
//! Writes into a caller-supplied slice from offset 0. One slot is always
//! kept for the terminating zero byte, so at most `capacity - 1` rendered
//! bytes land in the buffer; the rest are dropped without complaint.

use super::Sink;

/// Sink over a fixed `&mut [u8]`
#[derive(Debug)]
pub struct BufferSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
    dropped: usize,
}

impl<'a> BufferSink<'a> {
    /// Start writing at the beginning of `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            dropped: 0,
        }
    }

    /// Size of the destination, terminator slot included
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written so far (terminator excluded)
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Bytes discarded because the buffer was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Whether any byte has been discarded
    ///
    /// A truncated render and one that exactly filled the buffer report
    /// the same [`written`](Self::written) count; this tells them apart.
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// The bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Null-terminate at the current position and return the written count
    ///
    /// A zero-capacity buffer has no room for the terminator and is left
    /// untouched.
    pub fn finish(self) -> usize {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        if self.dropped > 0 {
            debug!(
                "buffer sink truncated: {} written, {} dropped",
                self.pos,
                self.dropped
            );
        }
        self.pos
    }
}

impl Sink for BufferSink<'_> {
    fn put(&mut self, byte: u8) {
        if self.pos + 1 < self.buf.len() {
            self.buf[self.pos] = byte;
            self.pos += 1;
        } else {
            self.dropped += 1;
        }
    }
}
