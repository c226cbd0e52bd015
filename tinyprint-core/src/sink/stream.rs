//! Streaming sink over a UART transmitter
//!
//! Every byte goes straight to the transmitter; nothing is buffered here.
//! If the transmitter blocks, rendering blocks with it.

use tinyprint_hal::UartTx;

use super::Sink;
use crate::config::NewlineMode;

/// Sink that forwards each byte to a [`UartTx`]
///
/// Newline literals in the format string reach the wire as `\r\n` by
/// default, which is what serial terminals expect.
///
/// The sink contract has no error channel, so the first transmit error
/// is latched: later bytes are discarded and the error is reported by
/// [`finish`](Self::finish).
///
/// The sink is not synchronised. Callers sharing one transmitter between
/// thread mode and an interrupt handler must serialise access themselves.
pub struct StreamSink<T: UartTx> {
    tx: T,
    newline: NewlineMode,
    error: Option<T::Error>,
}

impl<T: UartTx> StreamSink<T> {
    /// Stream to `tx`, expanding newline literals to `\r\n`
    pub fn new(tx: T) -> Self {
        Self::with_newline(tx, NewlineMode::CrLf)
    }

    /// Stream to `tx` with an explicit newline mode
    pub fn with_newline(tx: T, newline: NewlineMode) -> Self {
        Self {
            tx,
            newline,
            error: None,
        }
    }

    /// Whether a transmit error has been latched
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Report the latched error, if any, then flush the transmitter
    ///
    /// Clears the latch so the sink can be reused.
    pub fn finish(&mut self) -> Result<(), T::Error> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.tx.flush()
    }

    /// Borrow the transmitter
    pub fn tx(&self) -> &T {
        &self.tx
    }

    /// Give back the transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }
}

impl<T: UartTx> Sink for StreamSink<T> {
    fn put(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.tx.write_byte(byte) {
            warn!("transmit failed, discarding remaining output");
            self.error = Some(err);
        }
    }

    fn newline_mode(&self) -> NewlineMode {
        self.newline
    }
}
