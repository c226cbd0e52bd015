//! UART serial transmit abstraction
//!
//! Line setup (baud rate, framing, pins) is the board's business; by the
//! time a transmitter reaches the formatter it is ready to send.

/// UART transmitter
///
/// Writes block until the peripheral has accepted the data. A formatter
/// streaming through a slow port therefore runs at line speed, which is
/// the intended back-pressure.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte to the UART
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_blocking(&[byte])
    }

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: UartTx + ?Sized> UartTx for &mut T {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_blocking(self, data)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::write_byte(self, byte)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

/// Adapter from any [`embedded_io::Write`] to [`UartTx`]
///
/// Most HAL serial drivers implement `embedded_io::Write`; wrap one in
/// `IoTx` to hand it to the formatter.
#[derive(Debug)]
pub struct IoTx<W> {
    writer: W,
}

impl<W> IoTx<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the wrapped writer
    pub fn inner(&self) -> &W {
        &self.writer
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> UartTx for IoTx<W> {
    type Error = W::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
