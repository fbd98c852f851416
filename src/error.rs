use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

/// Epd error type
///
/// The transport variants wrap errors of the underlying `embedded-hal` implementations.
/// All other variants are raised by the driver itself before anything is sent to the panel,
/// so the panel state is unchanged when they are returned (apart from [`ErrorKind::BusyTimeout`],
/// see there).
pub enum ErrorKind<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Encountered an SPI error
    SpiError(SPI::Error),

    /// Encountered an error on Busy GPIO
    BusyError(BUSY::Error),

    /// Encountered an error on DC GPIO
    DcError(DC::Error),

    /// Encountered an error on RST GPIO
    RstError(RST::Error),

    /// The busy line did not report "ready" within the configured poll budget
    ///
    /// Whatever the panel was doing keeps running. A refresh started by
    /// [`flush`](crate::epd2in9d::Epd2in9d::flush) can still be polled to completion.
    BusyTimeout,

    /// The draw region does not fit on the panel
    OutOfBounds,

    /// The draw region is not aligned to whole bytes of the panel scan lines
    Misaligned,

    /// The source buffer does not hold exactly `width * height` pixels
    BufferLength,

    /// A previous draw has not been completed by a flush yet
    RefreshPending,
}

impl<SPI, BUSY, DC, RST> Display for ErrorKind<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => write!(f, "spi error: {:?}", err),
            Self::BusyError(err) => write!(f, "busy pin error: {:?}", err),
            Self::DcError(err) => write!(f, "dc pin error: {:?}", err),
            Self::RstError(err) => write!(f, "rst pin error: {:?}", err),
            Self::BusyTimeout => write!(f, "display did not leave the busy state in time"),
            Self::OutOfBounds => write!(f, "draw region exceeds the display"),
            Self::Misaligned => write!(f, "draw region is not aligned to 8 pixels"),
            Self::BufferLength => write!(f, "buffer length does not match the draw region"),
            Self::RefreshPending => write!(f, "previous frame has not been flushed yet"),
        }
    }
}

impl<SPI, BUSY, DC, RST> Debug for ErrorKind<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => f.debug_tuple("SpiError").field(err).finish(),
            Self::BusyError(err) => f.debug_tuple("BusyError").field(err).finish(),
            Self::DcError(err) => f.debug_tuple("DcError").field(err).finish(),
            Self::RstError(err) => f.debug_tuple("RstError").field(err).finish(),
            Self::BusyTimeout => f.write_str("BusyTimeout"),
            Self::OutOfBounds => f.write_str("OutOfBounds"),
            Self::Misaligned => f.write_str("Misaligned"),
            Self::BufferLength => f.write_str("BufferLength"),
            Self::RefreshPending => f.write_str("RefreshPending"),
        }
    }
}
