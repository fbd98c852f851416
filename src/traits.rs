/// All commands need to have this trait which gives the address of the command
/// which needs to be send via SPI with activated CommandsPin (Data/Command Pin in CommandMode)
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// Seperates the different LUT for the Display Refresh process
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum RefreshMode {
    /// The "normal" full Lookuptable for the Refresh-Sequence
    ///
    /// Repaints the whole panel with the strongest waveform. Slow and flickering, but clean.
    #[default]
    Full,
    /// The quick LUT for partial windows
    ///
    /// Only shortly drives the pixels of the window. A full refresh is needed
    /// after a certain amount of partial refreshes to get rid of ghosting.
    Partial,
}

/// The surface a rendering layer needs to get pixels onto a panel
///
/// Drawing streams an 8-bit intensity bitmap into the panel memory, [`flush`](BitmapDisplay::flush)
/// then has to be polled until it returns `true` before the next bitmap may be drawn.
pub trait BitmapDisplay<SPI> {
    /// The error type of the display
    type Error;

    /// Width of the host frame in pixels
    fn width(&self) -> u32;

    /// Height of the host frame in pixels
    fn height(&self) -> u32;

    /// Transmits a rectangular region of the host frame to the panel
    ///
    /// (x,y) is the top left corner, `buffer` holds one intensity byte per pixel, row by row
    ///
    /// BUFFER needs to be of size: width * height !
    #[allow(clippy::too_many_arguments)]
    fn draw_bitmap(
        &mut self,
        spi: &mut SPI,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), Self::Error>;

    /// Advances the refresh of the panel by one step without blocking
    ///
    /// Returns `true` exactly once per refresh: on the call where the panel reports ready.
    fn flush(&mut self, spi: &mut SPI) -> Result<bool, Self::Error>;
}
