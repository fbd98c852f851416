//! A Driver for the Waveshare 2.9" (D) E-Ink Display via SPI
//!
//! The panel is 128x296 pixels with a UC8151 class controller. It is driven with its own
//! waveforms loaded into the LUT registers, which allows quick partial refreshes of
//! byte aligned windows.
//!
//! The host sees the panel turned by 90°, as a [`FRAME_WIDTH`] x [`FRAME_HEIGHT`] landscape
//! frame. Drawing streams 8-bit intensity pixels which get rotated and quantized on the fly,
//! so no full frame buffer is needed on the driver side.
//!
//! Specification: <https://www.waveshare.com/w/upload/b/b5/2.9inch_e-Paper_%28D%29_Specification.pdf>
//!
//! # Example
//!
//! ```rust,ignore
//! use epd_2in9d::{epd2in9d::*, prelude::*};
//!
//! let mut epd = Epd2in9d::new(&mut spi, busy, dc, rst, &mut delay, Config::default())?;
//!
//! // a white 16x16 square at the top left corner of the host frame
//! epd.draw_bitmap(&mut spi, 0, 0, 16, 16, &[0xff; 256])?;
//! while !epd.flush(&mut spi)? {
//!     // do something else
//! }
//!
//! epd.sleep(&mut spi, &mut delay)?;
//! ```

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};
use log::{debug, trace, warn};

use crate::color::Color;
use crate::error::ErrorKind;
use crate::interface::DisplayInterface;
use crate::rect::Rect;
use crate::traits::{BitmapDisplay, RefreshMode};
use crate::waveform::{LutSet, MAX_LUT_LEN};

pub(crate) mod command;
use self::command::{Command, PanelSetting, Resolution, VcomAndDataInterval};

mod config;
pub use self::config::{Config, FrameRate};

//The Lookup Tables for the Display
mod constants;
use self::constants::{LUT_FULL, LUT_PARTIAL};

mod flush;
pub use self::flush::FlushState;

#[cfg(feature = "async")]
mod asynch;

mod transform;


/// Width of Epd2in9d in pixels
pub const WIDTH: u32 = 128;
/// Height of Epd2in9d in pixels
pub const HEIGHT: u32 = 296;
/// Width of the host frame, the panel turned by 90°
pub const FRAME_WIDTH: u32 = HEIGHT;
/// Height of the host frame, the panel turned by 90°
pub const FRAME_HEIGHT: u32 = WIDTH;

/// Check code the deep sleep command has to be sent with
const DEEP_SLEEP_CHECK: u8 = 0xA5;
/// Last byte of the partial window: gates scanned inside the window only
const PARTIAL_SCAN_INSIDE: u8 = 0x28;
/// Reset timing: line high before the pulse and the pulse itself, in ms
const RESET_HIGH_MS: u32 = 200;
const RESET_PULSE_MS: u32 = 2;

const PANEL_SETTING: PanelSetting = PanelSetting {
    resolution: Resolution::Res128x296,
    lut_from_register: true,
    black_white: true,
    scan_up: true,
    shift_right: true,
    booster_on: true,
    soft_reset: false,
    vcom_fast_discharge: true,
};

/// Full size intensity buffer for the host frame of the Epd2in9d
#[cfg(feature = "graphics")]
pub type Frame2in9d = crate::graphics::IntensityBuffer<
    FRAME_WIDTH,
    FRAME_HEIGHT,
    { (FRAME_WIDTH * FRAME_HEIGHT) as usize },
>;

/// Epd2in9d driver
pub struct Epd2in9d<SPI, BUSY, DC, RST> {
    /// Connection Interface
    interface: DisplayInterface<SPI, BUSY, DC, RST>,
    config: Config,
    /// Progress of the current refresh
    flush_state: FlushState,
    /// A bitmap was drawn and not yet completed by a flush
    frame_pending: bool,
}

impl<SPI, BUSY, DC, RST> Epd2in9d<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new driver and initialises the panel
    pub fn new<DELAY: DelayNs>(
        spi: &mut SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        delay: &mut DELAY,
        config: Config,
    ) -> Result<Self, ErrorKind<SPI, BUSY, DC, RST>> {
        let mut epd = Self::from_parts(busy, dc, rst, config);
        epd.init(spi, delay)?;
        Ok(epd)
    }

    pub(crate) fn from_parts(busy: BUSY, dc: DC, rst: RST, config: Config) -> Self {
        Epd2in9d {
            interface: DisplayInterface::new(busy, dc, rst),
            config,
            flush_state: FlushState::default(),
            frame_pending: false,
        }
    }

    /// Gives the pins back, the panel keeps its current state
    pub fn release(self) -> (BUSY, DC, RST) {
        self.interface.release()
    }

    /// Resets the panel and runs the power up sequence
    ///
    /// Leaves the panel powered on with neither LUT set loaded. Any refresh the driver was
    /// tracking is forgotten.
    pub fn init<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        debug!("initialising display");
        self.interface.reset(delay, RESET_HIGH_MS, RESET_PULSE_MS)?;

        // internal VDH/VDL/VGH/VGL, VDH and VDL at +-11V, VDHR at 3V
        self.interface
            .cmd_with_data(spi, Command::PowerSetting, &[0x03, 0x00, 0x2b, 0x2b, 0x03])?;
        self.interface
            .cmd_with_data(spi, Command::BoosterSoftStart, &[0x17, 0x17, 0x17])?;

        self.interface.cmd(spi, Command::PowerOn)?;
        self.wait_until_idle(spi, delay)?;

        self.interface
            .cmd_with_data(spi, Command::PanelSetting, &PANEL_SETTING.to_bytes())?;
        self.interface.cmd_with_data(
            spi,
            Command::PllControl,
            &[self.config.frame_rate.pll_value()],
        )?;
        self.interface.cmd_with_data(
            spi,
            Command::TconResolution,
            &[WIDTH as u8, (HEIGHT >> 8) as u8, HEIGHT as u8],
        )?;
        self.interface
            .cmd_with_data(spi, Command::VcmDcSetting, &[self.config.vcom_dc])?;

        self.reset_flush();
        self.frame_pending = false;
        Ok(())
    }

    /// The configuration the driver was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` while a drawn bitmap waits for its refresh to complete
    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Loads the LUT set for `mode`
    pub fn set_lut(
        &mut self,
        spi: &mut SPI,
        mode: RefreshMode,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        match mode {
            RefreshMode::Full => self.set_full_refresh_mode(spi),
            RefreshMode::Partial => self.set_partial_refresh_mode(spi),
        }
    }

    /// Loads the waveforms for a full refresh
    pub fn set_full_refresh_mode(
        &mut self,
        spi: &mut SPI,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        debug!("loading full refresh waveforms");
        self.interface.cmd_with_data(
            spi,
            Command::VcomAndDataIntervalSetting,
            &[VcomAndDataInterval::DRIVEN_BORDER.to_u8()],
        )?;
        self.set_lut_helper(spi, &LUT_FULL)
    }

    /// Loads the waveforms for a partial refresh
    ///
    /// VCOM_DC is pulled to 0 for the quick waveforms. It stays there until the next
    /// [`init`](Self::init).
    pub fn set_partial_refresh_mode(
        &mut self,
        spi: &mut SPI,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        debug!("loading partial refresh waveforms");
        self.interface
            .cmd_with_data(spi, Command::VcmDcSetting, &[0x00])?;
        self.interface.cmd_with_data(
            spi,
            Command::VcomAndDataIntervalSetting,
            &[VcomAndDataInterval::DRIVEN_BORDER.to_u8()],
        )?;
        self.set_lut_helper(spi, &LUT_PARTIAL)
    }

    fn set_lut_helper(
        &mut self,
        spi: &mut SPI,
        luts: &LutSet,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        let mut buf = [0u8; MAX_LUT_LEN];
        for lut in luts.tables() {
            self.interface
                .cmd_with_data(spi, Command::for_lut(lut.role), lut.encode(&mut buf))?;
        }
        Ok(())
    }

    /// Selects a partial window in panel coordinates and enters partial mode
    ///
    /// Loads the partial waveforms first. `x` and `width` have to be multiples of 8, the
    /// controller addresses the horizontal bounds in whole bytes.
    pub fn set_window(
        &mut self,
        spi: &mut SPI,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        let window = Rect::new(x, y, width, height);
        if window.is_empty() || !window.fits_within(WIDTH, HEIGHT) {
            return Err(ErrorKind::OutOfBounds);
        }
        if (x | width) & 0x07 != 0 {
            return Err(ErrorKind::Misaligned);
        }
        trace!("partial window {:?}", window);

        self.set_partial_refresh_mode(spi)?;
        self.interface.cmd(spi, Command::PartialIn)?;

        let x_end = window.x_end();
        let y_end = window.y_end();
        self.interface.cmd_with_data(
            spi,
            Command::PartialWindow,
            &[
                x as u8,
                x_end as u8,
                (y >> 8) as u8,
                y as u8,
                (y_end >> 8) as u8,
                y_end as u8,
                PARTIAL_SCAN_INSIDE,
            ],
        )
    }

    /// Streams a region of the host frame into the panel memory
    ///
    /// `buffer` holds one intensity byte per pixel, row by row. The region has to be aligned
    /// to 8 pixels and must fit into the host frame. Nothing is shown until
    /// [`flush`](Self::flush) completes, and no other bitmap can be drawn before that.
    ///
    /// Drawing an empty region does nothing.
    pub fn draw_bitmap(
        &mut self,
        spi: &mut SPI,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        let region = Rect::new(x, y, width, height);
        if region.is_empty() {
            return Ok(());
        }
        if self.frame_pending || self.flush_state == FlushState::WaitingForBusy {
            warn!("draw rejected, previous frame not flushed yet");
            return Err(ErrorKind::RefreshPending);
        }
        if !region.is_byte_aligned() {
            return Err(ErrorKind::Misaligned);
        }
        if !region.fits_within(FRAME_WIDTH, FRAME_HEIGHT) {
            return Err(ErrorKind::OutOfBounds);
        }
        if buffer.len() != (width * height) as usize {
            return Err(ErrorKind::BufferLength);
        }
        debug!("drawing {:?}", region);

        let window = region.rotated(HEIGHT);
        self.set_window(spi, window.x, window.y, window.w, window.h)?;

        self.interface.cmd(spi, Command::DataStartTransmission2)?;
        let mut line = [0u8; WIDTH as usize / 8];
        let line = &mut line[..transform::line_len(height)];
        for scan_line in 0..window.h {
            if !transform::pack_scan_line(buffer, width, height, scan_line, line) {
                return Err(ErrorKind::BufferLength);
            }
            self.interface.data(spi, line)?;
        }
        self.interface.cmd(spi, Command::DataStop)?;
        self.interface.cmd(spi, Command::PartialOut)?;

        self.frame_pending = true;
        Ok(())
    }

    /// Clears the whole panel to white with a full refresh
    ///
    /// Blocks until the refresh is done. Leaves the full waveforms loaded.
    pub fn clear_screen<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        if self.flush_state == FlushState::WaitingForBusy {
            return Err(ErrorKind::RefreshPending);
        }
        debug!("clearing display");
        let len = WIDTH / 8 * HEIGHT;

        // old frame black, new frame white: every pixel takes the black to white waveform
        self.interface.cmd(spi, Command::DataStartTransmission1)?;
        self.interface
            .data_x_times(spi, Color::Black.get_byte_value(), len)?;
        self.interface.cmd(spi, Command::DataStartTransmission2)?;
        self.interface
            .data_x_times(spi, Color::White.get_byte_value(), len)?;

        self.set_full_refresh_mode(spi)?;
        self.refresh_blocking(spi, delay)
    }

    /// Blocks until the panel reports ready, within the configured poll budget
    pub fn wait_until_idle<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        self.interface.wait_until_idle_with_cmd(
            spi,
            delay,
            Command::GetStatus,
            self.config.poll_interval_us,
            self.config.busy_timeout_polls,
        )
    }

    /// Powers the panel off and puts the controller into deep sleep
    ///
    /// Only [`wake_up`](Self::wake_up) brings it back. Rejected while a refresh is running.
    pub fn sleep<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        if self.flush_state == FlushState::WaitingForBusy {
            return Err(ErrorKind::RefreshPending);
        }
        debug!("entering deep sleep");
        self.interface.cmd_with_data(
            spi,
            Command::VcomAndDataIntervalSetting,
            &[VcomAndDataInterval::FLOATING_BORDER.to_u8()],
        )?;
        self.interface.cmd(spi, Command::PowerOff)?;
        self.wait_until_idle(spi, delay)?;
        self.interface
            .cmd_with_data(spi, Command::DeepSleep, &[DEEP_SLEEP_CHECK])
    }

    /// Wakes the panel from deep sleep with a hardware reset
    pub fn wake_up<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        self.init(spi, delay)
    }
}

impl<SPI, BUSY, DC, RST> BitmapDisplay<SPI> for Epd2in9d<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = ErrorKind<SPI, BUSY, DC, RST>;

    fn width(&self) -> u32 {
        FRAME_WIDTH
    }

    fn height(&self) -> u32 {
        FRAME_HEIGHT
    }

    fn draw_bitmap(
        &mut self,
        spi: &mut SPI,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), Self::Error> {
        Epd2in9d::draw_bitmap(self, spi, x, y, width, height, buffer)
    }

    fn flush(&mut self, spi: &mut SPI) -> Result<bool, Self::Error> {
        Epd2in9d::flush(self, spi)
    }
}
