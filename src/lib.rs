//! A Driver for the Waveshare 2.9" (D) E-Ink Display via SPI
//!
//! This driver was built using [`embedded-hal`] traits. It streams 8-bit intensity bitmaps
//! straight into partial windows of the panel and refreshes them without blocking, which makes
//! it usable from a rendering loop that draws dirty regions.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//! - The [`SpiDevice`](embedded_hal::spi::SpiDevice) owns the chip select, every command and every
//!   data block is one transaction
//!
//! ### Other....
//!
//! - Buffersize: draw buffers hold one intensity byte per pixel, `width * height` bytes,
//!   with a region aligned to 8 pixels
//! - Only one bitmap can be drawn per refresh: poll `flush` until it returns `true`
//!   before drawing the next one
//!
//! # Examples
//!
//! ```ignore
//! use epd_2in9d::{epd2in9d::*, prelude::*};
//!
//! let mut epd = Epd2in9d::new(&mut spi, busy, dc, rst, &mut delay, Config::default())?;
//! epd.clear_screen(&mut spi, &mut delay)?;
//!
//! let mut frame = Frame2in9d::default();
//! // draw something into the frame with embedded-graphics
//!
//! frame.present(&mut epd, &mut spi)?;
//! while !epd.flush(&mut spi)? {}
//!
//! epd.sleep(&mut spi, &mut delay)?;
//! ```
//!
//! # Logging
//!
//! Sequences are reported through the [`log`] facade: `debug` for init, mode switches and
//! draws, `trace` for windows and refresh steps, `warn` for rejected draws and busy timeouts.
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod color;

pub mod error;

/// Interface for the physical connection between display and the controlling device
mod interface;

pub mod rect;

pub mod waveform;

pub mod epd2in9d;

/// Includes everything important besides the chosen display
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::ErrorKind;
    pub use crate::traits::{BitmapDisplay, RefreshMode};
    pub use crate::SPI_MODE;

    #[cfg(feature = "graphics")]
    pub use crate::graphics::IntensityBuffer;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};
