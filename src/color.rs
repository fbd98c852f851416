//! B/W Color for the EPD

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::{Gray8, GrayColor};

/// Intensity from which on a source pixel is shown white
pub const THRESHOLD: u8 = 0x80;

/// Black/White colors
///
/// The panel is strictly 1-bit. A set bit in the panel memory is white.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Black color
    Black,
    /// White color
    #[default]
    White,
}

impl Color {
    /// Get the color encoding of the color for one bit
    pub fn get_bit_value(self) -> u8 {
        match self {
            Color::White => 1u8,
            Color::Black => 0u8,
        }
    }

    /// Gets a full byte of black or white pixels
    pub fn get_byte_value(self) -> u8 {
        match self {
            Color::White => 0xff,
            Color::Black => 0x00,
        }
    }

    /// Quantizes an 8-bit intensity
    ///
    /// Everything at or above [`THRESHOLD`] is white, everything below black.
    /// There is no dithering.
    pub fn from_intensity(intensity: u8) -> Self {
        if intensity >= THRESHOLD {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Intensity representing this color in a host buffer
    pub fn intensity(self) -> u8 {
        self.get_byte_value()
    }
}

#[cfg(feature = "graphics")]
impl From<Gray8> for Color {
    fn from(value: Gray8) -> Self {
        Color::from_intensity(value.luma())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for Gray8 {
    fn from(value: Color) -> Self {
        match value {
            Color::White => Gray8::WHITE,
            Color::Black => Gray8::BLACK,
        }
    }
}
