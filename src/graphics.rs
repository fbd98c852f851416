//! Graphics Support for EPDs

use crate::{color::Color, rect::Rect, traits::BitmapDisplay};
use embedded_graphics_core::{pixelcolor::Gray8, prelude::*};

/// Intensity buffer used for drawing with embedded graphics
///
/// Holds one byte per pixel of a host frame and can be presented on any [`BitmapDisplay`].
///
/// - WIDTH: width of the host frame in pixels
/// - HEIGHT: height of the host frame in pixels
/// - BYTECOUNT: `WIDTH * HEIGHT`
pub struct IntensityBuffer<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> {
    buffer: [u8; BYTECOUNT],
}

impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> Default
    for IntensityBuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    /// Initialize the buffer all white, the way a cleared panel looks
    // inline is necessary here to allow heap allocation via Box on stack limited programs
    #[inline(always)]
    fn default() -> Self {
        Self {
            buffer: [Color::White.intensity(); BYTECOUNT],
        }
    }
}

/// For use with embedded_grahics
impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> DrawTarget
    for IntensityBuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    type Color = Gray8;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for pixel in pixels {
            self.set_pixel(pixel);
        }
        Ok(())
    }
}

/// For use with embedded_grahics
impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize> OriginDimensions
    for IntensityBuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<const WIDTH: u32, const HEIGHT: u32, const BYTECOUNT: usize>
    IntensityBuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    /// get internal buffer to use it (to draw in epd)
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Set a specific pixel color on this display, pixels outside the frame are ignored
    pub fn set_pixel(&mut self, pixel: Pixel<Gray8>) {
        let Pixel(point, color) = pixel;
        if let Some(index) = Self::index(point) {
            self.buffer[index] = color.luma();
        }
    }

    /// Fills the whole frame with `color`
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(Gray8::from(color).luma());
    }

    /// Copies `region` into `out`, row by row
    ///
    /// Returns `false` and leaves `out` untouched if the region exceeds the frame or
    /// `out` is not exactly `region.w * region.h` bytes long.
    pub fn copy_region(&self, region: Rect, out: &mut [u8]) -> bool {
        if !region.fits_within(WIDTH, HEIGHT) || out.len() != (region.w * region.h) as usize {
            return false;
        }
        if region.is_empty() {
            return true;
        }
        let width = WIDTH as usize;
        for (row, dst) in out.chunks_exact_mut(region.w as usize).enumerate() {
            let start = (region.y as usize + row) * width + region.x as usize;
            dst.copy_from_slice(&self.buffer[start..start + region.w as usize]);
        }
        true
    }

    /// Draws the whole frame on `display`
    ///
    /// The refresh still has to be run with [`BitmapDisplay::flush`].
    pub fn present<SPI, D>(&self, display: &mut D, spi: &mut SPI) -> Result<(), D::Error>
    where
        D: BitmapDisplay<SPI>,
    {
        display.draw_bitmap(spi, 0, 0, WIDTH, HEIGHT, &self.buffer)
    }

    fn index(point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(y as usize * WIDTH as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        pixelcolor::Gray8,
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };
    use std::{vec, vec::Vec};

    type Buffer = IntensityBuffer<16, 8, { 16 * 8 }>;

    /// Records the draws it gets, always refreshes instantly
    #[derive(Default)]
    struct Recorder {
        draws: Vec<(u32, u32, u32, u32, Vec<u8>)>,
    }

    impl BitmapDisplay<()> for Recorder {
        type Error = ();

        fn width(&self) -> u32 {
            16
        }

        fn height(&self) -> u32 {
            8
        }

        fn draw_bitmap(
            &mut self,
            _spi: &mut (),
            x: u32,
            y: u32,
            width: u32,
            height: u32,
            buffer: &[u8],
        ) -> Result<(), ()> {
            self.draws.push((x, y, width, height, buffer.to_vec()));
            Ok(())
        }

        fn flush(&mut self, _spi: &mut ()) -> Result<bool, ()> {
            Ok(true)
        }
    }

    #[test]
    fn graphics_size() {
        let display = Buffer::default();
        assert_eq!(display.buffer().len(), 128);
        assert_eq!(display.size(), Size::new(16, 8));
    }

    #[test]
    fn graphics_default() {
        let display = Buffer::default();
        assert!(display.buffer().iter().all(|&b| b == 0xff));
    }

    #[test]
    fn graphics_line() {
        let mut display = Buffer::default();
        let _ = Line::new(Point::new(0, 1), Point::new(7, 1))
            .into_styled(PrimitiveStyle::with_stroke(Gray8::new(0x40), 1))
            .draw(&mut display);

        let buffer = display.buffer();
        assert!(buffer[16..24].iter().all(|&b| b == 0x40));
        assert!(buffer[..16].iter().all(|&b| b == 0xff));
        assert!(buffer[24..].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn graphics_clips_outside_pixels() {
        let mut display = Buffer::default();
        let _ = Rectangle::new(Point::new(-4, -4), Size::new(40, 40))
            .into_styled(PrimitiveStyle::with_fill(Gray8::BLACK))
            .draw(&mut display);
        assert!(display.buffer().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn fill() {
        let mut display = Buffer::default();
        display.fill(Color::Black);
        assert!(display.buffer().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn copy_region() {
        let mut display = Buffer::default();
        display.set_pixel(Pixel(Point::new(9, 2), Gray8::new(0x11)));

        let mut out = [0u8; 8 * 4];
        assert!(display.copy_region(Rect::new(8, 0, 8, 4), &mut out));
        assert_eq!(out[2 * 8 + 1], 0x11);
        assert_eq!(out.iter().filter(|&&b| b == 0xff).count(), 31);

        assert!(!display.copy_region(Rect::new(12, 0, 8, 4), &mut out));
        assert!(!display.copy_region(Rect::new(0, 0, 8, 2), &mut out));
    }

    #[test]
    fn present() {
        let mut display = Buffer::default();
        display.set_pixel(Pixel(Point::new(0, 0), Gray8::BLACK));

        let mut recorder = Recorder::default();
        display.present(&mut recorder, &mut ()).unwrap();

        let mut expected = vec![0xff; 128];
        expected[0] = 0x00;
        assert_eq!(recorder.draws, [(0, 0, 16, 8, expected)]);
    }
}
