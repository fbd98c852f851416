//! Conversion of host intensity bitmaps into panel scan lines
//!
//! The host frame is the panel turned by 90°. A panel scan line therefore is a host column,
//! walked from the top of the host frame to the bottom, and the first scan line of a region
//! is its rightmost column. Eight vertically adjacent host pixels make one panel byte,
//! the topmost one in the most significant bit.
//!
//! Every pixel is quantized with [`Color::from_intensity`]: at or above 0x80 it is white
//! (bit set), below it is black (bit cleared).

use crate::color::Color;

/// Number of bytes one scan line of a region `height` host pixels tall is packed into
pub(crate) fn line_len(height: u32) -> usize {
    (height as usize).div_ceil(8)
}

/// Packs scan line `line` of a `width` x `height` host region into `out`
///
/// `src` holds one intensity byte per pixel, row by row, with a stride of `width`.
/// `line` counts from 0 to `width - 1`, `out` has to be [`line_len`] bytes long.
/// Rows below the region (when `height` is not a multiple of 8) are packed as black.
///
/// Returns `false` and leaves `out` untouched if the line or the lengths don't match the region.
pub(crate) fn pack_scan_line(
    src: &[u8],
    width: u32,
    height: u32,
    line: u32,
    out: &mut [u8],
) -> bool {
    if line >= width
        || src.len() != width as usize * height as usize
        || out.len() != line_len(height)
    {
        return false;
    }
    let width = width as usize;
    let height = height as usize;
    let column = width - 1 - line as usize;

    for (index, byte) in out.iter_mut().enumerate() {
        let mut packed = 0u8;
        for bit in 0..8 {
            let row = index * 8 + bit;
            packed <<= 1;
            if row < height {
                packed |= Color::from_intensity(src[row * width + column]).get_bit_value();
            }
        }
        *byte = packed;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{vec, vec::Vec};

    fn packed_len(width: u32, height: u32) -> usize {
        width as usize * line_len(height)
    }

    /// Packs a whole region in panel scan order
    fn pack(src: &[u8], width: u32, height: u32, out: &mut [u8]) -> bool {
        if out.len() != packed_len(width, height) {
            return false;
        }
        let len = line_len(height);
        len == 0
            || out
                .chunks_exact_mut(len)
                .enumerate()
                .all(|(line, chunk)| pack_scan_line(src, width, height, line as u32, chunk))
    }

    fn packed(src: &[u8], width: u32, height: u32) -> Vec<u8> {
        let mut out = vec![0xAA; packed_len(width, height)];
        assert!(pack(src, width, height, &mut out));
        out
    }

    #[test]
    fn lengths() {
        assert_eq!(line_len(8), 1);
        assert_eq!(line_len(128), 16);
        assert_eq!(line_len(12), 2);
        assert_eq!(packed_len(8, 8), 8);
        assert_eq!(packed_len(296, 128), 4736);
        assert_eq!(packed_len(16, 8), 16);
    }

    #[test]
    fn checkerboard() {
        let src: Vec<u8> = (0..64)
            .map(|i| if (i / 8 + i % 8) % 2 == 0 { 0xFF } else { 0x00 })
            .collect();
        assert_eq!(
            packed(&src, 8, 8),
            [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA]
        );
    }

    #[test]
    fn uniform_buffers() {
        for (width, height) in [(8, 8), (16, 8), (8, 24), (296, 128)] {
            let len = (width * height) as usize;
            assert!(packed(&vec![0x00; len], width, height)
                .iter()
                .all(|&b| b == 0x00));
            assert!(packed(&vec![0xFF; len], width, height)
                .iter()
                .all(|&b| b == 0xFF));
        }
    }

    #[test]
    fn threshold_is_binary() {
        let src = [0x7F, 0x80, 0x00, 0xFF, 0x10, 0xC0, 0x7F, 0x80];
        // 1 column, 8 rows: top row ends up in the msb
        assert_eq!(packed(&src, 1, 8), [0b0101_0101]);
    }

    #[test]
    fn rotation() {
        // 16 wide, 8 tall
        let mut src = [0u8; 16 * 8];
        // top right corner => first scan line, msb
        src[15] = 0xFF;
        // bottom left corner => last scan line, lsb
        src[7 * 16] = 0xFF;

        let out = packed(&src, 16, 8);
        assert_eq!(out.len(), 16);
        assert_eq!(out[0], 0x80);
        assert_eq!(out[15], 0x01);
        assert!(out[1..15].iter().all(|&b| b == 0));
    }

    #[test]
    fn tall_region_spans_multiple_bytes() {
        // 8 wide, 16 tall
        let mut src = [0u8; 8 * 16];
        // row 15 of the last column => first scan line, second byte, lsb
        src[15 * 8 + 7] = 0xFF;
        // row 8 of the first column => last scan line, second byte, msb
        src[8 * 8] = 0xFF;

        let out = packed(&src, 8, 16);
        assert_eq!(out.len(), 16);
        assert_eq!(out[1], 0x01);
        assert_eq!(out[15], 0x80);
        assert_eq!(out.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn partial_byte_is_padded_black() {
        let src = [0xFF; 4 * 3];
        let out = packed(&src, 4, 3);
        assert_eq!(out, [0xE0; 4]);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let src = [0xFF; 64];

        // output too short for the region
        let mut out = [0u8; 4];
        assert!(!pack(&src, 8, 8, &mut out));
        assert_eq!(out, [0; 4]);

        // source too short for the region
        let mut out = [0u8; 8];
        assert!(!pack(&src[..60], 8, 8, &mut out));
        assert_eq!(out, [0; 8]);

        // empty region, line past the region, wrong line buffer
        let mut line = [0u8; 1];
        assert!(!pack_scan_line(&[], 0, 8, 0, &mut line));
        assert!(!pack_scan_line(&src, 8, 8, 8, &mut line));
        assert!(!pack_scan_line(&src, 8, 8, 0, &mut [0u8; 2]));
        assert_eq!(line, [0]);

        assert!(pack_scan_line(&src, 8, 8, 7, &mut line));
        assert_eq!(line, [0xFF]);
    }
}
