//! Rectangle operations for draw regions and panel windows

/// A rectangle
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Rect {
    /// Origin X
    pub x: u32,
    /// Origin Y
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Construct a new rectangle
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Test whether the rectangle is empty.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Last column covered by the rectangle (inclusive)
    pub fn x_end(&self) -> u32 {
        self.x + self.w - 1
    }

    /// Last row covered by the rectangle (inclusive)
    pub fn y_end(&self) -> u32 {
        self.y + self.h - 1
    }

    /// Test whether origin and size are multiples of 8 along both axes.
    pub fn is_byte_aligned(&self) -> bool {
        (self.x | self.w | self.y | self.h) & 0x07 == 0
    }

    /// Test whether the rectangle lies within a `width` x `height` area with origin (0,0).
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        // checked, the values come straight from the caller
        matches!(self.x.checked_add(self.w), Some(right) if right <= width)
            && matches!(self.y.checked_add(self.h), Some(bottom) if bottom <= height)
    }

    /// Map a rectangle of the landscape host frame onto the portrait panel
    ///
    /// The host frame is the panel turned by 90°: host rows run along the panel's
    /// x axis and the last host column is the first panel row.
    /// `panel_height` is the number of rows of the panel.
    ///
    /// The rectangle must be non-empty and fit in the host frame.
    pub fn rotated(&self, panel_height: u32) -> Rect {
        Rect {
            x: self.y,
            y: panel_height - self.x_end() - 1,
            w: self.h,
            h: self.w,
        }
    }
}
