//! In-memory pixel buffers
//!
//! A [`PixelBuffer`] is a rectangle of page-packed pixels (see
//! [`crate::layout`]) placed somewhere on the panel. A full-screen buffer
//! sits at `(0, 0)` with the panel's dimensions; smaller buffers used by
//! [`MultiBuffer`](crate::MultiBuffer) carry their own offset.
//!
//! Only [`PixelBuffer::set_pixel`] reads or writes individual bits. Nothing
//! here touches the device; send a buffer with
//! [`Display::write_buffer`](crate::Display::write_buffer) or through a
//! [`FrameStrategy`](crate::FrameStrategy).
//!
//! ## Example
//!
//! ```
//! use uc1609::{BlendMode, PixelBuffer};
//!
//! let mut buffer = match PixelBuffer::new([0u8; 192 * 8], 192, 64) {
//!     Ok(buffer) => buffer,
//!     Err(_) => return,
//! };
//! buffer.set_pixel(10, 9, BlendMode::Set);
//! assert_eq!(buffer.get_pixel(10, 9), Some(true));
//!
//! // Out of range pixels are ignored
//! buffer.set_pixel(-1, 200, BlendMode::Set);
//! assert_eq!(buffer.get_pixel(-1, 200), None);
//! ```

use crate::color::BlendMode;
use crate::error::BufferError;
use crate::layout::pixel_location;

/// A page-packed 1-bit pixel rectangle
///
/// Generic over its storage: a fixed array, a `Vec<u8>` or a `&mut [u8]`.
#[derive(Debug, Clone)]
pub struct PixelBuffer<B> {
    data: B,
    width: u8,
    height: u8,
    x_offset: i16,
    y_offset: i16,
}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a buffer anchored at the panel origin
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is zero
    /// or `height` is not a multiple of 8, and [`BufferError::TooSmall`] if
    /// `data` holds fewer than `width * height / 8` bytes.
    pub fn new(data: B, width: u8, height: u8) -> Result<Self, BufferError> {
        Self::with_offset(data, width, height, 0, 0)
    }

    /// Create a buffer drawn at `(x_offset, y_offset)` on the panel
    ///
    /// The offset only matters when the buffer is flushed; drawing into the
    /// buffer always uses buffer-local coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_offset(
        data: B,
        width: u8,
        height: u8,
        x_offset: i16,
        y_offset: i16,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 || height % 8 != 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let required = width as usize * (height as usize / 8);
        let provided = data.as_ref().len();
        if provided < required {
            return Err(BufferError::TooSmall { required, provided });
        }
        Ok(Self {
            data,
            width,
            height,
            x_offset,
            y_offset,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels (a multiple of 8)
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Where the buffer's top-left corner lands on the panel
    pub fn offset(&self) -> (i16, i16) {
        (self.x_offset, self.y_offset)
    }

    /// Move the buffer on the panel
    pub fn set_offset(&mut self, x_offset: i16, y_offset: i16) {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
    }

    /// Number of bytes in use (`width * height / 8`)
    pub fn len(&self) -> usize {
        self.width as usize * (self.height as usize / 8)
    }

    /// Always false; zero-sized buffers cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The packed bytes, in the order they are sent to the panel
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        &self.data.as_ref()[..len]
    }

    /// Mutable access to the packed bytes
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.data.as_mut()[..len]
    }

    /// Combine pixel `(x, y)` with `mode`
    ///
    /// Coordinates outside `[0, width) x [0, height)` are silently ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, mode: BlendMode) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let bytes = self.data.as_mut();
        bytes[index] = mode.apply(bytes[index], mask);
    }

    /// Read pixel `(x, y)`, or `None` when out of range
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (index, mask) = self.locate(x, y)?;
        Some(self.data.as_ref()[index] & mask != 0)
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.fill(0x00);
    }

    /// Set every byte to `pattern`
    pub fn fill(&mut self, pattern: u8) {
        self.as_bytes_mut().fill(pattern);
    }

    /// Give back the storage
    pub fn release(self) -> B {
        self.data
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(pixel_location(x as u32, y as u32, u32::from(self.width)))
    }
}
