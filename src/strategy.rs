//! Buffering strategies
//!
//! How drawing reaches the panel is chosen at runtime by picking a
//! [`FrameStrategy`]:
//!
//! - [`SingleBuffer`] - one full-screen framebuffer at the panel origin
//! - [`MultiBuffer`] - several smaller buffers, each placed at its own
//!   offset, with one active at a time
//! - [`Unbuffered`] - no RAM at all; draw directly with
//!   [`Display::write_columns`] and [`Display::draw_bitmap`]
//!
//! ## Example
//!
//! ```
//! use uc1609::{BlendMode, FrameStrategy, MultiBuffer, PixelBuffer};
//!
//! let (Ok(top), Ok(bottom)) = (
//!     PixelBuffer::with_offset([0u8; 192 * 4], 192, 32, 0, 0),
//!     PixelBuffer::with_offset([0u8; 192 * 4], 192, 32, 0, 32),
//! ) else {
//!     return;
//! };
//! let Ok(mut frames) = MultiBuffer::new([top, bottom]) else {
//!     return;
//! };
//!
//! frames.draw_pixel(0, 0, BlendMode::Set);
//! assert!(frames.select(1).is_ok());
//! frames.draw_pixel(0, 0, BlendMode::Set);
//! assert!(frames.select(2).is_err());
//! ```

use crate::buffer::PixelBuffer;
use crate::color::BlendMode;
use crate::display::Display;
use crate::error::{BufferError, Error};
use crate::interface::DisplayInterface;

/// A way of turning pixel writes into panel updates
pub trait FrameStrategy {
    /// Zero the active buffer
    fn clear_buffer(&mut self);

    /// Combine pixel `(x, y)` of the active buffer with `mode`
    ///
    /// Coordinates are buffer-local; out of range pixels are ignored.
    fn draw_pixel(&mut self, x: i32, y: i32, mode: BlendMode);

    /// Send the active buffer to the panel
    fn flush<I: DisplayInterface>(&self, display: &mut Display<I>) -> Result<(), Error<I>>;

    /// Width and height of the active drawing area
    fn size(&self) -> (u16, u16);
}

fn flush_buffer<I, B>(buffer: &PixelBuffer<B>, display: &mut Display<I>) -> Result<(), Error<I>>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x, y) = buffer.offset();
    display.write_buffer(x, y, buffer.width(), buffer.height(), buffer.as_bytes())
}

/// One framebuffer covering the whole panel
#[derive(Debug, Clone)]
pub struct SingleBuffer<B> {
    buffer: PixelBuffer<B>,
}

impl<B> SingleBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `data` as a `width` x `height` framebuffer at the origin
    pub fn new(data: B, width: u8, height: u8) -> Result<Self, BufferError> {
        Ok(Self {
            buffer: PixelBuffer::new(data, width, height)?,
        })
    }

    /// The framebuffer
    pub fn buffer(&self) -> &PixelBuffer<B> {
        &self.buffer
    }

    /// Mutable access to the framebuffer
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<B> {
        &mut self.buffer
    }
}

impl<B> FrameStrategy for SingleBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    fn draw_pixel(&mut self, x: i32, y: i32, mode: BlendMode) {
        self.buffer.set_pixel(x, y, mode);
    }

    fn flush<I: DisplayInterface>(&self, display: &mut Display<I>) -> Result<(), Error<I>> {
        flush_buffer(&self.buffer, display)
    }

    fn size(&self) -> (u16, u16) {
        (u16::from(self.buffer.width()), u16::from(self.buffer.height()))
    }
}

/// Several independently placed buffers, one active at a time
///
/// Useful when a full 1536-byte frame does not fit in RAM: draw the top
/// half, flush, select the bottom half, draw, flush.
#[derive(Debug, Clone)]
pub struct MultiBuffer<B, const N: usize> {
    buffers: [PixelBuffer<B>; N],
    active: usize,
}

impl<B, const N: usize> MultiBuffer<B, N>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create from a set of buffers; the first one starts active
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::NoSuchBuffer`] for an empty set.
    pub fn new(buffers: [PixelBuffer<B>; N]) -> Result<Self, BufferError> {
        if N == 0 {
            return Err(BufferError::NoSuchBuffer { index: 0, count: 0 });
        }
        Ok(Self { buffers, active: 0 })
    }

    /// Make buffer `index` the target of clear, draw and flush
    pub fn select(&mut self, index: usize) -> Result<(), BufferError> {
        if index >= N {
            return Err(BufferError::NoSuchBuffer { index, count: N });
        }
        self.active = index;
        Ok(())
    }

    /// Index of the active buffer
    pub fn active(&self) -> usize {
        self.active
    }

    /// All buffers
    pub fn buffers(&self) -> &[PixelBuffer<B>; N] {
        &self.buffers
    }

    /// All buffers, mutably (e.g. to move one with `set_offset`)
    pub fn buffers_mut(&mut self) -> &mut [PixelBuffer<B>; N] {
        &mut self.buffers
    }

    fn current(&self) -> Option<&PixelBuffer<B>> {
        self.buffers.get(self.active)
    }

    fn current_mut(&mut self) -> Option<&mut PixelBuffer<B>> {
        self.buffers.get_mut(self.active)
    }
}

impl<B, const N: usize> FrameStrategy for MultiBuffer<B, N>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn clear_buffer(&mut self) {
        if let Some(buffer) = self.current_mut() {
            buffer.clear();
        }
    }

    fn draw_pixel(&mut self, x: i32, y: i32, mode: BlendMode) {
        if let Some(buffer) = self.current_mut() {
            buffer.set_pixel(x, y, mode);
        }
    }

    fn flush<I: DisplayInterface>(&self, display: &mut Display<I>) -> Result<(), Error<I>> {
        match self.current() {
            Some(buffer) => flush_buffer(buffer, display),
            None => Ok(()),
        }
    }

    fn size(&self) -> (u16, u16) {
        self.current().map_or((0, 0), |buffer| {
            (u16::from(buffer.width()), u16::from(buffer.height()))
        })
    }
}

/// No framebuffer
///
/// Clearing and drawing do nothing and flushing sends nothing. Write to
/// the panel directly through [`Display`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbuffered;

impl FrameStrategy for Unbuffered {
    fn clear_buffer(&mut self) {}

    fn draw_pixel(&mut self, _x: i32, _y: i32, _mode: BlendMode) {}

    fn flush<I: DisplayInterface>(&self, _display: &mut Display<I>) -> Result<(), Error<I>> {
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (0, 0)
    }
}
