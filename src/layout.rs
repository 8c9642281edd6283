//! Page-packed pixel layout
//!
//! UC1609 display RAM, and every buffer this crate sends to it, stores
//! pixels in vertical bytes: each byte covers one column of an 8-row page,
//! bit 0 at the top. Pages follow each other in row-major order, so a
//! `width`-wide image is `width` bytes per page.
//!
//! ```text
//!          col 0   col 1   ...  col w-1
//! page 0   [b0..b7][b0..b7]     [b0..b7]   rows 0..=7
//! page 1   [b0..b7][b0..b7]     [b0..b7]   rows 8..=15
//! ```
//!
//! ## Example
//!
//! ```
//! use uc1609::layout::pixel_location;
//!
//! // Pixel (3, 10) in a 192-wide image: page 1, column 3, bit 2
//! let (idx, mask) = pixel_location(3, 10, 192);
//! assert_eq!(idx, 192 + 3);
//! assert_eq!(mask, 0x04);
//! ```

/// Byte index and bit mask of pixel `(x, y)` in a `width`-wide page-packed image
///
/// No bounds checking; callers clip first.
pub fn pixel_location(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (width * (y / 8) + x) as usize;
    let mask = 1 << (y & 7);
    (index, mask)
}

/// Number of 8-row pages needed to hold `height` rows
pub fn pages_for(height: u32) -> u32 {
    height.div_ceil(8)
}

/// Size in bytes of a `width` x `height` page-packed image
///
/// A partial last page still takes a full row of bytes.
pub fn image_size(width: u32, height: u32) -> usize {
    width as usize * pages_for(height) as usize
}
