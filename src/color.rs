//! Pixel blend modes
//!
//! The UC1609 is strictly 1 bit per pixel. What a drawn pixel does to the
//! bit already in the buffer is decided by a [`BlendMode`]:
//!
//! | Mode   | Operation   |
//! |--------|-------------|
//! | Set    | `bit \|= 1` |
//! | Clear  | `bit &= !1` |
//! | Invert | `bit ^= 1`  |
//!
//! With the `graphics` feature, [`BlendMode`] is the `PixelColor` of
//! [`GraphicDisplay`](crate::GraphicDisplay), so embedded-graphics styles
//! can draw in any of the three modes.
//!
//! ## Example
//!
//! ```
//! use uc1609::BlendMode;
//!
//! assert_eq!(BlendMode::Set.apply(0b0000_0000, 0x01), 0b0000_0001);
//! assert_eq!(BlendMode::Clear.apply(0b1111_1111, 0x80), 0b0111_1111);
//! assert_eq!(BlendMode::Invert.apply(0b0000_0100, 0x04), 0b0000_0000);
//! ```

/// How a drawn pixel combines with the existing bit
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlendMode {
    /// Pixel on (foreground)
    #[default]
    Set,
    /// Pixel off (background)
    Clear,
    /// Toggle the pixel
    Invert,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for BlendMode {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for BlendMode {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Set,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Clear,
        }
    }
}

impl BlendMode {
    /// Apply this mode to `byte` for the bits in `mask`
    pub fn apply(self, byte: u8, mask: u8) -> u8 {
        match self {
            Self::Set => byte | mask,
            Self::Clear => byte & !mask,
            Self::Invert => byte ^ mask,
        }
    }
}
