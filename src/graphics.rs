//! Drawable display
//!
//! [`GraphicDisplay`] pairs a [`Display`] with a [`FrameStrategy`]. Pixels
//! drawn into it land in the strategy's buffer; [`GraphicDisplay::update`]
//! sends that buffer to the panel.
//!
//! With the `graphics` feature it also implements
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget), with
//! [`BlendMode`] as the colour, so embedded-graphics primitives and text
//! can be drawn straight into the buffer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use uc1609::{BlendMode, Builder, Dimensions, Display, GraphicDisplay, HardwareSpi, Interface, SingleBuffer};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let interface = Interface::new(HardwareSpi::new(MockSpi), MockPin, MockPin, MockPin);
//! let Ok(dims) = Dimensions::new(192, 64) else { return };
//! let Ok(config) = Builder::new().dimensions(dims).build() else { return };
//! let Ok(frame) = SingleBuffer::new([0u8; 192 * 8], 192, 64) else { return };
//!
//! let mut display = GraphicDisplay::new(Display::new(interface, config), frame);
//! let _ = display.begin(0x49, &mut delay);
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(192, 64))
//!     .into_styled(PrimitiveStyle::with_stroke(BlendMode::Set, 1))
//!     .draw(&mut display);
//! let _ = Text::new("Hello", Point::new(10, 20), MonoTextStyle::new(&FONT_6X10, BlendMode::Set))
//!     .draw(&mut display);
//!
//! let _ = display.update();
//! ```

use embedded_hal::delay::DelayNs;

use crate::color::BlendMode;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::strategy::FrameStrategy;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

/// Display with a buffering strategy
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `S` - Buffering strategy implementing [`FrameStrategy`]
pub struct GraphicDisplay<I, S>
where
    I: DisplayInterface,
    S: FrameStrategy,
{
    /// The underlying display driver
    display: Display<I>,
    strategy: S,
}

impl<I, S> GraphicDisplay<I, S>
where
    I: DisplayInterface,
    S: FrameStrategy,
{
    /// Create a new GraphicDisplay
    pub fn new(display: Display<I>, strategy: S) -> Self {
        Self { display, strategy }
    }

    /// Initialize the controller, see [`Display::begin`]
    pub fn begin<D: DelayNs>(&mut self, vbias: u8, delay: &mut D) -> GraphicsResult<I> {
        self.display.begin(vbias, delay)
    }

    /// Zero the active buffer
    pub fn clear_buffer(&mut self) {
        self.strategy.clear_buffer();
    }

    /// Combine one pixel of the active buffer with `mode`
    pub fn draw_pixel(&mut self, x: i32, y: i32, mode: BlendMode) {
        self.strategy.draw_pixel(x, y, mode);
    }

    /// Send the active buffer to the panel
    pub fn update(&mut self) -> GraphicsResult<I> {
        self.strategy.flush(&mut self.display)
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Use for register-level operations such as scrolling or inversion.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Access the buffering strategy
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Access the buffering strategy mutably (e.g. to select a buffer)
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Split back into display and strategy
    pub fn release(self) -> (Display<I>, S) {
        (self.display, self.strategy)
    }
}

#[cfg(feature = "graphics")]
mod draw_target {
    use core::convert::Infallible;
    use embedded_graphics_core::{
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Point, Size},
        prelude::Pixel,
    };

    use super::GraphicDisplay;
    use crate::color::BlendMode;
    use crate::interface::DisplayInterface;
    use crate::strategy::FrameStrategy;

    impl<I, S> DrawTarget for GraphicDisplay<I, S>
    where
        I: DisplayInterface,
        S: FrameStrategy,
    {
        type Color = BlendMode;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, mode) in pixels {
                self.strategy.draw_pixel(x, y, mode);
            }
            Ok(())
        }
    }

    impl<I, S> OriginDimensions for GraphicDisplay<I, S>
    where
        I: DisplayInterface,
        S: FrameStrategy,
    {
        fn size(&self) -> Size {
            let (width, height) = self.strategy.size();
            Size::new(u32::from(width), u32::from(height))
        }
    }
}
