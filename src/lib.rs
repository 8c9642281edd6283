//! UC1609 LCD Driver
//!
//! A driver for the UC1609 monochrome LCD controller, as used on the
//! ERM19264 192x64 panel modules.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Hardware SPI or bit-banged software SPI, chosen at construction
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full-screen, multi-region or unbuffered drawing
//! - Hardware orientation, scrolling and inversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use uc1609::{
//!     BlendMode, Builder, Dimensions, Display, GraphicDisplay, HardwareSpi, Interface,
//!     Orientation, SingleBuffer,
//! };
//!
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
//! # let spi = MockSpi;
//! # let cd = MockPin;
//! # let rst = MockPin;
//! # let cs = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(HardwareSpi::new(spi), cd, rst, cs);
//! let dims = match Dimensions::new(192, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).orientation(Orientation::Normal).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let frame = match SingleBuffer::new([0u8; 192 * 64 / 8], 192, 64) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//!
//! let mut display = GraphicDisplay::new(Display::new(interface, config), frame);
//! let _ = display.begin(uc1609::command::DEFAULT_VBIAS_POT, &mut delay);
//! display.draw_pixel(10, 10, BlendMode::Set);
//! let _ = display.update();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// In-memory pixel buffers
pub mod buffer;
/// Pixel blend modes
pub mod color;
/// UC1609 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Drawable display wrapper, with embedded-graphics support behind the `graphics` feature
pub mod graphics;
/// Hardware interface abstraction
pub mod interface;
/// Page-packed pixel layout
pub mod layout;
/// Buffering strategies
pub mod strategy;
/// Serial transports
pub mod transport;

pub use buffer::PixelBuffer;
pub use color::BlendMode;
pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Orientation};
pub use display::{ControllerState, Display};
pub use error::{BufferError, BuilderError, Error};
pub use graphics::GraphicDisplay;
pub use interface::{DisplayInterface, Interface, InterfaceError};
pub use strategy::{FrameStrategy, MultiBuffer, SingleBuffer, Unbuffered};
pub use transport::{BITBANG_HALF_PERIOD_US, BitBang, HardwareSpi, Transport, TransportMode};
