//! UC1609 command definitions
//!
//! Every UC1609 command is a single byte: a register selector in the high
//! bits ORed with a parameter in the low bits. Commands are clocked in with
//! the CD pin low; display RAM bytes are clocked in with CD high.
//!
//! ## Command Structure
//!
//! 1. Assert CS (Chip Select, active low) once for the whole operation
//! 2. Set CD low (command mode)
//! 3. Send `register | value`
//! 4. Set CD high (data mode)
//! 5. Send display RAM bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use uc1609::{command, DisplayInterface, HardwareSpi, Interface};
//! # use core::convert::Infallible;
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
//! # let mut interface = Interface::new(HardwareSpi::new(MockSpi), MockPin, MockPin, MockPin);
//! let _ = interface.select();
//! // Display enable (0xAE | 1)
//! let _ = interface.send_command(command::DISPLAY_ON, 0x01);
//! // Page 2, column 0
//! let _ = interface.send_command(command::SET_PAGE_ADDRESS, 2);
//! let _ = interface.send_command(command::SET_COLUMN_LSB, 0);
//! let _ = interface.send_command(command::SET_COLUMN_MSB, 0);
//! let _ = interface.send_data(&[0xFF, 0x81, 0xFF]);
//! let _ = interface.deselect();
//! ```

// Addressing commands

/// Set column address, low nibble (0x00 | CA[3:0])
pub const SET_COLUMN_LSB: u8 = 0x00;

/// Set column address, high nibble (0x10 | CA[7:4])
pub const SET_COLUMN_MSB: u8 = 0x10;

/// Set page address (0xB0 | PA[3:0])
///
/// A page is a band of 8 pixel rows.
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

/// Set scroll line (0x40 | SL[5:0])
///
/// Valid values are 0..=64; anything else has an undefined visual effect.
pub const SCROLL: u8 = 0x40;

// Power and panel setup

/// Temperature compensation register (0x24 | TC[1:0])
///
/// Stored with TC = 11 already set, matching the ERM19264 module.
pub const TEMP_COMP: u8 = 0x27;

/// Power control register (0x28 | PC[2:0])
///
/// Stored with all power bits set; the parameter byte only adds to it.
pub const POWER_CONTROL: u8 = 0x2F;

/// RAM address control register (0x88 | AC[2:0])
///
/// Controls how the RAM address counter wraps and auto-increments.
pub const ADDRESS_CONTROL: u8 = 0x88;

/// Frame rate register (0xA0 | LC[4:3])
pub const FRAMERATE: u8 = 0xA0;

/// Bias ratio register (0xE8 | BR[1:0])
pub const BIAS_RATIO: u8 = 0xE8;

/// Gain and potentiometer register (0x81)
///
/// Double-byte on the silicon; this driver ORs the value into the selector
/// like every other register. The first write after reset is not reliable,
/// so initialization writes it twice.
pub const GAIN_PM: u8 = 0x81;

// Display control

/// Display enable (0xAE | DC[2])
pub const DISPLAY_ON: u8 = 0xAE;

/// Inverse display (0xA6 | DC[0])
pub const INVERSE_DISPLAY: u8 = 0xA6;

/// All pixels on (0xA4 | DC[1])
pub const ALL_PIXEL_ON: u8 = 0xA4;

/// LCD mapping control (0xC0 | LC[2:1]), mirror X/Y
pub const LCD_CONTROL: u8 = 0xC0;

// Parameter values

/// Temperature compensation parameter (already folded into [`TEMP_COMP`])
pub const TEMP_COMP_SET: u8 = 0x00;

/// Address control: automatic wrap-around, page increment after column
pub const ADDRESS_SET: u8 = 0x02;

/// Frame rate: 95 fps
pub const FRAMERATE_SET: u8 = 0x01;

/// Bias ratio: 1/12 (default for 192x64 panels)
pub const BIAS_RATIO_SET: u8 = 0x03;

/// Power control: internal Vlcd, panel loading 13nF-22nF
pub const PC_SET: u8 = 0x06;

/// Default bias potentiometer value for ERM19264 panels
pub const DEFAULT_VBIAS_POT: u8 = 0x49;

/// LC[2:1] = 00: both axes mirrored
pub const ROTATION_FLIP_THREE: u8 = 0x00;

/// LC[2:1] = 01: mirror X
pub const ROTATION_FLIP_ONE: u8 = 0x02;

/// LC[2:1] = 10: normal (the panel's native orientation)
pub const ROTATION_NORMAL: u8 = 0x04;

/// LC[2:1] = 11: mirror Y
pub const ROTATION_FLIP_TWO: u8 = 0x06;

// Timing (milliseconds)

/// Settle time before the reset line is pulsed
pub const INIT_DELAY_PRE_MS: u32 = 3;

/// Reset pulse width (RST held low)
pub const RESET_PULSE_MS: u32 = 3;

/// Power stabilization after RST is released
pub const RESET_SETTLE_MS: u32 = 10;

/// Wait after power control is programmed, before contrast
pub const INIT_DELAY_MS: u32 = 100;
