//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! that frame bytes for the UC1609: chip-select gating, command/data
//! signaling and the reset line.
//!
//! ## Hardware Requirements
//!
//! The UC1609 requires:
//! - A serial transport (hardware SPI bus, or two GPIO pins, see [`crate::transport`])
//! - 3 GPIO pins:
//!   - **CD**: Command/Data select (output, low = command)
//!   - **RST**: Reset (output, active low)
//!   - **CS**: Chip select (output, active low)
//!
//! ## Chip-select discipline
//!
//! [`DisplayInterface::send_command`] and [`DisplayInterface::send_data`]
//! never touch CS. The caller selects the chip once around a complete
//! operation and releases it afterwards; [`Display`](crate::Display) does
//! this for every operation it exposes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use uc1609::{BitBang, DisplayInterface, Interface, TransportMode};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Software SPI on two pins, plus CD, RST and CS
//! let transport = BitBang::new(MockPin, MockPin, MockDelay);
//! let mut interface = Interface::new(transport, MockPin, MockPin, MockPin);
//! assert_eq!(interface.transport_mode(), TransportMode::Software);
//!
//! let _ = interface.reset(&mut delay);
//! let _ = interface.select();
//! let _ = interface.send_command(0xAE, 0x01); // display on
//! let _ = interface.deselect();
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::command::{RESET_PULSE_MS, RESET_SETTLE_MS};
use crate::transport::{Transport, TransportMode};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the UC1609 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport and pin set that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself for unusual wiring (e.g. CS tied low, CD on a port
/// expander).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Assert chip-select (CS low)
    fn select(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Release chip-select (CS high)
    fn deselect(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a single-byte command
    ///
    /// The implementation must:
    /// 1. Set CD low (command mode)
    /// 2. Send `register | value`
    /// 3. Set CD high (back to data mode)
    ///
    /// CS must already be asserted by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport or a GPIO fails.
    fn send_command(&mut self, register: u8, value: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display RAM bytes
    ///
    /// Only valid while CD is high, which is the state every
    /// [`send_command`](Self::send_command) leaves behind. CS must already
    /// be asserted by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Put CD and CS at their idle (high) levels
    fn idle(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait [`RESET_PULSE_MS`]
    /// 3. Set RST high
    /// 4. Wait [`RESET_SETTLE_MS`]
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Which transport bytes go out on
    fn transport_mode(&self) -> TransportMode;
}

/// Errors that can occur at the interface level
///
/// Generic over transport and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<TransportErr, PinErr> {
    /// Transport (SPI or bit-bang) error
    Transport(TransportErr),
    /// Control pin (CD, RST, CS) error
    Pin(PinErr),
}

impl<TransportErr: Debug, PinErr: Debug> core::fmt::Display
    for InterfaceError<TransportErr, PinErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<TransportErr: Debug, PinErr: Debug> core::error::Error
    for InterfaceError<TransportErr, PinErr>
{
}

/// Hardware interface implementation for the UC1609
///
/// Implements [`DisplayInterface`] on top of any [`Transport`] and three
/// embedded-hal v1.0 output pins.
///
/// ## Type Parameters
///
/// * `T` - Transport ([`HardwareSpi`](crate::HardwareSpi) or [`BitBang`](crate::BitBang))
/// * `CD` - Command/Data pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `CS` - Chip-select pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use uc1609::{Builder, Dimensions, Display, HardwareSpi, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::SpiBus;
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiBus for MockSpi {
/// #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     HardwareSpi::new(MockSpi), // SpiBus
///     MockPin,                   // CD
///     MockPin,                   // RST
///     MockPin,                   // CS
/// );
///
/// # let dims = match Dimensions::new(192, 64) {
/// #     Ok(dims) => dims,
/// #     Err(_) => return,
/// # };
/// # let config = match Builder::new().dimensions(dims).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
#[derive(Debug)]
pub struct Interface<T, CD, RST, CS> {
    /// Byte transport
    transport: T,
    /// Command/Data select pin (low=command, high=data)
    cd: CD,
    /// Reset pin (active low)
    rst: RST,
    /// Chip-select pin (active low)
    cs: CS,
}

impl<T, CD, RST, CS> Interface<T, CD, RST, CS>
where
    T: Transport,
    CD: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
{
    /// Create a new Interface
    ///
    /// The transport decides hardware or software mode; there is no other
    /// way to pick it, and it cannot change afterwards.
    ///
    /// # Arguments
    ///
    /// * `transport` - Byte transport
    /// * `cd` - Command/Data pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `cs` - Chip-select pin (output, active low)
    pub fn new(transport: T, cd: CD, rst: RST, cs: CS) -> Self {
        Self {
            transport,
            cd,
            rst,
            cs,
        }
    }

    /// Give back the transport and pins
    pub fn release(self) -> (T, CD, RST, CS) {
        (self.transport, self.cd, self.rst, self.cs)
    }
}

impl<T, CD, RST, CS, PinErr> DisplayInterface for Interface<T, CD, RST, CS>
where
    T: Transport,
    CD: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<T::Error, PinErr>;

    fn select(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn deselect(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, register: u8, value: u8) -> InterfaceResult<(), Self::Error> {
        self.cd.set_low().map_err(InterfaceError::Pin)?;
        self.transport
            .write_byte(register | value)
            .map_err(InterfaceError::Transport)?;
        self.cd.set_high().map_err(InterfaceError::Pin)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.transport
            .write(data)
            .map_err(InterfaceError::Transport)
    }

    fn idle(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cd.set_high().map_err(InterfaceError::Pin)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    fn transport_mode(&self) -> TransportMode {
        self.transport.mode()
    }
}
