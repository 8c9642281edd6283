//! Serial transports
//!
//! The UC1609 only ever receives bytes, most significant bit first. A
//! [`Transport`] hides whether those bits leave through a hardware SPI
//! peripheral ([`HardwareSpi`]) or are clocked out by toggling two GPIO
//! pins ([`BitBang`]). Everything above this module behaves identically
//! with either.
//!
//! The choice is made once, by constructing one of the two types and
//! handing it to [`Interface::new`](crate::Interface::new).
//!
//! ## Example
//!
//! ```rust,no_run
//! use uc1609::{BitBang, Transport, TransportMode};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! // Clock on one pin, data on another, 2us per half clock period
//! let mut transport = BitBang::new(MockPin, MockPin, MockDelay).with_half_period(2);
//! assert_eq!(transport.mode(), TransportMode::Software);
//! let _ = transport.write_byte(0xA5);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiBus;

/// Default half clock period for [`BitBang`], in microseconds
///
/// Bounds the software clock to roughly 500kHz, well inside the UC1609's
/// serial timing even on fast MCUs.
pub const BITBANG_HALF_PERIOD_US: u32 = 1;

/// Which kind of transport an interface was built with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Hardware SPI peripheral
    Hardware,
    /// Software clocked GPIO (bit-banged)
    Software,
}

/// Byte sink towards the controller
///
/// Implementations must send MSB first and must not return before the
/// byte has been shifted out.
pub trait Transport {
    /// Error type for transport operations
    type Error: Debug;

    /// Which kind of transport this is
    fn mode(&self) -> TransportMode;

    /// Shift one byte out, MSB first
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Shift a run of bytes out
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

/// Transport over a hardware SPI bus
///
/// Chip-select is driven by [`Interface`](crate::Interface), so this takes a
/// bare [`SpiBus`] rather than an `SpiDevice`. Configure the bus for
/// mode 0, MSB first.
#[derive(Debug)]
pub struct HardwareSpi<SPI> {
    spi: SPI,
}

impl<SPI> HardwareSpi<SPI>
where
    SPI: SpiBus,
{
    /// Wrap an SPI bus
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give the bus back
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Transport for HardwareSpi<SPI>
where
    SPI: SpiBus,
    SPI::Error: Debug,
{
    type Error = SPI::Error;

    fn mode(&self) -> TransportMode {
        TransportMode::Hardware
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(&[byte])
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes)?;
        self.spi.flush()
    }
}

/// Software SPI: data and clock driven from plain output pins
///
/// For each bit, high to low: data is set, the clock goes high, waits a
/// half period, goes low and waits another half period.
#[derive(Debug)]
pub struct BitBang<CLK, DIN, D> {
    clock: CLK,
    data: DIN,
    delay: D,
    half_period_us: u32,
}

impl<CLK, DIN, D, PinErr> BitBang<CLK, DIN, D>
where
    CLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    D: DelayNs,
{
    /// Create a bit-banged transport
    ///
    /// # Arguments
    ///
    /// * `clock` - SCLK pin (output)
    /// * `data` - DIN/MOSI pin (output)
    /// * `delay` - Delay used between clock edges
    pub fn new(clock: CLK, data: DIN, delay: D) -> Self {
        Self {
            clock,
            data,
            delay,
            half_period_us: BITBANG_HALF_PERIOD_US,
        }
    }

    /// Set the half clock period in microseconds
    pub fn with_half_period(mut self, half_period_us: u32) -> Self {
        self.half_period_us = half_period_us;
        self
    }

    /// Get the half clock period in microseconds
    pub fn half_period(&self) -> u32 {
        self.half_period_us
    }

    /// Give the pins and delay back
    pub fn release(self) -> (CLK, DIN, D) {
        (self.clock, self.data, self.delay)
    }
}

impl<CLK, DIN, D, PinErr> Transport for BitBang<CLK, DIN, D>
where
    CLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = PinErr;

    fn mode(&self) -> TransportMode {
        TransportMode::Software
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        for bit in (0..8).rev() {
            let level = PinState::from(byte & (1 << bit) != 0);
            self.data.set_state(level)?;
            self.clock.set_high()?;
            self.delay.delay_us(self.half_period_us);
            self.clock.set_low()?;
            self.delay.delay_us(self.half_period_us);
        }
        Ok(())
    }
}
