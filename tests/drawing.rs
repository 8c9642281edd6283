//! End-to-end drawing through embedded-graphics down to the serial bus

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use uc1609::{
    BitBang, BlendMode, Builder, Config, Dimensions, Display, DisplayInterface, FrameStrategy,
    GraphicDisplay, HardwareSpi, Interface, MultiBuffer, PixelBuffer, SingleBuffer,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Wire {
    Command(u8),
    Data(u8),
}

#[derive(Debug, Default)]
struct Bus {
    cd_high: bool,
    cs_low: bool,
    din_high: bool,
    shift: u8,
    bits: u8,
    wire: Vec<Wire>,
}

impl Bus {
    fn push(&mut self, byte: u8) {
        assert!(self.cs_low, "write without chip-select");
        let wire = if self.cd_high {
            Wire::Data(byte)
        } else {
            Wire::Command(byte)
        };
        self.wire.push(wire);
    }

    // Sampled on the rising clock edge, MSB first
    fn clock_in(&mut self) {
        self.shift = (self.shift << 1) | u8::from(self.din_high);
        self.bits += 1;
        if self.bits == 8 {
            let byte = self.shift;
            self.bits = 0;
            self.shift = 0;
            self.push(byte);
        }
    }
}

type Shared = Rc<RefCell<Bus>>;

#[derive(Debug)]
struct Spi(Shared);

impl embedded_hal::spi::ErrorType for Spi {
    type Error = Infallible;
}

impl SpiBus for Spi {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut bus = self.0.borrow_mut();
        for byte in words {
            bus.push(*byte);
        }
        Ok(())
    }
    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Cd,
    Rst,
    Cs,
    Clk,
    Din,
}

#[derive(Debug)]
struct Pin(Shared, Role);

impl embedded_hal::digital::ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut bus = self.0.borrow_mut();
        match self.1 {
            Role::Cd => bus.cd_high = false,
            Role::Cs => bus.cs_low = true,
            Role::Din => bus.din_high = false,
            Role::Rst | Role::Clk => {}
        }
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut bus = self.0.borrow_mut();
        match self.1 {
            Role::Cd => bus.cd_high = true,
            Role::Cs => bus.cs_low = false,
            Role::Din => bus.din_high = true,
            Role::Clk => bus.clock_in(),
            Role::Rst => {}
        }
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

type TestInterface = Interface<HardwareSpi<Spi>, Pin, Pin, Pin>;

type BitBangInterface = Interface<BitBang<Pin, Pin, NoDelay>, Pin, Pin, Pin>;

fn config() -> Config {
    Builder::new()
        .dimensions(Dimensions::new(192, 64).unwrap())
        .build()
        .unwrap()
}

fn display(bus: &Shared) -> Display<TestInterface> {
    let interface = Interface::new(
        HardwareSpi::new(Spi(bus.clone())),
        Pin(bus.clone(), Role::Cd),
        Pin(bus.clone(), Role::Rst),
        Pin(bus.clone(), Role::Cs),
    );
    Display::new(interface, config())
}

fn bitbang_display(bus: &Shared) -> Display<BitBangInterface> {
    let transport = BitBang::new(
        Pin(bus.clone(), Role::Clk),
        Pin(bus.clone(), Role::Din),
        NoDelay,
    );
    let interface = Interface::new(
        transport,
        Pin(bus.clone(), Role::Cd),
        Pin(bus.clone(), Role::Rst),
        Pin(bus.clone(), Role::Cs),
    );
    Display::new(interface, config())
}

fn exercise<I: DisplayInterface>(display: &mut Display<I>) {
    let image: Vec<u8> = (0..40u8).map(|v| v.wrapping_mul(37)).collect();
    assert!(display.begin(0x49, &mut NoDelay).is_ok());
    assert!(display.write_buffer(-3, 20, 20, 16, &image).is_ok());
    assert!(display.write_buffer(180, 56, 20, 16, &image).is_ok());
    assert!(display.scroll(7).is_ok());
}

fn data(bus: &Shared) -> Vec<u8> {
    bus.borrow()
        .wire
        .iter()
        .filter_map(|w| match w {
            Wire::Data(d) => Some(*d),
            Wire::Command(_) => None,
        })
        .collect()
}

fn commands(bus: &Shared) -> Vec<u8> {
    bus.borrow()
        .wire
        .iter()
        .filter_map(|w| match w {
            Wire::Command(c) => Some(*c),
            Wire::Data(_) => None,
        })
        .collect()
}

fn full_frame(bus: &Shared) -> GraphicDisplay<TestInterface, SingleBuffer<Vec<u8>>> {
    let frame = SingleBuffer::new(vec![0u8; 1536], 192, 64).unwrap();
    GraphicDisplay::new(display(bus), frame)
}

#[test]
fn begin_puts_init_sequence_on_the_wire() {
    let bus = Shared::default();
    let mut gd = full_frame(&bus);
    gd.begin(0x49, &mut NoDelay).unwrap();

    assert_eq!(
        commands(&bus),
        [0x27, 0x8A, 0xA1, 0xEB, 0x2F, 0x81, 0xC9, 0xAF, 0xC4]
    );
    assert!(data(&bus).is_empty());
    assert!(!bus.borrow().cs_low);
}

#[test]
fn filled_screen_sends_all_ones() {
    let bus = Shared::default();
    let mut gd = full_frame(&bus);
    Rectangle::new(Point::zero(), Size::new(192, 64))
        .into_styled(PrimitiveStyle::with_fill(BlendMode::Set))
        .draw(&mut gd)
        .unwrap();
    gd.update().unwrap();

    let data = data(&bus);
    assert_eq!(data.len(), 1536);
    assert!(data.iter().all(|b| *b == 0xFF));
    // Column 0 and a page address per band
    assert_eq!(commands(&bus).len(), 24);
}

#[test]
fn corner_pixels_land_in_first_and_last_byte() {
    let bus = Shared::default();
    let mut gd = full_frame(&bus);
    Pixel(Point::new(0, 0), BlendMode::Set).draw(&mut gd).unwrap();
    Pixel(Point::new(191, 63), BlendMode::Set)
        .draw(&mut gd)
        .unwrap();
    gd.update().unwrap();

    let data = data(&bus);
    assert_eq!(data[0], 0x01);
    assert_eq!(data[1535], 0x80);
    assert_eq!(data.iter().filter(|b| **b != 0).count(), 2);
}

#[test]
fn page_aligned_rectangle_fills_one_page() {
    let bus = Shared::default();
    let mut gd = full_frame(&bus);
    Rectangle::new(Point::new(4, 8), Size::new(10, 8))
        .into_styled(PrimitiveStyle::with_fill(BlendMode::Set))
        .draw(&mut gd)
        .unwrap();
    gd.update().unwrap();

    let data = data(&bus);
    for (i, byte) in data.iter().enumerate() {
        let expected = if (192 + 4..192 + 14).contains(&i) { 0xFF } else { 0x00 };
        assert_eq!(*byte, expected, "byte {i}");
    }
}

#[test]
fn clear_then_invert_round_trips() {
    let bus = Shared::default();
    let mut gd = full_frame(&bus);
    gd.clear(BlendMode::Set).unwrap();
    let area = Rectangle::new(Point::new(20, 20), Size::new(30, 30));
    area.into_styled(PrimitiveStyle::with_fill(BlendMode::Invert))
        .draw(&mut gd)
        .unwrap();
    area.into_styled(PrimitiveStyle::with_fill(BlendMode::Invert))
        .draw(&mut gd)
        .unwrap();
    gd.update().unwrap();
    assert!(data(&bus).iter().all(|b| *b == 0xFF));
}

#[test]
fn multi_buffer_halves_address_their_own_pages() {
    let bus = Shared::default();
    let top = PixelBuffer::with_offset(vec![0u8; 192 * 4], 192, 32, 0, 0).unwrap();
    let bottom = PixelBuffer::with_offset(vec![0u8; 192 * 4], 192, 32, 0, 32).unwrap();
    let mut gd = GraphicDisplay::new(display(&bus), MultiBuffer::new([top, bottom]).unwrap());

    assert_eq!(gd.size(), Size::new(192, 32));
    gd.strategy_mut().select(1).unwrap();
    gd.clear(BlendMode::Set).unwrap();
    gd.update().unwrap();

    let pages: Vec<u8> = commands(&bus)
        .into_iter()
        .filter(|c| c & 0xF0 == 0xB0)
        .collect();
    assert_eq!(pages, [0xB4, 0xB5, 0xB6, 0xB7]);
    assert_eq!(data(&bus).len(), 192 * 4);
    assert_eq!(gd.strategy().size(), (192, 32));
}

#[test]
fn bitbang_and_hardware_spi_put_identical_streams_on_the_wire() {
    let spi_bus = Shared::default();
    exercise(&mut display(&spi_bus));

    let bitbang_bus = Shared::default();
    exercise(&mut bitbang_display(&bitbang_bus));

    let spi_wire = spi_bus.borrow().wire.clone();
    let bitbang_wire = bitbang_bus.borrow().wire.clone();
    assert!(!spi_wire.is_empty());
    assert_eq!(bitbang_wire, spi_wire);
    assert_eq!(bitbang_bus.borrow().bits, 0, "partial byte left on the wire");
    assert!(!bitbang_bus.borrow().cs_low);
}
