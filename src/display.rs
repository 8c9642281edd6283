//! Core display operations
//!
//! [`Display`] owns a [`DisplayInterface`] and implements everything that
//! talks to the controller: power-up and register initialization, the
//! display control registers, the banded buffer transfer and the
//! whole-screen fills.
//!
//! Every public method that touches the bus asserts chip-select once at
//! entry and releases it at exit, even when a step in between fails.

use embedded_hal::delay::DelayNs;

use crate::command::{
    ADDRESS_CONTROL, ALL_PIXEL_ON, BIAS_RATIO, DISPLAY_ON, FRAMERATE, GAIN_PM, INIT_DELAY_MS,
    INIT_DELAY_PRE_MS, INVERSE_DISPLAY, LCD_CONTROL, POWER_CONTROL, SCROLL, SET_COLUMN_LSB,
    SET_COLUMN_MSB, SET_PAGE_ADDRESS, TEMP_COMP,
};
use crate::config::{Config, Dimensions, Orientation};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::layout::image_size;
use crate::transport::TransportMode;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller lifecycle state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed, `begin` not called (or it failed)
    #[default]
    Uninitialized,
    /// Reset and register programming in progress
    Resetting,
    /// Initialized, accepts drawing
    Ready,
}

/// Core display driver for the UC1609
///
/// This struct provides low-level operations for the controller.
/// For buffered drawing, use `GraphicDisplay`.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Bias potentiometer value from the last `begin`
    vbias: u8,
    state: ControllerState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`begin`](Self::begin).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            vbias: crate::command::DEFAULT_VBIAS_POT,
            state: ControllerState::Uninitialized,
        }
    }

    /// Reset and initialize the controller
    ///
    /// # Arguments
    ///
    /// * `vbias` - Bias potentiometer (contrast) value, 0x00..=0xFE;
    ///   [`DEFAULT_VBIAS_POT`](crate::command::DEFAULT_VBIAS_POT) suits ERM19264 panels
    /// * `delay` - Delay implementation for reset and power-up timing
    ///
    /// The controller is [`ControllerState::Ready`] only when this returns
    /// `Ok`. Drawing before that has undefined results on the panel.
    pub fn begin<D: DelayNs>(&mut self, vbias: u8, delay: &mut D) -> DisplayResult<I> {
        self.vbias = vbias;
        self.reinit(delay)
    }

    /// Re-run the power-on sequence with the last `vbias`
    ///
    /// Returns every register to its configured value.
    pub fn reinit<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "uc1609: init ({:?} transport, vbias {:#04x})",
            self.interface.transport_mode(),
            self.vbias
        );
        self.state = ControllerState::Resetting;
        match self.init(delay) {
            Ok(()) => {
                self.state = ControllerState::Ready;
                log::debug!("uc1609: ready");
                Ok(())
            }
            Err(e) => {
                self.state = ControllerState::Uninitialized;
                Err(e)
            }
        }
    }

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        delay.delay_ms(INIT_DELAY_PRE_MS);
        self.interface.idle().map_err(Error::Interface)?;
        self.reset(delay)?;

        let config = self.config.clone();
        let vbias = self.vbias;
        self.framed(|display| {
            // Power control must follow bias ratio
            display.send_command(TEMP_COMP, config.temp_comp)?;
            display.send_command(ADDRESS_CONTROL, config.address_control)?;
            display.send_command(FRAMERATE, config.frame_rate)?;
            display.send_command(BIAS_RATIO, config.bias_ratio)?;
            display.send_command(POWER_CONTROL, config.power_control)?;
            delay.delay_ms(INIT_DELAY_MS);

            // First write after reset is unreliable
            display.send_command(GAIN_PM, 0)?;
            display.send_command(GAIN_PM, vbias)?;

            display.send_command(DISPLAY_ON, 0x01)?;
            display.send_command(LCD_CONTROL, config.orientation.bits())
        })
    }

    /// Pulse the reset line
    ///
    /// RST low for [`RESET_PULSE_MS`](crate::command::RESET_PULSE_MS), then
    /// high and a wait of [`RESET_SETTLE_MS`](crate::command::RESET_SETTLE_MS).
    /// Registers are back at power-on values afterwards; call
    /// [`reinit`](Self::reinit) before drawing again.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("uc1609: hardware reset");
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Turn the panel output on or off (RAM is kept)
    pub fn enable(&mut self, on: bool) -> DisplayResult<I> {
        self.framed_command(DISPLAY_ON, u8::from(on))
    }

    /// Scroll the image up by `lines` rows
    ///
    /// 0..=64 is meaningful. Larger values are sent unchanged and have an
    /// undefined effect on the panel.
    pub fn scroll(&mut self, lines: u8) -> DisplayResult<I> {
        self.framed_command(SCROLL, lines)
    }

    /// Mirror rows and/or columns
    ///
    /// After changing the column mirror, the RAM must be redrawn.
    pub fn set_orientation(&mut self, orientation: Orientation) -> DisplayResult<I> {
        self.framed_command(LCD_CONTROL, orientation.bits())
    }

    /// Set the orientation from raw LC[2:1] bits
    ///
    /// 0x00, 0x02, 0x04 and 0x06 select the four mirror combinations; any
    /// other value selects [`Orientation::Normal`].
    pub fn set_orientation_bits(&mut self, bits: u8) -> DisplayResult<I> {
        self.set_orientation(Orientation::from_bits(bits))
    }

    /// Invert the panel polarity
    pub fn invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.framed_command(INVERSE_DISPLAY, u8::from(inverted))
    }

    /// Force every pixel on, ignoring RAM
    pub fn all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        self.framed_command(ALL_PIXEL_ON, u8::from(on))
    }

    /// Move the RAM cursor to `column` in `page`
    pub fn goto(&mut self, column: u8, page: u8) -> DisplayResult<I> {
        self.framed(|display| display.set_address(column, page))
    }

    /// Write a page-packed image to the panel
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Panel position of the image's top-left pixel; may be negative
    /// * `w`, `h` - Image size in pixels
    /// * `data` - `w * ceil(h / 8)` bytes laid out as in [`crate::layout`]
    ///
    /// The image is walked in 8-row bands. Each band gets a column and page
    /// address and then its bytes. Bands whose top row is outside the panel
    /// and columns outside the panel are dropped, never wrapped.
    ///
    /// NOTE: the page address starts at `max(y, 0) / 8` and only advances
    /// for bands that are written. If leading bands are dropped (negative
    /// `y`), the next written band lands on the starting page instead of the
    /// page below. This matches the ERM19264 reference driver and is kept so
    /// output stays identical; it looks unintended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] before touching the bus if `data`
    /// is shorter than the image.
    #[allow(clippy::many_single_char_names)]
    pub fn write_buffer(&mut self, x: i16, y: i16, w: u8, h: u8, data: &[u8]) -> DisplayResult<I> {
        let required = image_size(u32::from(w), u32::from(h));
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: data.len(),
            });
        }

        let dims = self.config.dimensions;
        let (x, y) = (i32::from(x), i32::from(y));
        // Addresses keep the low 8 bits, as the reference driver does
        let column = x.max(0) as u8;
        let mut page = (y.max(0) >> 3) as u8;

        // Columns that survive clipping are contiguous within a band
        let first = (-x).clamp(0, i32::from(w)) as usize;
        let last = (i32::from(dims.width) - x).clamp(0, i32::from(w)) as usize;
        let w = usize::from(w);

        self.framed(|display| {
            let mut bands = 0u32;
            for ty in (0..i32::from(h)).step_by(8) {
                if y + ty < 0 || y + ty >= i32::from(dims.height) {
                    continue;
                }
                display.set_address(column, page)?;
                page = page.wrapping_add(1);
                bands += 1;

                let start = w * (ty as usize >> 3);
                if first < last {
                    display.send_data(&data[start + first..start + last])?;
                }
            }
            log::trace!(
                "uc1609: wrote {} bands of {} bytes at ({}, {})",
                bands,
                last.saturating_sub(first),
                x,
                y
            );
            Ok(())
        })
    }

    /// Draw a bitmap held by the caller, bypassing any framebuffer
    ///
    /// Same transfer as [`write_buffer`](Self::write_buffer); meant for
    /// images the caller owns, such as logos kept in flash or a decoded
    /// asset.
    #[allow(clippy::many_single_char_names)]
    pub fn draw_bitmap(
        &mut self,
        x: i16,
        y: i16,
        w: u8,
        h: u8,
        bitmap: &[u8],
    ) -> DisplayResult<I> {
        self.write_buffer(x, y, w, h, bitmap)
    }

    /// Fill display RAM with `pattern`, bypassing any buffer
    ///
    /// Writes `width * height / 8` bytes from wherever the RAM cursor is,
    /// waiting `delay_us` after each byte (0 for full speed). Call
    /// [`goto`](Self::goto) first for a known start.
    pub fn fill_screen<D: DelayNs>(
        &mut self,
        pattern: u8,
        delay_us: u32,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let count = self.config.dimensions.buffer_size();
        self.framed(|display| {
            for _ in 0..count {
                display.send_data(&[pattern])?;
                delay.delay_us(delay_us);
            }
            Ok(())
        })
    }

    /// Fill one page worth of RAM with `pattern`, from the current cursor
    ///
    /// Writes `(width * height / 8) / 8` bytes, which is one page on a
    /// 64-row panel.
    pub fn fill_page(&mut self, pattern: u8) -> DisplayResult<I> {
        let count = self.config.dimensions.buffer_size() / 8;
        self.framed(|display| {
            for _ in 0..count {
                display.send_data(&[pattern])?;
            }
            Ok(())
        })
    }

    /// Write raw column bytes at the RAM cursor, padded by a blank column
    /// on each side
    ///
    /// For unbuffered text: pass one glyph's columns from a vertical
    /// 8-pixel font.
    pub fn write_columns(&mut self, columns: &[u8]) -> DisplayResult<I> {
        self.framed(|display| {
            display.send_data(&[0x00])?;
            display.send_data(columns)?;
            display.send_data(&[0x00])
        })
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Which transport the interface uses
    pub fn transport_mode(&self) -> TransportMode {
        self.interface.transport_mode()
    }

    /// Give the interface back
    pub fn release(self) -> I {
        self.interface
    }

    /// Run `f` with chip-select asserted, releasing it afterwards
    ///
    /// CS is released even if `f` fails; the first error wins.
    fn framed<F>(&mut self, f: F) -> DisplayResult<I>
    where
        F: FnOnce(&mut Self) -> DisplayResult<I>,
    {
        self.interface.select().map_err(Error::Interface)?;
        let result = f(self);
        let released = self.interface.deselect().map_err(Error::Interface);
        result.and(released)
    }

    fn framed_command(&mut self, register: u8, value: u8) -> DisplayResult<I> {
        self.framed(|display| display.send_command(register, value))
    }

    fn set_address(&mut self, column: u8, page: u8) -> DisplayResult<I> {
        self.send_command(SET_COLUMN_LSB, column & 0x0F)?;
        self.send_command(SET_COLUMN_MSB, (column & 0xF0) >> 4)?;
        self.send_command(SET_PAGE_ADDRESS, page)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, register: u8, value: u8) -> DisplayResult<I> {
        self.interface
            .send_command(register, value)
            .map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::command::{
        ADDRESS_SET, BIAS_RATIO_SET, DEFAULT_VBIAS_POT, FRAMERATE_SET, PC_SET, RESET_PULSE_MS,
        ROTATION_FLIP_ONE, ROTATION_NORMAL, TEMP_COMP_SET,
    };
    use crate::config::{Builder, Dimensions};
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) enum Event {
        Select,
        Deselect,
        Idle,
        Reset,
        Command(u8),
        Data(u8),
    }

    #[derive(Debug)]
    pub(crate) struct MockInterface {
        pub(crate) events: Vec<Event>,
        pub(crate) fail_after: Option<usize>,
    }

    impl MockInterface {
        pub(crate) fn new() -> Self {
            Self {
                events: Vec::new(),
                fail_after: None,
            }
        }

        fn push(&mut self, event: Event) -> Result<(), MockError> {
            if self.fail_after == Some(self.events.len()) {
                return Err(MockError);
            }
            self.events.push(event);
            Ok(())
        }

        pub(crate) fn commands(&self) -> Vec<u8> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Command(c) => Some(*c),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn data(&self) -> Vec<u8> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Data(d) => Some(*d),
                    _ => None,
                })
                .collect()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) struct MockError;

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn select(&mut self) -> Result<(), Self::Error> {
            self.push(Event::Select)
        }

        fn deselect(&mut self) -> Result<(), Self::Error> {
            // Release always lands so tests can check CS discipline
            self.events.push(Event::Deselect);
            Ok(())
        }

        fn send_command(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
            self.push(Event::Command(register | value))
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            for byte in data {
                self.push(Event::Data(*byte))?;
            }
            Ok(())
        }

        fn idle(&mut self) -> Result<(), Self::Error> {
            self.push(Event::Idle)
        }

        fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
            delay.delay_ms(RESET_PULSE_MS);
            self.push(Event::Reset)
        }

        fn transport_mode(&self) -> TransportMode {
            TransportMode::Hardware
        }
    }

    pub(crate) struct MockDelay {
        pub(crate) ms: Vec<u32>,
        pub(crate) us: Vec<u32>,
    }

    impl MockDelay {
        pub(crate) fn new() -> Self {
            Self {
                ms: Vec::new(),
                us: Vec::new(),
            }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.ms.push(ms);
        }
        fn delay_us(&mut self, us: u32) {
            self.us.push(us);
        }
    }

    pub(crate) fn test_display() -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(192, 64).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn events(display: &Display<MockInterface>) -> &[Event] {
        &display.interface.events
    }

    fn assert_balanced(display: &Display<MockInterface>) {
        let mut selected = false;
        for event in events(display) {
            match event {
                Event::Select => {
                    assert!(!selected, "nested select");
                    selected = true;
                }
                Event::Deselect => selected = false,
                Event::Command(_) | Event::Data(_) => assert!(selected, "bus used without CS"),
                _ => {}
            }
        }
        assert!(!selected, "CS left asserted");
    }

    #[test]
    fn test_new_is_uninitialized_and_silent() {
        let display = test_display();
        assert_eq!(display.state(), ControllerState::Uninitialized);
        assert!(events(&display).is_empty());
    }

    #[test]
    fn test_begin_sequence_is_exact() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.begin(0x49, &mut delay).unwrap();

        assert_eq!(
            events(&display),
            &[
                Event::Idle,
                Event::Reset,
                Event::Select,
                Event::Command(TEMP_COMP | TEMP_COMP_SET),
                Event::Command(ADDRESS_CONTROL | ADDRESS_SET),
                Event::Command(FRAMERATE | FRAMERATE_SET),
                Event::Command(BIAS_RATIO | BIAS_RATIO_SET),
                Event::Command(POWER_CONTROL | PC_SET),
                Event::Command(GAIN_PM),
                Event::Command(GAIN_PM | 0x49),
                Event::Command(DISPLAY_ON | 0x01),
                Event::Command(LCD_CONTROL | ROTATION_NORMAL),
                Event::Deselect,
            ]
        );
        assert_eq!(
            display.interface.commands(),
            [0x27, 0x8A, 0xA1, 0xEB, 0x2F, 0x81, 0xC9, 0xAF, 0xC4]
        );
        assert_eq!(display.state(), ControllerState::Ready);
    }

    #[test]
    fn test_begin_delays_in_order() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.begin(DEFAULT_VBIAS_POT, &mut delay).unwrap();
        assert_eq!(delay.ms, [INIT_DELAY_PRE_MS, RESET_PULSE_MS, INIT_DELAY_MS]);
    }

    #[test]
    fn test_begin_failure_returns_to_uninitialized() {
        let mut display = test_display();
        display.interface.fail_after = Some(5);
        let mut delay = MockDelay::new();
        let result = display.begin(0x49, &mut delay);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(display.state(), ControllerState::Uninitialized);
        assert_balanced(&display);
    }

    #[test]
    fn test_reinit_reuses_vbias() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.begin(0x20, &mut delay).unwrap();
        display.interface.events.clear();
        display.reinit(&mut delay).unwrap();
        assert!(display.interface.commands().contains(&(GAIN_PM | 0x20)));
    }

    #[test]
    fn test_configured_orientation_applied_at_init() {
        let config = Builder::new()
            .dimensions(Dimensions::new(192, 64).unwrap())
            .orientation(Orientation::FlipOne)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        display.begin(0x49, &mut MockDelay::new()).unwrap();
        assert_eq!(
            display.interface.commands().last(),
            Some(&(LCD_CONTROL | ROTATION_FLIP_ONE))
        );
    }

    #[test]
    fn test_single_register_operations_are_framed() {
        let mut display = test_display();
        display.enable(false).unwrap();
        display.scroll(12).unwrap();
        display.invert(true).unwrap();
        display.all_pixels_on(true).unwrap();
        display.set_orientation_bits(0x06).unwrap();
        display.set_orientation_bits(0x03).unwrap();

        assert_eq!(
            display.interface.commands(),
            [0xAE, 0x4C, 0xA7, 0xA5, 0xC6, 0xC4]
        );
        assert_eq!(
            events(&display)
                .iter()
                .filter(|e| **e == Event::Select)
                .count(),
            6
        );
        assert_balanced(&display);
    }

    #[test]
    fn test_scroll_out_of_range_is_passed_through() {
        let mut display = test_display();
        display.scroll(100).unwrap();
        display.scroll(0xFF).unwrap();
        assert_eq!(display.interface.commands(), [SCROLL | 100, SCROLL | 0xFF]);
    }

    #[test]
    fn test_goto_sends_nibbles_and_page() {
        let mut display = test_display();
        display.goto(0xA5, 3).unwrap();
        assert_eq!(display.interface.commands(), [0x05, 0x1A, 0xB3]);
    }

    #[test]
    fn test_write_buffer_in_bounds_counts() {
        let mut display = test_display();
        let data: Vec<u8> = (0..(32u16 * 3)).map(|v| v as u8).collect();
        display.write_buffer(16, 8, 32, 24, &data).unwrap();

        // One command triple per band, pages 1..=3
        assert_eq!(
            display.interface.commands(),
            [0x00, 0x11, 0xB1, 0x00, 0x11, 0xB2, 0x00, 0x11, 0xB3]
        );
        assert_eq!(display.interface.data(), data);
        assert_balanced(&display);
    }

    #[test]
    fn test_write_buffer_interleaves_address_and_band() {
        let mut display = test_display();
        let data = [1u8, 2, 3, 4];
        display.write_buffer(0, 0, 2, 16, &data).unwrap();
        assert_eq!(
            events(&display),
            &[
                Event::Select,
                Event::Command(0x00),
                Event::Command(0x10),
                Event::Command(0xB0),
                Event::Data(1),
                Event::Data(2),
                Event::Command(0x00),
                Event::Command(0x10),
                Event::Command(0xB1),
                Event::Data(3),
                Event::Data(4),
                Event::Deselect,
            ]
        );
    }

    #[test]
    fn test_write_buffer_clips_right_edge() {
        let mut display = test_display();
        let data: Vec<u8> = (0..20).collect();
        // 10 wide at x=186: only columns 186..=191 survive
        display.write_buffer(186, 0, 10, 16, &data).unwrap();
        assert_eq!(display.interface.data(), [0, 1, 2, 3, 4, 5, 10, 11, 12, 13, 14, 15]);
        assert_eq!(display.interface.commands().len(), 6);
    }

    #[test]
    fn test_write_buffer_clips_left_edge() {
        let mut display = test_display();
        let data: Vec<u8> = (0..8).collect();
        display.write_buffer(-3, 0, 8, 8, &data).unwrap();
        assert_eq!(display.interface.commands(), [0x00, 0x10, 0xB0]);
        assert_eq!(display.interface.data(), [3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_write_buffer_drops_bands_below_panel() {
        let mut display = test_display();
        let data = [0xFFu8; 4 * 3];
        display.write_buffer(0, 48, 4, 24, &data).unwrap();
        // Bands at rows 48 and 56 written, 64 dropped
        assert_eq!(
            display.interface.commands(),
            [0x00, 0x10, 0xB6, 0x00, 0x10, 0xB7]
        );
        assert_eq!(display.interface.data().len(), 8);
    }

    #[test]
    fn test_write_buffer_page_counter_skips_dropped_bands() {
        let mut display = test_display();
        let data: Vec<u8> = (0..6).collect();
        // First band (rows -8..-1) is dropped; next band starts on page 0
        display.write_buffer(0, -8, 2, 24, &data).unwrap();
        assert_eq!(
            display.interface.commands(),
            [0x00, 0x10, 0xB0, 0x00, 0x10, 0xB1]
        );
        assert_eq!(display.interface.data(), [2, 3, 4, 5]);
    }

    #[test]
    fn test_write_buffer_fully_outside_sends_only_addresses() {
        let mut display = test_display();
        let data = [0xAAu8; 8];
        display.write_buffer(200, 0, 8, 8, &data).unwrap();
        assert_eq!(display.interface.commands().len(), 3);
        assert!(display.interface.data().is_empty());
    }

    #[test]
    fn test_write_buffer_rejects_short_source() {
        let mut display = test_display();
        let data = [0u8; 10];
        let result = display.write_buffer(0, 0, 8, 12, &data);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 16,
                provided: 10
            })
        ));
        assert!(events(&display).is_empty());
    }

    #[test]
    fn test_write_buffer_releases_cs_on_error() {
        let mut display = test_display();
        display.interface.fail_after = Some(3);
        let data = [0u8; 16];
        let result = display.write_buffer(0, 0, 8, 16, &data);
        assert!(result.is_err());
        assert_eq!(events(&display).last(), Some(&Event::Deselect));
    }

    static LOGO: [u8; 4] = [0x81, 0x42, 0x24, 0x18];

    #[test]
    fn test_write_buffer_column_keeps_low_byte_past_255() {
        let mut display = test_display();
        let data = [0xAAu8; 8];
        // 300 = 0x12C; only the low byte reaches the column registers
        display.write_buffer(300, 0, 8, 8, &data).unwrap();
        assert_eq!(display.interface.commands(), [0x0C, 0x12, 0xB0]);
        assert!(display.interface.data().is_empty());
    }

    #[test]
    fn test_draw_bitmap_accepts_borrowed_image() {
        let mut display = test_display();
        let mut image = [0u8; 8];
        image[3] = 0x3C;
        display.draw_bitmap(0, 0, 8, 8, &image).unwrap();
        assert_eq!(display.interface.data(), image);
    }

    #[test]
    fn test_draw_bitmap_matches_write_buffer() {
        let mut display = test_display();
        display.draw_bitmap(10, 16, 4, 8, &LOGO).unwrap();
        assert_eq!(display.interface.commands(), [0x0A, 0x10, 0xB2]);
        assert_eq!(display.interface.data(), LOGO);
    }

    #[test]
    fn test_fill_screen_writes_whole_ram_without_addressing() {
        let mut display = test_display();
        let mut delay = MockDelay::new();
        display.fill_screen(0x55, 2, &mut delay).unwrap();
        assert!(display.interface.commands().is_empty());
        assert_eq!(display.interface.data().len(), 1536);
        assert!(display.interface.data().iter().all(|b| *b == 0x55));
        assert_eq!(delay.us.len(), 1536);
        assert_balanced(&display);
    }

    #[test]
    fn test_fill_page_writes_one_page() {
        let mut display = test_display();
        display.fill_page(0xF0).unwrap();
        assert!(display.interface.commands().is_empty());
        assert_eq!(display.interface.data().len(), 192);
    }

    #[test]
    fn test_write_columns_pads_both_sides() {
        let mut display = test_display();
        display.write_columns(&[0x7E, 0x11, 0x7E]).unwrap();
        assert_eq!(display.interface.data(), [0x00, 0x7E, 0x11, 0x7E, 0x00]);
        assert_balanced(&display);
    }
}
