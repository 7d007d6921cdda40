//! Core display operations

use core::ops::RangeInclusive;

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    BOOSTER_SOFT_START, BORDER_WAVEFORM, DATA_ENTRY_MODE, DEEP_SLEEP, DEEP_SLEEP_ENTER,
    DISPLAY_UPDATE_CTRL2, DISPLAY_UPDATE_SEQUENCE, DRIVER_OUTPUT_CONTROL, DUMMY_LINE_PERIOD,
    GATE_TIME, MASTER_ACTIVATION, SET_RAM_X_COUNTER, SET_RAM_X_RANGE, SET_RAM_Y_COUNTER,
    SET_RAM_Y_RANGE, SOFT_RESET, TEMP_SENSOR_CONTROL, TERMINATE_FRAME, WRITE_LUT, WRITE_RAM,
    WRITE_VCOM,
};
use crate::config::{BUFFER_SIZE, Config, HEIGHT, ROW_BYTES, WIDTH};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::lut::{LUT_FULL_UPDATE, LUT_PARTIAL_UPDATE, LUT_SIZE};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Waveform used by the next refresh
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateKind {
    /// Full refresh waveform (slow, no ghosting)
    #[default]
    Full,
    /// Partial refresh waveform (fast, ghosting accumulates)
    Partial,
}

impl UpdateKind {
    /// Waveform table for this kind
    pub fn lut(self) -> &'static [u8; LUT_SIZE] {
        match self {
            Self::Full => &LUT_FULL_UPDATE,
            Self::Partial => &LUT_PARTIAL_UPDATE,
        }
    }
}

/// RAM address axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Axis {
    /// Column (byte) axis
    X = 0,
    /// Row axis
    Y = 1,
}

/// Direction the address counter moves after each write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AxisUpdateKind {
    /// Counter decrements
    Decrement = 0,
    /// Counter increments
    Increment = 1,
}

/// Data entry mode (address counter behavior)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataEntryMode {
    /// X counter direction
    pub x: AxisUpdateKind,
    /// Y counter direction
    pub y: AxisUpdateKind,
    /// Axis the counter advances along first
    pub scan: Axis,
}

impl DataEntryMode {
    /// Create a new data entry mode
    pub fn new(x: AxisUpdateKind, y: AxisUpdateKind, scan: Axis) -> Self {
        Self { x, y, scan }
    }

    /// Encoded parameter byte for [`DATA_ENTRY_MODE`]
    pub fn byte(self) -> u8 {
        (self.x as u8) | ((self.y as u8) << 1) | ((self.scan as u8) << 2)
    }
}

impl Default for DataEntryMode {
    /// Controller reset value: both counters increment, X first
    fn default() -> Self {
        Self::new(AxisUpdateKind::Increment, AxisUpdateKind::Increment, Axis::X)
    }
}

/// Progress of the power-up sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SetupState {
    /// No reset performed since power-up, sleep or software reset
    #[default]
    Unreset,
    /// Hardware reset done, registers not yet written
    Resetting,
    /// Registers written, no waveform loaded
    Configured,
    /// Waveform loaded, ready to refresh
    Ready,
}

/// Region specification for checked RAM writes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// X coordinate in pixels (must be a multiple of 8)
    pub x: u16,
    /// Y coordinate in pixels
    pub y: u16,
    /// Width in pixels (must be a multiple of 8)
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Region {
    /// The whole panel
    pub const FULL: Self = Self {
        x: 0,
        y: 0,
        w: WIDTH,
        h: HEIGHT,
    };

    /// Create a new region
    #[allow(clippy::many_single_char_names)]
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Calculate the buffer size in bytes for this region
    pub fn buffer_size(&self) -> usize {
        (self.w as usize / 8) * self.h as usize
    }

    fn is_valid(&self) -> bool {
        self.w != 0
            && self.h != 0
            && self.x.saturating_add(self.w) <= WIDTH
            && self.y.saturating_add(self.h) <= HEIGHT
            && self.x % 8 == 0
            && self.w % 8 == 0
    }
}

/// Display session for an IL3820 panel
///
/// Owns the hardware interface for its whole lifetime. Creating a
/// `Display` asserts chip select and runs [`setup`](Self::setup), so a
/// constructed session is ready to refresh.
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_hal::delay::DelayNs;
/// use il3820::{Color, Display, Interface, UpdateKind};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{InputPin, OutputPin};
/// # use embedded_hal::spi::SpiBus;
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiBus for MockSpi {
/// #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl InputPin for MockPin {
/// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockPin);
/// let mut display = match Display::new(interface, &mut delay) {
///     Ok(display) => display,
///     Err(_) => return,
/// };
///
/// // Blank the panel with the full waveform
/// let _ = display.clear(Color::White, &mut delay);
/// let _ = display.display_frame(&mut delay);
///
/// // Switch to fast updates for subsequent frames
/// let _ = display.set_update_kind(UpdateKind::Partial);
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Register values written by setup
    config: Config,
    /// Progress of the power-up sequence
    state: SetupState,
    /// Waveform currently loaded in the controller
    update_kind: UpdateKind,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a session with the default register configuration
    ///
    /// Asserts chip select, then resets and configures the controller.
    pub fn new<D: DelayNs>(interface: I, delay: &mut D) -> Result<Self, Error<I>> {
        Self::with_config(interface, Config::default(), delay)
    }

    /// Create a session with a custom register configuration
    pub fn with_config<D: DelayNs>(
        interface: I,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<I>> {
        let mut display = Self {
            interface,
            config,
            state: SetupState::Unreset,
            update_kind: UpdateKind::Full,
        };
        display.interface.select().map_err(Error::Interface)?;
        display.setup(delay)?;
        Ok(display)
    }

    /// Reset the controller and write the power-up configuration
    ///
    /// Ends by loading the full refresh waveform. If a bus write fails the
    /// session stays in the state reached so far and `setup` has to be run
    /// again.
    pub fn setup<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("il3820: setup");
        self.reset(delay);
        self.state = SetupState::Resetting;

        self.send_command(DRIVER_OUTPUT_CONTROL)?;
        self.send_data(&self.config.driver_output())?;

        self.send_command(BOOSTER_SOFT_START)?;
        let booster = self.config.booster_soft_start;
        self.send_data(&booster)?;

        self.send_command(WRITE_VCOM)?;
        self.send_data(&[self.config.vcom])?;

        self.send_command(DUMMY_LINE_PERIOD)?;
        self.send_data(&[self.config.dummy_line_period])?;

        self.send_command(GATE_TIME)?;
        self.send_data(&[self.config.gate_time])?;

        self.send_command(BORDER_WAVEFORM)?;
        self.send_data(&[self.config.border_waveform])?;
        self.state = SetupState::Configured;

        self.set_update_kind(UpdateKind::Full)?;
        self.state = SetupState::Ready;
        log::debug!("il3820: ready");
        Ok(())
    }

    /// Toggle the reset line (low, then high, 200ms each)
    ///
    /// The controller drops its registers and waveform, so the session
    /// returns to [`SetupState::Unreset`].
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.interface.reset(delay);
        self.forget_registers();
    }

    /// Wake the controller from deep sleep
    ///
    /// Deep sleep is only left through a hardware reset, so this runs the
    /// full [`setup`](Self::setup) sequence.
    pub fn wake_up<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.setup(delay)
    }

    /// Issue a software reset and wait for it to complete
    ///
    /// Registers return to their power-on values, so [`setup`](Self::setup)
    /// must run before the next refresh.
    pub fn software_reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SOFT_RESET)?;
        self.forget_registers();
        self.wait_until_idle(delay)
    }

    /// Enter deep sleep
    pub fn deep_sleep(&mut self) -> DisplayResult<I> {
        log::debug!("il3820: entering deep sleep");
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[DEEP_SLEEP_ENTER])?;
        self.forget_registers();
        Ok(())
    }

    /// Write the temperature register (12-bit value, 1/16 degree C)
    pub fn set_temperature(&mut self, raw: u16) -> DisplayResult<I> {
        let raw = raw & 0x0FFF;
        self.send_command(TEMP_SENSOR_CONTROL)?;
        self.send_data(&[(raw >> 4) as u8, ((raw & 0x0F) << 4) as u8])
    }

    /// Load the waveform for `kind` into the controller
    pub fn set_update_kind(&mut self, kind: UpdateKind) -> DisplayResult<I> {
        log::debug!("il3820: loading {kind:?} waveform");
        self.send_command(WRITE_LUT)?;
        self.send_data(kind.lut())?;
        self.update_kind = kind;
        Ok(())
    }

    /// Set the RAM window
    ///
    /// X bounds are pixels and are divided by 8; callers must pass
    /// byte-aligned values. Bounds are not checked.
    pub fn set_memory_area(
        &mut self,
        x: RangeInclusive<u16>,
        y: RangeInclusive<u16>,
    ) -> DisplayResult<I> {
        let (x_start, x_end) = x.into_inner();
        let (y_start, y_end) = y.into_inner();
        log::trace!("il3820: window x={x_start}..={x_end} y={y_start}..={y_end}");

        self.send_command(SET_RAM_X_RANGE)?;
        self.send_data(&[(x_start >> 3) as u8, (x_end >> 3) as u8])?;

        self.send_command(SET_RAM_Y_RANGE)?;
        self.send_data(&[
            (y_start & 0xFF) as u8,
            (y_start >> 8) as u8,
            (y_end & 0xFF) as u8,
            (y_end >> 8) as u8,
        ])
    }

    /// Set the RAM address counter and wait for the controller to latch it
    pub fn set_memory_pointer<D: DelayNs>(
        &mut self,
        x: u16,
        y: u16,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_COUNTER)?;
        self.send_data(&[(x >> 3) as u8])?;

        self.send_command(SET_RAM_Y_COUNTER)?;
        self.send_data(&[(y & 0xFF) as u8, (y >> 8) as u8])?;

        self.wait_until_idle(delay)
    }

    /// Set how the address counter advances after each RAM byte
    pub fn set_data_entry_mode(&mut self, mode: DataEntryMode) -> DisplayResult<I> {
        self.send_command(DATA_ENTRY_MODE)?;
        self.send_data(&[mode.byte()])
    }

    /// Block until BUSY reports idle
    pub fn wait_until_idle<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }

    /// Write `pattern` to every byte of the frame
    ///
    /// Streams one panel row per bus write.
    pub fn fill_pattern(&mut self, pattern: u8) -> DisplayResult<I> {
        let row = [pattern; ROW_BYTES];
        self.send_command(WRITE_RAM)?;
        for _ in 0..HEIGHT {
            self.send_data(&row)?;
        }
        Ok(())
    }

    /// Write `data` to RAM at the current address counter
    ///
    /// The length is not checked against the configured window.
    pub fn fill(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.send_command(WRITE_RAM)?;
        self.send_data(data)
    }

    /// Refresh the panel from RAM using the loaded waveform
    ///
    /// The session state is not checked: after a reset or deep sleep the
    /// caller must run [`setup`](Self::setup) first, otherwise the refresh
    /// runs without a waveform loaded.
    pub fn display_frame<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if !self.is_ready() {
            log::warn!("il3820: refresh requested in state {:?}", self.state);
        }
        log::debug!("il3820: refresh ({:?})", self.update_kind);
        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_data(&[DISPLAY_UPDATE_SEQUENCE])?;
        self.send_command(MASTER_ACTIVATION)?;
        self.send_command(TERMINATE_FRAME)?;
        self.wait_until_idle(delay)
    }

    /// Fill the whole RAM with `color` (no refresh)
    pub fn clear<D: DelayNs>(&mut self, color: Color, delay: &mut D) -> DisplayResult<I> {
        self.set_memory_area(0..=WIDTH - 1, 0..=HEIGHT - 1)?;
        self.set_memory_pointer(0, 0, delay)?;
        self.fill_pattern(color.byte())
    }

    /// Write a byte-aligned region of RAM (no refresh)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRamArea` if the region is empty, outside the
    /// panel or not byte aligned, and `Error::BufferTooSmall` if `data` is
    /// shorter than [`Region::buffer_size`].
    pub fn write_region<D: DelayNs>(
        &mut self,
        region: Region,
        data: &[u8],
        delay: &mut D,
    ) -> DisplayResult<I> {
        if !region.is_valid() {
            return Err(Error::InvalidRamArea {
                x: region.x,
                y: region.y,
                w: region.w,
                h: region.h,
            });
        }
        let required = region.buffer_size();
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: data.len(),
            });
        }

        self.set_memory_area(
            region.x..=region.x + region.w - 1,
            region.y..=region.y + region.h - 1,
        )?;
        self.set_memory_pointer(region.x, region.y, delay)?;
        self.fill(&data[..required])
    }

    /// Write a full frame and refresh the panel
    pub fn update_frame<D: DelayNs>(&mut self, buffer: &[u8], delay: &mut D) -> DisplayResult<I> {
        self.write_region(Region::FULL, buffer, delay)?;
        self.display_frame(delay)
    }

    /// Waveform currently loaded
    ///
    /// Reports [`UpdateKind::Full`], the reset default, after a reset, a
    /// software reset or deep sleep until a table is loaded again.
    pub fn update_kind(&self) -> UpdateKind {
        self.update_kind
    }

    /// Progress of the power-up sequence
    pub fn state(&self) -> SetupState {
        self.state
    }

    /// Whether setup has completed
    pub fn is_ready(&self) -> bool {
        self.state == SetupState::Ready
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Size of one full frame in bytes
    pub const fn buffer_size(&self) -> usize {
        BUFFER_SIZE
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Controller registers are back at their power-on values
    fn forget_registers(&mut self) {
        self.state = SetupState::Unreset;
        self.update_kind = UpdateKind::default();
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
