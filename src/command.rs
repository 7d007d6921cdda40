//! IL3820 command definitions
//!
//! This module defines the command bytes understood by the IL3820 e-paper
//! display controller. Commands are sent over SPI with the DC pin low, their
//! parameters follow with the DC pin high.
//!
//! ## Command Structure
//!
//! Every operation follows the pattern:
//! 1. Set DC low (command mode)
//! 2. Send the command byte
//! 3. Set DC high (data mode)
//! 4. Send data bytes (if any)
//!
//! Chip select stays asserted for the whole session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use il3820::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockPin);
//! // Select the full-update display sequence
//! let _ = interface.send_command(command::DISPLAY_UPDATE_CTRL2);
//! let _ = interface.send_data(&[0xC4]);
//! ```

// System control commands

/// Driver output control command (0x01)
///
/// Sets the number of gate lines and the scanning direction.
/// Requires 3 bytes: [lines-1 (LSB), lines-1 (MSB), scanning mode]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Booster soft-start control command (0x0C)
///
/// Tunes the three phases of the booster power-on sequence.
/// Requires 3 bytes of data.
pub const BOOSTER_SOFT_START: u8 = 0x0C;

/// Gate scan start position command (0x0F)
///
/// Selects the first gate line scanned. Requires 2 bytes.
pub const GATE_SCAN_START: u8 = 0x0F;

/// Deep sleep command (0x10)
///
/// Requires 1 byte: 0x01 = enter deep sleep. Only a hardware reset wakes
/// the controller.
pub const DEEP_SLEEP: u8 = 0x10;

/// Software reset command (0x12)
///
/// Restores register defaults. BUSY is high until the reset completes.
pub const SOFT_RESET: u8 = 0x12;

/// Temperature sensor control command (0x1A)
///
/// Writes the temperature register used for waveform timing.
/// Requires 2 bytes: [T(11:4), T(3:0) << 4]
pub const TEMP_SENSOR_CONTROL: u8 = 0x1A;

// RAM and data commands

/// Data entry mode command (0x11)
///
/// Controls the address counter auto-increment direction.
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE: u8 = 0x11;

/// Write RAM command (0x24)
///
/// Writes pixel data at the address counter. Bit=0: Black, Bit=1: White
pub const WRITE_RAM: u8 = 0x24;

/// Set RAM X address range command (0x44)
///
/// Requires 2 bytes: [start, end], both in byte columns (pixel / 8).
pub const SET_RAM_X_RANGE: u8 = 0x44;

/// Set RAM Y address range command (0x45)
///
/// Requires 4 bytes: [start_LSB, start_MSB, end_LSB, end_MSB]
pub const SET_RAM_Y_RANGE: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
///
/// Requires 1 byte: the byte column (pixel / 8).
pub const SET_RAM_X_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// Requires 2 bytes: [address_LSB, address_MSB]
pub const SET_RAM_Y_COUNTER: u8 = 0x4F;

/// Terminate frame read/write command (0xFF)
///
/// Closes the current RAM access. Also used as a NOP after activation.
pub const TERMINATE_FRAME: u8 = 0xFF;

// Display update commands

/// Master activation command (0x20)
///
/// Runs the sequence selected by [`DISPLAY_UPDATE_CTRL2`]. BUSY goes high
/// for the duration of the refresh.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Display update control 1 command (0x21)
///
/// RAM bypass and inversion options. Requires 1 byte.
pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;

/// Display update control 2 command (0x22)
///
/// Selects the stages run by [`MASTER_ACTIVATION`]. Requires 1 byte.
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;

/// Display update sequence used for every refresh
///
/// Enables clock and analog, runs the pattern display and disables the
/// analog block again afterwards.
pub const DISPLAY_UPDATE_SEQUENCE: u8 = 0xC4;

// Analog and waveform commands

/// Write VCOM command (0x2C)
///
/// Requires 1 byte.
pub const WRITE_VCOM: u8 = 0x2C;

/// Write LUT command (0x32)
///
/// Loads the waveform used by the next refresh.
/// Requires 30 bytes, see [`crate::lut`].
pub const WRITE_LUT: u8 = 0x32;

/// Set dummy line period command (0x3A)
///
/// Requires 1 byte (number of dummy lines per gate).
pub const DUMMY_LINE_PERIOD: u8 = 0x3A;

/// Set gate line width command (0x3B)
///
/// Requires 1 byte (gate time code).
pub const GATE_TIME: u8 = 0x3B;

/// Border waveform control command (0x3C)
///
/// Requires 1 byte.
pub const BORDER_WAVEFORM: u8 = 0x3C;

/// Deep sleep parameter that enters sleep mode
pub const DEEP_SLEEP_ENTER: u8 = 0x01;
