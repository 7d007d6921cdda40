//! IL3820 E-Paper Display Driver
//!
//! A driver for the IL3820 e-paper display controller as fitted to 128x296
//! (2.9") monochrome panels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Full and partial refresh waveforms
//! - Raw RAM addressing (window, counter, data entry mode)
//! - Checked region writes on top of the raw operations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::SpiBus;
//! use il3820::{Display, Interface, UpdateKind, BUFFER_SIZE};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, rst, busy);
//! let mut display = match Display::new(interface, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let frame = [0xFFu8; BUFFER_SIZE];
//! let _ = display.update_frame(&frame, &mut delay);
//!
//! let _ = display.set_update_kind(UpdateKind::Partial);
//! let _ = display.fill_pattern(0x00);
//! let _ = display.display_frame(&mut delay);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Pixel colors
pub mod color;
/// IL3820 command definitions
pub mod command;
/// Panel geometry and register configuration
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Waveform look-up tables
pub mod lut;

pub use color::Color;
pub use config::{BUFFER_SIZE, Builder, Config, HEIGHT, WIDTH};
pub use display::{
    Axis, AxisUpdateKind, DataEntryMode, Display, Region, SetupState, UpdateKind,
};
pub use error::Error;
pub use interface::{
    DEFAULT_BUSY_TIMEOUT_MS, DisplayInterface, Interface, InterfaceError, RESET_DELAY_MS,
    wait_while_busy,
};
