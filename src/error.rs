//! Error types for the driver
//!
//! [`Error`] is returned by every [`Display`](crate::display::Display)
//! operation. Transport failures arrive as [`Error::Interface`] unchanged
//! and are never retried; the remaining variants come from the checked
//! frame helpers.
//!
//! ## Example
//!
//! ```
//! use il3820::{Error, Region};
//! # use il3820::DisplayInterface;
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = ();
//! #     fn select(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn send_command(&mut self, _: u8) -> Result<(), ()> { Ok(()) }
//! #     fn send_data(&mut self, _: &[u8]) -> Result<(), ()> { Ok(()) }
//! #     fn reset<D: embedded_hal::delay::DelayNs>(&mut self, _: &mut D) {}
//! #     fn busy_wait<D: embedded_hal::delay::DelayNs>(&mut self, _: &mut D) -> Result<(), ()> { Ok(()) }
//! # }
//!
//! let region = Region::new(4, 0, 8, 8);
//! let err: Error<Bus> = Error::InvalidRamArea { x: region.x, y: region.y, w: region.w, h: region.h };
//! assert_eq!(
//!     format!("{err}"),
//!     "Invalid RAM area: x=4, y=0, w=8, h=8"
//! );
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO/busy timeout)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Buffer is too small for the target region
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Invalid RAM area parameters
    ///
    /// The RAM area must have non-zero width and height, must fit within the
    /// panel, and `x` and `w` must be multiples of 8.
    InvalidRamArea {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
        /// Width
        w: u16,
        /// Height
        h: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::InvalidRamArea { x, y, w, h } => {
                write!(f, "Invalid RAM area: x={x}, y={y}, w={w}, h={h}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}
