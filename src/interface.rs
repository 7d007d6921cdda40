//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the IL3820 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The IL3820 requires:
//! - SPI bus (MOSI + SCK), owned exclusively by the display
//! - 4 GPIO pins:
//!   - **CS**: Chip select (output, active low, held low for the whole session)
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::SpiBus;
//! use il3820::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockPin);
//!
//! // Claim the bus
//! let _ = interface.select();
//!
//! // Send command with data
//! let _ = interface.send_command(0x3C); // Border waveform
//! let _ = interface.send_data(&[0x03]);
//!
//! // Wait for display ready
//! let _ = interface.busy_wait(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Time the reset line is held at each level during a hardware reset
pub const RESET_DELAY_MS: u32 = 200;

/// Default timeout for busy-wait in milliseconds (0 = wait forever)
///
/// BUSY is only asserted while the controller runs an internal operation,
/// so by default the driver waits for as long as the controller needs.
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 0;

/// Trait for hardware interface to IL3820 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a shared bus with external arbitration),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Assert chip select
    ///
    /// Called once when the display session is created. The line is never
    /// released afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO fails.
    fn select(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait [`RESET_DELAY_MS`]
    /// 3. Set RST pin high
    /// 4. Wait [`RESET_DELAY_MS`]
    fn reset<D: DelayNs>(&mut self, delay: &mut D);

    /// Block until the BUSY pin reports idle
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be read, or a timeout error if the
    /// implementation bounds the wait.
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Timeout waiting for busy pin
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Timeout => write!(f, "Timeout waiting for display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Poll a busy line until it leaves `busy_level`
///
/// Reads `busy` once per millisecond, using `delay` as the clock. With
/// `timeout_ms == 0` the wait is unbounded.
///
/// Returns the number of polls that found the line busy.
///
/// # Errors
///
/// Returns [`InterfaceError::Pin`] if the line cannot be read and
/// [`InterfaceError::Timeout`] if the line is still busy when read after
/// `timeout_ms` milliseconds.
pub fn wait_while_busy<B, D, SpiErr>(
    busy: &mut B,
    delay: &mut D,
    busy_level: PinState,
    timeout_ms: u32,
) -> InterfaceResult<u32, InterfaceError<SpiErr, B::Error>>
where
    B: InputPin,
    D: DelayNs,
{
    let mut polls = 0u32;

    loop {
        let is_busy = match busy_level {
            PinState::High => busy.is_high(),
            PinState::Low => busy.is_low(),
        }
        .map_err(InterfaceError::Pin)?;

        if !is_busy {
            log::trace!("busy released after {polls} polls");
            return Ok(polls);
        }

        if timeout_ms > 0 && polls >= timeout_ms {
            log::warn!("busy still asserted after {timeout_ms}ms");
            return Err(InterfaceError::Timeout);
        }

        delay.delay_ms(1);
        polls = polls.saturating_add(1);
    }
}

/// Hardware interface implementation for IL3820
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
pub struct Interface<SPI, CS, DC, RST, BUSY> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin (active high)
    busy: BUSY,
    /// Timeout for busy-wait in milliseconds
    busy_timeout_ms: u32,
    /// Busy pin polarity (true = active high, false = active low)
    busy_active_high: bool,
}

impl<SPI, CS, DC, RST, BUSY> Interface<SPI, CS, DC, RST, BUSY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `busy` - Busy pin (input, active high)
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            busy,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            busy_active_high: true,
        }
    }

    /// Set the busy-wait timeout in milliseconds
    ///
    /// Default is 0, which waits forever. A non-zero value makes a stuck
    /// BUSY line surface as [`InterfaceError::Timeout`].
    pub fn set_busy_timeout(&mut self, timeout_ms: u32) -> &mut Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }

    /// Get the current busy-wait timeout in milliseconds
    pub fn busy_timeout(&self) -> u32 {
        self.busy_timeout_ms
    }

    /// Set busy pin polarity
    ///
    /// Default is active-high. Set to false for active-low boards.
    pub fn set_busy_active_high(&mut self, active_high: bool) -> &mut Self {
        self.busy_active_high = active_high;
        self
    }

    /// Get busy pin polarity (true = active high)
    pub fn busy_active_high(&self) -> bool {
        self.busy_active_high
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST, BUSY) {
        (self.spi, self.cs, self.dc, self.rst, self.busy)
    }

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), SPI::Error> {
        self.spi.write(bytes)?;
        self.spi.flush()
    }
}

impl<SPI, CS, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST, BUSY>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn select(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: LOW -> wait 200ms -> HIGH -> wait 200ms
        let _ = self.rst.set_low();
        delay.delay_ms(RESET_DELAY_MS);
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_DELAY_MS);
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let busy_level = if self.busy_active_high {
            PinState::High
        } else {
            PinState::Low
        };
        wait_while_busy::<_, _, SPI::Error>(
            &mut self.busy,
            delay,
            busy_level,
            self.busy_timeout_ms,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Cs(bool),
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        Flush,
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockSpiError;

    impl embedded_hal::spi::Error for MockSpiError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    impl SpiErrorType for MockSpi {
        type Error = MockSpiError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockSpiError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }
        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum Line {
        Cs,
        Dc,
        Rst,
    }

    struct MockOutput {
        log: Log,
        line: Line,
    }

    impl ErrorType for MockOutput {
        type Error = Infallible;
    }

    impl MockOutput {
        fn record(&self, high: bool) {
            let event = match self.line {
                Line::Cs => Event::Cs(high),
                Line::Dc => Event::Dc(high),
                Line::Rst => Event::Rst(high),
            };
            self.log.borrow_mut().push(event);
        }
    }

    impl OutputPin for MockOutput {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true);
            Ok(())
        }
    }

    /// Busy line that reads busy (high) for the first `busy_polls` reads
    struct MockBusy {
        busy_polls: u32,
        reads: Rc<Cell<u32>>,
    }

    impl ErrorType for MockBusy {
        type Error = Infallible;
    }

    impl InputPin for MockBusy {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            Ok(reads < self.busy_polls)
        }
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    type TestInterface = Interface<MockSpi, MockOutput, MockOutput, MockOutput, MockBusy>;

    fn test_interface(busy_polls: u32, fail_spi: bool) -> (TestInterface, Log, Rc<Cell<u32>>) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let reads = Rc::new(Cell::new(0));
        let interface = Interface::new(
            MockSpi {
                log: log.clone(),
                fail: fail_spi,
            },
            MockOutput {
                log: log.clone(),
                line: Line::Cs,
            },
            MockOutput {
                log: log.clone(),
                line: Line::Dc,
            },
            MockOutput {
                log: log.clone(),
                line: Line::Rst,
            },
            MockBusy {
                busy_polls,
                reads: reads.clone(),
            },
        );
        (interface, log, reads)
    }

    #[test]
    fn test_default_busy_timeout_is_unbounded() {
        let (interface, _, _) = test_interface(0, false);
        assert_eq!(DEFAULT_BUSY_TIMEOUT_MS, 0);
        assert_eq!(interface.busy_timeout(), 0);
        assert!(interface.busy_active_high());
    }

    #[test]
    fn test_set_busy_timeout() {
        let (mut interface, _, _) = test_interface(0, false);
        interface.set_busy_timeout(5_000);
        assert_eq!(interface.busy_timeout(), 5_000);
        interface.set_busy_timeout(0);
        assert_eq!(interface.busy_timeout(), 0);
    }

    #[test]
    fn test_select_drives_cs_low() {
        let (mut interface, log, _) = test_interface(0, false);
        assert!(interface.select().is_ok());
        assert_eq!(*log.borrow(), [Event::Cs(false)]);
    }

    #[test]
    fn test_send_command_sets_dc_low_before_write() {
        let (mut interface, log, _) = test_interface(0, false);
        assert!(interface.send_command(0x22).is_ok());
        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(false),
                Event::Write(alloc::vec![0x22]),
                Event::Flush
            ]
        );
    }

    #[test]
    fn test_send_data_sets_dc_high_before_write() {
        let (mut interface, log, _) = test_interface(0, false);
        assert!(interface.send_data(&[0xD7, 0xD6, 0x9D]).is_ok());
        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(true),
                Event::Write(alloc::vec![0xD7, 0xD6, 0x9D]),
                Event::Flush
            ]
        );
    }

    #[test]
    fn test_spi_failure_propagates() {
        let (mut interface, _, _) = test_interface(0, true);
        let result = interface.send_command(0x20);
        assert!(matches!(result, Err(InterfaceError::Spi(MockSpiError))));
        let result = interface.send_data(&[0x00]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockSpiError))));
    }

    #[test]
    fn test_reset_toggles_low_then_high_with_delays() {
        let (mut interface, log, _) = test_interface(0, false);
        let mut delay = MockDelay { log: log.clone() };
        interface.reset(&mut delay);
        assert_eq!(
            *log.borrow(),
            [
                Event::Rst(false),
                Event::DelayMs(RESET_DELAY_MS),
                Event::Rst(true),
                Event::DelayMs(RESET_DELAY_MS),
            ]
        );
        assert_eq!(RESET_DELAY_MS, 200);
    }

    #[test]
    fn test_busy_wait_returns_immediately_when_idle() {
        let (mut interface, log, reads) = test_interface(0, false);
        let mut delay = MockDelay { log: log.clone() };
        assert!(interface.busy_wait(&mut delay).is_ok());
        assert_eq!(reads.get(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_busy_wait_polls_until_idle() {
        let (mut interface, log, reads) = test_interface(5, false);
        let mut delay = MockDelay { log: log.clone() };
        assert!(interface.busy_wait(&mut delay).is_ok());
        assert_eq!(reads.get(), 6);
        assert_eq!(log.borrow().len(), 5);
    }

    #[test]
    fn test_busy_wait_times_out_when_bounded() {
        let (mut interface, log, reads) = test_interface(u32::MAX, false);
        interface.set_busy_timeout(10);
        let mut delay = MockDelay { log: log.clone() };
        let result = interface.busy_wait(&mut delay);
        assert!(matches!(result, Err(InterfaceError::Timeout)));
        assert_eq!(log.borrow().len(), 10);
        assert_eq!(reads.get(), 11);
    }

    #[test]
    fn test_busy_wait_active_low() {
        // MockBusy reads high first, which is idle for an active-low line
        let (mut interface, log, reads) = test_interface(3, false);
        interface.set_busy_active_high(false).set_busy_timeout(4);
        let mut delay = MockDelay { log: log.clone() };
        assert!(interface.busy_wait(&mut delay).is_ok());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_wait_while_busy_counts_polls() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let reads = Rc::new(Cell::new(0));
        let mut busy = MockBusy {
            busy_polls: 7,
            reads: reads.clone(),
        };
        let mut delay = MockDelay { log: log.clone() };
        let polls: Result<u32, InterfaceError<Infallible, Infallible>> =
            wait_while_busy(&mut busy, &mut delay, PinState::High, 0);
        assert!(matches!(polls, Ok(7)));
        assert!(log.borrow().iter().all(|e| *e == Event::DelayMs(1)));
    }

    #[test]
    fn test_wait_while_busy_reads_line_again_at_deadline() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let reads = Rc::new(Cell::new(0));
        let mut busy = MockBusy {
            busy_polls: 1,
            reads: reads.clone(),
        };
        let mut delay = MockDelay { log: log.clone() };
        let polls: Result<u32, InterfaceError<Infallible, Infallible>> =
            wait_while_busy(&mut busy, &mut delay, PinState::High, 1);
        assert!(matches!(polls, Ok(1)));
        assert_eq!(reads.get(), 2);
        assert_eq!(*log.borrow(), [Event::DelayMs(1)]);
    }
}
