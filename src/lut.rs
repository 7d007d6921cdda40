//! Waveform look-up tables
//!
//! The IL3820 has no waveform in OTP for this panel, so one of these tables
//! has to be written with [`WRITE_LUT`](crate::command::WRITE_LUT) before
//! the first refresh. The layout is 20 bytes of voltage selections followed
//! by 10 bytes of phase timings.

/// Size of a waveform table in bytes
pub const LUT_SIZE: usize = 30;

/// Full refresh waveform
///
/// Drives every pixel through several black/white cycles. Slow, but clears
/// ghosting left behind by partial refreshes.
#[rustfmt::skip]
pub const LUT_FULL_UPDATE: [u8; LUT_SIZE] = [
    // voltage selections
    0x02, 0x02, 0x01, 0x11, 0x12, 0x12, 0x22, 0x22,
    0x66, 0x69, 0x69, 0x59, 0x58, 0x99, 0x99, 0x88,
    0x00, 0x00, 0x00, 0x00,
    // phase timings
    0xF8, 0xB4, 0x13, 0x51,
    0x35, 0x51, 0x51, 0x19, 0x01, 0x00,
];

/// Partial refresh waveform
///
/// Single short phase that only moves pixels which changed.
#[rustfmt::skip]
pub const LUT_PARTIAL_UPDATE: [u8; LUT_SIZE] = [
    // voltage selections
    0x10, 0x18, 0x18, 0x08, 0x18, 0x18, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // phase timings
    0x13, 0x14, 0x44, 0x12,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
