//! Panel geometry and register configuration

/// Panel width in pixels (source outputs)
pub const WIDTH: u16 = 128;

/// Panel height in pixels (gate lines)
pub const HEIGHT: u16 = 296;

/// Bytes per panel row (8 pixels per byte)
pub const ROW_BYTES: usize = WIDTH as usize / 8;

/// Size of one full frame in bytes
pub const BUFFER_SIZE: usize = ROW_BYTES * HEIGHT as usize;

const _: () = assert!(WIDTH % 8 == 0, "panel width must be byte aligned");

/// Register values written during setup
///
/// The defaults are the values from the panel datasheet. Use [`Builder`]
/// to adjust them for a particular panel batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Third byte of driver output control (gate scanning direction)
    pub gate_scanning: u8,
    /// Booster soft-start settings (3 bytes for command 0x0C)
    pub booster_soft_start: [u8; 3],
    /// VCOM register value
    pub vcom: u8,
    /// Dummy line period
    pub dummy_line_period: u8,
    /// Gate line width
    pub gate_time: u8,
    /// Border waveform setting
    pub border_waveform: u8,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl Config {
    /// Driver output control payload for the fixed panel height
    pub fn driver_output(&self) -> [u8; 3] {
        let lines = HEIGHT - 1;
        [(lines & 0xFF) as u8, (lines >> 8) as u8, self.gate_scanning]
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use il3820::Builder;
///
/// let config = Builder::new().vcom(0xA8).border_waveform(0x33).build();
/// assert_eq!(config.vcom, 0xA8);
/// assert_eq!(config.gate_time, 0x08);
/// ```
#[must_use]
pub struct Builder {
    gate_scanning: u8,
    booster_soft_start: [u8; 3],
    vcom: u8,
    dummy_line_period: u8,
    gate_time: u8,
    border_waveform: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // G0 first, interlaced off
            gate_scanning: 0x00,
            booster_soft_start: [0xD7, 0xD6, 0x9D],
            vcom: 0x8A,
            // 4 dummy lines per gate
            dummy_line_period: 0x1A,
            // 2us per line
            gate_time: 0x08,
            border_waveform: 0x03,
        }
    }
}

impl Builder {
    /// Create a new Builder with datasheet defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set gate scanning direction
    pub fn gate_scanning(mut self, value: u8) -> Self {
        self.gate_scanning = value;
        self
    }

    /// Set booster soft-start parameters
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set dummy line period
    pub fn dummy_line_period(mut self, value: u8) -> Self {
        self.dummy_line_period = value;
        self
    }

    /// Set gate line width
    pub fn gate_time(mut self, value: u8) -> Self {
        self.gate_time = value;
        self
    }

    /// Set border waveform
    pub fn border_waveform(mut self, value: u8) -> Self {
        self.border_waveform = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            gate_scanning: self.gate_scanning,
            booster_soft_start: self.booster_soft_start,
            vcom: self.vcom,
            dummy_line_period: self.dummy_line_period,
            gate_time: self.gate_time,
            border_waveform: self.border_waveform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_geometry() {
        assert_eq!(WIDTH, 128);
        assert_eq!(HEIGHT, 296);
        assert_eq!(WIDTH % 8, 0);
        assert_eq!(BUFFER_SIZE, 4736);
    }

    #[test]
    fn test_default_config_matches_datasheet() {
        let config = Config::default();
        assert_eq!(config.booster_soft_start, [0xD7, 0xD6, 0x9D]);
        assert_eq!(config.vcom, 0x8A);
        assert_eq!(config.dummy_line_period, 0x1A);
        assert_eq!(config.gate_time, 0x08);
        assert_eq!(config.border_waveform, 0x03);
    }

    #[test]
    fn test_driver_output_encodes_height() {
        assert_eq!(Config::default().driver_output(), [0x27, 0x01, 0x00]);
        let config = Builder::new().gate_scanning(0x02).build();
        assert_eq!(config.driver_output(), [0x27, 0x01, 0x02]);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .booster_soft_start([0xCF, 0xCE, 0x8D])
            .vcom(0xA8)
            .dummy_line_period(0x16)
            .gate_time(0x0A)
            .border_waveform(0x33)
            .build();
        assert_eq!(config.booster_soft_start, [0xCF, 0xCE, 0x8D]);
        assert_eq!(config.vcom, 0xA8);
        assert_eq!(config.dummy_line_period, 0x16);
        assert_eq!(config.gate_time, 0x0A);
        assert_eq!(config.border_waveform, 0x33);
    }
}
