//! Sensor wiring and light-sensor calibration
//!
//! Bus addresses and pin numbers are opaque identifiers handed to the driver
//! layer. The only checks applied are the ones the hardware imposes: I2C
//! addresses fit in 7 bits and LDR thresholds fit in the 10-bit converter.

use crate::{
    constants::sensors::{ADC_RAW_MAX, I2C_ADDRESS_MAX},
    errors::{ConfigError, ConfigResult},
    mapping::LinearMap,
};

/// 7-bit I2C device address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct I2cAddress(pub u8);

impl I2cAddress {
    /// Raw address byte
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Check the address against the 7-bit range
    pub fn validate(self, device: &'static str) -> ConfigResult<()> {
        if self.0 > I2C_ADDRESS_MAX {
            return Err(ConfigError::InvalidI2cAddress { device, address: self.0 });
        }
        Ok(())
    }
}

/// Microcontroller pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Pin {
    /// Analog input channel, `Analog(0)` is A0
    Analog(u8),
    /// Digital pin number
    Digital(u8),
}

/// HD44780 LCD in 4-bit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LcdPins {
    /// Register select
    pub rs: u8,
    /// Enable
    pub en: u8,
    /// Data lines D4-D7
    pub data: [u8; 4],
}

/// Physical sensor wiring of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorWiring {
    /// BMP280 pressure/temperature sensor
    pub pressure_sensor: Option<I2cAddress>,
    /// AHT20 humidity/temperature sensor
    pub humidity_sensor: Option<I2cAddress>,
    /// Peer board on the master/slave link
    pub link_peer: Option<I2cAddress>,
    /// Light-dependent resistor input
    pub ldr: Pin,
    /// LDR pull-down resistor (ohms)
    pub ldr_pulldown_ohms: Option<u32>,
    /// Character LCD pins
    pub lcd: Option<LcdPins>,
}

impl SensorWiring {
    /// Check every configured bus address
    pub fn validate(&self) -> ConfigResult<()> {
        let devices = [
            ("pressure_sensor", self.pressure_sensor),
            ("humidity_sensor", self.humidity_sensor),
            ("link_peer", self.link_peer),
        ];
        for (device, address) in devices {
            if let Some(address) = address {
                address.validate(device)?;
            }
        }
        Ok(())
    }
}

/// Raw LDR thresholds (0-1023 ADC counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LdrThresholds {
    /// Readings below this are dark
    pub dark: u16,
    /// Readings above this are bright, if tracked
    pub bright: Option<u16>,
    /// Start of dawn light, if tracked
    pub dawn: Option<u16>,
    /// Start of full daylight, if tracked
    pub day: Option<u16>,
    /// Start of strong afternoon light, if tracked
    pub afternoon: Option<u16>,
    /// Reading of the covered sensor during calibration
    pub calibration_dark: Option<u16>,
    /// Reading under direct light during calibration
    pub calibration_direct: Option<u16>,
}

impl LdrThresholds {
    /// Check if `raw` counts as dark
    pub const fn is_dark(&self, raw: u16) -> bool {
        raw < self.dark
    }

    /// Check if `raw` counts as bright; false when no threshold is set
    pub const fn is_bright(&self, raw: u16) -> bool {
        match self.bright {
            Some(bright) => raw > bright,
            None => false,
        }
    }

    /// Check converter bounds and ordering
    pub fn validate(&self) -> ConfigResult<()> {
        let max = ADC_RAW_MAX as u16;
        let fields = [
            ("ldr.dark", Some(self.dark)),
            ("ldr.bright", self.bright),
            ("ldr.dawn", self.dawn),
            ("ldr.day", self.day),
            ("ldr.afternoon", self.afternoon),
            ("ldr.calibration_dark", self.calibration_dark),
            ("ldr.calibration_direct", self.calibration_direct),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if value > max {
                    return Err(ConfigError::ThresholdOutOfRange { field, value, max });
                }
            }
        }

        if let Some(bright) = self.bright {
            if self.dark >= bright {
                return Err(ConfigError::InvertedRange {
                    field: "ldr",
                    min: self.dark as f32,
                    max: bright as f32,
                });
            }
        }

        // Light bands must rise through the day
        let mut previous = self.dark;
        for (field, value) in [("ldr.dawn", self.dawn), ("ldr.day", self.day), ("ldr.afternoon", self.afternoon)] {
            if let Some(value) = value {
                if value < previous {
                    return Err(ConfigError::InvertedRange {
                        field,
                        min: previous as f32,
                        max: value as f32,
                    });
                }
                previous = value;
            }
        }

        if let (Some(dark), Some(direct)) = (self.calibration_dark, self.calibration_direct) {
            if dark >= direct {
                return Err(ConfigError::InvertedRange {
                    field: "ldr.calibration",
                    min: dark as f32,
                    max: direct as f32,
                });
            }
        }

        Ok(())
    }
}

/// LDR-based UV estimation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UvCalibration {
    /// Upper bound of the UV scale the LDR is mapped onto
    pub factor: f32,
    /// Offset applied at night
    pub night_offset: i32,
}

impl UvCalibration {
    /// Linear map from raw ADC counts onto the UV scale
    ///
    /// The factor is truncated to an integer upper bound, as the integer map
    /// on the firmware does.
    pub fn linear_map(&self) -> LinearMap {
        LinearMap::from_adc(self.factor as i32)
    }

    /// Map a raw LDR reading onto the UV scale
    pub fn calibrate(&self, raw: i32) -> ConfigResult<i32> {
        self.linear_map().apply(raw)
    }

    /// Check that the factor is usable as an upper bound
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.factor.is_finite() {
            return Err(ConfigError::NotFinite { field: "uv.factor" });
        }
        if self.factor <= 0.0 {
            return Err(ConfigError::InvertedRange {
                field: "uv.factor",
                min: 0.0,
                max: self.factor,
            });
        }
        Ok(())
    }
}
