//! Sensor Hardware Limits
//!
//! Converter ranges and bus addresses shared by every deployment.

// ===== ANALOG INPUT =====

/// Lowest raw reading of the 10-bit ADC.
pub const ADC_RAW_MIN: i32 = 0;

/// Highest raw reading of the 10-bit ADC.
///
/// Source: ATmega328P datasheet, 10-bit successive approximation ADC
pub const ADC_RAW_MAX: i32 = 1023;

// ===== I2C BUS =====

/// Largest 7-bit I2C address.
pub const I2C_ADDRESS_MAX: u8 = 0x7F;

/// Default BMP280 address with SDO tied to GND.
///
/// Source: Bosch BMP280 datasheet, section 5.2
pub const BMP280_DEFAULT_ADDRESS: u8 = 0x76;

/// Fixed AHT20 address.
///
/// Source: Aosong AHT20 datasheet
pub const AHT20_DEFAULT_ADDRESS: u8 = 0x38;
