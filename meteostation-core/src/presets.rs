//! Built-in station profiles
//!
//! Two highland sites at 2219 m, recorded by different firmware generations:
//!
//! - [`CALIBRATION`]: sensor calibration build. Full timing table, sensor
//!   addresses, accuracy learning, display and debug settings.
//! - [`REGIONAL`]: master/slave regional build. Hot and cold seasons, LCD
//!   wiring, alert thresholds, altitude corrections and localized texts.
//!
//! The two are never merged. Groups a build does not record are `None`, or
//! the neutral value (`AltitudeCorrections::NONE`, `SensorOffsets::ZERO`).
//!
//! Both presets are checked at compile time for the invariants that can be
//! expressed in a `const` context; the rest is covered by
//! [`StationProfile::validate`](crate::profile::StationProfile::validate).

use crate::{
    alerts::{AlertThresholds, SensorOffsets},
    climate::{HumidityProfile, Location, PressureProfile, TemperatureProfile, WindProfile},
    constants::{
        physics::{ALTITUDE_MAX_M, ALTITUDE_MIN_M, SEA_LEVEL_PRESSURE_HPA},
        sensors::{AHT20_DEFAULT_ADDRESS, BMP280_DEFAULT_ADDRESS},
    },
    corrections::AltitudeCorrections,
    month::{Month, MonthRange, MonthSet},
    prediction::{
        ContextFactor, HumidityThresholds, LearningParams, PredictionInputs, PredictionWeights,
        PressureThresholds,
    },
    profile::StationProfile,
    seasons::SeasonCalendar,
    settings::{Diagnostics, DisplaySettings, Precision, Timing},
    text::{Label, LabelSet},
    wiring::{I2cAddress, LcdPins, LdrThresholds, Pin, SensorWiring, UvCalibration},
};

/// Upper bound of the LDR-derived UV scale
pub const UV_CALIBRATION_FACTOR: f32 = 11.0;

/// Sensor calibration build
pub const CALIBRATION: StationProfile = StationProfile {
    id: "calibration",
    version: 1,
    location: Location {
        name: Some("Mi Región"),
        altitude_m: 2219.0,
        latitude: 0.0,
        longitude: 0.0,
    },
    temperature: TemperatureProfile {
        min_annual: 6.0,
        max_annual: 27.0,
        mean_annual: None,
        cold_month_avg: Some(12.0),
        hot_month_avg: Some(23.5),
    },
    humidity: HumidityProfile {
        min_typical: 75.0,
        max_typical: 91.0,
        mean: None,
        dry_season_avg: Some(75.0),
        wet_season_avg: Some(85.0),
    },
    pressure: PressureProfile {
        sea_level_hpa: SEA_LEVEL_PRESSURE_HPA,
        typical_min: None,
        typical_max: None,
        typical_mean: None,
    },
    wind: Some(WindProfile {
        min_kmh: 5.0,
        avg_kmh: 15.0,
        max_kmh: 35.0,
    }),
    seasons: SeasonCalendar {
        rainy: MonthRange::new(Month::JUNE, Month::SEPTEMBER),
        hot: None,
        cold: None,
        peak_rain: Some(Month::SEPTEMBER),
        driest: Some(Month::JANUARY),
    },
    timing: Timing {
        sensor_update_ms: 1000,
        screen_rotation_ms: 3000,
        prediction_update_ms: Some(5000),
        history_update_ms: Some(300_000),
        serial_output_ms: Some(10_000),
    },
    wiring: SensorWiring {
        pressure_sensor: Some(I2cAddress(BMP280_DEFAULT_ADDRESS)),
        humidity_sensor: Some(I2cAddress(AHT20_DEFAULT_ADDRESS)),
        link_peer: None,
        ldr: Pin::Analog(0),
        ldr_pulldown_ohms: Some(10_000),
        lcd: None,
    },
    ldr: LdrThresholds {
        dark: 100,
        bright: Some(900),
        dawn: None,
        day: None,
        afternoon: None,
        calibration_dark: None,
        calibration_direct: None,
    },
    uv: UvCalibration {
        factor: UV_CALIBRATION_FACTOR,
        night_offset: 0,
    },
    prediction: PredictionInputs {
        weights: PredictionWeights {
            pressure: 0.4,
            humidity: 0.3,
            trend: 0.2,
            context: 0.1,
            context_factor: ContextFactor::Altitude,
        },
        pressure: PressureThresholds {
            low: 995.0,
            medium: 1005.0,
            high: 1015.0,
        },
        humidity: None,
        learning: Some(LearningParams {
            initial_accuracy_pct: 50.0,
            min_accuracy_pct: 30.0,
            max_accuracy_pct: 95.0,
            learning_rate: 0.1,
        }),
        history_hours: 12,
    },
    alerts: None,
    offsets: SensorOffsets::ZERO,
    corrections: AltitudeCorrections::NONE,
    display: DisplaySettings {
        contrast: 128,
        screen_count: 8,
        show_icons: true,
        use_abbreviations: true,
        precision: Precision::DEFAULT,
    },
    diagnostics: Diagnostics {
        debug: true,
        debug_sensors: true,
        debug_learning: true,
        debug_predictions: true,
        serial_baud: 9600,
        serial_output: true,
        power_save: false,
        sleep_between_readings: false,
    },
    labels: LabelSet {
        entries: &[
            (Label::Sunny, "Soleado"),
            (Label::Cloudy, "Nublado"),
            (Label::Rainy, "Lluvioso"),
            (Label::Storm, "Tormenta"),
            (Label::Improving, "Mejorando"),
            (Label::Worsening, "Empeorando"),
            (Label::Clouding, "Nublando"),
            (Label::Stable, "Estable"),
            (Label::Low, "Bajo"),
            (Label::Medium, "Moderado"),
            (Label::High, "Alto"),
            (Label::VeryHigh, "Muy Alto"),
            (Label::Temperature, "T"),
            (Label::Humidity, "HR"),
            (Label::Pressure, "P"),
            (Label::Altitude, "Alt"),
            (Label::UvIndex, "UV"),
            (Label::RainProbability, "Lluvia"),
            (Label::Forecast, "Pred"),
            (Label::MinTemperature, "L"),
            (Label::MaxTemperature, "H"),
            (Label::DewPoint, "PR"),
            (Label::HeatIndex, "ST"),
            (Label::Accuracy, "IA"),
        ],
    },
};

/// Master/slave regional build
pub const REGIONAL: StationProfile = StationProfile {
    id: "regional",
    version: 1,
    location: Location {
        name: None,
        altitude_m: 2219.0,
        latitude: 19.0,
        longitude: -99.0,
    },
    temperature: TemperatureProfile {
        min_annual: 6.0,
        max_annual: 29.0,
        mean_annual: Some(20.0),
        cold_month_avg: None,
        hot_month_avg: None,
    },
    humidity: HumidityProfile {
        min_typical: 75.0,
        max_typical: 91.0,
        mean: Some(83.0),
        dry_season_avg: None,
        wet_season_avg: None,
    },
    pressure: PressureProfile {
        sea_level_hpa: SEA_LEVEL_PRESSURE_HPA,
        typical_min: Some(980.0),
        typical_max: Some(1030.0),
        typical_mean: Some(1005.0),
    },
    wind: None,
    seasons: SeasonCalendar {
        rainy: MonthRange::new(Month::JUNE, Month::SEPTEMBER),
        // Hot April-June, June itself classifies as rainy
        hot: Some(MonthSet::from_range(MonthRange::new(Month::APRIL, Month::JUNE))),
        // January is not part of the cold season
        cold: Some(MonthSet::EMPTY.with(Month::DECEMBER).with(Month::FEBRUARY)),
        peak_rain: None,
        driest: None,
    },
    timing: Timing {
        sensor_update_ms: 1000,
        screen_rotation_ms: 4000,
        prediction_update_ms: None,
        history_update_ms: None,
        serial_output_ms: None,
    },
    wiring: SensorWiring {
        pressure_sensor: None,
        humidity_sensor: None,
        link_peer: Some(I2cAddress(0x08)),
        ldr: Pin::Analog(0),
        ldr_pulldown_ohms: None,
        lcd: Some(LcdPins {
            rs: 13,
            en: 12,
            data: [11, 10, 9, 8],
        }),
    },
    ldr: LdrThresholds {
        dark: 100,
        bright: None,
        dawn: Some(300),
        day: Some(600),
        afternoon: Some(800),
        calibration_dark: Some(50),
        calibration_direct: Some(900),
    },
    uv: UvCalibration {
        factor: UV_CALIBRATION_FACTOR,
        night_offset: 0,
    },
    prediction: PredictionInputs {
        weights: PredictionWeights {
            pressure: 0.4,
            humidity: 0.3,
            trend: 0.2,
            context: 0.1,
            context_factor: ContextFactor::Seasonal,
        },
        pressure: PressureThresholds {
            low: 1000.0,
            medium: 1010.0,
            high: 1020.0,
        },
        humidity: Some(HumidityThresholds {
            low: 70.0,
            medium: 80.0,
            high: 85.0,
        }),
        learning: None,
        history_hours: 24,
    },
    alerts: Some(AlertThresholds {
        temperature_low_c: 5.0,
        temperature_high_c: 30.0,
        humidity_low_pct: 60.0,
        humidity_high_pct: 95.0,
        pressure_low_hpa: 990.0,
        pressure_high_hpa: 1040.0,
        condensation_margin_c: 2.0,
    }),
    offsets: SensorOffsets::ZERO,
    corrections: AltitudeCorrections {
        temperature_per_km: -6.5,
        pressure_per_km: 0.12,
        dew_point_per_km: -2.0,
    },
    display: DisplaySettings {
        contrast: 128,
        screen_count: 8,
        show_icons: true,
        use_abbreviations: true,
        precision: Precision::DEFAULT,
    },
    diagnostics: Diagnostics {
        debug: false,
        debug_sensors: false,
        debug_learning: false,
        debug_predictions: false,
        serial_baud: 9600,
        serial_output: false,
        power_save: false,
        sleep_between_readings: false,
    },
    labels: LabelSet {
        entries: &[
            (Label::StationTitle, "Estacion Meteo"),
            (Label::PredictionTitle, "IA Avanzada"),
            (Label::Temperature, "Temp:"),
            (Label::FeelsLike, "Sens:"),
            (Label::Humidity, "HR:"),
            (Label::Pressure, "Pres:"),
            (Label::Altitude, "Alt:"),
            (Label::RainProbability, "Prob Lluvia"),
            (Label::Forecast, "Prediccion IA"),
            (Label::MinTemperature, "L:"),
            (Label::MaxTemperature, "H:"),
            (Label::Current, "Act:"),
            (Label::DewPoint, "Rocio:"),
            (Label::Low, "BAJA"),
            (Label::Medium, "MEDIA"),
            (Label::High, "ALTA"),
            (Label::VeryHigh, "MUY ALTA"),
            (Label::Normal, "NORM"),
            (Label::Hot, "CAL"),
            (Label::Cold, "FRIO"),
            (Label::Ok, "OK"),
            (Label::Sunny, "Soleado"),
            (Label::Cloudy, "Nublado"),
            (Label::Rainy, "Lluvia"),
            (Label::Storm, "Tormenta"),
            (Label::Clear, "Despejado"),
            (Label::PartlyCloudy, "Parcial"),
            (Label::Variable, "Variable"),
            (Label::Night, "Noche"),
            (Label::Dawn, "Amanecer"),
            (Label::Day, "Dia"),
            (Label::Afternoon, "Tarde"),
            (Label::Dusk, "Atardecer"),
            (Label::UvProtection, "Prot"),
            (Label::UvModerate, "Mod"),
            (Label::UvOk, "OK"),
        ],
    },
};

macro_rules! const_check {
    ($profile:expr) => {
        const _: () = {
            let p = &$profile;
            assert!(p.location.altitude_m >= ALTITUDE_MIN_M && p.location.altitude_m <= ALTITUDE_MAX_M);
            assert!(p.temperature.min_annual <= p.temperature.max_annual);
            assert!(p.humidity.min_typical <= p.humidity.max_typical);
            assert!(p.prediction.pressure.low <= p.prediction.pressure.medium);
            assert!(p.prediction.pressure.medium <= p.prediction.pressure.high);
            assert!(!p.seasons.rainy.wraps());
        };
    };
}

const_check!(CALIBRATION);
const_check!(REGIONAL);
