//! Display text
//!
//! Every string shown on the LCD is looked up through a [`Label`] so the
//! display layer never hard-codes wording. A profile carries a [`LabelSet`]:
//! a static table of `(Label, text)` pairs in one locale.
//!
//! ## Character set
//!
//! HD44780 character ROMs are not UTF-8. Spanish texts contain accented
//! letters that such a display renders as garbage, so [`to_lcd_ascii`] folds
//! them to their base letter and drops anything else outside ASCII.
//!
//! ```rust
//! use meteostation_core::text::to_lcd_ascii;
//!
//! let folded = to_lcd_ascii::<16>("Región Húmeda").unwrap();
//! assert_eq!(folded.as_str(), "Region Humeda");
//! ```

use heapless::String;

use crate::errors::{ConfigError, ConfigResult};

/// Identifier of a display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum Label {
    // Titles
    StationTitle,
    PredictionTitle,

    // Field captions
    Temperature,
    FeelsLike,
    Humidity,
    Pressure,
    Altitude,
    RainProbability,
    Forecast,
    UvIndex,
    Accuracy,

    // Abbreviations
    MinTemperature,
    MaxTemperature,
    Current,
    DewPoint,
    HeatIndex,

    // Weather conditions
    Sunny,
    Cloudy,
    Rainy,
    Storm,
    Clear,
    PartlyCloudy,
    Variable,

    // Trends
    Improving,
    Worsening,
    Clouding,
    Stable,

    // Levels
    Low,
    Medium,
    High,
    VeryHigh,
    Normal,
    Hot,
    Cold,
    Ok,

    // Light phases
    Night,
    Dawn,
    Day,
    Afternoon,
    Dusk,

    // UV advice
    UvProtection,
    UvModerate,
    UvOk,
}

/// Static table of display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabelSet {
    /// `(label, text)` pairs, each label at most once
    pub entries: &'static [(Label, &'static str)],
}

impl LabelSet {
    /// Text for `label`, if the profile defines one
    pub fn get(&self, label: Label) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, text)| *text)
    }

    /// Text for `label`, or `fallback` when undefined
    pub fn get_or(&self, label: Label, fallback: &'static str) -> &'static str {
        self.get(label).unwrap_or(fallback)
    }

    /// Number of defined labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no label is defined
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject tables that define a label twice
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, (label, _)) in self.entries.iter().enumerate() {
            if self.entries[index + 1..].iter().any(|(other, _)| other == label) {
                return Err(ConfigError::DuplicateLabel { label: label_name(*label) });
            }
        }
        Ok(())
    }
}

/// Fold `text` to plain ASCII for a character LCD
///
/// Accented Spanish letters map to their base letter; `¿`, `¡` and any other
/// non-ASCII character are dropped. Fails when the folded text does not fit
/// into `N` characters.
pub fn to_lcd_ascii<const N: usize>(text: &str) -> ConfigResult<String<N>> {
    let mut folded = String::new();
    for ch in text.chars() {
        let mapped = match ch {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            'Á' | 'À' | 'Ä' => 'A',
            'É' | 'È' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Ü' => 'U',
            'Ñ' => 'N',
            c if c.is_ascii() => c,
            _ => continue,
        };
        folded
            .push(mapped)
            .map_err(|_| ConfigError::LabelTooLong { capacity: N })?;
    }
    Ok(folded)
}

fn label_name(label: Label) -> &'static str {
    match label {
        Label::StationTitle => "StationTitle",
        Label::PredictionTitle => "PredictionTitle",
        Label::Temperature => "Temperature",
        Label::FeelsLike => "FeelsLike",
        Label::Humidity => "Humidity",
        Label::Pressure => "Pressure",
        Label::Altitude => "Altitude",
        Label::RainProbability => "RainProbability",
        Label::Forecast => "Forecast",
        Label::UvIndex => "UvIndex",
        Label::Accuracy => "Accuracy",
        Label::MinTemperature => "MinTemperature",
        Label::MaxTemperature => "MaxTemperature",
        Label::Current => "Current",
        Label::DewPoint => "DewPoint",
        Label::HeatIndex => "HeatIndex",
        Label::Sunny => "Sunny",
        Label::Cloudy => "Cloudy",
        Label::Rainy => "Rainy",
        Label::Storm => "Storm",
        Label::Clear => "Clear",
        Label::PartlyCloudy => "PartlyCloudy",
        Label::Variable => "Variable",
        Label::Improving => "Improving",
        Label::Worsening => "Worsening",
        Label::Clouding => "Clouding",
        Label::Stable => "Stable",
        Label::Low => "Low",
        Label::Medium => "Medium",
        Label::High => "High",
        Label::VeryHigh => "VeryHigh",
        Label::Normal => "Normal",
        Label::Hot => "Hot",
        Label::Cold => "Cold",
        Label::Ok => "Ok",
        Label::Night => "Night",
        Label::Dawn => "Dawn",
        Label::Day => "Day",
        Label::Afternoon => "Afternoon",
        Label::Dusk => "Dusk",
        Label::UvProtection => "UvProtection",
        Label::UvModerate => "UvModerate",
        Label::UvOk => "UvOk",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: LabelSet = LabelSet {
        entries: &[
            (Label::Sunny, "Soleado"),
            (Label::Forecast, "Predicción IA"),
            (Label::DewPoint, "Rocío:"),
        ],
    };

    #[test]
    fn lookup() {
        assert_eq!(LABELS.get(Label::Sunny), Some("Soleado"));
        assert_eq!(LABELS.get(Label::Storm), None);
        assert_eq!(LABELS.get_or(Label::Storm, "?"), "?");
        assert_eq!(LABELS.len(), 3);
        assert!(LABELS.validate().is_ok());
    }

    #[test]
    fn duplicates_rejected() {
        let twice = LabelSet {
            entries: &[(Label::Sunny, "Soleado"), (Label::Cloudy, "Nublado"), (Label::Sunny, "Sol")],
        };
        assert_eq!(twice.validate(), Err(ConfigError::DuplicateLabel { label: "Sunny" }));
    }

    #[test]
    fn accents_fold_to_ascii() {
        let folded = to_lcd_ascii::<16>("Predicción IA").unwrap();
        assert_eq!(folded.as_str(), "Prediccion IA");

        let folded = to_lcd_ascii::<16>("¿Añoranza? ÚLTIMO").unwrap();
        assert_eq!(folded.as_str(), "Anoranza? ULTIMO");
    }

    #[test]
    fn unknown_symbols_are_dropped() {
        let folded = to_lcd_ascii::<16>("23.5°C").unwrap();
        assert_eq!(folded.as_str(), "23.5C");
    }

    #[test]
    fn capacity_is_enforced() {
        assert!(to_lcd_ascii::<16>("Estacion Meteo").is_ok());
        assert_eq!(
            to_lcd_ascii::<8>("Estacion Meteo"),
            Err(ConfigError::LabelTooLong { capacity: 8 })
        );
    }
}
