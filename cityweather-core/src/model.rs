use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one city, as returned by the provider.
///
/// Lives only in the results view for the duration of one display cycle;
/// the next lookup replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub country: String,
    /// Short condition label, e.g. "Clouds".
    pub condition: String,
    /// Longer condition text, e.g. "scattered clouds".
    pub description: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observation_time: DateTime<Utc>,
}

/// Temperature in both display units, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTemperatures {
    pub celsius: f64,
    pub fahrenheit: f64,
}

impl WeatherReading {
    /// Derive the display temperatures from the provider-native Celsius value.
    ///
    /// Pure; recomputed on every render rather than memoized.
    #[must_use]
    pub fn display_temperatures(&self) -> DisplayTemperatures {
        DisplayTemperatures {
            celsius: round_one_decimal(self.temperature_c),
            fahrenheit: round_one_decimal(celsius_to_fahrenheit(self.temperature_c)),
        }
    }
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
