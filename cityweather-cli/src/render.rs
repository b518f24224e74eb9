//! Plain-text rendering of the results screen.

use cityweather_core::{ResultState, WeatherReading};

pub fn result_screen(state: &ResultState) -> String {
    match state {
        // The redirect is silent; the shell routes straight back.
        ResultState::Redirecting => String::new(),
        ResultState::Loading => "Fetching current weather...\n".to_string(),
        ResultState::Success(reading) => reading_lines(reading),
        ResultState::Error(message) => format!("{message}\n"),
    }
}

fn reading_lines(reading: &WeatherReading) -> String {
    let temps = reading.display_temperatures();

    format!(
        "Weather in {}, {}\n  \
         Condition:   {} ({})\n  \
         Temperature: {:.1} °C / {:.1} °F\n  \
         Humidity:    {}%\n  \
         Wind:        {:.1} m/s\n  \
         Observed:    {}\n",
        reading.location_name,
        reading.country,
        reading.condition,
        reading.description,
        temps.celsius,
        temps.fahrenheit,
        reading.humidity_pct,
        reading.wind_speed_mps,
        reading.observation_time.format("%Y-%m-%d %H:%M UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading() -> WeatherReading {
        WeatherReading {
            location_name: "London".to_string(),
            country: "GB".to_string(),
            condition: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            temperature_c: 20.0,
            humidity_pct: 81,
            wind_speed_mps: 4.1,
            observation_time: Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn success_screen_shows_both_temperature_units() {
        let screen = result_screen(&ResultState::Success(reading()));

        assert!(screen.contains("Weather in London, GB"));
        assert!(screen.contains("Clouds (scattered clouds)"));
        assert!(screen.contains("20.0 °C / 68.0 °F"));
        assert!(screen.contains("81%"));
        assert!(screen.contains("4.1 m/s"));
        assert!(screen.contains("2024-06-03 09:00 UTC"));
    }

    #[test]
    fn error_screen_is_just_the_message() {
        let screen = result_screen(&ResultState::Error(
            "City not found! Try another city.".to_string(),
        ));
        assert_eq!(screen, "City not found! Try another city.\n");
    }

    #[test]
    fn redirecting_renders_nothing() {
        assert_eq!(result_screen(&ResultState::Redirecting), "");
    }
}
