//! Domain models for weather lookups.
//!
//! Everything here is rebuilt from the provider response on every fetch
//! and held only in screen state. Celsius, kph and km are the stored
//! units; imperial figures are derived at render time by [`super::units`].

use chrono::NaiveDate;
use serde::Deserialize;

/// Where the report is for, verbatim from the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    /// Local civil time, e.g. "2026-08-05 14:30".
    pub localtime: String,
    /// IANA timezone identifier, e.g. "Europe/London".
    pub tz_id: String,
}

impl Location {
    /// "Name, Region, Country", skipping an empty region.
    pub fn display_name(&self) -> String {
        if self.region.is_empty() {
            format!("{}, {}", self.name, self.country)
        } else {
            format!("{}, {}, {}", self.name, self.region, self.country)
        }
    }
}

/// A condition description plus its icon reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Scheme-less URL like "//cdn.weatherapi.com/weather/64x64/day/116.png".
    pub icon: String,
}

impl Condition {
    /// The provider omits the scheme from icon URLs; prepend it.
    pub fn icon_url(&self) -> String {
        if self.icon.starts_with("//") {
            format!("https:{}", self.icon)
        } else {
            self.icon.clone()
        }
    }
}

/// Current conditions for one location.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    /// Compass direction, e.g. "WSW".
    pub wind_dir: String,
    pub humidity: u8,
    pub uv: f64,
    pub vis_km: f64,
}

/// One day of the forecast, flattened from the provider's nested shape.
#[derive(Debug, Clone)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: Condition,
    /// Local time strings like "05:43 AM".
    pub sunrise: String,
    pub sunset: String,
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    /// Percent, 0-100.
    pub chance_of_rain: u8,
}

/// Moon data for the first forecast day.
#[derive(Debug, Clone)]
pub struct Astronomy {
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    /// Percent, 0-100.
    pub moon_illumination: u8,
}

/// Result of a current-conditions lookup.
#[derive(Debug, Clone)]
pub struct CurrentReport {
    pub location: Location,
    pub current: CurrentConditions,
}

/// Result of a forecast lookup. `astronomy` is taken from the first
/// returned day only.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub location: Location,
    pub days: Vec<ForecastDay>,
    pub astronomy: Astronomy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_prepends_scheme() {
        let condition = Condition {
            text: "Partly cloudy".to_string(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
        };
        assert_eq!(
            condition.icon_url(),
            "https://cdn.weatherapi.com/weather/64x64/day/116.png"
        );
    }

    #[test]
    fn icon_url_leaves_full_urls_alone() {
        let condition = Condition {
            text: "Sunny".to_string(),
            icon: "https://cdn.weatherapi.com/weather/64x64/day/113.png".to_string(),
        };
        assert_eq!(condition.icon_url(), condition.icon);
    }

    #[test]
    fn display_name_skips_empty_region() {
        let location = Location {
            name: "London".to_string(),
            region: String::new(),
            country: "United Kingdom".to_string(),
            localtime: "2026-08-05 14:30".to_string(),
            tz_id: "Europe/London".to_string(),
        };
        assert_eq!(location.display_name(), "London, United Kingdom");

        let with_region = Location {
            region: "City of London, Greater London".to_string(),
            ..location
        };
        assert_eq!(
            with_region.display_name(),
            "London, City of London, Greater London, United Kingdom"
        );
    }
}
