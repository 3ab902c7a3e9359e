//! HTTP client for weatherapi.com.
//!
//! One GET per lookup, no retries, no timeout beyond the reqwest
//! defaults. The provider reports application errors inside the body
//! (with or without an HTTP error status), so the body is checked for
//! the error envelope before the payload is decoded.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::weather::error::WeatherError;
use crate::weather::model::{
    Astronomy, Condition, CurrentConditions, CurrentReport, ForecastDay, ForecastReport, Location,
};

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the weatherapi.com REST API.
///
/// The API key and endpoint are injected at construction so tests can
/// point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint. Used by tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions for a free-text or "lat,lon" query.
    ///
    /// Blank queries are rejected by the screens before they get here.
    pub async fn current(&self, query: &str) -> Result<CurrentReport, WeatherError> {
        debug!(query, "fetching current conditions");
        let body = self
            .http
            .get(format!("{}/current.json", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await?
            .text()
            .await?;

        let envelope: CurrentEnvelope = decode(&body)?;
        debug!(
            condition = %envelope.current.condition.text,
            icon = %envelope.current.condition.icon_url(),
            "current conditions decoded"
        );
        Ok(CurrentReport {
            location: envelope.location,
            current: envelope.current,
        })
    }

    /// Fetch an N-day forecast. Air quality and alert blocks are
    /// suppressed; the astronomy snapshot comes from the first day.
    pub async fn forecast(&self, query: &str, days: u8) -> Result<ForecastReport, WeatherError> {
        debug!(query, days, "fetching forecast");
        let days = days.to_string();
        let body = self
            .http
            .get(format!("{}/forecast.json", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?
            .text()
            .await?;

        let envelope: ForecastEnvelope = decode(&body)?;
        let location = envelope.location;

        let mut astronomy = None;
        let mut days = Vec::with_capacity(envelope.forecast.forecastday.len());
        for entry in envelope.forecast.forecastday {
            if astronomy.is_none() {
                astronomy = Some(Astronomy {
                    moonrise: entry.astro.moonrise.clone(),
                    moonset: entry.astro.moonset.clone(),
                    moon_phase: entry.astro.moon_phase.clone(),
                    moon_illumination: entry.astro.moon_illumination,
                });
            }
            days.push(ForecastDay {
                date: entry.date,
                condition: entry.day.condition,
                sunrise: entry.astro.sunrise,
                sunset: entry.astro.sunset,
                maxtemp_c: entry.day.maxtemp_c,
                mintemp_c: entry.day.mintemp_c,
                chance_of_rain: entry.day.daily_chance_of_rain,
            });
        }

        let astronomy = astronomy.ok_or(WeatherError::Missing("forecast.forecastday"))?;
        Ok(ForecastReport {
            location,
            days,
            astronomy,
        })
    }
}

/// Decode a response body, surfacing the provider's error envelope as
/// [`WeatherError::Provider`] before attempting the payload shape.
fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, WeatherError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(WeatherError::Provider(envelope.error.message));
    }
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CurrentEnvelope {
    location: Location,
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct ForecastEnvelope {
    location: Location,
    forecast: ForecastBlock,
}

#[derive(Debug, Deserialize)]
struct ForecastBlock {
    forecastday: Vec<ForecastDayEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastDayEntry {
    date: NaiveDate,
    day: DayBlock,
    astro: AstroBlock,
}

#[derive(Debug, Deserialize)]
struct DayBlock {
    maxtemp_c: f64,
    mintemp_c: f64,
    daily_chance_of_rain: u8,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct AstroBlock {
    sunrise: String,
    sunset: String,
    moonrise: String,
    moonset: String,
    moon_phase: String,
    moon_illumination: u8,
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const CURRENT_BODY: &str = r#"{
        "location": {
            "name": "London",
            "region": "City of London, Greater London",
            "country": "United Kingdom",
            "lat": 51.52,
            "lon": -0.11,
            "tz_id": "Europe/London",
            "localtime_epoch": 1786287000,
            "localtime": "2026-08-05 14:30"
        },
        "current": {
            "temp_c": 20.0,
            "temp_f": 68.0,
            "condition": {
                "text": "Partly cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                "code": 1003
            },
            "wind_kph": 10.0,
            "wind_dir": "WSW",
            "humidity": 72,
            "feelslike_c": 21.2,
            "vis_km": 10.0,
            "uv": 4.0
        }
    }"#;

    const FORECAST_BODY: &str = r#"{
        "location": {
            "name": "London",
            "region": "City of London, Greater London",
            "country": "United Kingdom",
            "tz_id": "Europe/London",
            "localtime": "2026-08-05 14:30"
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2026-08-05",
                    "day": {
                        "maxtemp_c": 24.1,
                        "mintemp_c": 14.3,
                        "daily_chance_of_rain": 65,
                        "condition": {
                            "text": "Patchy rain nearby",
                            "icon": "//cdn.weatherapi.com/weather/64x64/day/176.png"
                        }
                    },
                    "astro": {
                        "sunrise": "05:32 AM",
                        "sunset": "08:41 PM",
                        "moonrise": "10:21 PM",
                        "moonset": "07:14 AM",
                        "moon_phase": "Waning Gibbous",
                        "moon_illumination": 84
                    }
                },
                {
                    "date": "2026-08-06",
                    "day": {
                        "maxtemp_c": 22.8,
                        "mintemp_c": 13.9,
                        "daily_chance_of_rain": 10,
                        "condition": {
                            "text": "Sunny",
                            "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png"
                        }
                    },
                    "astro": {
                        "sunrise": "05:33 AM",
                        "sunset": "08:39 PM",
                        "moonrise": "10:44 PM",
                        "moonset": "08:27 AM",
                        "moon_phase": "Waning Gibbous",
                        "moon_illumination": 76
                    }
                },
                {
                    "date": "2026-08-07",
                    "day": {
                        "maxtemp_c": 21.4,
                        "mintemp_c": 12.6,
                        "daily_chance_of_rain": 80,
                        "condition": {
                            "text": "Moderate rain",
                            "icon": "//cdn.weatherapi.com/weather/64x64/day/302.png"
                        }
                    },
                    "astro": {
                        "sunrise": "05:35 AM",
                        "sunset": "08:37 PM",
                        "moonrise": "11:02 PM",
                        "moonset": "09:41 AM",
                        "moon_phase": "Waning Gibbous",
                        "moon_illumination": 67
                    }
                }
            ]
        }
    }"#;

    const ERROR_BODY: &str =
        r#"{"error": {"code": 1006, "message": "No matching location found."}}"#;

    fn client_for(server: &MockServer) -> WeatherClient {
        WeatherClient::new("test-key").with_base_url(server.uri())
    }

    #[tokio::test]
    async fn current_decodes_location_and_conditions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("key", "test-key"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(CURRENT_BODY, "application/json"))
            .mount(&server)
            .await;

        let report = client_for(&server).current("London").await.unwrap();
        assert_eq!(report.location.name, "London");
        assert_eq!(report.location.tz_id, "Europe/London");
        assert!((report.current.temp_c - 20.0).abs() < f64::EPSILON);
        assert_eq!(report.current.condition.text, "Partly cloudy");
        assert_eq!(report.current.wind_dir, "WSW");
        assert_eq!(report.current.humidity, 72);
    }

    #[tokio::test]
    async fn forecast_keeps_provider_order_and_first_day_astronomy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("q", "London"))
            .and(query_param("days", "3"))
            .and(query_param("aqi", "no"))
            .and(query_param("alerts", "no"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(FORECAST_BODY, "application/json"),
            )
            .mount(&server)
            .await;

        let report = client_for(&server).forecast("London", 3).await.unwrap();
        assert_eq!(report.days.len(), 3);
        assert_eq!(
            report.days[0].date,
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
        );
        assert_eq!(
            report.days[2].date,
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
        );
        assert_eq!(report.days[1].chance_of_rain, 10);
        assert_eq!(report.days[0].sunrise, "05:32 AM");

        // The astronomy snapshot comes from the first day only.
        assert_eq!(report.astronomy.moon_illumination, 84);
        assert_eq!(report.astronomy.moonrise, "10:21 PM");
    }

    #[tokio::test]
    async fn provider_error_envelope_becomes_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(ERROR_BODY, "application/json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .current("nowhere-at-all")
            .await
            .unwrap_err();
        match err {
            WeatherError::Provider(message) => {
                assert_eq!(message, "No matching location found.");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparsable_body_becomes_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
            .mount(&server)
            .await;

        let err = client_for(&server).current("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_forecast_is_missing_data() {
        let server = MockServer::start().await;
        let body = r#"{
            "location": {
                "name": "London",
                "region": "",
                "country": "United Kingdom",
                "tz_id": "Europe/London",
                "localtime": "2026-08-05 14:30"
            },
            "forecast": {"forecastday": []}
        }"#;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;

        let err = client_for(&server).forecast("London", 3).await.unwrap_err();
        assert!(matches!(err, WeatherError::Missing(_)));
    }
}
