use thiserror::Error;

/// Errors produced by [`WeatherClient`](crate::weather::client::WeatherClient).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with its application-level error envelope
    /// (unknown location, invalid key, ...).
    #[error("{0}")]
    Provider(String),

    /// The HTTP request itself failed (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response parsed but a required part was absent.
    #[error("missing data in response: {0}")]
    Missing(&'static str),
}

impl WeatherError {
    /// Message shown to the user: provider messages verbatim, everything
    /// else collapsed to one generic line.
    pub fn surface_message(&self) -> String {
        match self {
            Self::Provider(message) => message.clone(),
            Self::Transport(_) | Self::Decode(_) | Self::Missing(_) => {
                "Failed to fetch weather data".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_surfaces_verbatim() {
        let err = WeatherError::Provider("No matching location found.".to_string());
        assert_eq!(err.surface_message(), "No matching location found.");
    }

    #[test]
    fn non_provider_errors_surface_generically() {
        let decode: WeatherError =
            serde_json::from_str::<String>("{").unwrap_err().into();
        assert_eq!(decode.surface_message(), "Failed to fetch weather data");

        let missing = WeatherError::Missing("forecast.forecastday");
        assert_eq!(missing.surface_message(), "Failed to fetch weather data");
    }
}
