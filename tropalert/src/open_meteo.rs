//! Current weather from the [Open-Meteo] forecast API.
//!
//! [Open-Meteo]: https://open-meteo.com/en/docs

use log::{debug, warn};
use serde::Deserialize;
use tropo::{
    Location, WeatherError, WeatherSnapshot, WeatherSource, DEFAULT_HUMIDITY_PCT,
    DEFAULT_PRESSURE_HPA,
};
use ureq::Agent;

pub struct OpenMeteo {
    agent: Agent,
    base_url: String,
}

impl OpenMeteo {
    pub fn new(agent: Agent, base_url: impl Into<String>) -> Self {
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

impl WeatherSource for OpenMeteo {
    fn current(&self, location: Location) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url.trim_end_matches('/'));
        debug!("GET {url} for {location}");
        let response = self
            .agent
            .get(&url)
            .query("latitude", &location.lat.to_string())
            .query("longitude", &location.lon.to_string())
            .query("current_weather", "true")
            .query("current", "relative_humidity_2m,surface_pressure")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, response) => WeatherError::Status {
                    status,
                    reason: status_reason(response),
                },
                ureq::Error::Transport(t) => WeatherError::Transport(Box::new(t)),
            })?;
        let body = response
            .into_string()
            .map_err(|e| WeatherError::Transport(Box::new(e)))?;
        parse_snapshot(&body)
    }
}

/// Open-Meteo reports failures as `{"error": true, "reason": "..."}`.
#[derive(Debug, Deserialize)]
struct ApiError {
    reason: String,
}

fn status_reason(response: ureq::Response) -> String {
    let status_text = response.status_text().to_owned();
    match response.into_string() {
        Ok(body) => parse_reason(&body).unwrap_or(status_text),
        Err(_) => status_text,
    }
}

fn parse_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .map(|e| e.reason)
}

#[derive(Debug, Deserialize)]
struct Forecast {
    current_weather: CurrentWeather,
    #[serde(default)]
    current: Option<Current>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
}

#[derive(Debug, Deserialize)]
struct Current {
    relative_humidity_2m: Option<f64>,
    surface_pressure: Option<f64>,
}

/// Builds a snapshot from a forecast response body.
///
/// Missing humidity or pressure fall back to
/// [`DEFAULT_HUMIDITY_PCT`] and [`DEFAULT_PRESSURE_HPA`].
pub fn parse_snapshot(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let Forecast {
        current_weather:
            CurrentWeather {
                temperature,
                windspeed,
                winddirection,
            },
        current,
    } = serde_json::from_str(body)?;
    let (humidity, pressure) = current
        .map(|c| (c.relative_humidity_2m, c.surface_pressure))
        .unwrap_or_default();

    let humidity_pct = humidity.unwrap_or_else(|| {
        warn!("no relative humidity reported, assuming {DEFAULT_HUMIDITY_PCT}%");
        DEFAULT_HUMIDITY_PCT
    });
    let pressure_hpa = pressure.unwrap_or_else(|| {
        warn!("no surface pressure reported, assuming {DEFAULT_PRESSURE_HPA} hPa");
        DEFAULT_PRESSURE_HPA
    });

    Ok(WeatherSnapshot {
        temperature_c: temperature,
        wind_speed_kmh: windspeed,
        wind_dir_deg: winddirection,
        pressure_hpa,
        humidity_pct,
    })
}
