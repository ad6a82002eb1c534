use crate::WeatherError;
use std::{fmt, str::FromStr};

/// Surface pressure assumed when the weather service has none (hPa).
///
/// This biases the index; it is a documented guess, not an estimate.
pub const DEFAULT_PRESSURE_HPA: f64 = 1013.25;

/// Relative humidity assumed when the weather service has none (%).
///
/// This biases the index; it is a documented guess, not an estimate.
pub const DEFAULT_HUMIDITY_PCT: f64 = 70.0;

/// Observed surface conditions at a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature 2 m above ground (°C).
    pub temperature_c: f64,

    /// Wind speed 10 m above ground (km/h).
    pub wind_speed_kmh: f64,

    /// Direction the wind blows from (degrees).
    pub wind_dir_deg: f64,

    /// Surface pressure (hPa).
    pub pressure_hpa: f64,

    /// Relative humidity (0-100 %).
    pub humidity_pct: f64,
}

impl fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            temperature_c,
            wind_speed_kmh,
            wind_dir_deg,
            pressure_hpa,
            humidity_pct,
        } = self;
        write!(
            f,
            "t2m={temperature_c}°C wind={wind_speed_kmh}km/h@{wind_dir_deg}° p={pressure_hpa}hPa rh={humidity_pct}%"
        )
    }
}

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Error parsing a `"lat,lon"` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid lat,lon: '{0}'")]
pub struct ParseLocationError(String);

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLocationError(s.to_owned());
        let (lat_str, lon_str) = s.split_once(',').ok_or_else(err)?;
        let lat = f64::from_str(lat_str.trim()).map_err(|_| err())?;
        let lon = f64::from_str(lon_str.trim()).map_err(|_| err())?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(err());
        }
        Ok(Self { lat, lon })
    }
}

/// Provider of current surface weather.
pub trait WeatherSource {
    fn current(&self, location: Location) -> Result<WeatherSnapshot, WeatherError>;
}

#[cfg(test)]
mod tests {
    use super::{Location, WeatherSnapshot};

    #[test]
    fn test_parse_location() {
        let loc: Location = "48.1173,-1.6778".parse().unwrap();
        assert_eq!(
            loc,
            Location {
                lat: 48.1173,
                lon: -1.6778
            }
        );
        assert_eq!(loc.to_string(), "48.1173,-1.6778");
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!("48.1173".parse::<Location>().is_err());
        assert!("north,west".parse::<Location>().is_err());
        assert!("91,0".parse::<Location>().is_err());
        assert!("0,181".parse::<Location>().is_err());
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = WeatherSnapshot {
            temperature_c: 10.0,
            wind_speed_kmh: 12.5,
            wind_dir_deg: 270.0,
            pressure_hpa: 1013.25,
            humidity_pct: 70.0,
        };
        assert_eq!(
            snapshot.to_string(),
            "t2m=10°C wind=12.5km/h@270° p=1013.25hPa rh=70%"
        );
    }
}
