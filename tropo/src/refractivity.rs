//! Radio refractivity of moist air.

use crate::ComputeError;

/// Offset from Celsius to Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Increase of modified refractivity per meter above ground (M-units/m).
pub const EARTH_CURVATURE_PER_M: f64 = 0.157;

// Magnus coefficients over water, hPa and °C.
const MAGNUS_E0_HPA: f64 = 6.112;
const MAGNUS_A: f64 = 17.62;
const MAGNUS_B_C: f64 = 243.12;

const DRY_TERM_K_PER_HPA: f64 = 77.6;
const WET_TERM_K2_PER_HPA: f64 = 3.73e5;

/// Returns the partial pressure of water vapor (hPa) for air at
/// `temp_c` with relative humidity `humidity_pct`.
pub fn vapor_pressure(temp_c: f64, humidity_pct: f64) -> Result<f64, ComputeError> {
    let denom = MAGNUS_B_C + temp_c;
    if denom == 0.0 {
        return Err(ComputeError::Temperature { temp_c });
    }
    Ok(humidity_pct / 100.0 * MAGNUS_E0_HPA * (MAGNUS_A * temp_c / denom).exp())
}

/// Returns the refractivity N (N-units) of air.
///
/// # Parameters
///
/// - `temp_c`: air temperature (°C)
/// - `pressure_hpa`: total air pressure (hPa)
/// - `humidity_pct`: relative humidity (0-100 %)
///
/// A value that is not finite, e.g. from a zero Kelvin temperature, is
/// returned as [`ComputeError::NonFinite`].
pub fn refractivity(
    temp_c: f64,
    pressure_hpa: f64,
    humidity_pct: f64,
) -> Result<f64, ComputeError> {
    let t_k = temp_c + KELVIN_OFFSET;
    let e = vapor_pressure(temp_c, humidity_pct)?;
    let n = DRY_TERM_K_PER_HPA * (pressure_hpa / t_k) + WET_TERM_K2_PER_HPA * (e / (t_k * t_k));
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ComputeError::NonFinite {
            quantity: "refractivity",
            value: n,
        })
    }
}

/// Returns modified refractivity M for refractivity `n` at `height_m`
/// above ground.
pub fn modified_refractivity(n: f64, height_m: f64) -> f64 {
    n + EARTH_CURVATURE_PER_M * height_m
}
