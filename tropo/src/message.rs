use crate::{AlertLevel, WeatherSnapshot};

/// Returns the paging text for an index.
///
/// ```text
/// Tropo:-0.4 (Low) T2m:10C RH:70% P:1013.25hPa
/// ```
///
/// `index` is scaled by ten and rounded half away from zero, so the
/// decimal literal is rounded half up: 0.35 gives `0.4` and 1.45 gives
/// `1.5`, even though their binary values lie just below the tie.
/// A result of negative zero is printed as `0.0`, never `-0.0`.
/// Weather fields use the shortest representation that round-trips.
pub fn format_message(index: f64, level: AlertLevel, snapshot: &WeatherSnapshot) -> String {
    let WeatherSnapshot {
        temperature_c,
        pressure_hpa,
        humidity_pct,
        ..
    } = snapshot;
    let index = round_tenths(index);
    format!("Tropo:{index:.1} ({level}) T2m:{temperature_c}C RH:{humidity_pct}% P:{pressure_hpa}hPa")
}

fn round_tenths(value: f64) -> f64 {
    // Adding zero turns -0.0 into 0.0, so -0.04 prints as "0.0".
    (value * 10.0).round() / 10.0 + 0.0
}
