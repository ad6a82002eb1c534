//! Synthetic vertical profile built from a single surface observation.
//!
//! A real duct indicator needs radiosonde data. Here the profile above
//! the surface is extrapolated with fixed temperature offsets and fixed
//! standard pressure levels, and humidity is held at the surface value.

use crate::{
    alert::{classify, AlertLevel},
    diagnostic::{Diagnostic, Observer},
    refractivity::{modified_refractivity, refractivity},
    ComputeError, WeatherSnapshot,
};
use std::fmt;

/// One of the four synthetic profile levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// 2 m above ground.
    Surface,
    /// 100 m above ground.
    M100,
    /// 925 hPa pressure level.
    Hpa925,
    /// 850 hPa pressure level.
    Hpa850,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Surface, Level::M100, Level::Hpa925, Level::Hpa850];

    /// Height above ground (meters).
    pub fn height_m(self) -> f64 {
        match self {
            Level::Surface => 2.0,
            Level::M100 => 100.0,
            Level::Hpa925 => 700.0,
            Level::Hpa850 => 1450.0,
        }
    }

    /// Temperature drop from the surface (°C).
    pub fn lapse_c(self) -> f64 {
        match self {
            Level::Surface => 0.0,
            Level::M100 => 0.65,
            Level::Hpa925 => 5.5,
            Level::Hpa850 => 10.0,
        }
    }

    /// Pressure at this level given `surface_hpa` (hPa).
    pub fn pressure_hpa(self, surface_hpa: f64) -> f64 {
        match self {
            Level::Surface | Level::M100 => surface_hpa,
            Level::Hpa925 => 925.0,
            Level::Hpa850 => 850.0,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Surface => "2m",
            Level::M100 => "100m",
            Level::Hpa925 => "925hPa",
            Level::Hpa850 => "850hPa",
        })
    }
}

/// Derived conditions at one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSample {
    pub level: Level,
    pub height_m: f64,
    pub temp_c: f64,
    pub pressure_hpa: f64,
    /// Refractivity (N-units).
    pub n: f64,
    /// Modified refractivity (M-units).
    pub m: f64,
}

impl LevelSample {
    fn new(level: Level, snapshot: &WeatherSnapshot) -> Result<Self, ComputeError> {
        let height_m = level.height_m();
        let temp_c = snapshot.temperature_c - level.lapse_c();
        let pressure_hpa = level.pressure_hpa(snapshot.pressure_hpa);
        let n = refractivity(temp_c, pressure_hpa, snapshot.humidity_pct)?;
        Ok(Self {
            level,
            height_m,
            temp_c,
            pressure_hpa,
            n,
            m: modified_refractivity(n, height_m),
        })
    }
}

/// Four level profile and its modified refractivity gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Levels ordered from the surface up.
    pub levels: [LevelSample; 4],

    /// dM/dz between consecutive levels (M-units/m).
    pub gradients: [f64; 3],
}

impl Profile {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Result<Self, ComputeError> {
        let [surface, m100, hpa925, hpa850] = Level::ALL;
        let levels = [
            LevelSample::new(surface, snapshot)?,
            LevelSample::new(m100, snapshot)?,
            LevelSample::new(hpa925, snapshot)?,
            LevelSample::new(hpa850, snapshot)?,
        ];
        let gradient =
            |lo: &LevelSample, hi: &LevelSample| (hi.m - lo.m) / (hi.height_m - lo.height_m);
        let gradients = [
            gradient(&levels[0], &levels[1]),
            gradient(&levels[1], &levels[2]),
            gradient(&levels[2], &levels[3]),
        ];
        Ok(Self { levels, gradients })
    }

    /// Returns the index of this profile; positive when M decreases with
    /// height on average.
    pub fn index(&self) -> Result<TropoIndex, ComputeError> {
        TropoIndex::new(-self.gradients.iter().sum::<f64>())
    }

    fn per_level(&self, f: impl Fn(&LevelSample) -> f64) -> [f64; 4] {
        let [a, b, c, d] = &self.levels;
        [f(a), f(b), f(c), f(d)]
    }
}

/// Tropospheric ducting index. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TropoIndex(f64);

impl TropoIndex {
    pub fn new(value: f64) -> Result<Self, ComputeError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ComputeError::NonFinite {
                quantity: "tropo index",
                value,
            })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn level(self) -> AlertLevel {
        classify(self.0)
    }
}

impl fmt::Display for TropoIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Computes the ducting index for `snapshot`, reporting every
/// intermediate quantity to `observer`.
pub fn compute_index<O>(
    snapshot: &WeatherSnapshot,
    observer: &mut O,
) -> Result<TropoIndex, ComputeError>
where
    O: Observer + ?Sized,
{
    let profile = Profile::from_snapshot(snapshot)?;
    observer.observe(&Diagnostic::Temperatures(profile.per_level(|l| l.temp_c)));
    observer.observe(&Diagnostic::Refractivity(profile.per_level(|l| l.n)));
    observer.observe(&Diagnostic::Modified(profile.per_level(|l| l.m)));
    observer.observe(&Diagnostic::Gradients(profile.gradients));
    let index = profile.index()?;
    observer.observe(&Diagnostic::Index(index.value()));
    Ok(index)
}
