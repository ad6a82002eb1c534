use log::info;
use std::fmt;

/// Intermediate quantities of an index computation, one event per
/// stage, all ordered surface first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// Derived temperature at each level (°C).
    Temperatures([f64; 4]),
    /// Refractivity N at each level.
    Refractivity([f64; 4]),
    /// Modified refractivity M at each level.
    Modified([f64; 4]),
    /// dM/dz between consecutive levels.
    Gradients([f64; 3]),
    /// Final index.
    Index(f64),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Temperatures([t2m, t100, t925, t850]) => write!(
                f,
                "approximate temperatures: 2m={t2m}°C, 100m={t100}°C, 925hPa={t925}°C, 850hPa={t850}°C"
            ),
            Diagnostic::Refractivity([n2m, n100, n925, n850]) => write!(
                f,
                "refractivity N: 2m={n2m:.2}, 100m={n100:.2}, 925hPa={n925:.2}, 850hPa={n850:.2}"
            ),
            Diagnostic::Modified([m2m, m100, m925, m850]) => write!(
                f,
                "modified refractivity M: 2m={m2m:.2}, 100m={m100:.2}, 925hPa={m925:.2}, 850hPa={m850:.2}"
            ),
            Diagnostic::Gradients([g1, g2, g3]) => {
                write!(f, "gradients dM/dz: grad1={g1:.4}, grad2={g2:.4}, grad3={g3:.4}")
            }
            Diagnostic::Index(index) => write!(f, "tropo index: {index:.2}"),
        }
    }
}

/// Receives diagnostics while an index is computed.
pub trait Observer {
    fn observe(&mut self, diagnostic: &Diagnostic);
}

impl<F> Observer for F
where
    F: FnMut(&Diagnostic),
{
    fn observe(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Writes every diagnostic to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&mut self, diagnostic: &Diagnostic) {
        info!("{diagnostic}");
    }
}
