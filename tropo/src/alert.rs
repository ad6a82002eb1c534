use std::fmt;

/// Alert tiers, ordered from weakest to strongest propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertLevel {
    Low,
    Medium,
    Good,
    /// Long distance (DX) contacts likely.
    Strong,
}

impl AlertLevel {
    /// Short name used in paging messages.
    pub fn name(self) -> &'static str {
        match self {
            AlertLevel::Low => "Low",
            AlertLevel::Medium => "Medium",
            AlertLevel::Good => "Good",
            AlertLevel::Strong => "Strong/DX",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the alert tier for `index`.
///
/// `index` must be finite; see [`crate::TropoIndex`].
pub fn classify(index: f64) -> AlertLevel {
    debug_assert!(index.is_finite(), "classify called with {index}");
    if index < 2.0 {
        AlertLevel::Low
    } else if index < 4.0 {
        AlertLevel::Medium
    } else if index < 6.0 {
        AlertLevel::Good
    } else {
        AlertLevel::Strong
    }
}
