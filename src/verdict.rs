use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative reading of a crisp PGA (in g).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum HazardVerdict {
    Negligible,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

/// Exclusive upper bounds, ascending. Anything above the last one is extreme.
const BANDS: [(f64, HazardVerdict); 5] = [
    (0.10, HazardVerdict::Negligible),
    (0.25, HazardVerdict::Low),
    (0.45, HazardVerdict::Moderate),
    (0.65, HazardVerdict::High),
    (0.80, HazardVerdict::VeryHigh),
];

impl HazardVerdict {
    pub fn from_pga(pga: f64) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| pga < *upper)
            .map_or(HazardVerdict::Extreme, |(_, verdict)| *verdict)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Negligible => "Negligible",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Negligible => "Very Low Hazard",
            Self::Low => "Minor Structural Risk",
            Self::Moderate => "Significant Damage Likely",
            Self::High => "Major Structural Damage Expected",
            Self::VeryHigh => "Severe Damage, Near Collapse",
            Self::Extreme => "Maximum Hazard, Catastrophic Damage",
        }
    }
}

impl fmt::Display for HazardVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.description())
    }
}

#[test]
fn test_verdict_bands() {
    assert_eq!(HazardVerdict::from_pga(0.0), HazardVerdict::Negligible);
    assert_eq!(HazardVerdict::from_pga(0.0999), HazardVerdict::Negligible);
    assert_eq!(HazardVerdict::from_pga(0.10), HazardVerdict::Low);
    assert_eq!(HazardVerdict::from_pga(0.25), HazardVerdict::Moderate);
    assert_eq!(HazardVerdict::from_pga(0.45), HazardVerdict::High);
    assert_eq!(HazardVerdict::from_pga(0.7), HazardVerdict::VeryHigh);
    assert_eq!(HazardVerdict::from_pga(0.80), HazardVerdict::Extreme);
    assert_eq!(HazardVerdict::from_pga(0.9), HazardVerdict::Extreme);
}

#[test]
fn test_verdict_display() {
    assert_eq!(
        HazardVerdict::from_pga(0.83).to_string(),
        "Extreme (Maximum Hazard, Catastrophic Damage)"
    );
    assert_eq!(HazardVerdict::VeryHigh.label(), "Very High");
}
