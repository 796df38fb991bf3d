use serde::{Deserialize, Serialize};

/// Crisp facts describing one site and its seismic source.
///
/// Typical values are magnitude 4.5 to 8.5, distance 0 to 200 km and a fault
/// index between -0.1 (normal) and 0.1 (thrust). These ranges are advisory:
/// anything outside simply gets no membership.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Maximum credible magnitude (Mmax)
    pub magnitude: f64,
    /// Source-to-site distance in km (R)
    pub distance: f64,
    /// Fault type index (F), negative for normal and positive for thrust faulting
    pub fault_index: f64,
}

impl Inputs {
    pub fn new(magnitude: f64, distance: f64, fault_index: f64) -> Self {
        Inputs {
            magnitude,
            distance,
            fault_index,
        }
    }
}

impl From<(f64, f64, f64)> for Inputs {
    fn from((magnitude, distance, fault_index): (f64, f64, f64)) -> Self {
        Inputs::new(magnitude, distance, fault_index)
    }
}
