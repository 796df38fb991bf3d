use crate::degrees::Degrees;
use crate::terms::{Distance, FaultType, Magnitude, Pga};
use crate::verdict::HazardVerdict;

/// Result of one inference, with the intermediate degrees that produced it.
#[derive(Clone, Debug)]
pub struct Outputs {
    pga: f64,
    magnitude: Degrees<Magnitude>,
    distance: Degrees<Distance>,
    fault_type: Degrees<FaultType>,
    aggregated: Degrees<Pga>,
}

impl Outputs {
    pub(crate) fn new(
        pga: f64,
        magnitude: Degrees<Magnitude>,
        distance: Degrees<Distance>,
        fault_type: Degrees<FaultType>,
        aggregated: Degrees<Pga>,
    ) -> Self {
        Self {
            pga,
            magnitude,
            distance,
            fault_type,
            aggregated,
        }
    }

    /// Defuzzified peak ground acceleration in g
    pub fn pga(&self) -> f64 {
        self.pga
    }

    pub fn verdict(&self) -> HazardVerdict {
        HazardVerdict::from_pga(self.pga)
    }

    pub fn magnitude(&self) -> &Degrees<Magnitude> {
        &self.magnitude
    }

    pub fn distance(&self) -> &Degrees<Distance> {
        &self.distance
    }

    pub fn fault_type(&self) -> &Degrees<FaultType> {
        &self.fault_type
    }

    /// Aggregated firing strength of every PGA term
    pub fn aggregated(&self) -> &Degrees<Pga> {
        &self.aggregated
    }

    /// False when the midpoint fallback produced the PGA
    pub fn fired(&self) -> bool {
        self.aggregated.iter().any(|(_, alpha)| alpha > 0.)
    }
}
