//! Fuzzy deterministic seismic hazard analysis.
//!
//! Estimates the peak ground acceleration (PGA, in g) at a site from the
//! maximum credible magnitude of a source, the source-to-site distance and a
//! fault type index, using Mamdani inference over a fixed 60 rule base and
//! center of gravity defuzzification.
//!
//! ```
//! use fdsha::{FdshaEngine, HazardVerdict};
//!
//! let engine = FdshaEngine::new();
//! let pga = engine.compute_hazard(7.2, 15.0, 0.08);
//!
//! assert!(pga > 0.5);
//! assert_eq!(HazardVerdict::from_pga(pga), HazardVerdict::Extreme);
//! ```

use std::sync::OnceLock;

mod config;
mod defuzz;
mod degrees;
mod error;
mod inference;
mod inputs;
mod linspace;
mod membership;
pub mod ops;
mod outputs;
mod rules;
mod terms;
mod variable;
mod verdict;

pub use config::EngineConfig;
pub use defuzz::{centroid, CenterOfGravity};
pub use degrees::Degrees;
pub use error::{Error, Result};
pub use inference::FdshaEngine;
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use membership::{FuzzySet, Shape};
pub use outputs::Outputs;
pub use rules::{Rule, Rules};
pub use terms::{Distance, FaultType, Magnitude, Pga, Term, Terms};
pub use variable::LinguisticVariable;
pub use verdict::HazardVerdict;

/// [`FdshaEngine::compute_hazard`] on a process-wide engine with the default
/// configuration, built on first use.
pub fn compute_hazard(magnitude: f64, distance: f64, fault_index: f64) -> f64 {
    static ENGINE: OnceLock<FdshaEngine> = OnceLock::new();

    ENGINE
        .get_or_init(FdshaEngine::new)
        .compute_hazard(magnitude, distance, fault_index)
}
