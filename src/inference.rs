use crate::config::EngineConfig;
use crate::defuzz::CenterOfGravity;
use crate::error::Result;
use crate::inputs::Inputs;
use crate::membership::Shape;
use crate::outputs::Outputs;
use crate::rules::Rules;
use crate::terms::{Distance, FaultType, Magnitude, Pga, Terms};
use crate::variable::LinguisticVariable;

fn magnitude() -> LinguisticVariable<Magnitude> {
    let terms = [
        (Magnitude::Short, Shape::trapezoidal(4.5, 4.5, 5.0, 5.5)),
        (Magnitude::Medium, Shape::triangular(5.0, 5.7, 6.4)),
        (Magnitude::Large, Shape::triangular(6.0, 6.7, 7.4)),
        (Magnitude::VeryLarge, Shape::triangular(7.0, 7.7, 8.1)),
        (Magnitude::VeryVeryLarge, Shape::trapezoidal(7.8, 8.3, 8.5, 8.5)),
    ];

    let terms = Terms::from_iter(terms);

    debug_assert!(terms.is_complete());

    LinguisticVariable::new("Mmax", 4.5..=8.5, terms)
}

fn distance() -> LinguisticVariable<Distance> {
    let terms = [
        (Distance::Near, Shape::trapezoidal(0.0, 0.0, 20.0, 40.0)),
        (Distance::Medium, Shape::triangular(20.0, 50.0, 80.0)),
        (Distance::Far, Shape::triangular(60.0, 100.0, 140.0)),
        (Distance::VeryFar, Shape::trapezoidal(120.0, 160.0, 200.0, 200.0)),
    ];

    let terms = Terms::from_iter(terms);

    debug_assert!(terms.is_complete());

    LinguisticVariable::new("R", 0.0..=200.0, terms)
}

fn fault_type() -> LinguisticVariable<FaultType> {
    let terms = [
        (FaultType::Normal, Shape::trapezoidal(-0.1, -0.1, -0.05, 0.0)),
        (FaultType::Oblique, Shape::triangular(-0.05, 0.0, 0.05)),
        (FaultType::Thrust, Shape::trapezoidal(0.0, 0.05, 0.1, 0.1)),
    ];

    let terms = Terms::from_iter(terms);

    debug_assert!(terms.is_complete());

    LinguisticVariable::new("F", -0.1..=0.1, terms)
}

fn pga() -> LinguisticVariable<Pga> {
    let terms = [
        (Pga::VeryLow, Shape::trapezoidal(0.0, 0.0, 0.05, 0.15)),
        (Pga::Low, Shape::triangular(0.05, 0.15, 0.25)),
        (Pga::Medium, Shape::triangular(0.15, 0.30, 0.45)),
        (Pga::Much, Shape::triangular(0.35, 0.50, 0.65)),
        (Pga::VeryMuch, Shape::triangular(0.55, 0.70, 0.85)),
        (Pga::VeryVeryMuch, Shape::trapezoidal(0.75, 0.85, 0.9, 0.9)),
    ];

    let terms = Terms::from_iter(terms);

    debug_assert!(terms.is_complete());

    LinguisticVariable::new("PGA", 0.0..=0.9, terms)
}

/// Mamdani inference of peak ground acceleration from magnitude, distance and
/// fault type.
///
/// All tables are built once in the constructor and never change afterwards,
/// so one engine can serve concurrent callers through a shared reference.
pub struct FdshaEngine {
    magnitude: LinguisticVariable<Magnitude>,
    distance: LinguisticVariable<Distance>,
    fault_type: LinguisticVariable<FaultType>,
    pga: LinguisticVariable<Pga>,
    rules: Rules,
    defuzz_op: CenterOfGravity,
}

impl Default for FdshaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FdshaEngine {
    pub fn new() -> Self {
        Self::with_defuzzifier(CenterOfGravity::default())
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::with_defuzzifier(config.defuzzifier()?))
    }

    fn with_defuzzifier(defuzz_op: CenterOfGravity) -> Self {
        let this = Self {
            magnitude: magnitude(),
            distance: distance(),
            fault_type: fault_type(),
            pga: pga(),
            rules: Rules::standard(),
            defuzz_op,
        };

        tracing::debug!(
            rules = this.rules.len(),
            resolution = this.defuzz_op.resolution().get(),
            "built inference engine"
        );

        this
    }

    /// Peak ground acceleration in g for one site. Always finite and within
    /// the PGA universe, whatever the inputs.
    pub fn compute_hazard(&self, magnitude: f64, distance: f64, fault_index: f64) -> f64 {
        self.eval(&Inputs::new(magnitude, distance, fault_index)).pga()
    }

    pub fn eval(&self, inputs: &Inputs) -> Outputs {
        // Fuzzificate crisp facts
        let magnitude = self.magnitude.fuzzify(inputs.magnitude);
        let distance = self.distance.fuzzify(inputs.distance);
        let fault_type = self.fault_type.fuzzify(inputs.fault_index);

        // Fire every rule, aggregating per consequent
        let aggregated = self.rules.fire(&magnitude, &distance, &fault_type);

        tracing::trace!(
            ?inputs,
            ?magnitude,
            ?distance,
            ?fault_type,
            ?aggregated,
            "fired rule base"
        );

        // Defuzzificate
        let pga = self.defuzz_op.defuzzify(&self.pga, &aggregated);

        Outputs::new(pga, magnitude, distance, fault_type, aggregated)
    }

    /// [`FdshaEngine::compute_hazard`] for many sites. Runs on the rayon pool
    /// with the `threading` feature.
    pub fn compute_batch(&self, sites: &[Inputs]) -> Vec<f64> {
        #[cfg(feature = "threading")]
        {
            use rayon::prelude::*;

            sites.par_iter().map(|site| self.eval(site).pga()).collect()
        }

        #[cfg(not(feature = "threading"))]
        {
            sites.iter().map(|site| self.eval(site).pga()).collect()
        }
    }

    pub fn magnitude(&self) -> &LinguisticVariable<Magnitude> {
        &self.magnitude
    }

    pub fn distance(&self) -> &LinguisticVariable<Distance> {
        &self.distance
    }

    pub fn fault_type(&self) -> &LinguisticVariable<FaultType> {
        &self.fault_type
    }

    pub fn pga(&self) -> &LinguisticVariable<Pga> {
        &self.pga
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn defuzzifier(&self) -> &CenterOfGravity {
        &self.defuzz_op
    }
}

#[test]
fn test_near_large_thrust() {
    let engine = FdshaEngine::new();
    let outputs = engine.eval(&Inputs::new(7.2, 15.0, 0.08));

    assert_eq!(outputs.distance().get(Distance::Near), 1.);
    assert_eq!(outputs.fault_type().get(FaultType::Thrust), 1.);
    assert_eq!(outputs.magnitude().get(Magnitude::Large), 0.2857142857142859);
    assert_eq!(outputs.magnitude().get(Magnitude::VeryLarge), 0.2857142857142859);
    assert_eq!(outputs.aggregated().get(Pga::VeryVeryMuch), 0.2857142857142859);
    assert_eq!(
        outputs.aggregated().dominant(),
        Some((Pga::VeryVeryMuch, 0.2857142857142859))
    );

    assert_eq!(outputs.pga(), 0.8316651514345043);
    assert!(outputs.pga() > 0.5);
    assert!(outputs.fired());
}

#[test]
fn test_nothing_fires_outside_every_set() {
    use crate::terms::Term;

    let engine = FdshaEngine::new();

    assert_eq!(engine.compute_hazard(0.0, 1000.0, 5.0), 0.45);

    // The lower corner of every universe sits on an open shoulder
    let outputs = engine.eval(&Inputs::new(4.5, 0.0, -0.1));

    assert!(!outputs.fired());
    assert_eq!(outputs.pga(), 0.45);
    assert_eq!(outputs.aggregated().len(), Pga::ALL.len());
}

#[test]
fn test_golden_values() {
    let engine = FdshaEngine::new();

    assert_eq!(engine.compute_hazard(6.0, 50.0, 0.0), 0.2999991305991304);
    assert_eq!(engine.compute_hazard(5.2, 120.0, -0.08), 0.06356208541079555);
    assert_eq!(engine.compute_hazard(8.0, 30.0, 0.02), 0.7438575743590764);
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = FdshaEngine::new();
    let first = engine.compute_hazard(6.8, 45.0, 0.03);
    let second = engine.compute_hazard(6.8, 45.0, 0.03);

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_with_config() {
    use crate::error::Error;

    let engine = FdshaEngine::with_config(&EngineConfig { resolution: 100 }).unwrap();

    assert_eq!(engine.defuzzifier().resolution().get(), 100);
    assert!(matches!(
        FdshaEngine::with_config(&EngineConfig { resolution: 0 }),
        Err(Error::ZeroResolution)
    ));
}

#[test]
fn test_compute_batch() {
    let engine = FdshaEngine::new();
    let sites = [
        Inputs::new(7.2, 15.0, 0.08),
        Inputs::new(0.0, 1000.0, 5.0),
        Inputs::new(6.0, 50.0, 0.0),
    ];

    assert_eq!(
        engine.compute_batch(&sites),
        vec![0.8316651514345043, 0.45, 0.2999991305991304]
    );
}

#[test]
fn test_every_term_has_a_shape() {
    use crate::terms::Term;

    assert_eq!(magnitude().sets().count(), Magnitude::ALL.len());
    assert_eq!(distance().sets().count(), Distance::ALL.len());
    assert_eq!(fault_type().sets().count(), FaultType::ALL.len());
    assert_eq!(pga().sets().count(), Pga::ALL.len());

    let partial = Terms::from_iter([(Pga::Low, Shape::triangular(0.05, 0.15, 0.25))]);

    assert!(!partial.is_complete());
}

#[test]
fn test_engine_tables() {
    use crate::terms::Term;

    let engine = FdshaEngine::new();

    assert_eq!(engine.rules().len(), 60);
    assert_eq!(engine.pga().universe(), 0.0..=0.9);
    assert_eq!(engine.magnitude().sets().count(), Magnitude::ALL.len());
    assert_eq!(engine.distance().sets().count(), Distance::ALL.len());
    assert_eq!(engine.fault_type().sets().count(), FaultType::ALL.len());
    assert_eq!(engine.pga().sets().count(), Pga::ALL.len());
    assert_eq!(engine.magnitude().name(), "Mmax");
}
