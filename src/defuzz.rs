use std::num::NonZeroUsize;

use num::Float;

use crate::degrees::Degrees;
use crate::linspace::Linspace;
use crate::ops;
use crate::terms::Term;
use crate::variable::LinguisticVariable;

/// Center of gravity defuzzification by sampling the output universe.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CenterOfGravity {
    resolution: NonZeroUsize,
}

impl CenterOfGravity {
    pub const DEFAULT_RESOLUTION: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(resolution) => resolution,
        None => unreachable!(),
    };

    /// Upper bound accepted from configuration.
    pub const MAX_RESOLUTION: usize = 10_000_000;

    /// The universe is split into `resolution` intervals, i.e. sampled at
    /// `resolution + 1` points including both ends. Golden outputs depend on
    /// this value.
    pub fn new(resolution: NonZeroUsize) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> NonZeroUsize {
        self.resolution
    }

    /// Value of the aggregated output curve at `x`: every term's membership
    /// clipped at its alpha, united with the maximum.
    pub fn aggregated_membership<K: Term>(output: &LinguisticVariable<K>, aggregated: &Degrees<K>, x: f64) -> f64 {
        ops::disjunction(
            aggregated
                .iter()
                .map(|(term, alpha)| ops::implication(alpha, output.membership(term, x))),
        )
    }

    /// Samples of the universe of `output`.
    pub fn universe<K: Term>(&self, output: &LinguisticVariable<K>) -> Linspace<f64> {
        let universe = output.universe();

        Linspace::new(*universe.start(), *universe.end(), self.resolution.get().saturating_add(1))
    }

    /// Crisp value of the aggregated output. When no term contributes any
    /// membership anywhere, the midpoint of the universe is returned.
    pub fn defuzzify<K: Term>(&self, output: &LinguisticVariable<K>, aggregated: &Degrees<K>) -> f64 {
        let universe = self.universe(output);
        let samples = universe.map(|x| (x, Self::aggregated_membership(output, aggregated, x)));

        match centroid(samples) {
            Some(crisp) => crisp,
            None => {
                tracing::debug!(variable = output.name(), "no output membership, falling back to the midpoint");

                output.midpoint()
            },
        }
    }
}

impl Default for CenterOfGravity {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESOLUTION)
    }
}

/// Membership-weighted mean of the sampled `(x, membership)` points, or
/// `None` when the total membership is exactly zero.
pub fn centroid<F: Float>(samples: impl IntoIterator<Item = (F, F)>) -> Option<F> {
    let mut num = F::zero();
    let mut den = F::zero();

    for (x, membership) in samples {
        num = num + x * membership;
        den = den + membership;
    }

    if den == F::zero() {
        None
    } else {
        Some(num / den)
    }
}

#[cfg(test)]
fn pga() -> LinguisticVariable<crate::terms::Pga> {
    use crate::membership::Shape;
    use crate::terms::Pga;

    let terms = [
        (Pga::VeryLow, Shape::trapezoidal(0.0, 0.0, 0.05, 0.15)),
        (Pga::Low, Shape::triangular(0.05, 0.15, 0.25)),
        (Pga::Medium, Shape::triangular(0.15, 0.30, 0.45)),
        (Pga::Much, Shape::triangular(0.35, 0.50, 0.65)),
        (Pga::VeryMuch, Shape::triangular(0.55, 0.70, 0.85)),
        (Pga::VeryVeryMuch, Shape::trapezoidal(0.75, 0.85, 0.9, 0.9)),
    ];

    LinguisticVariable::new("PGA", 0.0..=0.9, terms.into_iter().collect())
}

#[cfg(test)]
fn with_resolution(resolution: usize) -> CenterOfGravity {
    CenterOfGravity::new(NonZeroUsize::new(resolution).expect("non-zero resolution"))
}

#[test]
fn test_centroid() {
    assert_eq!(centroid([(1., 1.), (2., 1.), (3., 1.)]), Some(2.));
    assert_eq!(centroid([(1., 0.), (2., 0.5), (4., 0.5)]), Some(3.));
    assert_eq!(centroid([(1., 0.), (2., 0.)]), None::<f64>);
    assert_eq!(centroid(Vec::<(f32, f32)>::new()), None);
}

#[test]
fn test_nothing_fired_gives_midpoint() {
    use crate::terms::Pga;

    let pga = pga();
    let cog = CenterOfGravity::default();

    assert_eq!(cog.defuzzify(&pga, &Degrees::new()), 0.45);

    let all_zero: Degrees<Pga> = Pga::ALL.iter().map(|term| (*term, 0.)).collect();

    assert_eq!(cog.defuzzify(&pga, &all_zero), 0.45);
}

#[test]
fn test_clipped_single_term() {
    use crate::terms::Pga;

    let pga = pga();
    let cog = CenterOfGravity::default();
    let aggregated: Degrees<_> = [(Pga::VeryVeryMuch, 0.2857142857142859)].into_iter().collect();

    assert_eq!(cog.defuzzify(&pga, &aggregated), 0.8316651514345043);
    assert_eq!(CenterOfGravity::aggregated_membership(&pga, &aggregated, 0.87), 0.2857142857142859);
    assert_eq!(CenterOfGravity::aggregated_membership(&pga, &aggregated, 0.5), 0.);

    // A symmetric set stays centered on its peak
    let medium: Degrees<_> = [(Pga::Medium, 1.)].into_iter().collect();

    assert_eq!(cog.defuzzify(&pga, &medium), 0.2999993987975951);
}

#[test]
fn test_union_of_clipped_terms() {
    use crate::terms::Pga;

    let pga = pga();
    let aggregated: Degrees<_> = [(Pga::Low, 1.), (Pga::Much, 0.5)].into_iter().collect();

    // Low is clipped at 1 (unchanged) and Much at 0.5
    assert_eq!(CenterOfGravity::aggregated_membership(&pga, &aggregated, 0.15), 1.);
    assert_eq!(CenterOfGravity::aggregated_membership(&pga, &aggregated, 0.5), 0.5);
    assert_eq!(CenterOfGravity::aggregated_membership(&pga, &aggregated, 0.3), 0.);
    assert_eq!(CenterOfGravity::default().defuzzify(&pga, &aggregated), 0.33529427557377756);
}

#[test]
fn test_converges_to_analytic_centroid() {
    use crate::terms::Pga;

    let pga = pga();
    let aggregated: Degrees<_> = [(Pga::VeryLow, 1.)].into_iter().collect();
    // Rectangle on [0, 0.05] plus a right triangle on [0.05, 0.15], both with area 0.05
    let analytic = (0.05 * 0.025 + 0.05 * (0.05 + 0.1 / 3.)) / 0.1;

    let errors: Vec<f64> = [10, 100, 1000, 10000]
        .into_iter()
        .map(|resolution| (with_resolution(resolution).defuzzify(&pga, &aggregated) - analytic).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "{errors:?}");
    }
    assert!(errors[3] < 1e-4);
}

#[test]
fn test_universe_sampling() {
    let pga = pga();
    let universe: Vec<f64> = with_resolution(4).universe(&pga).collect();

    assert_eq!(universe, vec![0., 0.225, 0.45, 0.675, 0.9]);
    assert_eq!(CenterOfGravity::default().universe(&pga).len(), 1001);

    // The sample count saturates instead of wrapping to an empty universe
    assert_eq!(CenterOfGravity::new(NonZeroUsize::MAX).universe(&pga).len(), usize::MAX);
}
