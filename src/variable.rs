use std::ops::RangeInclusive;

use fixed_map::Map as FixedMap;

use crate::degrees::Degrees;
use crate::membership::{FuzzySet, Shape};
use crate::terms::{Term, Terms};

/// A named dimension partitioned into (possibly overlapping) fuzzy sets, one
/// per term of `K`.
pub struct LinguisticVariable<K: Term> {
    name: &'static str,
    min_u: f64,
    max_u: f64,
    sets: FixedMap<K, FuzzySet>,
}

impl<K: Term> LinguisticVariable<K> {
    /// Terms missing from `terms` simply never receive any membership.
    pub fn new(name: &'static str, universe_range: RangeInclusive<f64>, terms: Terms<K>) -> Self {
        let mut sets = FixedMap::new();

        for (term, shape) in terms.0.iter() {
            sets.insert(term, FuzzySet::new(term.name(), *shape));
        }

        Self {
            name,
            min_u: *universe_range.start(),
            max_u: *universe_range.end(),
            sets,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> RangeInclusive<f64> {
        self.min_u..=self.max_u
    }

    /// Center of the universe of discourse
    pub fn midpoint(&self) -> f64 {
        (self.min_u + self.max_u) / 2.
    }

    pub fn set(&self, term: K) -> Option<&FuzzySet> {
        self.sets.get(term)
    }

    pub fn shape(&self, term: K) -> Option<&Shape> {
        self.set(term).map(FuzzySet::shape)
    }

    /// Fuzzy sets in term declaration order
    pub fn sets(&self) -> impl Iterator<Item = (K, &FuzzySet)> + '_ {
        self.sets.iter()
    }

    /// Degree of `x` in the set of `term`; zero for a term without a set.
    pub fn membership(&self, term: K, x: f64) -> f64 {
        self.set(term).map_or(0., |set| set.degree(x))
    }

    /// Degree of `x` in every set, each evaluated on its own. The degrees are
    /// not normalized and need not sum to one.
    pub fn fuzzify(&self, x: f64) -> Degrees<K> {
        self.sets.iter().map(|(term, set)| (term, set.degree(x))).collect()
    }
}

#[cfg(test)]
fn distance() -> LinguisticVariable<crate::terms::Distance> {
    use crate::terms::Distance;

    let terms = [
        (Distance::Near, Shape::trapezoidal(0.0, 0.0, 20.0, 40.0)),
        (Distance::Medium, Shape::triangular(20.0, 50.0, 80.0)),
        (Distance::Far, Shape::triangular(60.0, 100.0, 140.0)),
    ];

    LinguisticVariable::new("Distance", 0. ..=200., terms.into_iter().collect())
}

#[test]
fn test_fuzzify_every_term() {
    use crate::terms::Distance;

    let distance = distance();
    let degrees = distance.fuzzify(30.);

    assert_eq!(degrees.get(Distance::Near), 0.5);
    assert_eq!(degrees.get(Distance::Medium), 1. / 3.);
    assert_eq!(degrees.get(Distance::Far), 0.);
    assert!(degrees.contains(Distance::Far));
    // No set was defined for VeryFar
    assert!(!degrees.contains(Distance::VeryFar));
    assert_eq!(distance.membership(Distance::VeryFar, 180.), 0.);

    // Overlapping sets are not normalized
    let overlap = distance.fuzzify(70.);
    let total: f64 = overlap.iter().map(|(_, degree)| degree).sum();

    assert_eq!(overlap.get(Distance::Medium), 1. / 3.);
    assert_eq!(overlap.get(Distance::Far), 0.25);
    assert!(total < 1.);
}

#[test]
fn test_variable_metadata() {
    use crate::terms::Distance;

    let distance = distance();

    assert_eq!(distance.name(), "Distance");
    assert_eq!(distance.universe(), 0. ..=200.);
    assert_eq!(distance.midpoint(), 100.);
    assert_eq!(distance.set(Distance::Far).map(FuzzySet::name), Some("Far"));
    assert_eq!(
        distance.sets().map(|(term, _)| term).collect::<Vec<_>>(),
        vec![Distance::Near, Distance::Medium, Distance::Far]
    );
}
