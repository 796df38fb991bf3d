use std::fmt;

use fixed_map::Map as FixedMap;

use crate::ops;
use crate::terms::Term;

/// Per-term values in `[0, 1]`: membership degrees of a fuzzified input, or
/// the aggregated firing strengths of the output terms.
///
/// The map is sparse; a term that was never set reads as zero.
pub struct Degrees<K: Term>(FixedMap<K, f64>);

impl<K: Term> Degrees<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn get(&self, term: K) -> f64 {
        self.0.get(term).copied().unwrap_or(0.)
    }

    pub fn contains(&self, term: K) -> bool {
        self.0.contains_key(term)
    }

    pub fn set(&mut self, term: K, degree: f64) {
        self.0.insert(term, degree);
    }

    /// Combines `alpha` into the stored value with the maximum s-norm.
    ///
    /// The first alpha seen for a term is stored even when it is zero, so
    /// every consequent a rule names shows up in [`Degrees::iter`].
    pub fn raise(&mut self, term: K, alpha: f64) {
        match self.0.get_mut(term) {
            Some(current) => *current = ops::s_norm(*current, alpha),
            None => {
                self.0.insert(term, alpha);
            },
        }
    }

    /// Terms that were set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.0.iter().map(|(term, degree)| (term, *degree))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The set term with the largest value, ties going to the earlier term.
    pub fn dominant(&self) -> Option<(K, f64)> {
        self.iter()
            .filter(|(_, degree)| *degree > 0.)
            .fold(None, |best, (term, degree)| match best {
                Some((_, best_degree)) if best_degree >= degree => best,
                _ => Some((term, degree)),
            })
    }
}

impl<K: Term> Default for Degrees<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Term> Clone for Degrees<K> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<K: Term> PartialEq for Degrees<K> {
    fn eq(&self, other: &Self) -> bool {
        K::ALL
            .iter()
            .all(|term| self.0.get(*term) == other.0.get(*term))
    }
}

impl<K: Term> FromIterator<(K, f64)> for Degrees<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut degrees = Degrees::new();

        for (term, degree) in iter {
            degrees.set(term, degree);
        }

        degrees
    }
}

impl<K: Term> fmt::Debug for Degrees<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(term, degree)| (term.name(), degree)))
            .finish()
    }
}

#[test]
fn test_absent_term_reads_as_zero() {
    use crate::terms::Pga;

    let mut degrees = Degrees::new();

    degrees.set(Pga::Low, 0.25);

    assert_eq!(degrees.get(Pga::Low), 0.25);
    assert_eq!(degrees.get(Pga::VeryVeryMuch), 0.);
    assert!(!degrees.contains(Pga::VeryVeryMuch));
    assert_eq!(degrees.len(), 1);
}

#[test]
fn test_raise_keeps_maximum() {
    use crate::terms::Pga;

    let mut degrees = Degrees::new();

    degrees.raise(Pga::Much, 0.);
    assert!(degrees.contains(Pga::Much));

    degrees.raise(Pga::Much, 0.4);
    degrees.raise(Pga::Much, 0.2);
    degrees.raise(Pga::Medium, 0.1);

    assert_eq!(degrees.get(Pga::Much), 0.4);
    assert_eq!(degrees.get(Pga::Medium), 0.1);

    // Order does not matter
    let mut reversed = Degrees::new();

    reversed.raise(Pga::Medium, 0.1);
    reversed.raise(Pga::Much, 0.2);
    reversed.raise(Pga::Much, 0.4);
    reversed.raise(Pga::Much, 0.);

    assert_eq!(degrees, reversed);
    assert_eq!(degrees.dominant(), Some((Pga::Much, 0.4)));
}

#[test]
fn test_dominant_ignores_zero() {
    use crate::terms::Distance;

    let degrees: Degrees<Distance> = [(Distance::Near, 0.), (Distance::Far, 0.)].into_iter().collect();

    assert_eq!(degrees.dominant(), None);
    assert_eq!(format!("{degrees:?}"), r#"{"Near": 0.0, "Far": 0.0}"#);
}
