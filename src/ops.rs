//! The Mamdani operators. They are fixed: the rule base was tuned for
//! min/max/clip and centroid defuzzification only.

use num::Float;

/// Minimum t-norm, the fuzzy AND of a rule premise.
#[inline]
pub fn t_norm<F: Float>(u: F, v: F) -> F {
    F::min(u, v)
}

/// Maximum s-norm, the fuzzy OR used to aggregate rules sharing a consequent.
#[inline]
pub fn s_norm<F: Float>(u: F, v: F) -> F {
    F::max(u, v)
}

/// Mamdani implication: the consequent membership clipped at the firing strength.
#[inline]
pub fn implication<F: Float>(alpha: F, membership: F) -> F {
    F::min(alpha, membership)
}

/// Folds any number of premise degrees with [`t_norm`]. An empty premise is
/// fully satisfied.
pub fn conjunction<F: Float>(degrees: impl IntoIterator<Item = F>) -> F {
    degrees.into_iter().fold(F::one(), t_norm)
}

/// Folds any number of values with [`s_norm`]. Nothing folds to zero.
pub fn disjunction<F: Float>(degrees: impl IntoIterator<Item = F>) -> F {
    degrees.into_iter().fold(F::zero(), s_norm)
}

#[test]
fn test_norms() {
    assert_eq!(t_norm(0.3, 0.7), 0.3);
    assert_eq!(s_norm(0.3f32, 0.7), 0.7);
    assert_eq!(implication(0.25, 1.), 0.25);
    assert_eq!(implication(0.75, 0.5), 0.5);

    assert_eq!(conjunction([0.9, 0.2, 0.6]), 0.2);
    assert_eq!(conjunction(Vec::<f64>::new()), 1.);
    assert_eq!(disjunction([0.1, 0.0, 0.35]), 0.35);
    assert_eq!(disjunction(Vec::<f64>::new()), 0.);
}
