use std::fmt;

pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::membership::Shape;

/// A linguistic term of one variable, e.g. `Distance::Near`.
///
/// Terms are closed enums so that every per-term table (shapes, degrees,
/// aggregated alphas) is a fixed-size map indexed by the term's ordinal.
pub trait Term: Key + fmt::Debug + 'static {
    /// Every term of the variable in declaration order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
}

macro_rules! terms {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            ::fixed_map::Key,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        $vis enum $name {
            $($variant,)+
        }

        impl Term for $name {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn name(self) -> &'static str {
                const NAMES: &[&str] = &[$($label,)+];

                NAMES[self as usize]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

terms! {
    /// Maximum credible magnitude (Mmax)
    pub enum Magnitude {
        Short => "Short",
        Medium => "Medium",
        Large => "Large",
        VeryLarge => "VeryLarge",
        VeryVeryLarge => "VeryVeryLarge",
    }
}

terms! {
    /// Source-to-site distance (R)
    pub enum Distance {
        Near => "Near",
        Medium => "Medium",
        Far => "Far",
        VeryFar => "VeryFar",
    }
}

terms! {
    /// Fault type index (F)
    pub enum FaultType {
        Normal => "Normal",
        Oblique => "Oblique",
        Thrust => "Thrust",
    }
}

terms! {
    /// Peak ground acceleration, the only output variable
    pub enum Pga {
        VeryLow => "VeryLow",
        Low => "Low",
        Medium => "Medium",
        Much => "Much",
        VeryMuch => "VeryMuch",
        VeryVeryMuch => "VeryVeryMuch",
    }
}

/// The membership shapes of a variable's terms, keyed by term.
pub struct Terms<K: Term>(pub(crate) FixedMap<K, Shape>);

impl<K: Term> Default for Terms<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Term> Terms<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, key: K, shape: Shape) {
        self.0.insert(key, shape);
    }

    /// True when every term of `K` has a shape.
    pub fn is_complete(&self) -> bool {
        K::ALL.iter().all(|term| self.0.contains_key(*term))
    }
}

impl<K: Term> FromIterator<(K, Shape)> for Terms<K> {
    fn from_iter<I: IntoIterator<Item = (K, Shape)>>(iter: I) -> Self {
        let mut terms = Terms::new();

        for (key, shape) in iter {
            terms.insert(key, shape);
        }

        terms
    }
}

#[test]
fn test_term_names_follow_ordinals() {
    assert_eq!(Magnitude::ALL.len(), 5);
    assert_eq!(Distance::ALL.len(), 4);
    assert_eq!(FaultType::ALL.len(), 3);
    assert_eq!(Pga::ALL.len(), 6);

    assert_eq!(Magnitude::VeryVeryLarge.name(), "VeryVeryLarge");
    assert_eq!(Distance::Medium.name(), "Medium");
    assert_eq!(FaultType::Thrust.to_string(), "Thrust");
    assert_eq!(Pga::Much.to_string(), "Much");

    for (i, term) in Pga::ALL.iter().enumerate() {
        assert_eq!(*term as usize, i);
    }
}

#[test]
fn test_terms_completeness() {
    let mut terms = Terms::new();

    terms.insert(FaultType::Normal, Shape::trapezoidal(-0.1, -0.1, -0.05, 0.0));
    terms.insert(FaultType::Oblique, Shape::triangular(-0.05, 0.0, 0.05));
    assert!(!terms.is_complete());

    terms.insert(FaultType::Thrust, Shape::trapezoidal(0.0, 0.05, 0.1, 0.1));
    assert!(terms.is_complete());
}
