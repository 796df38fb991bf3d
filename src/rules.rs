use crate::degrees::Degrees;
use crate::ops;
use crate::terms::{Distance, FaultType, Magnitude, Pga, Term};

use crate::terms::Pga::{Low, Medium, Much, VeryLow, VeryMuch, VeryVeryMuch};

/// Consequent of every antecedent combination, indexed
/// `[fault type][distance][magnitude]` in term declaration order.
///
/// Closer sources, larger magnitudes and more thrust-like faulting all push
/// the expected acceleration up.
const CONSEQUENTS: [[[Pga; 5]; 4]; 3] = [
    // Normal
    [
        [Low, Medium, Much, VeryMuch, VeryMuch],
        [VeryLow, Low, Medium, Much, VeryMuch],
        [VeryLow, VeryLow, Low, Medium, Much],
        [VeryLow, VeryLow, VeryLow, Low, Medium],
    ],
    // Oblique
    [
        [Medium, Much, VeryMuch, VeryMuch, VeryVeryMuch],
        [Low, Medium, Much, VeryMuch, VeryMuch],
        [VeryLow, Low, Medium, Much, VeryMuch],
        [VeryLow, VeryLow, Low, Medium, Much],
    ],
    // Thrust
    [
        [Much, VeryMuch, VeryVeryMuch, VeryVeryMuch, VeryVeryMuch],
        [Medium, Much, VeryMuch, VeryMuch, VeryVeryMuch],
        [Low, Medium, Much, VeryMuch, VeryMuch],
        [VeryLow, Low, Medium, Much, VeryMuch],
    ],
];

/// IF magnitude AND distance AND fault type THEN pga
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rule {
    pub(crate) magnitude: Magnitude,
    pub(crate) distance: Distance,
    pub(crate) fault_type: FaultType,
    pub(crate) consequent: Pga,
}

impl Rule {
    pub fn antecedent(&self) -> (Magnitude, Distance, FaultType) {
        (self.magnitude, self.distance, self.fault_type)
    }

    pub fn consequent(&self) -> Pga {
        self.consequent
    }

    /// Degree to which the premise holds: the t-norm of the three antecedent
    /// degrees.
    pub fn firing_strength(
        &self,
        magnitude: &Degrees<Magnitude>,
        distance: &Degrees<Distance>,
        fault_type: &Degrees<FaultType>,
    ) -> f64 {
        ops::conjunction([
            magnitude.get(self.magnitude),
            distance.get(self.distance),
            fault_type.get(self.fault_type),
        ])
    }
}

#[derive(Clone, Debug)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    /// The full 5 x 4 x 3 rule base, one rule per antecedent combination.
    pub fn standard() -> Self {
        let mut rules = Vec::with_capacity(Magnitude::ALL.len() * Distance::ALL.len() * FaultType::ALL.len());

        for &fault_type in FaultType::ALL {
            for &distance in Distance::ALL {
                for &magnitude in Magnitude::ALL {
                    rules.push(Rule {
                        magnitude,
                        distance,
                        fault_type,
                        consequent: CONSEQUENTS[fault_type as usize][distance as usize][magnitude as usize],
                    });
                }
            }
        }

        Rules(rules)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn consequent(&self, magnitude: Magnitude, distance: Distance, fault_type: FaultType) -> Option<Pga> {
        self.0
            .iter()
            .find(|rule| rule.antecedent() == (magnitude, distance, fault_type))
            .map(Rule::consequent)
    }

    /// Fires every rule and aggregates the strengths of rules sharing a
    /// consequent. Rules that do not fire are still evaluated and recorded
    /// with a zero alpha.
    pub fn fire(
        &self,
        magnitude: &Degrees<Magnitude>,
        distance: &Degrees<Distance>,
        fault_type: &Degrees<FaultType>,
    ) -> Degrees<Pga> {
        let mut aggregated = Degrees::new();

        for rule in &self.0 {
            let alpha = rule.firing_strength(magnitude, distance, fault_type);

            aggregated.raise(rule.consequent, alpha);
        }

        aggregated
    }
}

impl<'r> IntoIterator for &'r Rules {
    type Item = &'r Rule;
    type IntoIter = std::slice::Iter<'r, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[test]
fn test_rule_base_is_complete() {
    let rules = Rules::standard();

    assert_eq!(rules.len(), 60);

    for &magnitude in Magnitude::ALL {
        for &distance in Distance::ALL {
            for &fault_type in FaultType::ALL {
                let matching = rules
                    .iter()
                    .filter(|rule| rule.antecedent() == (magnitude, distance, fault_type))
                    .count();

                assert_eq!(matching, 1, "{magnitude} / {distance} / {fault_type}");
            }
        }
    }

    // Every output term is some rule's consequent
    for &pga in Pga::ALL {
        assert!(rules.iter().any(|rule| rule.consequent() == pga), "{pga}");
    }
}

#[test]
fn test_consequent_lookup() {
    let rules = Rules::standard();

    assert_eq!(
        rules.consequent(Magnitude::Short, Distance::Near, FaultType::Normal),
        Some(Low)
    );
    assert_eq!(
        rules.consequent(Magnitude::Large, Distance::Near, FaultType::Thrust),
        Some(VeryVeryMuch)
    );
    assert_eq!(
        rules.consequent(Magnitude::VeryVeryLarge, Distance::VeryFar, FaultType::Normal),
        Some(Medium)
    );
    assert_eq!(
        rules.consequent(Magnitude::Medium, Distance::Far, FaultType::Oblique),
        Some(Low)
    );
}

#[test]
fn test_hazard_grows_toward_near_large_thrust() {
    let rules = Rules::standard();

    for &fault_type in FaultType::ALL {
        for &distance in Distance::ALL {
            for pair in Magnitude::ALL.windows(2) {
                let smaller = rules.consequent(pair[0], distance, fault_type);
                let larger = rules.consequent(pair[1], distance, fault_type);

                assert!(smaller <= larger);
            }
        }

        for &magnitude in Magnitude::ALL {
            for pair in Distance::ALL.windows(2) {
                let closer = rules.consequent(magnitude, pair[0], fault_type);
                let farther = rules.consequent(magnitude, pair[1], fault_type);

                assert!(closer >= farther);
            }
        }
    }
}

#[test]
fn test_firing_strength_is_minimum() {
    let rule = Rule {
        magnitude: Magnitude::Large,
        distance: Distance::Near,
        fault_type: FaultType::Thrust,
        consequent: VeryVeryMuch,
    };
    let magnitude: Degrees<_> = [(Magnitude::Large, 0.6)].into_iter().collect();
    let distance: Degrees<_> = [(Distance::Near, 0.9)].into_iter().collect();
    let fault_type: Degrees<_> = [(FaultType::Thrust, 0.3)].into_iter().collect();

    assert_eq!(rule.firing_strength(&magnitude, &distance, &fault_type), 0.3);

    // A term without any degree does not let the rule fire
    let unknown: Degrees<FaultType> = Degrees::new();

    assert_eq!(rule.firing_strength(&magnitude, &distance, &unknown), 0.);
}

#[test]
fn test_fire_aggregates_with_maximum() {
    let rules = Rules::standard();
    let magnitude: Degrees<_> = [(Magnitude::Large, 0.4), (Magnitude::VeryLarge, 0.7)].into_iter().collect();
    let distance: Degrees<_> = [(Distance::Near, 1.)].into_iter().collect();
    let fault_type: Degrees<_> = [(FaultType::Thrust, 0.5), (FaultType::Oblique, 0.2)].into_iter().collect();

    let aggregated = rules.fire(&magnitude, &distance, &fault_type);

    // Large/Near/Thrust (0.4) and VeryLarge/Near/Thrust (0.5) both conclude VeryVeryMuch
    assert_eq!(aggregated.get(VeryVeryMuch), 0.5);
    // Large/Near/Oblique (0.2) and VeryLarge/Near/Oblique (0.2) conclude VeryMuch
    assert_eq!(aggregated.get(VeryMuch), 0.2);
    assert_eq!(aggregated.get(Much), 0.);
    assert_eq!(aggregated.len(), Pga::ALL.len());
}
