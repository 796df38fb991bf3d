use fdsha::{Degrees, Distance, FaultType, FdshaEngine, Inputs, Magnitude, Pga, Shape, Term};
use proptest::prelude::*;

fn engine() -> &'static FdshaEngine {
    use std::sync::OnceLock;

    static ENGINE: OnceLock<FdshaEngine> = OnceLock::new();

    ENGINE.get_or_init(FdshaEngine::new)
}

fn shape() -> impl Strategy<Value = Shape> {
    let triangular = prop::array::uniform3(-100.0..100.0f64).prop_map(|mut points| {
        points.sort_by(f64::total_cmp);
        Shape::triangular(points[0], points[1], points[2])
    });
    let trapezoidal = prop::array::uniform4(-100.0..100.0f64).prop_map(|mut points| {
        points.sort_by(f64::total_cmp);
        Shape::trapezoidal(points[0], points[1], points[2], points[3])
    });

    prop_oneof![triangular, trapezoidal]
}

proptest! {
    #[test]
    fn hazard_stays_within_pga_universe(
        magnitude in -1e6..1e6f64,
        distance in -1e6..1e6f64,
        fault_index in -1e3..1e3f64,
    ) {
        let pga = engine().compute_hazard(magnitude, distance, fault_index);

        prop_assert!(pga.is_finite());
        prop_assert!((0.0..=0.9).contains(&pga), "{pga}");
    }

    #[test]
    fn hazard_stays_within_pga_universe_for_typical_inputs(
        magnitude in 4.5..=8.5f64,
        distance in 0.0..=200.0f64,
        fault_index in -0.1..=0.1f64,
    ) {
        let pga = engine().compute_hazard(magnitude, distance, fault_index);

        prop_assert!((0.0..=0.9).contains(&pga), "{pga}");
    }

    #[test]
    fn repeated_calls_are_bit_identical(
        magnitude in 4.0..9.0f64,
        distance in -10.0..250.0f64,
        fault_index in -0.2..0.2f64,
    ) {
        let first = engine().compute_hazard(magnitude, distance, fault_index);
        let second = engine().compute_hazard(magnitude, distance, fault_index);

        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn degree_is_within_unit_interval(shape in shape(), x in -150.0..150.0f64) {
        let degree = shape.degree(x);
        let (first, last) = shape.support();

        prop_assert!((0.0..=1.0).contains(&degree));
        if x <= first || x >= last {
            prop_assert_eq!(degree, 0.);
        }
    }

    #[test]
    fn firing_strength_never_exceeds_an_antecedent(
        magnitude in 4.0..9.0f64,
        distance in -10.0..250.0f64,
        fault_index in -0.2..0.2f64,
    ) {
        let engine = engine();
        let outputs = engine.eval(&Inputs::new(magnitude, distance, fault_index));

        for rule in engine.rules() {
            let (m, r, f) = rule.antecedent();
            let alpha = rule.firing_strength(outputs.magnitude(), outputs.distance(), outputs.fault_type());
            let degrees = [
                outputs.magnitude().get(m),
                outputs.distance().get(r),
                outputs.fault_type().get(f),
            ];

            prop_assert!(degrees.iter().all(|degree| alpha <= *degree));
            prop_assert!(degrees.contains(&alpha));
            prop_assert!(alpha <= outputs.aggregated().get(rule.consequent()));
        }
    }

    #[test]
    fn aggregate_is_the_strongest_rule(
        magnitude in 4.0..9.0f64,
        distance in -10.0..250.0f64,
        fault_index in -0.2..0.2f64,
    ) {
        let engine = engine();
        let outputs = engine.eval(&Inputs::new(magnitude, distance, fault_index));

        for &term in Pga::ALL {
            let strongest = engine
                .rules()
                .iter()
                .filter(|rule| rule.consequent() == term)
                .map(|rule| rule.firing_strength(outputs.magnitude(), outputs.distance(), outputs.fault_type()))
                .fold(0., f64::max);

            prop_assert_eq!(outputs.aggregated().get(term), strongest);
        }
    }

    #[test]
    fn weaker_rule_never_changes_aggregate(alphas in prop::collection::vec(0.0..=1.0f64, 1..20), weaker in 0.0..=1.0f64) {
        let mut degrees = Degrees::new();

        for alpha in &alphas {
            degrees.raise(Pga::Much, *alpha);
        }

        let before = degrees.get(Pga::Much);

        degrees.raise(Pga::Much, weaker * before);

        prop_assert_eq!(degrees.get(Pga::Much), before);
    }
}

#[test]
fn fuzzify_covers_every_term() {
    let engine = engine();

    assert_eq!(engine.magnitude().fuzzify(6.5).len(), Magnitude::ALL.len());
    assert_eq!(engine.distance().fuzzify(500.).len(), Distance::ALL.len());
    assert_eq!(engine.fault_type().fuzzify(0.).len(), FaultType::ALL.len());
}

#[test]
fn engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<FdshaEngine>();

    let engine = engine();
    let expected = engine.compute_hazard(7.2, 15.0, 0.08);
    let results: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.compute_hazard(7.2, 15.0, 0.08)))
            .collect();

        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(results.iter().all(|pga| pga.to_bits() == expected.to_bits()));
}
