use approx::assert_relative_eq;
use fdsha::{EngineConfig, FdshaEngine, HazardVerdict, Inputs, Pga};

#[test]
fn major_thrust_event_close_to_site() {
    let engine = FdshaEngine::new();
    let outputs = engine.eval(&Inputs::new(7.2, 15.0, 0.08));

    assert!(outputs.pga() > 0.5);
    assert_relative_eq!(outputs.pga(), 0.8317, epsilon = 1e-4);
    assert_eq!(outputs.verdict(), HazardVerdict::Extreme);
    assert_eq!(outputs.aggregated().dominant().map(|(term, _)| term), Some(Pga::VeryVeryMuch));
}

#[test]
fn moderate_oblique_event_at_medium_distance() {
    let pga = fdsha::compute_hazard(6.0, 50.0, 0.0);

    // Only "Medium" fires, and that set is symmetric around 0.30
    assert_relative_eq!(pga, 0.30, epsilon = 1e-5);
    assert_eq!(HazardVerdict::from_pga(pga), HazardVerdict::Moderate);
}

#[test]
fn small_normal_event_far_away() {
    let pga = fdsha::compute_hazard(5.2, 120.0, -0.08);

    assert_relative_eq!(pga, 0.0636, epsilon = 1e-4);
    assert_eq!(HazardVerdict::from_pga(pga), HazardVerdict::Negligible);
}

#[test]
fn inputs_outside_every_set_fall_back_to_midpoint() {
    let engine = FdshaEngine::new();

    assert_eq!(engine.compute_hazard(0.0, 1000.0, 5.0), 0.45);
    assert_eq!(engine.compute_hazard(f64::NAN, f64::NAN, f64::NAN), 0.45);
    assert_eq!(engine.compute_hazard(f64::INFINITY, f64::NEG_INFINITY, 0.08), 0.45);
}

#[test]
fn hazard_increases_as_the_source_gets_closer() {
    let engine = FdshaEngine::new();
    let near = engine.compute_hazard(7.0, 10.0, 0.08);
    let medium = engine.compute_hazard(7.0, 50.0, 0.08);
    let far = engine.compute_hazard(7.0, 100.0, 0.08);
    let very_far = engine.compute_hazard(7.0, 180.0, 0.08);

    assert!(near > medium, "{near} <= {medium}");
    assert!(medium > far, "{medium} <= {far}");
    assert!(far > very_far, "{far} <= {very_far}");
}

#[test]
fn hazard_increases_toward_thrust_faulting() {
    let engine = FdshaEngine::new();
    let normal = engine.compute_hazard(6.7, 50.0, -0.08);
    let oblique = engine.compute_hazard(6.7, 50.0, 0.0);
    let thrust = engine.compute_hazard(6.7, 50.0, 0.08);

    assert!(normal < oblique, "{normal} >= {oblique}");
    assert!(oblique < thrust, "{oblique} >= {thrust}");
}

#[test]
fn coarser_resolution_stays_close() {
    let coarse = FdshaEngine::with_config(&EngineConfig { resolution: 200 }).unwrap();
    let fine = FdshaEngine::with_config(&EngineConfig { resolution: 20_000 }).unwrap();

    for (magnitude, distance, fault_index) in [(7.2, 15.0, 0.08), (6.0, 50.0, 0.0), (8.0, 30.0, 0.02)] {
        assert_relative_eq!(
            coarse.compute_hazard(magnitude, distance, fault_index),
            fine.compute_hazard(magnitude, distance, fault_index),
            epsilon = 5e-3
        );
    }
}

#[test]
fn batch_matches_single_calls() {
    let engine = FdshaEngine::new();
    let sites: Vec<Inputs> = (0..40)
        .map(|i| Inputs::new(4.5 + 0.1 * i as f64, 5.0 * i as f64, -0.1 + 0.005 * i as f64))
        .collect();

    let batch = engine.compute_batch(&sites);

    for (site, pga) in sites.iter().zip(batch) {
        assert_eq!(engine.eval(site).pga(), pga);
    }
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("fdsha-config-{}.toml", std::process::id()));

    std::fs::write(&path, "resolution = 500\n").unwrap();

    let config = EngineConfig::load(&path).unwrap();
    let engine = FdshaEngine::with_config(&config).unwrap();

    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.resolution, 500);
    assert_eq!(engine.defuzzifier().resolution().get(), 500);
}
