//! End-to-end runs over the bundled scenario fixtures.

use approx::assert_relative_eq;
use stresscheck::analysis::run_scenario;
use stresscheck::units::StressUnit;

#[test]
fn test_ductile_yaml_scenario_end_to_end() {
    let report = run_scenario("tests/data/ductile_scenario.yaml").expect("scenario run failed");

    assert_eq!(report.scenario, "bracket_vm_check");
    assert_eq!(report.unit, StressUnit::Si);

    // sigma_x comes from the expression F / A over the parameter table
    assert_relative_eq!(report.stress.state.sigma_x, 80.0, epsilon = 1e-9);
    assert_relative_eq!(report.stress.principal.sigma_1, 80.0, epsilon = 1e-9);
    assert_relative_eq!(report.stress.principal.sigma_3, 0.0, epsilon = 1e-9);
    assert_relative_eq!(report.stress.tau_max, 40.0, epsilon = 1e-9);

    let ductile = report.ductile.expect("ductile section missing");
    assert_relative_eq!(ductile.von_mises.equivalent_stress, 80.0, epsilon = 1e-9);
    assert_relative_eq!(
        ductile.von_mises.factor_of_safety.value().unwrap(),
        95.0 / 80.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        ductile.tresca.factor_of_safety.value().unwrap(),
        95.0 / 80.0,
        epsilon = 1e-9
    );

    let cyclic = report.cyclic.expect("cyclic section missing");
    assert_relative_eq!(
        cyclic.modified_goodman.value().unwrap(),
        1.0 / (20.0 / 40.0 + 30.0 / 110.0),
        epsilon = 1e-5
    );
    assert_relative_eq!(
        cyclic.soderberg.value().unwrap(),
        1.0 / (20.0 / 40.0 + 30.0 / 95.0),
        epsilon = 1e-5
    );
    let gerber = cyclic.gerber.value().unwrap();
    assert_relative_eq!(gerber, 1.612969, epsilon = 1e-4);
    // the reported factor solves n^2 (Sm/Sut)^2 + n Sa/Se - 1 = 0
    let residual = gerber.powi(2) * (30.0f64 / 110.0).powi(2) + gerber * 0.5 - 1.0;
    assert!(residual.abs() < 1e-6, "gerber residual {}", residual);

    // the 20 kpsi amplitude sits below the endurance strength
    assert!(cyclic.infinite_life);
    assert_relative_eq!(cyclic.life_cycles, 1.0e7, epsilon = 1e-3);

    assert!(report.brittle.is_none());
}

#[test]
fn test_brittle_toml_scenario_end_to_end() {
    let report = run_scenario("tests/data/brittle_scenario.toml").expect("scenario run failed");

    assert_eq!(report.scenario, "cast_bracket");
    assert_eq!(report.unit, StressUnit::Uscs);
    assert!(report.ductile.is_none());
    assert!(report.cyclic.is_none());

    // (20, -45, 30) has mean -12.5 and radius 44.229515
    assert_relative_eq!(report.stress.principal.sigma_1, 31.729515, epsilon = 1e-6);
    assert_relative_eq!(report.stress.principal.sigma_3, -56.729515, epsilon = 1e-6);

    let brittle = report.brittle.expect("brittle section missing");
    assert_relative_eq!(
        brittle.coulomb_mohr.factor_of_safety.value().unwrap(),
        0.86,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        brittle.modified_mohr.factor_of_safety.value().unwrap(),
        1.24,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        brittle.maximum_normal_stress.factor_of_safety.value().unwrap(),
        1.59,
        epsilon = 1e-9
    );

    // only the most conservative envelope predicts fracture here
    assert!(!brittle.coulomb_mohr.factor_of_safety.is_safe());
    assert!(brittle.modified_mohr.factor_of_safety.is_safe());
    assert!(brittle.maximum_normal_stress.factor_of_safety.is_safe());
}

#[test]
fn test_report_json_round_trip_keys() {
    let report = run_scenario("tests/data/ductile_scenario.yaml").unwrap();
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scenario"], "bracket_vm_check");
    assert_eq!(value["unit"], "SI");
    assert!(value["stress"]["angles"]["theta_1"].is_f64());
    assert!(value["cyclic"]["infinite_life"].as_bool().unwrap());
    assert!(value.get("brittle").is_none());
}
