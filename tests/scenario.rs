use iso11855_toolbox::app;
use iso11855_toolbox::iso11855::{Iso11855Error, SystemLayout, SystemType};
use iso11855_toolbox::scenario::{Scenario, ScenarioError, SystemSpec};

const TWO_SYSTEMS: &str = r#"
[[system]]
name = "Living room"
system_type = "A"
W = 0.15
R_k_B = 0.1
t_F_max = 29.0

[[system]]
name = "Bathroom"
system_type = "B"
case_of_application = "Floor Heating"
L_WL = 0.08
R_ins = 1.25
t_u = 15.0
"#;

#[test]
fn scenario_keys_override_defaults() {
    let scenario = Scenario::from_toml_str(TWO_SYSTEMS).expect("parse");
    assert_eq!(scenario.system.len(), 2);

    let living = &scenario.system[0];
    assert_eq!(living.W, 0.15);
    assert_eq!(living.R_k_B, 0.1);
    assert_eq!(living.s_u, 0.045);
    assert_eq!(living.t_F_max, Some(29.0));
    assert_eq!(living.lower_construction(), None);

    let bathroom = &scenario.system[1];
    assert_eq!(bathroom.W, 0.10);
    let lower = bathroom.lower_construction().expect("R_ins given");
    assert_eq!(lower.insulation_resistance, 1.25);
    assert_eq!(lower.temperature_below, 15.0);

    let inputs = scenario.inputs().expect("inputs");
    assert_eq!(inputs[0].layout.system_type(), SystemType::A);
    assert!(matches!(
        inputs[1].layout,
        SystemLayout::B { spacing, device } if spacing == 0.10 && device.width == 0.08
    ));
}

#[test]
fn scenario_evaluates_through_application_path() {
    let scenario = Scenario::from_toml_str(TWO_SYSTEMS).expect("parse");
    let reports = app::evaluate_scenario(&scenario).expect("evaluate");
    assert_eq!(reports.len(), 2);
    assert!(reports[0].limit_curve.is_some());
    assert!(reports[0].downward_heat_loss.is_none());
    assert!(reports[1].limit_curve.is_none());
    let loss = reports[1].downward_heat_loss.expect("downward loss");
    assert!(loss.heat_flux > 0.0);
}

#[test]
fn sample_scenario_matches_reference_systems() {
    let scenario = Scenario::sample();
    let names: Vec<&str> = scenario.system.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["System A", "System B", "System D"]);

    let reports = app::evaluate_scenario(&scenario).expect("evaluate sample");
    let q: Vec<f64> = reports.iter().map(|r| r.system.heat_flux()).collect();
    assert!((q[0] - 87.5768).abs() < 1e-3, "{q:?}");
    assert!((q[1] - 89.9056).abs() < 1e-3, "{q:?}");
    assert!((q[2] - 99.8632).abs() < 1e-3, "{q:?}");
}

#[test]
fn sample_scenario_survives_toml_serialization() {
    let sample = Scenario::sample();
    let text = toml::to_string(&sample).expect("serialize");
    let parsed = Scenario::from_toml_str(&text).expect("parse back");
    assert_eq!(parsed, sample);
}

#[test]
fn invalid_scenarios_are_reported() {
    assert!(matches!(
        Scenario::from_toml_str("title = \"nothing\""),
        Err(ScenarioError::Parse(_))
    ));
    assert!(matches!(Scenario::from_toml_str(""), Err(ScenarioError::Empty)));
    assert!(matches!(
        Scenario::from_toml_str("[[system]]\nW = \"wide\""),
        Err(ScenarioError::Parse(_))
    ));

    let bad_type = Scenario {
        system: vec![SystemSpec {
            name: "bad".into(),
            system_type: "Z".into(),
            ..SystemSpec::default()
        }],
    };
    match bad_type.inputs() {
        Err(ScenarioError::Invalid { name, source }) => {
            assert_eq!(name, "bad");
            assert!(matches!(source, Iso11855Error::InvalidConfiguration(_)));
        }
        other => panic!("expected invalid scenario, got {other:?}"),
    }
}

#[test]
fn missing_scenario_file_is_io_error() {
    let path = std::env::temp_dir().join("iso11855-missing-scenario.toml");
    assert!(matches!(Scenario::load(&path), Err(ScenarioError::Io(_))));
}

#[test]
fn bundled_reference_scenario_evaluates() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/reference.toml");
    let scenario = Scenario::load(&path).expect("reference scenario");
    let reports = app::evaluate_scenario(&scenario).expect("evaluate");
    assert_eq!(reports.len(), 3);
    assert!(reports[0].limit_curve.is_some() && reports[0].downward_heat_loss.is_some());
    assert!(reports[1].limit_curve.is_some());
    assert!((reports[2].system.heat_flux() - 99.86).abs() < 0.01);
}

#[test]
fn limit_curves_skip_system_d_case_insensitively() {
    let scenario = Scenario::from_toml_str(
        r#"
[[system]]
name = "floor"
system_type = "a"

[[system]]
name = "dry"
system_type = "d"
"#,
    )
    .expect("parse")
    .with_limit_curves(29.0)
    .expect("known types");
    assert_eq!(scenario.system[0].t_F_max, Some(29.0));
    assert_eq!(scenario.system[1].t_F_max, None);

    let reports = app::evaluate_scenario(&scenario).expect("evaluate");
    assert!(reports[0].limit_curve.is_some());
    assert!(reports[1].limit_curve.is_none());

    let unknown = Scenario {
        system: vec![SystemSpec {
            system_type: "Q".into(),
            ..SystemSpec::default()
        }],
    };
    assert!(matches!(
        unknown.with_limit_curves(29.0),
        Err(ScenarioError::Invalid { .. })
    ));
}
