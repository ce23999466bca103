use std::fs;

use iso11855_toolbox::config::{self, Config};
use iso11855_toolbox::units::{
    convert_length, convert_temperature, HeatFluxUnit, LengthUnit, TemperatureUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn display_lengths_convert_to_meters() {
    assert_close("cm", LengthUnit::Centimeter.to_meter(10.0), 0.1, 1e-12);
    assert_close("mm", LengthUnit::Millimeter.from_meter(0.016), 16.0, 1e-12);
    assert_close("in", convert_length(1.0, LengthUnit::Inch, LengthUnit::Millimeter), 25.4, 1e-12);
}

#[test]
fn display_temperatures_convert_to_celsius() {
    assert_close("K", TemperatureUnit::Kelvin.to_celsius(293.15), 20.0, 1e-12);
    assert_close("F", TemperatureUnit::Fahrenheit.to_celsius(104.0), 40.0, 1e-12);
    assert_close(
        "C->F",
        convert_temperature(35.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        95.0,
        1e-12,
    );
    assert_close("dT F", TemperatureUnit::Fahrenheit.difference_from_kelvin(5.0), 9.0, 1e-12);
    assert_close("Btu", HeatFluxUnit::BtuPerHourSquareFoot.from_base(3.154591), 1.0, 1e-12);
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = std::env::temp_dir().join(format!("iso11855-config-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);

    let cfg = config::load_or_default(&path).expect("create config");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = config::load_or_default(&path).expect("reload config");
    assert_eq!(reloaded, cfg);
    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn partial_config_keeps_other_defaults() {
    let cfg: Config = toml::from_str("precision = 4").expect("parse");
    assert_eq!(cfg.precision, 4);
    assert_eq!(cfg.display_units.pipe_spacing, LengthUnit::Centimeter);
    assert_eq!(cfg.display_units.temperature, TemperatureUnit::Celsius);
}
