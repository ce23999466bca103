use iso11855_toolbox::iso11855::{functions as f, RadiantSystem, RadiantSystemInput};
use iso11855_toolbox::scenario::SystemSpec;
use proptest::prelude::*;

fn build(spec: &SystemSpec) -> RadiantSystem {
    let input = RadiantSystemInput::try_from(spec).expect("valid input");
    RadiantSystem::build(input).expect("system")
}

fn nearly_equal(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1e-12)
}

proptest! {
    #[test]
    fn heat_flux_equals_k_h_times_deltat(
        w in 0.05_f64..0.375,
        r_k_b in 0.0_f64..0.15,
        system_type in prop::sample::select(vec!["A", "C", "D", "H", "I", "J"]),
    ) {
        let system = build(&SystemSpec {
            system_type: system_type.into(),
            W: w,
            R_k_B: r_k_b,
            ..SystemSpec::default()
        });
        prop_assert!(system.k_h() > 0.0);
        prop_assert!(nearly_equal(system.heat_flux(), system.k_h() * system.deltat_h(), 1e-12));
    }

    #[test]
    fn system_d_coefficient_is_fixed(
        w in 0.0_f64..1.0,
        s_u in 0.01_f64..0.1,
        r_k_b in 0.0_f64..0.15,
        k_e in 0.5_f64..2.5,
        d_a in 0.012_f64..0.025,
        d_m in 0.0_f64..0.03,
        t_v in 30.0_f64..50.0,
    ) {
        let system = build(&SystemSpec {
            system_type: "D".into(),
            W: w,
            s_u,
            R_k_B: r_k_b,
            k_E: k_e,
            external_diameter: d_a,
            d_M: d_m,
            t_V: t_v,
            t_R: t_v - 5.0,
            ..SystemSpec::default()
        });
        prop_assert_eq!(system.base_coefficient(), 6.5);
        prop_assert_eq!(system.coefficient_b(), 6.5);
    }

    #[test]
    fn wide_spacing_heat_flux_scales_inversely(w in 0.376_f64..1.0) {
        let reference = build(&SystemSpec { W: 0.375, ..SystemSpec::default() });
        let wide = build(&SystemSpec { W: w, ..SystemSpec::default() });
        prop_assert!(nearly_equal(wide.heat_flux() * w, reference.heat_flux() * 0.375, 1e-9));
    }

    #[test]
    fn log_mean_difference_is_offset_invariant(
        supply in 2.0_f64..40.0,
        frac in 0.05_f64..0.95,
        t_i in -10.0_f64..30.0,
        offset in -100.0_f64..300.0,
    ) {
        let ret = supply * frac;
        let base = f::log_mean_temperature_difference(t_i + supply, t_i + ret, t_i).expect("lmtd");
        let shifted = f::log_mean_temperature_difference(
            t_i + supply + offset,
            t_i + ret + offset,
            t_i + offset,
        )
        .expect("shifted lmtd");
        prop_assert!(nearly_equal(base, shifted, 1e-6));
        // 로그 평균은 두 온도차 사이에 있다
        prop_assert!(base > ret && base < supply);
    }

    #[test]
    fn floor_heating_flux_is_symmetric(t_i in 15.0_f64..25.0, delta in 0.0_f64..15.0) {
        let above = f::heat_flux_floor_heating(t_i + delta, t_i);
        let below = f::heat_flux_floor_heating(t_i - delta, t_i);
        prop_assert!(above >= 0.0);
        prop_assert!((above - below).abs() <= 1e-9);
    }

    #[test]
    fn trilinear_device_factor_stays_within_table_range(
        k_wl in 0.0_f64..0.5,
        w in 0.05_f64..0.45,
        d in 0.014_f64..0.022,
    ) {
        let a_wl = f::device_factor_low(k_wl, w, d).expect("in domain");
        prop_assert!((0.0..=1.2).contains(&a_wl), "a_WL = {}", a_wl);
    }
}
