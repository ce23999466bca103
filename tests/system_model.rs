//! 시스템 모델 회귀 테스트.
//!
//! 기준 시스템(W = 0.10 m, 나머지 기본값)의 열유속은 같은 식을 독립적으로 계산한
//! 값과 비교하고, 공개 예제 값(A 88.12, B 91.41, D 99.86 W/m²)과는 느슨하게 비교한다.
use approx::assert_relative_eq;
use iso11855_toolbox::iso11855::{
    functions as f, CaseOfApplication, FamilyDetails, Iso11855Error, LowerConstruction, Mode,
    RadiantSystem, RadiantSystemInput, Surface, SystemLayout, SystemType,
};
use iso11855_toolbox::scenario::SystemSpec;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn spec(system_type: &str) -> SystemSpec {
    SystemSpec {
        name: format!("System {system_type}"),
        system_type: system_type.into(),
        ..SystemSpec::default()
    }
}

fn build(spec: &SystemSpec) -> Result<RadiantSystem, Iso11855Error> {
    RadiantSystem::build(RadiantSystemInput::try_from(spec)?)
}

#[test]
fn reference_system_a() {
    let system = build(&spec("A")).expect("system A");
    assert_close("q_A", system.heat_flux(), 87.576_834_761_385_54, 1e-9);
    assert_close("q_A published", system.heat_flux(), 88.12, 0.01);
    assert_eq!(system.base_coefficient(), 6.7);
    assert_eq!(system.surface_heat_transfer_coefficient(), 10.8);
    assert_eq!(system.effective_diameter(), 0.016);
    assert_close("lambda_E'", system.screed_conductivity(), 1.735, 1e-12);
}

#[test]
fn reference_system_b() {
    let system = build(&spec("B")).expect("system B");
    assert_close("q_B", system.heat_flux(), 89.905_608_658_137_9, 1e-9);
    assert_close("q_B published", system.heat_flux(), 91.41, 0.02);
    match system.details() {
        FamilyDetails::B {
            factors,
            device_characteristic,
            ..
        } => {
            assert_close("K_WL", *device_characteristic, 1.448, 1e-12);
            assert_close("m_W", factors.m_w, 1.0 - 0.1 / 0.075, 1e-12);
            assert_eq!(factors.a_k, 0.98);
        }
        other => panic!("unexpected details {other:?}"),
    }
}

#[test]
fn reference_system_d() {
    let system = build(&spec("D")).expect("system D");
    assert_close("q_D", system.heat_flux(), 99.863_165_551_070_58, 1e-9);
    assert!((system.heat_flux() - 99.86).abs() < 0.01);
    assert_eq!(system.coefficient_b(), 6.5);
    assert_eq!(system.input().layout, SystemLayout::D);
}

#[test]
fn heat_flux_is_transmission_times_temperature_difference() {
    for t in SystemType::ALL {
        let system = build(&spec(t.as_str())).expect("reference system");
        assert_eq!(system.heat_flux(), system.k_h() * system.deltat_h(), "{t}");
        assert!(system.k_h() > 0.0);
    }
}

#[test]
fn achij_types_share_one_calculation_path() {
    let q_a = build(&spec("A")).expect("A").heat_flux();
    for t in ["C", "H", "I", "J"] {
        assert_eq!(build(&spec(t)).expect(t).heat_flux(), q_a, "{t}");
    }
}

#[test]
fn wide_spacing_scales_reference_result() {
    let at_reference = build(&SystemSpec { W: 0.375, ..spec("A") }).expect("W = 0.375");
    let wide = build(&SystemSpec { W: 0.5, ..spec("A") }).expect("W = 0.5");
    assert_relative_eq!(
        wide.heat_flux(),
        at_reference.heat_flux() * 0.375 / 0.5,
        max_relative = 1e-12
    );
    assert_eq!(wide.coefficient_b(), at_reference.coefficient_b());
    assert!(matches!(
        wide.details(),
        FamilyDetails::Achij { evaluated_spacing, .. } if *evaluated_spacing == 0.375
    ));
}

#[test]
fn fixing_inserts_outside_range_are_ignored() {
    let ignored = build(&SystemSpec { psi: 0.2, ..spec("A") }).expect("psi = 0.2");
    let none = build(&SystemSpec { psi: 0.0, ..spec("A") }).expect("psi = 0");
    assert_eq!(ignored.screed_conductivity(), 1.8);
    assert_eq!(ignored.heat_flux(), none.heat_flux());

    let applied = build(&SystemSpec { psi: 0.15, ..spec("A") }).expect("psi = 0.15");
    assert_close("lambda_E'", applied.screed_conductivity(), 0.85 * 1.8 + 0.15 * 0.5, 1e-12);
}

#[test]
fn thicker_sheathing_selects_sheathed_pipe_factor() {
    let bare = build(&spec("A")).expect("bare");
    let sheathed = build(&SystemSpec { d_M: 0.020, k_M: 0.2, ..spec("A") }).expect("sheathed");
    assert_eq!(sheathed.effective_diameter(), 0.020);
    assert_ne!(sheathed.coefficient_b(), bare.coefficient_b());
}

#[test]
fn system_d_ignores_spacing() {
    let reference = build(&spec("D")).expect("D");
    let odd = build(&SystemSpec { W: 0.0, ..spec("D") }).expect("D with W = 0");
    assert_eq!(reference.heat_flux(), odd.heat_flux());
}

#[test]
fn non_physical_inputs_are_rejected() {
    let thick_wall = SystemSpec { wall_thickness: 0.009, ..spec("A") };
    assert!(matches!(build(&thick_wall), Err(Iso11855Error::NonPhysical { .. })));

    let no_spacing = SystemSpec { W: 0.0, ..spec("A") };
    assert!(matches!(build(&no_spacing), Err(Iso11855Error::NonPhysical { .. })));

    let no_screed = SystemSpec { k_E: 0.0, ..spec("B") };
    assert!(matches!(build(&no_screed), Err(Iso11855Error::NonPhysical { .. })));
}

#[test]
fn system_b_outside_tabulated_spacing_is_out_of_domain() {
    let res = build(&SystemSpec { W: 0.5, ..spec("B") });
    assert!(matches!(res, Err(Iso11855Error::OutOfDomain { .. })), "{res:?}");
}

#[test]
fn equal_supply_and_return_is_degenerate() {
    let res = build(&SystemSpec { t_V: 35.0, t_R: 35.0, ..spec("A") });
    assert!(matches!(
        res,
        Err(Iso11855Error::DegenerateTemperatureDifference { .. })
    ));
}

#[test]
fn unknown_system_type_and_case_are_rejected() {
    assert!(matches!(
        "E".parse::<SystemType>(),
        Err(Iso11855Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        "roof heating".parse::<CaseOfApplication>(),
        Err(Iso11855Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        "floor heating extra".parse::<CaseOfApplication>(),
        Err(Iso11855Error::InvalidConfiguration(_))
    ));
    assert!(build(&SystemSpec { system_type: "X".into(), ..spec("A") }).is_err());

    let parsed: CaseOfApplication = "Ceiling   Cooling".parse().expect("case");
    assert_eq!(parsed, CaseOfApplication::new(Surface::Ceiling, Mode::Cooling));
    assert_eq!("b".parse::<SystemType>().expect("type"), SystemType::B);
}

#[test]
fn surface_coefficients_follow_case_of_application() {
    let cases = [
        ("floor heating", 10.8),
        ("wall heating", 8.0),
        ("ceiling heating", 6.5),
        ("floor cooling", 6.5),
        ("wall cooling", 8.0),
        ("ceiling cooling", 10.8),
    ];
    for (text, alpha) in cases {
        let case: CaseOfApplication = text.parse().expect(text);
        assert_eq!(case.surface_heat_transfer_coefficient(), alpha, "{text}");
        assert_eq!(case.to_string(), text);
    }
    let wall = CaseOfApplication::new(Surface::Wall, Mode::Heating);
    assert_eq!(wall.surface_heat_flux(25.0, 20.0), 40.0);
}

#[test]
fn cooling_gives_negative_heat_flux() {
    let cooling = SystemSpec {
        case_of_application: "ceiling cooling".into(),
        t_i: 26.0,
        t_V: 16.0,
        t_R: 19.0,
        ..spec("A")
    };
    let system = build(&cooling).expect("cooling");
    assert!(system.deltat_h() < 0.0);
    assert!(system.heat_flux() < 0.0);
}

#[test]
fn limit_curve_at_table_node() {
    let node = SystemSpec {
        s_u: 0.0375,
        k_E: 1.0,
        psi: 0.0,
        ..spec("A")
    };
    let system = build(&node).expect("node system");
    let limit = system.limit_curve(29.0).expect("limit curve");
    assert_eq!(limit.phi, 1.0);
    assert_eq!(limit.b_g, 89.3);
    assert_eq!(limit.n_g, 0.033);
    assert_relative_eq!(
        limit.limit_heat_flux,
        system.k_h() * limit.limit_temperature_difference,
        max_relative = 1e-9
    );
}

#[test]
fn limit_curve_intersects_characteristic_for_b() {
    let system = build(&spec("B")).expect("B");
    let limit = system.limit_curve(29.0).expect("limit curve");
    assert_relative_eq!(
        limit.limit_heat_flux,
        system.k_h() * limit.limit_temperature_difference,
        max_relative = 1e-9
    );
    assert!(limit.limit_heat_flux > 0.0 && limit.limit_heat_flux <= 100.0 * 1.01);
}

#[test]
fn narrow_heat_diffusion_device_reduces_limit() {
    let full = build(&spec("B")).expect("full width");
    let narrow = build(&SystemSpec { L_WL: 0.05, ..spec("B") }).expect("narrow");
    assert!(narrow.k_h() < full.k_h());
    let limit = narrow.limit_curve(29.0).expect("narrow limit");
    assert_relative_eq!(
        limit.limit_heat_flux,
        narrow.k_h() * limit.limit_temperature_difference,
        max_relative = 1e-9
    );
}

#[test]
fn wide_spacing_limit_scales_with_spacing() {
    let reference = build(&SystemSpec { W: 0.375, ..spec("A") }).expect("0.375");
    let wide = build(&SystemSpec { W: 0.5, ..spec("A") }).expect("0.5");
    let l_ref = reference.limit_curve(29.0).expect("limit 0.375");
    let l_wide = wide.limit_curve(29.0).expect("limit 0.5");
    // s_u/W = 0.09 ≤ 0.173 이므로 f_G = 1
    assert_relative_eq!(
        l_wide.limit_heat_flux,
        l_ref.limit_heat_flux * 0.375 / 0.5,
        max_relative = 1e-12
    );
    assert_eq!(l_wide.limit_temperature_difference, l_ref.limit_temperature_difference);
}

#[test]
fn limit_curve_rejects_unsupported_requests() {
    let d = build(&spec("D")).expect("D");
    assert!(matches!(d.limit_curve(29.0), Err(Iso11855Error::InvalidConfiguration(_))));

    let a = build(&spec("A")).expect("A");
    assert!(matches!(a.limit_curve(20.0), Err(Iso11855Error::NonPhysical { .. })));

    let cooling = build(&SystemSpec {
        case_of_application: "floor cooling".into(),
        t_i: 26.0,
        t_V: 16.0,
        t_R: 19.0,
        ..spec("A")
    })
    .expect("cooling");
    assert!(matches!(
        cooling.limit_curve(19.0),
        Err(Iso11855Error::InvalidConfiguration(_))
    ));
}

#[test]
fn downward_heat_loss_with_equal_temperatures() {
    let system = build(&spec("A")).expect("A");
    let loss = system
        .downward_heat_loss(&LowerConstruction::default())
        .expect("downward loss");
    let r_o = 1.0 / 10.8 + 0.05 + 0.045 / 1.735;
    assert_close("R_o", loss.upward_resistance, r_o, 1e-9);
    assert_close("R_u", loss.downward_resistance, 0.92, 1e-12);
    assert_close("q_u", loss.heat_flux, system.heat_flux() * r_o / 0.92, 1e-9);

    let colder = LowerConstruction {
        temperature_below: 10.0,
        ..LowerConstruction::default()
    };
    let loss_cold = system.downward_heat_loss(&colder).expect("colder below");
    assert_close(
        "q_u colder",
        loss_cold.heat_flux,
        (r_o * system.heat_flux() + 10.0) / 0.92,
        1e-9,
    );

    let no_resistance = LowerConstruction {
        insulation_resistance: 0.0,
        surface_resistance: 0.0,
        ..LowerConstruction::default()
    };
    assert!(system.downward_heat_loss(&no_resistance).is_err());
}

#[test]
fn family_factor_equations_reproduce_heat_flux() {
    for t in ["A", "B", "D"] {
        let system = build(&spec(t)).expect(t);
        let (b, dt) = (system.coefficient_b(), system.deltat_h());
        let q = match system.details() {
            FamilyDetails::Achij { factors, .. } => factors.heat_flux(b, dt),
            FamilyDetails::B { factors, .. } => factors.heat_flux(b, dt),
            FamilyDetails::D { factors } => factors.heat_flux(b, dt),
        };
        assert_relative_eq!(q, system.heat_flux(), max_relative = 1e-12);
    }
}

#[test]
fn non_finite_and_non_physical_overrides_fail() {
    let cases = [
        ("k_W = NaN", SystemSpec { k_W: f64::NAN, ..spec("A") }),
        ("k_W < 0", SystemSpec { k_W: -40.0, psi: 0.1, ..spec("A") }),
        ("psi = NaN", SystemSpec { psi: f64::NAN, ..spec("A") }),
        ("W = inf", SystemSpec { W: f64::INFINITY, ..spec("A") }),
        ("t_V = inf", SystemSpec { t_V: f64::INFINITY, ..spec("A") }),
        ("t_i = NaN", SystemSpec { t_i: f64::NAN, ..spec("B") }),
        ("s_u = inf", SystemSpec { s_u: f64::INFINITY, ..spec("D") }),
        ("d_a = inf", SystemSpec { external_diameter: f64::INFINITY, ..spec("A") }),
        ("d_M = NaN", SystemSpec { d_M: f64::NAN, ..spec("A") }),
        ("L_WL = inf", SystemSpec { L_WL: f64::INFINITY, ..spec("B") }),
    ];
    for (label, case) in cases {
        let res = build(&case);
        assert!(
            matches!(res, Err(Iso11855Error::NonPhysical { .. })),
            "{label} -> {res:?}"
        );
    }

    // 고정구 체적비가 적용 범위 밖이면 열전도율은 검사하지 않는다
    let ignored = build(&SystemSpec { k_W: -40.0, psi: 0.3, ..spec("A") }).expect("ignored inserts");
    assert_eq!(ignored.screed_conductivity(), 1.8);

    let system = build(&spec("A")).expect("A");
    assert!(system.limit_curve(f64::INFINITY).is_err());
    assert!(system.limit_curve(f64::NAN).is_err());
    let unknown_below = LowerConstruction {
        temperature_below: f64::NAN,
        ..LowerConstruction::default()
    };
    assert!(system.downward_heat_loss(&unknown_below).is_err());
}

#[test]
fn wide_spacing_limit_uses_surface_heat_flux_of_case() {
    let wall = |w: f64| SystemSpec {
        case_of_application: "wall heating".into(),
        s_u: 0.08,
        W: w,
        ..spec("A")
    };
    let reference = build(&wall(0.375)).expect("wall 0.375");
    let wide = build(&wall(0.4)).expect("wall 0.4");
    let q_ref = reference.limit_curve(29.0).expect("limit 0.375").limit_heat_flux;
    let limit = wide.limit_curve(29.0).expect("limit 0.4");

    // s_u/W = 0.2 > 0.173 이므로 f_G 가 q_G,max 에 의존한다
    let q_max_wall = f::heat_flux_wall(29.0, 20.0);
    let f_g = f::wide_spacing_limit_factor(0.08, 0.4, q_max_wall, q_ref);
    assert_ne!(f_g, 1.0);
    assert_relative_eq!(
        limit.limit_heat_flux,
        f::limit_heat_flux_wide_spacing(q_ref, 0.4, f_g),
        max_relative = 1e-12
    );

    let f_g_floor =
        f::wide_spacing_limit_factor(0.08, 0.4, f::heat_flux_floor_heating(29.0, 20.0), q_ref);
    let floor_based = f::limit_heat_flux_wide_spacing(q_ref, 0.4, f_g_floor);
    assert!((limit.limit_heat_flux - floor_based).abs() > 1e-6);
}
