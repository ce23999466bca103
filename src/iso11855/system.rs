//! 매립형 복사 냉난방 시스템 모델.
//!
//! [`RadiantSystem::build`]가 입력 구성을 받아 시스템 형식별 계산 체인을 한 번
//! 실행하고, 결과는 이후 읽기 전용으로만 노출한다. 입력이 바뀌면 새로 만든다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{Iso11855Error, Iso11855Result};
use super::functions::{self as f, AchijFactors, BFactors, DFactors, REFERENCE_SPACING};
use super::pipe::{EmbeddedPipe, Sheathing};

/// ISO 11855에 정의된 시스템 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    A,
    B,
    C,
    D,
    H,
    I,
    J,
}

/// 계산 체인 계열. A/C/H/I/J는 같은 식을 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemFamily {
    Achij,
    B,
    D,
}

impl SystemType {
    pub const ALL: [SystemType; 7] = [
        SystemType::A,
        SystemType::B,
        SystemType::C,
        SystemType::D,
        SystemType::H,
        SystemType::I,
        SystemType::J,
    ];

    pub fn family(self) -> SystemFamily {
        match self {
            SystemType::A | SystemType::C | SystemType::H | SystemType::I | SystemType::J => {
                SystemFamily::Achij
            }
            SystemType::B => SystemFamily::B,
            SystemType::D => SystemFamily::D,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SystemType::A => "A",
            SystemType::B => "B",
            SystemType::C => "C",
            SystemType::D => "D",
            SystemType::H => "H",
            SystemType::I => "I",
            SystemType::J => "J",
        }
    }
}

impl SystemFamily {
    /// 기본 계수 B₀ [W/m²K]
    pub fn base_coefficient(self) -> f64 {
        match self {
            SystemFamily::Achij => 6.7,
            SystemFamily::B | SystemFamily::D => 6.5,
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemType {
    type Err = Iso11855Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SystemType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Iso11855Error::InvalidConfiguration(format!(
                    "unknown system type '{s}', expected one of A, B, C, D, H, I, J"
                ))
            })
    }
}

/// 복사면 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Floor,
    Wall,
    Ceiling,
}

/// 운전 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Heating,
    Cooling,
}

/// 적용 조건(복사면 × 운전 모드).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseOfApplication {
    pub surface: Surface,
    pub mode: Mode,
}

impl CaseOfApplication {
    pub const fn new(surface: Surface, mode: Mode) -> Self {
        Self { surface, mode }
    }

    /// 표 A.20 - 표면 열전달계수 α [W/m²K]
    pub fn surface_heat_transfer_coefficient(&self) -> f64 {
        match (self.surface, self.mode) {
            (Surface::Floor, Mode::Heating) | (Surface::Ceiling, Mode::Cooling) => 10.8,
            (Surface::Wall, _) => 8.0,
            (Surface::Ceiling, Mode::Heating) | (Surface::Floor, Mode::Cooling) => 6.5,
        }
    }

    /// 식 (1) ~ (4) - 평균 표면온도로부터의 열유속 [W/m²]
    pub fn surface_heat_flux(&self, t_s_m: f64, t_i: f64) -> f64 {
        match (self.surface, self.mode) {
            (Surface::Floor, Mode::Heating) | (Surface::Ceiling, Mode::Cooling) => {
                f::heat_flux_floor_heating(t_s_m, t_i)
            }
            (Surface::Wall, _) => f::heat_flux_wall(t_s_m, t_i),
            (Surface::Ceiling, Mode::Heating) => f::heat_flux_ceiling_heating(t_s_m, t_i),
            (Surface::Floor, Mode::Cooling) => f::heat_flux_floor_cooling(t_s_m, t_i),
        }
    }
}

impl Default for CaseOfApplication {
    fn default() -> Self {
        Self::new(Surface::Floor, Mode::Heating)
    }
}

impl fmt::Display for CaseOfApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let surface = match self.surface {
            Surface::Floor => "floor",
            Surface::Wall => "wall",
            Surface::Ceiling => "ceiling",
        };
        let mode = match self.mode {
            Mode::Heating => "heating",
            Mode::Cooling => "cooling",
        };
        write!(f, "{surface} {mode}")
    }
}

impl FromStr for CaseOfApplication {
    type Err = Iso11855Error;

    /// "floor heating", "Wall_Cooling" 형식을 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Iso11855Error::InvalidConfiguration(format!(
                "unknown case of application '{s}', expected '<floor|wall|ceiling> <heating|cooling>'"
            ))
        };
        let lower = s.to_lowercase();
        let mut words = lower
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|w| !w.is_empty());
        let surface = match words.next() {
            Some("floor") => Surface::Floor,
            Some("wall") => Surface::Wall,
            Some("ceiling") => Surface::Ceiling,
            _ => return Err(invalid()),
        };
        let mode = match words.next() {
            Some("heating") => Mode::Heating,
            Some("cooling") => Mode::Cooling,
            _ => return Err(invalid()),
        };
        if words.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(surface, mode))
    }
}

/// 배관 위 피복층.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Covering {
    /// 배관 위 층 두께 s_u [m]
    pub thickness: f64,
    /// 마감재 열저항 R_λ,B [m²K/W]
    pub resistance: f64,
    /// 모르타르(screed) 열전도율 λ_E [W/m·K]
    pub screed_conductivity: f64,
}

impl Default for Covering {
    fn default() -> Self {
        Self {
            thickness: 0.045,
            resistance: 0.05,
            screed_conductivity: 1.8,
        }
    }
}

/// 모르타르 내 배관 고정구.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixingInserts {
    /// 체적비 ψ [-]
    pub volume_ratio: f64,
    /// 고정구 열전도율 λ_W [W/m·K]
    pub conductivity: f64,
}

impl FixingInserts {
    /// 식 (A.28)은 0.05 ≤ ψ ≤ 0.15 에서만 적용한다.
    pub fn applies(&self) -> bool {
        (0.05..=0.15).contains(&self.volume_ratio)
    }
}

impl Default for FixingInserts {
    fn default() -> Self {
        Self {
            volume_ratio: 0.05,
            conductivity: 0.5,
        }
    }
}

/// 시스템 B의 열확산판.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatDiffusionDevice {
    /// 두께 s_WL [m]
    pub thickness: f64,
    /// 열전도율 λ_WL [W/m·K]
    pub conductivity: f64,
    /// 폭 L_WL [m]
    pub width: f64,
}

impl Default for HeatDiffusionDevice {
    fn default() -> Self {
        Self {
            thickness: 0.002,
            conductivity: 50.0,
            width: 0.1,
        }
    }
}

/// 설계 온도 [°C]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignTemperatures {
    /// 실내 θ_i
    pub indoor: f64,
    /// 공급 θ_V
    pub supply: f64,
    /// 환수 θ_R
    pub ret: f64,
}

impl Default for DesignTemperatures {
    fn default() -> Self {
        Self {
            indoor: 20.0,
            supply: 40.0,
            ret: 35.0,
        }
    }
}

/// 시스템 계열별로 계산에 필요한 값만 담는다.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemLayout {
    /// A, C, H, I, J
    Achij {
        system_type: SystemType,
        /// 배관 간격 W [m]
        spacing: f64,
        fixing_inserts: Option<FixingInserts>,
    },
    B {
        spacing: f64,
        device: HeatDiffusionDevice,
    },
    /// 배관 간격이 구조적으로 고정된 시스템
    D,
}

impl SystemLayout {
    /// 시스템 형식에 맞는 배치를 만든다. 해당 계열이 쓰지 않는 값은 버린다.
    pub fn for_type(
        system_type: SystemType,
        spacing: f64,
        fixing_inserts: Option<FixingInserts>,
        device: HeatDiffusionDevice,
    ) -> Self {
        match system_type.family() {
            SystemFamily::Achij => SystemLayout::Achij {
                system_type,
                spacing,
                fixing_inserts,
            },
            SystemFamily::B => SystemLayout::B { spacing, device },
            SystemFamily::D => SystemLayout::D,
        }
    }

    pub fn system_type(&self) -> SystemType {
        match self {
            SystemLayout::Achij { system_type, .. } => *system_type,
            SystemLayout::B { .. } => SystemType::B,
            SystemLayout::D => SystemType::D,
        }
    }

    pub fn family(&self) -> SystemFamily {
        match self {
            SystemLayout::Achij { .. } => SystemFamily::Achij,
            SystemLayout::B { .. } => SystemFamily::B,
            SystemLayout::D => SystemFamily::D,
        }
    }

    /// 배관 간격 W [m]. 시스템 D는 간격이 없다.
    pub fn spacing(&self) -> Option<f64> {
        match self {
            SystemLayout::Achij { spacing, .. } | SystemLayout::B { spacing, .. } => Some(*spacing),
            SystemLayout::D => None,
        }
    }
}

/// 한 번의 평가 요청에 대한 입력 구성.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiantSystemInput {
    pub name: String,
    pub case_of_application: CaseOfApplication,
    pub pipe: EmbeddedPipe,
    pub sheathing: Option<Sheathing>,
    pub covering: Covering,
    pub temperatures: DesignTemperatures,
    pub layout: SystemLayout,
}

/// 계열별 중간 계산값. 보고서와 한계곡선 계산에서 다시 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FamilyDetails {
    Achij {
        factors: AchijFactors,
        /// 실제로 표를 조회한 배관 간격(W > 0.375 이면 0.375)
        evaluated_spacing: f64,
        /// 조회 간격에서의 B ∏ aᵢ^mᵢ
        reference_transmission: f64,
    },
    B {
        factors: BFactors,
        device_characteristic: f64,
        /// 폭 보정(A.16) 전 a_WL
        full_width_device_factor: f64,
    },
    D {
        factors: DFactors,
    },
}

/// 계산이 끝난 시스템. 모든 값은 생성 시 한 번 계산되고 이후 읽기 전용이다.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiantSystem {
    input: RadiantSystemInput,
    surface_heat_transfer_coefficient: f64,
    effective_diameter: f64,
    screed_conductivity: f64,
    base_coefficient: f64,
    coefficient_b: f64,
    details: FamilyDetails,
    deltat_h: f64,
    k_h: f64,
    heat_flux: f64,
}

impl RadiantSystem {
    /// 입력을 검증하고 형식별 계산 체인을 실행한다.
    ///
    /// 1. B₀ 결정 2. α 조회 3. 유효 외경 D = max(d_a, d_M) 4. K_H 5. Δθ_H 6. q = K_H·Δθ_H
    pub fn build(input: RadiantSystemInput) -> Iso11855Result<Self> {
        validate(&input)?;
        let family = input.layout.family();
        let base_coefficient = family.base_coefficient();
        let alpha = input.case_of_application.surface_heat_transfer_coefficient();
        let effective_diameter = match input.sheathing {
            Some(sheathing) => input.pipe.external_diameter.max(sheathing.external_diameter),
            None => input.pipe.external_diameter,
        };
        debug!(
            name = %input.name,
            system_type = %input.layout.system_type(),
            case = %input.case_of_application,
            alpha,
            effective_diameter,
            "resolving radiant system"
        );

        let chain = ChainContext {
            input: &input,
            alpha,
            diameter: effective_diameter,
            base_coefficient,
        };
        let resolved = match &input.layout {
            SystemLayout::Achij {
                system_type,
                spacing,
                fixing_inserts,
            } => {
                if system_type.family() != SystemFamily::Achij {
                    return Err(Iso11855Error::InvalidConfiguration(format!(
                        "system type {system_type} cannot use the A/C/H/I/J calculation path"
                    )));
                }
                chain.achij(*spacing, fixing_inserts.as_ref())?
            }
            SystemLayout::B { spacing, device } => chain.b(*spacing, device)?,
            SystemLayout::D => chain.d(),
        };

        let t = input.temperatures;
        let deltat_h = f::log_mean_temperature_difference(t.supply, t.ret, t.indoor)?;
        let heat_flux = f::heat_flux(resolved.k_h, deltat_h);
        debug!(k_h = resolved.k_h, deltat_h, heat_flux, "radiant system resolved");

        Ok(Self {
            input,
            surface_heat_transfer_coefficient: alpha,
            effective_diameter,
            screed_conductivity: resolved.screed_conductivity,
            base_coefficient,
            coefficient_b: resolved.coefficient_b,
            details: resolved.details,
            deltat_h,
            k_h: resolved.k_h,
            heat_flux,
        })
    }

    pub fn input(&self) -> &RadiantSystemInput {
        &self.input
    }

    pub fn name(&self) -> &str {
        &self.input.name
    }

    pub fn system_type(&self) -> SystemType {
        self.input.layout.system_type()
    }

    pub fn case_of_application(&self) -> CaseOfApplication {
        self.input.case_of_application
    }

    /// 표면 열전달계수 α [W/m²K]
    pub fn surface_heat_transfer_coefficient(&self) -> f64 {
        self.surface_heat_transfer_coefficient
    }

    /// 유효 외경 D [m]
    pub fn effective_diameter(&self) -> f64 {
        self.effective_diameter
    }

    /// 계산에 쓴 모르타르 열전도율(고정구 반영 후) [W/m·K]
    pub fn screed_conductivity(&self) -> f64 {
        self.screed_conductivity
    }

    /// B₀ [W/m²K]
    pub fn base_coefficient(&self) -> f64 {
        self.base_coefficient
    }

    /// 배관 재질/두께를 반영한 계수 B [W/m²K]
    pub fn coefficient_b(&self) -> f64 {
        self.coefficient_b
    }

    pub fn details(&self) -> &FamilyDetails {
        &self.details
    }

    /// 열매-실내 로그 평균 온도차 Δθ_H [K]
    pub fn deltat_h(&self) -> f64 {
        self.deltat_h
    }

    /// 등가 열관류율 K_H [W/m²K]
    pub fn k_h(&self) -> f64 {
        self.k_h
    }

    /// 열유속 q [W/m²]
    pub fn heat_flux(&self) -> f64 {
        self.heat_flux
    }
}

struct Resolved {
    k_h: f64,
    coefficient_b: f64,
    screed_conductivity: f64,
    details: FamilyDetails,
}

struct ChainContext<'a> {
    input: &'a RadiantSystemInput,
    alpha: f64,
    diameter: f64,
    base_coefficient: f64,
}

impl ChainContext<'_> {
    /// 식 (A.26) 또는 배관보다 굵은 피복이 있으면 식 (A.27)
    fn pipe_factor(&self, product: f64, spacing: f64) -> f64 {
        let pipe = &self.input.pipe;
        match &self.input.sheathing {
            Some(sheathing) if sheathing.external_diameter > pipe.external_diameter => {
                f::pipe_material_factor_sheathed(
                    self.base_coefficient,
                    product,
                    spacing,
                    pipe,
                    sheathing,
                )
            }
            _ => f::pipe_material_factor(self.base_coefficient, product, spacing, pipe),
        }
    }

    fn achij(&self, spacing: f64, inserts: Option<&FixingInserts>) -> Iso11855Result<Resolved> {
        let covering = &self.input.covering;
        let screed_conductivity = match inserts {
            Some(ins) if ins.applies() => f::screed_conductivity_with_inserts(
                ins.volume_ratio,
                covering.screed_conductivity,
                ins.conductivity,
            ),
            Some(ins) => {
                warn!(
                    volume_ratio = ins.volume_ratio,
                    "fixing insert ratio outside 0.05..=0.15, screed conductivity left unchanged"
                );
                covering.screed_conductivity
            }
            None => covering.screed_conductivity,
        };

        // 표는 W = 0.375 m 까지만 있으므로 그 이상은 0.375에서 계산 후 식 (A.10)으로 환산
        let evaluated_spacing = spacing.min(REFERENCE_SPACING);
        if spacing > REFERENCE_SPACING {
            debug!(spacing, "pipe spacing above 0.375 m, scaling by 0.375/W");
        }

        let r_k_b = covering.resistance;
        let factors = AchijFactors {
            a_b: f::surface_covering_factor_achij(self.alpha, screed_conductivity, r_k_b),
            a_w: f::pipe_spacing_factor_achij(r_k_b)?,
            a_u: f::covering_factor_achij(r_k_b, evaluated_spacing)?,
            a_d: f::pipe_diameter_factor_achij(r_k_b, evaluated_spacing)?,
            m_w: f::exponent_m_w(evaluated_spacing),
            m_u: f::exponent_m_u(covering.thickness),
            m_d: f::exponent_m_d(self.diameter),
        };
        let product = factors.product();
        let coefficient_b = self.pipe_factor(product, evaluated_spacing);
        let reference_transmission = coefficient_b * product;
        let k_h = if spacing > REFERENCE_SPACING {
            f::heat_flux_wide_spacing(reference_transmission, spacing)
        } else {
            reference_transmission
        };

        Ok(Resolved {
            k_h,
            coefficient_b,
            screed_conductivity,
            details: FamilyDetails::Achij {
                factors,
                evaluated_spacing,
                reference_transmission,
            },
        })
    }

    fn b(&self, spacing: f64, device: &HeatDiffusionDevice) -> Iso11855Result<Resolved> {
        let covering = &self.input.covering;
        let lambda_e = covering.screed_conductivity;
        let s_u = covering.thickness;

        let a_u = f::covering_factor_bd(self.alpha, s_u, lambda_e);
        let a_w = f::pipe_spacing_factor_b(s_u, lambda_e)?;
        let b_u = f::spacing_correction_b(spacing)?;
        let a_k = f::contact_factor_b(spacing)?;
        let m_w = f::exponent_m_w(spacing);
        let k_wl = f::device_characteristic(device.thickness, device.conductivity, b_u, s_u, lambda_e);

        let full_width = f::device_factor(k_wl, spacing, self.diameter)?;
        let a_wl = if device.width < spacing {
            debug!(width = device.width, spacing, "heat diffusion device narrower than pipe spacing");
            let a_wl_0 = f::device_factor_low(0.0, spacing, self.diameter)?;
            f::device_width_correction(full_width, a_wl_0, device.width, spacing)
        } else {
            full_width
        };

        let partial = BFactors {
            a_b: 1.0,
            a_w,
            a_u,
            a_wl,
            a_k,
            m_w,
        };
        let factors = BFactors {
            a_b: f::surface_covering_factor_b(&partial, covering.resistance, spacing),
            ..partial
        };
        let product = factors.product();
        let coefficient_b = self.pipe_factor(product, spacing);

        Ok(Resolved {
            k_h: coefficient_b * product,
            coefficient_b,
            screed_conductivity: lambda_e,
            details: FamilyDetails::B {
                factors,
                device_characteristic: k_wl,
                full_width_device_factor: full_width,
            },
        })
    }

    fn d(&self) -> Resolved {
        let covering = &self.input.covering;
        let a_u = f::covering_factor_bd(self.alpha, covering.thickness, covering.screed_conductivity);
        let factors = DFactors {
            a_b: f::surface_covering_factor_d(a_u, covering.resistance),
            a_u,
        };
        Resolved {
            k_h: self.base_coefficient * factors.product(),
            coefficient_b: self.base_coefficient,
            screed_conductivity: covering.screed_conductivity,
            details: FamilyDetails::D { factors },
        }
    }
}

fn validate(input: &RadiantSystemInput) -> Iso11855Result<()> {
    input.pipe.validate()?;
    if let Some(spacing) = input.layout.spacing() {
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(Iso11855Error::NonPhysical {
                what: "pipe spacing must be positive and finite",
            });
        }
    }
    let t = &input.temperatures;
    if ![t.indoor, t.supply, t.ret].iter().all(|v| v.is_finite()) {
        return Err(Iso11855Error::NonPhysical {
            what: "design temperatures must be finite",
        });
    }
    let covering = &input.covering;
    if !(covering.screed_conductivity > 0.0 && covering.screed_conductivity.is_finite()) {
        return Err(Iso11855Error::NonPhysical {
            what: "screed conductivity must be positive and finite",
        });
    }
    if !(covering.thickness >= 0.0 && covering.thickness.is_finite())
        || !(covering.resistance >= 0.0 && covering.resistance.is_finite())
    {
        return Err(Iso11855Error::NonPhysical {
            what: "covering thickness and resistance must be finite and not negative",
        });
    }
    if let Some(sheathing) = &input.sheathing {
        if !sheathing.external_diameter.is_finite() {
            return Err(Iso11855Error::NonPhysical {
                what: "sheathing diameter must be finite",
            });
        }
        if sheathing.external_diameter > input.pipe.external_diameter
            && !(sheathing.conductivity > 0.0 && sheathing.conductivity.is_finite())
        {
            return Err(Iso11855Error::NonPhysical {
                what: "sheathing conductivity must be positive",
            });
        }
    }
    match &input.layout {
        SystemLayout::Achij {
            fixing_inserts: Some(inserts),
            ..
        } => {
            if !inserts.volume_ratio.is_finite() {
                return Err(Iso11855Error::NonPhysical {
                    what: "fixing insert volume ratio must be finite",
                });
            }
            if inserts.applies() && !(inserts.conductivity > 0.0 && inserts.conductivity.is_finite()) {
                return Err(Iso11855Error::NonPhysical {
                    what: "fixing insert conductivity must be positive",
                });
            }
        }
        SystemLayout::B { device, .. } => {
            let finite = [device.thickness, device.conductivity, device.width]
                .iter()
                .all(|v| v.is_finite());
            if !finite || device.thickness < 0.0 || device.conductivity < 0.0 || device.width <= 0.0 {
                return Err(Iso11855Error::NonPhysical {
                    what: "heat diffusion device needs non-negative thickness and conductivity and a positive width",
                });
            }
        }
        _ => {}
    }
    Ok(())
}
