use tracing::{debug, warn};

use crate::error::{FuelError, FuelResult};

/// 연료 연소 계산 입력. 모든 값은 작업질량(as-received) 기준 [%].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionInput {
    pub carbon: f64,
    pub hydrogen: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
    /// 수분 W
    pub moisture: f64,
    /// 회분 A
    pub ash: f64,
}

/// 건조질량 기준 조성 [%].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryBasis {
    pub carbon: f64,
    pub hydrogen: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
    pub ash: f64,
}

/// 가연질량 기준 조성 [%]. 회분은 제외된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustibleBasis {
    pub carbon: f64,
    pub hydrogen: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
}

/// 연소 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionResult {
    /// 작업질량 저위발열량 [MJ/kg]
    pub lower_heat_of_combustion: f64,
    /// 건조질량 저위발열량 [MJ/kg]
    pub lower_heat_dry_basis: f64,
    /// 가연질량 저위발열량 [MJ/kg]
    pub lower_heat_combustible_basis: f64,
    pub dry_basis: DryBasis,
    pub combustible_basis: CombustibleBasis,
}

/// 작업질량 → 건조질량 환산 계수 100 / (100 - W).
pub fn to_dry_factor(moisture: f64) -> f64 {
    100.0 / (100.0 - moisture)
}

/// 작업질량 → 가연질량 환산 계수 100 / (100 - W - A).
pub fn to_combustible_factor(moisture: f64, ash: f64) -> f64 {
    100.0 / (100.0 - moisture - ash)
}

/// 멘델레예프 식으로 작업질량 저위발열량 [MJ/kg]을 계산한다.
pub fn mendeleev_lower_heat(input: &CombustionInput) -> f64 {
    (339.0 * input.carbon + 1030.0 * input.hydrogen - 108.8 * (input.oxygen - input.sulfur)
        - 25.0 * input.moisture)
        / 1000.0
}

/// 작업질량 조성으로부터 건조/가연 질량 조성과 세 가지 저위발열량을 계산한다.
///
/// 입력 검증은 하지 않는다. W ≥ 100 또는 W + A ≥ 100이면 IEEE-754 나눗셈 결과
/// (inf, NaN, 부호 반전)가 그대로 전파된다. 사전 검사가 필요하면
/// [`try_compute_combustion`]을 사용한다.
pub fn compute_combustion(input: CombustionInput) -> CombustionResult {
    let to_dry = to_dry_factor(input.moisture);
    let to_combustible = to_combustible_factor(input.moisture, input.ash);

    let dry_basis = DryBasis {
        carbon: input.carbon * to_dry,
        hydrogen: input.hydrogen * to_dry,
        sulfur: input.sulfur * to_dry,
        nitrogen: input.nitrogen * to_dry,
        oxygen: input.oxygen * to_dry,
        ash: input.ash * to_dry,
    };
    let combustible_basis = CombustibleBasis {
        carbon: input.carbon * to_combustible,
        hydrogen: input.hydrogen * to_combustible,
        sulfur: input.sulfur * to_combustible,
        nitrogen: input.nitrogen * to_combustible,
        oxygen: input.oxygen * to_combustible,
    };

    let q = mendeleev_lower_heat(&input);
    // 수분 증발 잠열 보정(0.025 MJ/kg per %W)을 되돌린 뒤 기준 환산
    let q_moisture_free = q + 0.025 * input.moisture;

    let result = CombustionResult {
        lower_heat_of_combustion: q,
        lower_heat_dry_basis: q_moisture_free * to_dry,
        lower_heat_combustible_basis: q_moisture_free * to_combustible,
        dry_basis,
        combustible_basis,
    };
    debug!(
        q_working = result.lower_heat_of_combustion,
        q_dry = result.lower_heat_dry_basis,
        q_combustible = result.lower_heat_combustible_basis,
        "combustion computed"
    );
    result
}

/// 분모가 0 이하가 되는 입력을 거부한 뒤 [`compute_combustion`]을 호출한다.
pub fn try_compute_combustion(input: CombustionInput) -> FuelResult<CombustionResult> {
    if input.moisture >= 100.0 {
        warn!(moisture = input.moisture, "moisture leaves no dry mass");
        return Err(FuelError::DegenerateDivision {
            what: "moisture >= 100",
        });
    }
    if input.moisture + input.ash >= 100.0 {
        warn!(
            moisture = input.moisture,
            ash = input.ash,
            "moisture and ash leave no combustible mass"
        );
        return Err(FuelError::DegenerateDivision {
            what: "moisture + ash >= 100",
        });
    }
    Ok(compute_combustion(input))
}
