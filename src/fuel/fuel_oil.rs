use tracing::{debug, warn};

use crate::error::{FuelError, FuelResult};

/// 중유(마주트) 조성 환산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelOilInput {
    /// 가연질량 기준 탄소 [%]
    pub carbon: f64,
    pub hydrogen: f64,
    pub sulfur: f64,
    pub oxygen: f64,
    /// 작업질량 수분 W [%]
    pub moisture: f64,
    /// 건조질량 기준 회분 [%]
    pub ash: f64,
    /// 건조질량 기준 바나듐 [mg/kg]
    pub vanadium: f64,
    /// 가연질량 저위발열량 [MJ/kg]
    pub lower_heat_combustion: f64,
}

/// 작업질량 조성 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelOilResult {
    pub working_carbon: f64,
    pub working_hydrogen: f64,
    pub working_sulfur: f64,
    pub working_oxygen: f64,
    pub working_ash: f64,
    /// [mg/kg]
    pub working_vanadium: f64,
    /// 작업질량 저위발열량 [MJ/kg]
    pub adjusted_lower_heat: f64,
}

/// 가연질량/건조질량 기준 중유 조성을 작업질량 기준으로 환산한다.
///
/// 입력 검증은 하지 않으며 W + A > 100이면 음수 결과가 그대로 나온다.
pub fn compute_fuel_oil(input: FuelOilInput) -> FuelOilResult {
    let combustible = 100.0 - input.moisture - input.ash;
    let dry = 100.0 - input.moisture;

    let result = FuelOilResult {
        working_carbon: input.carbon * combustible / 100.0,
        working_hydrogen: input.hydrogen * combustible / 100.0,
        working_sulfur: input.sulfur * combustible / 100.0,
        working_oxygen: input.oxygen * combustible / 100.0,
        working_ash: input.ash * dry / 100.0,
        working_vanadium: input.vanadium * dry / 100.0,
        adjusted_lower_heat: input.lower_heat_combustion * combustible / 100.0
            - 0.025 * input.moisture,
    };
    debug!(q_working = result.adjusted_lower_heat, "fuel oil computed");
    result
}

/// W + A ≥ 100인 입력을 거부한 뒤 [`compute_fuel_oil`]을 호출한다.
pub fn try_compute_fuel_oil(input: FuelOilInput) -> FuelResult<FuelOilResult> {
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
    Ok(compute_fuel_oil(input))
}
