//! 입력 문자열 검증과 폼 버퍼. 계산 코어에는 검증을 통과한 값만 전달된다.

use tracing::warn;

use crate::error::{FuelError, FuelResult};
use crate::fuel::{CombustionInput, FuelOilInput};

/// 필드 이름 상수. 오류 메시지와 번역 키(`field.<name>`)에 함께 쓰인다.
pub mod fields {
    pub const CARBON: &str = "carbon";
    pub const HYDROGEN: &str = "hydrogen";
    pub const SULFUR: &str = "sulfur";
    pub const NITROGEN: &str = "nitrogen";
    pub const OXYGEN: &str = "oxygen";
    pub const MOISTURE: &str = "moisture";
    pub const ASH: &str = "ash";
    pub const VANADIUM: &str = "vanadium";
    pub const LOWER_HEAT: &str = "lower_heat";
}

/// 문자열을 실수로 해석하고 음수/비유한 값을 거부한다.
///
/// 앞뒤 공백은 무시하며 소수점 쉼표(`3,5`)도 허용한다.
pub fn parse_non_negative(field: &'static str, text: &str) -> FuelResult<f64> {
    let trimmed = text.trim();
    let normalized = trimmed.replace(',', ".");
    let invalid = || FuelError::InvalidInput {
        field,
        value: trimmed.to_string(),
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => {
            warn!(field, value = trimmed, "rejected input");
            Err(invalid())
        }
    }
}

/// 연소 계산 폼의 원시 입력 버퍼.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombustionForm {
    pub carbon: String,
    pub hydrogen: String,
    pub sulfur: String,
    pub nitrogen: String,
    pub oxygen: String,
    pub moisture: String,
    pub ash: String,
}

impl CombustionForm {
    /// 화면 표시 순서대로 (필드 이름, 버퍼) 쌍을 돌려준다.
    pub fn fields_mut(&mut self) -> [(&'static str, &mut String); 7] {
        [
            (fields::CARBON, &mut self.carbon),
            (fields::HYDROGEN, &mut self.hydrogen),
            (fields::SULFUR, &mut self.sulfur),
            (fields::NITROGEN, &mut self.nitrogen),
            (fields::OXYGEN, &mut self.oxygen),
            (fields::MOISTURE, &mut self.moisture),
            (fields::ASH, &mut self.ash),
        ]
    }

    /// 모든 필드를 검증해 계산 입력으로 변환한다. 첫 번째 잘못된 필드에서 멈춘다.
    pub fn to_input(&self) -> FuelResult<CombustionInput> {
        Ok(CombustionInput {
            carbon: parse_non_negative(fields::CARBON, &self.carbon)?,
            hydrogen: parse_non_negative(fields::HYDROGEN, &self.hydrogen)?,
            sulfur: parse_non_negative(fields::SULFUR, &self.sulfur)?,
            nitrogen: parse_non_negative(fields::NITROGEN, &self.nitrogen)?,
            oxygen: parse_non_negative(fields::OXYGEN, &self.oxygen)?,
            moisture: parse_non_negative(fields::MOISTURE, &self.moisture)?,
            ash: parse_non_negative(fields::ASH, &self.ash)?,
        })
    }
}

/// 중유 조성 폼의 원시 입력 버퍼.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelOilForm {
    pub carbon: String,
    pub hydrogen: String,
    pub sulfur: String,
    pub oxygen: String,
    pub moisture: String,
    pub ash: String,
    pub vanadium: String,
    pub lower_heat: String,
}

impl FuelOilForm {
    /// 화면 표시 순서대로 (필드 이름, 버퍼) 쌍을 돌려준다. 산소가 황보다 먼저 온다.
    pub fn fields_mut(&mut self) -> [(&'static str, &mut String); 8] {
        [
            (fields::CARBON, &mut self.carbon),
            (fields::HYDROGEN, &mut self.hydrogen),
            (fields::OXYGEN, &mut self.oxygen),
            (fields::SULFUR, &mut self.sulfur),
            (fields::MOISTURE, &mut self.moisture),
            (fields::ASH, &mut self.ash),
            (fields::VANADIUM, &mut self.vanadium),
            (fields::LOWER_HEAT, &mut self.lower_heat),
        ]
    }

    pub fn to_input(&self) -> FuelResult<FuelOilInput> {
        Ok(FuelOilInput {
            carbon: parse_non_negative(fields::CARBON, &self.carbon)?,
            hydrogen: parse_non_negative(fields::HYDROGEN, &self.hydrogen)?,
            sulfur: parse_non_negative(fields::SULFUR, &self.sulfur)?,
            oxygen: parse_non_negative(fields::OXYGEN, &self.oxygen)?,
            moisture: parse_non_negative(fields::MOISTURE, &self.moisture)?,
            ash: parse_non_negative(fields::ASH, &self.ash)?,
            vanadium: parse_non_negative(fields::VANADIUM, &self.vanadium)?,
            lower_heat_combustion: parse_non_negative(fields::LOWER_HEAT, &self.lower_heat)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_comma_and_whitespace() {
        assert_eq!(parse_non_negative(fields::ASH, " 10,2 ").unwrap(), 10.2);
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(parse_non_negative(fields::ASH, "NaN").is_err());
        assert!(parse_non_negative(fields::ASH, "inf").is_err());
    }

    #[test]
    fn negative_zero_is_allowed() {
        assert!(parse_non_negative(fields::ASH, "-0").is_ok());
    }
}
