use thiserror::Error;

/// 연료 계산 도메인에서 발생 가능한 오류를 표현한다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuelError {
    /// 숫자로 해석할 수 없거나 음수인 입력
    #[error("invalid value for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },
    /// 환산 분모(100 - W 또는 100 - W - A)가 0 이하
    #[error("degenerate denominator: {what}")]
    DegenerateDivision { what: &'static str },
}

impl FuelError {
    /// 잘못된 입력이 들어온 필드 이름. 분모 오류는 None.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FuelError::InvalidInput { field, .. } => Some(field),
            FuelError::DegenerateDivision { .. } => None,
        }
    }
}

pub type FuelResult<T> = Result<T, FuelError>;
