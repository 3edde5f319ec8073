//! 연료 계산 모듈 모음. 연소(멘델레예프 식)와 중유 조성 환산은 서로 독립된 순수 함수다.

pub mod combustion;
pub mod fuel_oil;

pub use combustion::*;
pub use fuel_oil::*;
