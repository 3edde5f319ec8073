//! 계산 결과를 사람이 읽는 텍스트로 만든다. CLI와 GUI가 같은 형식을 공유한다.

use std::fmt::Write;

use tracing::debug;

use crate::error::FuelError;
use crate::fuel::{self, CombustionResult, FuelOilResult};
use crate::i18n::{keys, Translator};
use crate::input::{fields, CombustionForm, FuelOilForm};

/// 연소 계산 결과 보고서. 발열량 세 가지 → 건조질량 → 가연질량 순서.
pub fn combustion_report(result: &CombustionResult, tr: &Translator, decimals: usize) -> String {
    let mj = tr.t(keys::UNIT_MJ_PER_KG);
    let mut out = String::new();
    let heat = [
        (keys::REPORT_LOWER_HEAT, result.lower_heat_of_combustion),
        (keys::REPORT_LOWER_HEAT_DRY, result.lower_heat_dry_basis),
        (
            keys::REPORT_LOWER_HEAT_COMBUSTIBLE,
            result.lower_heat_combustible_basis,
        ),
    ];
    for (key, value) in heat {
        let _ = writeln!(out, "{}: {value:.decimals$} {mj}", tr.t(key));
    }

    let dry = &result.dry_basis;
    let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_DRY_BASIS));
    for (field, value) in [
        (fields::CARBON, dry.carbon),
        (fields::HYDROGEN, dry.hydrogen),
        (fields::SULFUR, dry.sulfur),
        (fields::NITROGEN, dry.nitrogen),
        (fields::OXYGEN, dry.oxygen),
        (fields::ASH, dry.ash),
    ] {
        let _ = writeln!(out, "{}: {value:.decimals$}", tr.element_label(field));
    }

    let comb = &result.combustible_basis;
    let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_COMBUSTIBLE_BASIS));
    for (field, value) in [
        (fields::CARBON, comb.carbon),
        (fields::HYDROGEN, comb.hydrogen),
        (fields::SULFUR, comb.sulfur),
        (fields::NITROGEN, comb.nitrogen),
        (fields::OXYGEN, comb.oxygen),
    ] {
        let _ = writeln!(out, "{}: {value:.decimals$}", tr.element_label(field));
    }
    out
}

/// 중유 작업질량 조성 보고서.
pub fn fuel_oil_report(result: &FuelOilResult, tr: &Translator, decimals: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_WORKING_MASS));
    for (field, value) in [
        (fields::CARBON, result.working_carbon),
        (fields::HYDROGEN, result.working_hydrogen),
        (fields::SULFUR, result.working_sulfur),
        (fields::OXYGEN, result.working_oxygen),
        (fields::ASH, result.working_ash),
    ] {
        let _ = writeln!(out, "{}: {value:.decimals$}%", tr.element_label(field));
    }
    let _ = writeln!(
        out,
        "{}: {:.decimals$} {}",
        tr.element_label(fields::VANADIUM),
        result.working_vanadium,
        tr.t(keys::UNIT_MG_PER_KG)
    );
    let _ = writeln!(
        out,
        "{}: {:.decimals$} {}",
        tr.t(keys::REPORT_LOWER_HEAT),
        result.adjusted_lower_heat,
        tr.t(keys::UNIT_MJ_PER_KG)
    );
    out
}

/// 폼 단위 오류 메시지를 만든다.
///
/// 잘못된 입력은 폼별 단일 메시지(`form_invalid_key`)로, 분모 오류는 공통 메시지로 표시한다.
pub fn error_message(err: &FuelError, tr: &Translator, form_invalid_key: &str) -> String {
    debug!(field = err.field().unwrap_or("-"), %err, "form rejected");
    match err {
        FuelError::InvalidInput { .. } => tr.t(form_invalid_key),
        FuelError::DegenerateDivision { .. } => tr.t(keys::DEGENERATE_DIVISION),
    }
}

/// 연소 폼을 검증·계산해 보고서를 만든다. 실패하면 화면에 보일 단일 메시지를 돌려준다.
pub fn evaluate_combustion_form(
    form: &CombustionForm,
    tr: &Translator,
    decimals: usize,
) -> Result<String, String> {
    form.to_input()
        .and_then(fuel::try_compute_combustion)
        .map(|result| combustion_report(&result, tr, decimals))
        .map_err(|err| error_message(&err, tr, keys::COMBUSTION_INVALID))
}

/// 중유 폼을 검증·계산해 보고서를 만든다.
pub fn evaluate_fuel_oil_form(
    form: &FuelOilForm,
    tr: &Translator,
    decimals: usize,
) -> Result<String, String> {
    form.to_input()
        .and_then(fuel::try_compute_fuel_oil)
        .map(|result| fuel_oil_report(&result, tr, decimals))
        .map_err(|err| error_message(&err, tr, keys::FUEL_OIL_INVALID))
}
