//! 폼 검증 → 계산 → 보고서 경로 테스트.
use fuel_calculator::error::FuelError;
use fuel_calculator::i18n::Translator;
use fuel_calculator::input::{fields, parse_non_negative, CombustionForm, FuelOilForm};
use fuel_calculator::report;

fn coal_form() -> CombustionForm {
    CombustionForm {
        carbon: "50".into(),
        hydrogen: "3.5".into(),
        sulfur: "0.3".into(),
        nitrogen: "1".into(),
        oxygen: "5".into(),
        moisture: "30".into(),
        ash: "10.2".into(),
    }
}

fn mazut_form() -> FuelOilForm {
    FuelOilForm {
        carbon: "85".into(),
        hydrogen: "11".into(),
        sulfur: "2".into(),
        oxygen: "1".into(),
        moisture: "3".into(),
        ash: "0.1".into(),
        vanadium: "200".into(),
        lower_heat: "40".into(),
    }
}

#[test]
fn parse_rejects_garbage_and_negatives() {
    assert_eq!(parse_non_negative(fields::CARBON, "12.5"), Ok(12.5));
    assert_eq!(parse_non_negative(fields::CARBON, "0"), Ok(0.0));
    for bad in ["", "abc", "-1", "1.2.3", "  "] {
        let err = parse_non_negative(fields::CARBON, bad).unwrap_err();
        assert_eq!(err.field(), Some(fields::CARBON), "input {bad:?}");
    }
}

#[test]
fn form_reports_first_invalid_field() {
    let mut form = coal_form();
    form.oxygen = "-5".into();
    form.ash = "x".into();
    assert_eq!(
        form.to_input(),
        Err(FuelError::InvalidInput {
            field: fields::OXYGEN,
            value: "-5".into()
        })
    );
}

#[test]
fn fuel_oil_form_fields_follow_display_order() {
    let mut form = FuelOilForm::default();
    let order: Vec<&str> = form.fields_mut().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        order,
        [
            fields::CARBON,
            fields::HYDROGEN,
            fields::OXYGEN,
            fields::SULFUR,
            fields::MOISTURE,
            fields::ASH,
            fields::VANADIUM,
            fields::LOWER_HEAT,
        ]
    );
}

#[test]
fn combustion_report_lists_all_sections() {
    let tr = Translator::new("en");
    let text = report::evaluate_combustion_form(&coal_form(), &tr, 2).expect("valid form");
    assert!(text.contains("Lower heat of combustion: 19.29 MJ/kg"), "{text}");
    assert!(text.contains("Lower heat of combustion, dry basis: 28.63 MJ/kg"));
    assert!(text.contains("Lower heat of combustion, combustible basis: 33.52 MJ/kg"));
    assert!(text.contains("Working to dry basis:"));
    assert!(text.contains("Carbon: 71.43"));
    assert!(text.contains("Ash: 14.57"));
    assert!(text.contains("Working to combustible basis:"));
    assert!(text.contains("Carbon: 83.61"));
}

#[test]
fn fuel_oil_report_in_ukrainian() {
    let tr = Translator::new("uk");
    let text = report::evaluate_fuel_oil_form(&mazut_form(), &tr, 3).expect("valid form");
    assert!(text.starts_with("Склад робочої маси мазуту:"), "{text}");
    assert!(text.contains("Вуглець: 82.365%"));
    assert!(text.contains("Зола: 0.097%"));
    assert!(text.contains("Ванадій: 194.000 мг/кг"));
    assert!(text.contains("Нижча теплота згоряння: 38.685 МДж/кг"));
}

#[test]
fn invalid_forms_show_single_form_message() {
    let tr = Translator::new("uk");
    let mut form = coal_form();
    form.carbon.clear();
    assert_eq!(
        report::evaluate_combustion_form(&form, &tr, 2),
        Err("Будь ласка, введіть правильні значення.".to_string())
    );

    let mut oil = mazut_form();
    oil.vanadium = "-200".into();
    assert_eq!(
        report::evaluate_fuel_oil_form(&oil, &tr, 2),
        Err("Одне з полів порожнє або містить неправильні дані!".to_string())
    );
}

#[test]
fn degenerate_denominator_message() {
    let tr = Translator::new("en");
    let mut form = coal_form();
    form.moisture = "60".into();
    form.ash = "40".into();
    assert_eq!(
        report::evaluate_combustion_form(&form, &tr, 2),
        Err("Moisture plus ash must be below 100%.".to_string())
    );
}
