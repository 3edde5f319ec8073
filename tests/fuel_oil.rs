//! 중유 작업질량 환산 회귀 테스트.
use fuel_calculator::error::FuelError;
use fuel_calculator::fuel::{compute_fuel_oil, try_compute_fuel_oil, FuelOilInput};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(diff <= 1e-9, "{label} expected {expected} got {actual}");
}

fn mazut() -> FuelOilInput {
    FuelOilInput {
        carbon: 85.0,
        hydrogen: 11.0,
        sulfur: 2.0,
        oxygen: 1.0,
        moisture: 3.0,
        ash: 0.1,
        vanadium: 200.0,
        lower_heat_combustion: 40.0,
    }
}

#[test]
fn working_mass_composition() {
    let res = compute_fuel_oil(mazut());
    // 85 * (100 - 3 - 0.1) / 100
    assert_close("C", res.working_carbon, 85.0 * 96.9 / 100.0);
    assert_close("C", res.working_carbon, 82.365);
    assert_close("H", res.working_hydrogen, 10.659);
    assert_close("S", res.working_sulfur, 1.938);
    assert_close("O", res.working_oxygen, 0.969);
    assert_close("A", res.working_ash, 0.097);
    assert_close("V", res.working_vanadium, 194.0);
}

#[test]
fn adjusted_lower_heat() {
    let res = compute_fuel_oil(mazut());
    // 40 * 96.9 / 100 - 0.025 * 3 = 38.76 - 0.075
    assert_close("Q", res.adjusted_lower_heat, 38.685);
}

#[test]
fn dry_fuel_only_loses_ash_share() {
    let input = FuelOilInput {
        moisture: 0.0,
        ash: 0.0,
        ..mazut()
    };
    let res = compute_fuel_oil(input);
    assert_eq!(res.working_carbon, input.carbon);
    assert_eq!(res.working_vanadium, input.vanadium);
    assert_eq!(res.adjusted_lower_heat, input.lower_heat_combustion);
}

#[test]
fn overfull_moisture_and_ash_goes_negative_unchecked() {
    let input = FuelOilInput {
        moisture: 80.0,
        ash: 30.0,
        ..mazut()
    };
    assert!(compute_fuel_oil(input).working_carbon < 0.0);
    assert_eq!(
        try_compute_fuel_oil(input),
        Err(FuelError::DegenerateDivision {
            what: "moisture + ash >= 100"
        })
    );
}

#[test]
fn moisture_plus_ash_of_exactly_100_is_rejected() {
    let input = FuelOilInput {
        moisture: 97.0,
        ash: 3.0,
        ..mazut()
    };
    assert!(matches!(
        try_compute_fuel_oil(input),
        Err(FuelError::DegenerateDivision { .. })
    ));
    let just_below = FuelOilInput {
        moisture: 97.0,
        ash: 2.5,
        ..mazut()
    };
    assert_eq!(try_compute_fuel_oil(just_below), Ok(compute_fuel_oil(just_below)));
}
