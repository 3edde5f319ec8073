//! 환산 계수와 순수성에 대한 성질 기반 테스트.
use fuel_calculator::fuel::{
    compute_combustion, compute_fuel_oil, to_combustible_factor, to_dry_factor,
    CombustionInput, FuelOilInput,
};
use proptest::prelude::*;

fn combustion_input() -> impl Strategy<Value = CombustionInput> {
    (
        0.0..100.0f64,
        0.0..20.0f64,
        0.0..10.0f64,
        0.0..5.0f64,
        0.0..20.0f64,
        0.0..99.0f64,
    )
        .prop_flat_map(|(c, h, s, n, o, w)| {
            (Just((c, h, s, n, o, w)), 0.0..(99.9 - w))
        })
        .prop_map(|((carbon, hydrogen, sulfur, nitrogen, oxygen, moisture), ash)| {
            CombustionInput {
                carbon,
                hydrogen,
                sulfur,
                nitrogen,
                oxygen,
                moisture,
                ash,
            }
        })
}

proptest! {
    #[test]
    fn bases_never_shrink_as_received_values(input in combustion_input()) {
        let res = compute_combustion(input);
        prop_assert!(res.dry_basis.carbon >= input.carbon);
        prop_assert!(res.combustible_basis.carbon >= input.carbon);
        prop_assert!(res.combustible_basis.hydrogen >= res.dry_basis.hydrogen);
    }

    #[test]
    fn combustible_factor_dominates_dry_factor(w in 0.0..99.0f64, frac in 0.0..1.0f64) {
        let ash = frac * (99.5 - w);
        prop_assert!(to_combustible_factor(w, ash) >= to_dry_factor(w));
        prop_assert!(to_dry_factor(w) >= 1.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical(input in combustion_input(), v in 0.0..500.0f64, q in 0.0..45.0f64) {
        let a = compute_combustion(input);
        let b = compute_combustion(input);
        prop_assert_eq!(a.lower_heat_dry_basis.to_bits(), b.lower_heat_dry_basis.to_bits());
        prop_assert_eq!(a, b);

        let oil = FuelOilInput {
            carbon: input.carbon,
            hydrogen: input.hydrogen,
            sulfur: input.sulfur,
            oxygen: input.oxygen,
            moisture: input.moisture,
            ash: input.ash,
            vanadium: v,
            lower_heat_combustion: q,
        };
        prop_assert_eq!(compute_fuel_oil(oil), compute_fuel_oil(oil));
    }

    #[test]
    fn working_mass_never_exceeds_reference(input in combustion_input(), v in 0.0..500.0f64) {
        let oil = compute_fuel_oil(FuelOilInput {
            carbon: input.carbon,
            hydrogen: input.hydrogen,
            sulfur: input.sulfur,
            oxygen: input.oxygen,
            moisture: input.moisture,
            ash: input.ash,
            vanadium: v,
            lower_heat_combustion: 40.0,
        });
        prop_assert!(oil.working_carbon <= input.carbon * (1.0 + 1e-12));
        prop_assert!(oil.working_vanadium <= v * (1.0 + 1e-12));
        prop_assert!(oil.working_carbon >= 0.0);
    }
}
