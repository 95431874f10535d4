use atelier_dpp::carbon::estimate_carbon_footprint;
use proptest::prelude::*;

proptest! {
    /// The estimator is total over arbitrary free-text input and always
    /// produces a finite, non-negative number.
    #[test]
    fn estimate_is_finite_and_non_negative(
        materials in prop::collection::vec(".{0,40}", 0..12),
        location in ".{0,40}",
        transport in ".{0,20}",
    ) {
        let result = estimate_carbon_footprint(&materials, &location, &transport);
        prop_assert!(result.is_finite());
        prop_assert!(result >= 0.0);
    }

    /// Pure function: identical inputs always give identical outputs.
    #[test]
    fn estimate_is_deterministic(
        materials in prop::collection::vec("[a-zA-Z_ ]{0,30}", 0..8),
        location in "[a-zA-Z_ ]{0,30}",
    ) {
        let first = estimate_carbon_footprint(&materials, &location, "sea");
        let second = estimate_carbon_footprint(&materials, &location, "sea");
        prop_assert_eq!(first, second);
    }

    /// Transport mode is a documented no-op in the current formula.
    #[test]
    fn transport_mode_never_changes_the_estimate(
        materials in prop::collection::vec("[a-z_]{1,20}", 1..6),
        location in "[a-z_]{1,20}",
        transport_a in "[a-z]{0,10}",
        transport_b in "[a-z]{0,10}",
    ) {
        let a = estimate_carbon_footprint(&materials, &location, &transport_a);
        let b = estimate_carbon_footprint(&materials, &location, &transport_b);
        prop_assert_eq!(a, b);
    }

    /// Adding a material never lowers the estimate (all factors are positive).
    #[test]
    fn adding_a_material_is_monotonic(
        mut materials in prop::collection::vec("[a-z_]{1,20}", 0..6),
        extra in "[a-z_]{1,20}",
        location in "[a-z_]{1,20}",
    ) {
        let base = estimate_carbon_footprint(&materials, &location, "sea");
        materials.push(extra);
        let extended = estimate_carbon_footprint(&materials, &location, "sea");
        prop_assert!(extended >= base);
    }
}
