//! Heuristic carbon footprint estimation for styles.
//!
//! The estimate is a deterministic formula over two lookup tables: a
//! per-material multiplier and a production-location multiplier, scaled by a
//! fixed base emission constant. Inputs are open string sets; anything not in
//! the tables contributes the neutral factor `1.0`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base emission constant in kg CO2-equivalent.
const BASE_CARBON_KG: f64 = 2.5;

/// Neutral multiplier applied to unknown materials and locations.
const DEFAULT_FACTOR: f64 = 1.0;

static MATERIAL_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("cotton", 1.2),
        ("polyester", 2.1),
        ("wool", 3.8),
        ("silk", 2.9),
        ("linen", 0.9),
        ("organic_cotton", 0.8),
    ])
});

static LOCATION_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("turkey", 1.0),
        ("india", 1.8),
        ("china", 2.2),
        ("bangladesh", 1.9),
        ("vietnam", 1.7),
    ])
});

/// Estimates the carbon footprint for a set of materials produced at a
/// location, in kg CO2e rounded to two decimal places.
///
/// Material names are matched case-insensitively; each occurrence in
/// `materials` contributes its own factor (duplicates are not deduplicated).
/// An empty material list yields `0.0`.
///
/// `transport_mode` is accepted but has no effect on the current formula; it
/// is reserved for a future revision that weights shipping legs.
pub fn estimate_carbon_footprint(
    materials: &[String],
    production_location: &str,
    _transport_mode: &str,
) -> f64 {
    let material_carbon: f64 = materials
        .iter()
        .map(|material| material_factor(material))
        .sum();
    let location_carbon = location_factor(production_location);

    round_to_cents(BASE_CARBON_KG * material_carbon * location_carbon)
}

/// Multiplier for a single material name, `1.0` when unknown.
pub fn material_factor(material: &str) -> f64 {
    MATERIAL_FACTORS
        .get(material.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_FACTOR)
}

/// Multiplier for a production location, `1.0` when unknown.
pub fn location_factor(location: &str) -> f64 {
    LOCATION_FACTORS
        .get(location.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_FACTOR)
}

// Half-away-from-zero; ties at the third decimal are not load-bearing for
// any factor combination in the tables.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let materials = mats(&["cotton", "silk"]);
        let first = estimate_carbon_footprint(&materials, "india", "air");
        let second = estimate_carbon_footprint(&materials, "india", "air");
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_material_and_location_fall_back_to_neutral_factors() {
        let result = estimate_carbon_footprint(&mats(&["unknown_fabric"]), "unknown_country", "air");
        assert_eq!(result, 2.5);
    }

    #[test]
    fn single_cotton_in_turkey() {
        let result = estimate_carbon_footprint(&mats(&["cotton"]), "turkey", "sea");
        assert_eq!(result, 3.0);
    }

    #[test]
    fn multiple_materials_accumulate_additively() {
        // 2.5 * (1.2 + 3.8) * 2.2
        let result = estimate_carbon_footprint(&mats(&["cotton", "wool"]), "china", "sea");
        assert_eq!(result, 27.5);
    }

    #[test]
    fn duplicate_materials_each_contribute() {
        let doubled = estimate_carbon_footprint(&mats(&["cotton", "cotton"]), "turkey", "sea");
        let single = estimate_carbon_footprint(&mats(&["cotton"]), "turkey", "sea");
        assert_eq!(doubled, 6.0);
        assert_ne!(doubled, single);
    }

    #[test]
    fn empty_material_list_is_a_valid_zero_result() {
        let result = estimate_carbon_footprint(&[], "china", "sea");
        assert_eq!(result, 0.0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = estimate_carbon_footprint(&mats(&["cotton"]), "turkey", "sea");
        let mixed = estimate_carbon_footprint(&mats(&["Cotton"]), "TURKEY", "sea");
        assert_eq!(lower, mixed);
    }

    #[test]
    fn transport_mode_does_not_affect_the_result() {
        let materials = mats(&["polyester"]);
        let by_sea = estimate_carbon_footprint(&materials, "vietnam", "sea");
        let by_air = estimate_carbon_footprint(&materials, "vietnam", "air");
        assert_eq!(by_sea, by_air);
    }

    #[test]
    fn results_are_finite_and_non_negative_for_all_table_entries() {
        for material in MATERIAL_FACTORS.keys() {
            for location in LOCATION_FACTORS.keys() {
                let result = estimate_carbon_footprint(&mats(&[material]), location, "sea");
                assert!(result.is_finite());
                assert!(result >= 0.0);
            }
        }
    }
}
