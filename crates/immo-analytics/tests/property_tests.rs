//! Property-based tests for aggregation invariants.
//!
//! These tests verify properties that hold for any input list:
//! - Yields are never NaN or infinite, even with zero purchase prices
//! - The revenue series always has twelve points within `[0, 100]` height
//! - The geography breakdown is bounded, sorted and tie-stable
//! - Search is case-insensitive and a blank query is the identity

use immo_analytics::prelude::*;
use immo_analytics::MONTHS;
use immo_core::PropertyRecord;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

const CITIES: [&str; 7] = ["Paris", "Lyon", "Lille", "Bordeaux", "Nantes", "Nice", ""];
const KINDS: [&str; 4] = ["Appartement", "Maison", "Studio", "Commerce"];

/// Generates an optional amount, sometimes absent and sometimes zero.
fn arb_amount(max: f64) -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        (0.0..max).prop_map(Some),
    ]
}

/// Generates a property record with arbitrary optional fields.
fn arb_property() -> impl Strategy<Value = PropertyRecord> {
    (
        "[a-z]{1,8}",
        0..CITIES.len(),
        0..KINDS.len(),
        arb_amount(1_000_000.0), // purchase price
        arb_amount(1_000_000.0), // current value
        arb_amount(5_000.0),     // rent
        arb_amount(1_000.0),     // charges
        proptest::option::of(0.0f64..0.2),
    )
        .prop_map(|(name, city, kind, price, value, rent, charges, fee)| PropertyRecord {
            id: name.clone(),
            name: Some(name),
            kind: Some(KINDS[kind].to_string()),
            city: Some(CITIES[city].to_string()),
            purchase_price: price,
            current_value: value,
            rent,
            charges,
            management_fee: fee,
            ..PropertyRecord::default()
        })
}

fn arb_properties(max: usize) -> impl Strategy<Value = Vec<PropertyRecord>> {
    proptest::collection::vec(arb_property(), 0..=max)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn kpis_are_always_finite(props in arb_properties(30)) {
        let kpis = compute_kpis(&props, &AnalyticsConfig::default());
        prop_assert_eq!(kpis.total_properties, props.len());
        prop_assert!(kpis.average_net_yield.is_finite());
        prop_assert!(kpis.total_value.is_finite());
        prop_assert_eq!(kpis.projected_annual_income, kpis.monthly_income * 12.0);
        if props.is_empty() {
            prop_assert_eq!(kpis.average_net_yield, 0.0);
        }
    }

    #[test]
    fn zero_price_never_produces_nan(rent in 0.0f64..10_000.0, charges in 0.0f64..5_000.0) {
        let p = PropertyRecord::builder("x").rent(rent).charges(charges).build();
        let ranking = compute_performance_ranking(&[p], &AnalyticsConfig::default());
        prop_assert_eq!(ranking[0].net_yield_percent, 0.0);
    }

    #[test]
    fn series_has_twelve_bounded_points(props in arb_properties(30)) {
        let series = compute_monthly_series(&props);
        prop_assert_eq!(series.len(), MONTHS);
        for point in &series {
            prop_assert!(point.scaled_percent >= 0.0);
            prop_assert!(point.scaled_percent <= 100.0);
        }
    }

    #[test]
    fn geo_breakdown_bounded_and_sorted(props in arb_properties(40), top_n in 0usize..8) {
        let geo = compute_geo_breakdown(&props, top_n);
        prop_assert!(geo.len() <= top_n);

        for pair in geo.buckets().windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
            if pair[0].value == pair[1].value {
                let first_seen = |label: &str| props.iter().position(|p| p.city() == label);
                prop_assert!(first_seen(&pair[0].label) < first_seen(&pair[1].label));
            }
        }
    }

    #[test]
    fn type_breakdown_preserves_total(props in arb_properties(30)) {
        let breakdown = compute_type_breakdown(&props, &AnalyticsConfig::default());
        let expected: f64 = props.iter().map(PropertyRecord::current_value).sum();
        prop_assert!((breakdown.total() - expected).abs() < 1e-6);
    }

    #[test]
    fn filter_is_case_insensitive(props in arb_properties(20), city in 0..CITIES.len() - 1) {
        let needle = CITIES[city];
        let lower = filter_properties(&props, &needle.to_lowercase());
        let upper = filter_properties(&props, &needle.to_uppercase());
        prop_assert_eq!(lower.as_ref(), upper.as_ref());
        for p in props.iter().filter(|p| p.city() == needle) {
            prop_assert!(lower.contains(p));
        }
    }

    #[test]
    fn blank_query_is_identity(props in arb_properties(20), blanks in "[ \t]{0,4}") {
        let filtered = filter_properties(&props, &blanks);
        prop_assert_eq!(filtered.as_ref(), props.as_slice());
    }
}
