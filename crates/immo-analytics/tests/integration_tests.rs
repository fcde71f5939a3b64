//! End-to-end tests for the dashboard aggregates over realistic portfolios.

use approx::assert_relative_eq;
use immo_analytics::prelude::*;
use immo_analytics::{net_annual_yield_pct, StatusTone};
use immo_core::{demo_dataset, Dataset, PropertyRecord};

// =============================================================================
// TEST DATA
// =============================================================================

/// The two-property portfolio used in the documentation examples.
fn paris_and_lille() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord::builder("Appartement - Paris")
            .id("P1")
            .kind("Appartement")
            .city("Paris")
            .rent(2600.0)
            .charges(220.0)
            .management_fee(0.06)
            .purchase_price(720_000.0)
            .current_value(820_000.0)
            .build(),
        PropertyRecord::builder("Studio - Lille")
            .id("P2")
            .kind("Studio")
            .city("Lille")
            .rent(650.0)
            .charges(90.0)
            .management_fee(0.07)
            .purchase_price(145_000.0)
            .current_value(160_000.0)
            .build(),
    ]
}

// =============================================================================
// WORKED EXAMPLE
// =============================================================================

#[test]
fn test_worked_example_kpis() {
    let props = paris_and_lille();
    let kpis = compute_kpis(&props, &AnalyticsConfig::default());

    assert_eq!(kpis.total_properties, 2);
    assert_relative_eq!(kpis.total_value, 980_000.0);
    assert_relative_eq!(kpis.monthly_income, 3250.0);
    assert_relative_eq!(kpis.projected_annual_income, 39_000.0);

    assert_relative_eq!(net_annual_yield_pct(&props[0]), 3.706_667, epsilon = 1e-6);
    assert_relative_eq!(net_annual_yield_pct(&props[1]), 4.257_931, epsilon = 1e-6);
    assert_relative_eq!(kpis.average_net_yield, 3.982_299, epsilon = 1e-6);
}

#[test]
fn test_worked_example_series() {
    let series = compute_monthly_series(&paris_and_lille());
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    assert_eq!(
        values,
        [
            3088.0, 3169.0, 3228.0, 3250.0, 3228.0, 3169.0, 3088.0, 3006.0, 2947.0, 2925.0,
            2947.0, 3006.0
        ]
    );
    assert_relative_eq!(series.total(), 37_051.0);
}

#[test]
fn test_worked_example_breakdowns() {
    let props = paris_and_lille();
    let config = AnalyticsConfig::default();

    let by_type = compute_type_breakdown(&props, &config);
    assert_eq!(by_type.slices()[0].label, "Appartement");
    assert_eq!(by_type.slices()[0].color_index, 0);
    assert_eq!(by_type.slices()[1].label, "Studio");
    assert_eq!(by_type.slices()[1].color_index, 1);

    let geo = compute_geo_breakdown(&props, 5);
    let labels: Vec<&str> = geo.buckets().iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Paris", "Lille"]);

    let ranking = compute_performance_ranking(&props, &config);
    assert_eq!(ranking[0].net_yield_percent, 3.7);
    assert_eq!(ranking[1].net_yield_percent, 4.3);
}

// =============================================================================
// DEMO PORTFOLIO
// =============================================================================

#[test]
fn test_demo_kpis() {
    let dataset = demo_dataset();
    let kpis = compute_kpis(dataset.properties(), &AnalyticsConfig::default());

    assert_eq!(kpis.total_properties, 4);
    assert_relative_eq!(kpis.total_value, 2_090_000.0);
    assert_relative_eq!(kpis.monthly_income, 8150.0);
    assert_relative_eq!(kpis.projected_annual_income, 97_800.0);
    assert_relative_eq!(kpis.average_net_yield, 4.645_994, epsilon = 1e-5);
}

#[test]
fn test_demo_series() {
    let series = compute_monthly_series(demo_dataset().properties());
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    assert_eq!(
        values,
        [
            7743.0, 7946.0, 8095.0, 8150.0, 8095.0, 7946.0, 7743.0, 7539.0, 7390.0, 7335.0,
            7390.0, 7539.0
        ]
    );
    assert_relative_eq!(series.total(), 92_911.0);
    assert_relative_eq!(series.points()[3].scaled_percent, 100.0, epsilon = 1e-9);
    assert_relative_eq!(series.points()[9].scaled_percent, 90.0, epsilon = 1e-9);
}

#[test]
fn test_demo_performance_and_cards() {
    let dataset = demo_dataset();
    let config = AnalyticsConfig::default();

    let yields: Vec<f64> = compute_performance_ranking(dataset.properties(), &config)
        .iter()
        .map(|e| e.net_yield_percent)
        .collect();
    assert_eq!(yields, [3.7, 4.0, 6.6, 4.3]);

    let cards = compute_property_cards(dataset.properties(), &config);
    let tones: Vec<StatusTone> = cards.iter().map(|c| c.tone).collect();
    assert_eq!(
        tones,
        [StatusTone::Occupied, StatusTone::Occupied, StatusTone::Occupied, StatusTone::Vacant]
    );
}

#[test]
fn test_demo_snapshot_json_shape() {
    let snapshot = calculate_dashboard(&demo_dataset(), "", &AnalyticsConfig::default());
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["kpis"]["totalProperties"], 4);
    assert_eq!(value["monthlySeries"].as_array().unwrap().len(), 12);
    assert_eq!(value["typeBreakdown"][0]["label"], "Appartement");
    assert_eq!(value["geoBreakdown"].as_array().unwrap().len(), 4);
    assert_eq!(value["filteredCount"], 4);
}

// =============================================================================
// EDGE CASES
// =============================================================================

#[test]
fn test_empty_dataset() {
    let snapshot = calculate_dashboard(&Dataset::new(), "anything", &AnalyticsConfig::default());

    assert_eq!(snapshot.kpis, PortfolioKpis::default());
    assert_eq!(snapshot.monthly_series.len(), 12);
    assert!(snapshot.monthly_series.iter().all(|p| p.value == 0.0 && p.scaled_percent == 0.0));
    assert!(snapshot.type_breakdown.is_empty());
    assert!(snapshot.geo_breakdown.is_empty());
    assert!(snapshot.performance.is_empty());
    assert_eq!(snapshot.filtered_count, 0);
}

#[test]
fn test_records_from_sparse_json() {
    let json = r#"[
        {"id": "a", "name": "Sparse", "rent": null},
        {"id": "b", "type": "Maison", "city": "Nice", "rent": 1000, "purchasePrice": 0}
    ]"#;
    let props: Vec<PropertyRecord> = serde_json::from_str(json).unwrap();
    let kpis = compute_kpis(&props, &AnalyticsConfig::default());

    assert_eq!(kpis.total_properties, 2);
    assert_eq!(kpis.monthly_income, 1000.0);
    assert_eq!(kpis.average_net_yield, 0.0);

    let geo = compute_geo_breakdown(&props, 5);
    assert_eq!(geo.buckets()[0].label, "");
    assert_eq!(geo.buckets()[1].label, "Nice");
}

#[test]
fn test_negative_net_income_is_unclamped() {
    let props = vec![PropertyRecord::builder("Money pit")
        .rent(500.0)
        .charges(800.0)
        .purchase_price(100_000.0)
        .build()];
    let kpis = compute_kpis(&props, &AnalyticsConfig::default());
    assert_relative_eq!(kpis.average_net_yield, -3.6, epsilon = 1e-9);

    let ranking = compute_performance_ranking(&props, &AnalyticsConfig::default());
    assert_eq!(ranking[0].net_yield_percent, -3.6);
    assert_eq!(ranking[0].bar_width_pct(), 0.0);
}

#[test]
fn test_parallel_config_matches_sequential() {
    let props: Vec<PropertyRecord> = (0..500)
        .map(|i| {
            PropertyRecord::builder(format!("P{i}"))
                .city(["Paris", "Lyon", "Lille"][i % 3])
                .rent(500.0 + i as f64)
                .charges(50.0)
                .purchase_price(100_000.0 + (i * 1000) as f64)
                .build()
        })
        .collect();

    let parallel = AnalyticsConfig::default().with_threshold(10);
    let sequential = AnalyticsConfig::sequential();

    assert_eq!(compute_kpis(&props, &parallel), compute_kpis(&props, &sequential));
    assert_eq!(
        compute_property_cards(&props, &parallel),
        compute_property_cards(&props, &sequential)
    );
}

#[test]
fn test_cache_follows_dataset_mutations() {
    let cache = DashboardCache::default();
    let mut dataset = demo_dataset();

    let before = cache.snapshot(&dataset, "");
    dataset.remove_property("p4").unwrap();
    let after = cache.snapshot(&dataset, "");

    assert_eq!(before.kpis.total_properties, 4);
    assert_eq!(after.kpis.total_properties, 3);
}
