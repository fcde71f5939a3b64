//! Demo portfolio used when no persisted dataset is available.

use crate::types::{Dataset, PropertyRecord, PropertyStatus};

/// Returns the four-property seed portfolio.
///
/// Paris, Lyon and Bordeaux are let; the Lille studio is vacant (its rent is
/// still recorded as the asking rent). The transaction list is empty.
#[must_use]
pub fn demo_dataset() -> Dataset {
    Dataset::from_parts(demo_properties(), Vec::new())
}

/// Returns the seed property records.
#[must_use]
pub fn demo_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord::builder("Appartement Haussmann - Paris 8")
            .id("p1")
            .kind("Appartement")
            .address("12 Rue du Faubourg Saint-Honoré")
            .city("Paris")
            .postal_code("75008")
            .country("France")
            .surface(72.0, 3)
            .acquisition_date("2020-03-15")
            .purchase_price(720_000.0)
            .current_value(820_000.0)
            .rent(2600.0)
            .charges(220.0)
            .annual_costs(1200.0, 380.0)
            .management_fee(0.06)
            .status(PropertyStatus::Occupied)
            .lease("2023-01-01", "2025-01-01")
            .build(),
        PropertyRecord::builder("Maison familiale - Lyon")
            .id("p2")
            .kind("Maison")
            .address("8 Chemin des Mûriers")
            .city("Lyon")
            .postal_code("69005")
            .country("France")
            .surface(128.0, 6)
            .acquisition_date("2018-06-20")
            .purchase_price(540_000.0)
            .current_value(610_000.0)
            .rent(2100.0)
            .charges(180.0)
            .annual_costs(1500.0, 420.0)
            .management_fee(0.05)
            .status(PropertyStatus::Occupied)
            .lease("2022-09-15", "2025-09-14")
            .build(),
        PropertyRecord::builder("Local commercial - Bordeaux")
            .id("p3")
            .kind("Commerce")
            .address("25 Cours de l’Intendance")
            .city("Bordeaux")
            .postal_code("33000")
            .country("France")
            .surface(90.0, 4)
            .acquisition_date("2019-10-01")
            .purchase_price(430_000.0)
            .current_value(500_000.0)
            .rent(2800.0)
            .charges(300.0)
            .annual_costs(1700.0, 450.0)
            .management_fee(0.05)
            .status(PropertyStatus::Occupied)
            .lease("2021-04-01", "2026-03-31")
            .build(),
        PropertyRecord::builder("Studio - Lille")
            .id("p4")
            .kind("Studio")
            .address("3 Rue Nationale")
            .city("Lille")
            .postal_code("59000")
            .country("France")
            .surface(22.0, 1)
            .acquisition_date("2021-02-11")
            .purchase_price(145_000.0)
            .current_value(160_000.0)
            .rent(650.0)
            .charges(90.0)
            .annual_costs(650.0, 180.0)
            .management_fee(0.07)
            .status(PropertyStatus::Vacant)
            .build(),
    ]
}
