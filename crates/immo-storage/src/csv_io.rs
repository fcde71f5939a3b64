//! CSV import and export of property records.
//!
//! One row per property with snake_case headers. An empty cell means the
//! value is absent. Photo references are joined with `|` in a single cell.

use std::io::{Read, Write};
use std::path::Path;

use immo_core::{PropertyRecord, PropertyStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StorageResult;

const PHOTO_SEPARATOR: &str = "|";

/// Flat CSV shape of a [`PropertyRecord`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct PropertyRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    rooms: Option<u32>,
    #[serde(default)]
    acquisition_date: Option<String>,
    #[serde(default)]
    purchase_price: Option<f64>,
    #[serde(default)]
    current_value: Option<f64>,
    #[serde(default)]
    rent: Option<f64>,
    #[serde(default)]
    charges: Option<f64>,
    #[serde(default)]
    property_tax: Option<f64>,
    #[serde(default)]
    insurance: Option<f64>,
    #[serde(default)]
    management_fee: Option<f64>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    lease_start: Option<String>,
    #[serde(default)]
    lease_end: Option<String>,
    #[serde(default)]
    photos: Option<String>,
}

impl From<PropertyRow> for PropertyRecord {
    fn from(row: PropertyRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            name: row.name,
            kind: row.kind,
            address: row.address,
            city: row.city,
            postal_code: row.postal_code,
            country: row.country,
            area: row.area,
            rooms: row.rooms,
            acquisition_date: row.acquisition_date,
            purchase_price: row.purchase_price,
            current_value: row.current_value,
            photos: row
                .photos
                .map(|cell| {
                    cell.split(PHOTO_SEPARATOR)
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            rent: row.rent,
            charges: row.charges,
            property_tax: row.property_tax,
            insurance: row.insurance,
            management_fee: row.management_fee,
            status: row
                .status
                .map(PropertyStatus::from)
                .unwrap_or_default(),
            lease_start: row.lease_start,
            lease_end: row.lease_end,
        }
    }
}

impl From<&PropertyRecord> for PropertyRow {
    fn from(record: &PropertyRecord) -> Self {
        let status = record.status.label();
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            kind: record.kind.clone(),
            address: record.address.clone(),
            city: record.city.clone(),
            postal_code: record.postal_code.clone(),
            country: record.country.clone(),
            area: record.area,
            rooms: record.rooms,
            acquisition_date: record.acquisition_date.clone(),
            purchase_price: record.purchase_price,
            current_value: record.current_value,
            rent: record.rent,
            charges: record.charges,
            property_tax: record.property_tax,
            insurance: record.insurance,
            management_fee: record.management_fee,
            status: (!status.is_empty()).then(|| status.to_string()),
            lease_start: record.lease_start.clone(),
            lease_end: record.lease_end.clone(),
            photos: (!record.photos.is_empty())
                .then(|| record.photos.join(PHOTO_SEPARATOR)),
        }
    }
}

/// Reads property records from CSV.
///
/// Rows without an `id` keep an empty id; callers assign one before
/// inserting into a dataset.
pub fn read_properties<R: Read>(reader: R) -> StorageResult<Vec<PropertyRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: PropertyRow = result?;
        records.push(PropertyRecord::from(row));
    }
    debug!(rows = records.len(), "properties read from csv");
    Ok(records)
}

/// Reads property records from a CSV file.
pub fn read_properties_from_path(path: impl AsRef<Path>) -> StorageResult<Vec<PropertyRecord>> {
    let file = std::fs::File::open(path)?;
    read_properties(file)
}

/// Writes property records as CSV, header row first.
pub fn write_properties<W: Write>(writer: W, records: &[PropertyRecord]) -> StorageResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(PropertyRow::from(record))?;
    }
    writer.flush()?;
    debug!(rows = records.len(), "properties written as csv");
    Ok(())
}
