//! Property record as persisted by the dashboard.

use serde::{Deserialize, Serialize};

use super::PropertyStatus;

/// A single owned real-estate asset.
///
/// Every descriptive string and every amount is optional on the wire. The
/// accessors ([`rent`](Self::rent), [`city`](Self::city), ...) normalise an
/// absent value to `0.0` or `""`; aggregation code only ever reads through them.
///
/// Monetary amounts are in the portfolio currency. `rent` and `charges` are
/// monthly, `property_tax` and `insurance` are annual, `management_fee` is the
/// fraction of rent kept by a management service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Opaque unique identifier.
    #[serde(default)]
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Free-form category label ("Appartement", "Maison", "Commerce", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Street address.
    pub address: Option<String>,

    /// City, used as the geography grouping key.
    pub city: Option<String>,

    /// Postal code.
    pub postal_code: Option<String>,

    /// Country.
    pub country: Option<String>,

    /// Living area in square meters.
    pub area: Option<f64>,

    /// Number of rooms.
    pub rooms: Option<u32>,

    /// Acquisition date (YYYY-MM-DD).
    pub acquisition_date: Option<String>,

    /// Purchase price; denominator of the net yield.
    pub purchase_price: Option<f64>,

    /// Current estimated value.
    pub current_value: Option<f64>,

    /// Photo references.
    #[serde(default)]
    pub photos: Vec<String>,

    /// Monthly gross rent (0 when vacant).
    pub rent: Option<f64>,

    /// Monthly operating charges.
    pub charges: Option<f64>,

    /// Annual property tax.
    pub property_tax: Option<f64>,

    /// Annual insurance premium.
    pub insurance: Option<f64>,

    /// Share of rent taken by a management service, in `[0, 1]`.
    pub management_fee: Option<f64>,

    /// Occupancy status.
    #[serde(default)]
    pub status: PropertyStatus,

    /// Lease start date (YYYY-MM-DD), absent when vacant.
    pub lease_start: Option<String>,

    /// Lease end date (YYYY-MM-DD), absent when vacant.
    pub lease_end: Option<String>,
}

/// Absent and NaN amounts both read as zero.
#[inline]
fn amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

#[inline]
fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl PropertyRecord {
    /// Creates a new property builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> PropertyBuilder {
        PropertyBuilder::new(name)
    }

    /// Assigns a fresh uuid v4 id if the record has none. Returns true if
    /// an id was generated.
    pub fn ensure_id(&mut self) -> bool {
        if self.id.is_empty() {
            self.id = uuid::Uuid::new_v4().to_string();
            true
        } else {
            false
        }
    }

    /// Display name, `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        text(&self.name)
    }

    /// Category label, `""` when absent.
    #[must_use]
    pub fn kind(&self) -> &str {
        text(&self.kind)
    }

    /// Street address, `""` when absent.
    #[must_use]
    pub fn address(&self) -> &str {
        text(&self.address)
    }

    /// City, `""` when absent.
    #[must_use]
    pub fn city(&self) -> &str {
        text(&self.city)
    }

    /// Postal code, `""` when absent.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        text(&self.postal_code)
    }

    /// Country, `""` when absent.
    #[must_use]
    pub fn country(&self) -> &str {
        text(&self.country)
    }

    /// The six text fields matched by a search query, in display order.
    #[must_use]
    pub fn search_fields(&self) -> [&str; 6] {
        [
            self.name(),
            self.kind(),
            self.address(),
            self.city(),
            self.postal_code(),
            self.country(),
        ]
    }

    /// Living area, 0 when absent.
    #[must_use]
    pub fn area(&self) -> f64 {
        amount(self.area)
    }

    /// Purchase price, 0 when absent.
    #[must_use]
    pub fn purchase_price(&self) -> f64 {
        amount(self.purchase_price)
    }

    /// Current value, 0 when absent.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        amount(self.current_value)
    }

    /// Monthly rent, 0 when absent.
    #[must_use]
    pub fn rent(&self) -> f64 {
        amount(self.rent)
    }

    /// Monthly charges, 0 when absent.
    #[must_use]
    pub fn charges(&self) -> f64 {
        amount(self.charges)
    }

    /// Annual property tax, 0 when absent.
    #[must_use]
    pub fn property_tax(&self) -> f64 {
        amount(self.property_tax)
    }

    /// Annual insurance, 0 when absent.
    #[must_use]
    pub fn insurance(&self) -> f64 {
        amount(self.insurance)
    }

    /// Management fee fraction, 0 when absent.
    #[must_use]
    pub fn management_fee(&self) -> f64 {
        amount(self.management_fee)
    }
}

/// Builder for [`PropertyRecord`].
///
/// A record built without an explicit id receives a random UUID.
#[derive(Debug, Clone, Default)]
pub struct PropertyBuilder {
    record: PropertyRecord,
}

impl PropertyBuilder {
    /// Creates a builder for a property with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: PropertyRecord {
                name: Some(name.into()),
                ..PropertyRecord::default()
            },
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = id.into();
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.record.kind = Some(kind.into());
        self
    }

    /// Sets the street address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.record.address = Some(address.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.record.city = Some(city.into());
        self
    }

    /// Sets the postal code.
    #[must_use]
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.record.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.record.country = Some(country.into());
        self
    }

    /// Sets area (m²) and room count.
    #[must_use]
    pub fn surface(mut self, area: f64, rooms: u32) -> Self {
        self.record.area = Some(area);
        self.record.rooms = Some(rooms);
        self
    }

    /// Sets the acquisition date (YYYY-MM-DD).
    #[must_use]
    pub fn acquisition_date(mut self, date: impl Into<String>) -> Self {
        self.record.acquisition_date = Some(date.into());
        self
    }

    /// Sets the purchase price.
    #[must_use]
    pub fn purchase_price(mut self, price: f64) -> Self {
        self.record.purchase_price = Some(price);
        self
    }

    /// Sets the current value.
    #[must_use]
    pub fn current_value(mut self, value: f64) -> Self {
        self.record.current_value = Some(value);
        self
    }

    /// Sets the monthly rent.
    #[must_use]
    pub fn rent(mut self, rent: f64) -> Self {
        self.record.rent = Some(rent);
        self
    }

    /// Sets the monthly charges.
    #[must_use]
    pub fn charges(mut self, charges: f64) -> Self {
        self.record.charges = Some(charges);
        self
    }

    /// Sets annual property tax and insurance.
    #[must_use]
    pub fn annual_costs(mut self, property_tax: f64, insurance: f64) -> Self {
        self.record.property_tax = Some(property_tax);
        self.record.insurance = Some(insurance);
        self
    }

    /// Sets the management fee fraction.
    #[must_use]
    pub fn management_fee(mut self, fee: f64) -> Self {
        self.record.management_fee = Some(fee);
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn status(mut self, status: impl Into<PropertyStatus>) -> Self {
        self.record.status = status.into();
        self
    }

    /// Sets the lease period.
    #[must_use]
    pub fn lease(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.record.lease_start = Some(start.into());
        self.record.lease_end = Some(end.into());
        self
    }

    /// Builds the record.
    #[must_use]
    pub fn build(mut self) -> PropertyRecord {
        self.record.ensure_id();
        self.record
    }
}
