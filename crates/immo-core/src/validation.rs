//! Input-sanitizing boundary for property records.
//!
//! Aggregation accepts anything and reflects it arithmetically. Callers that
//! want well-formed input run these checks before handing records over.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Dataset, PropertyRecord, PropertyStatus};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but usable.
    Warning,
    /// The record should not be trusted.
    Error,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Id of the offending record, when validating a collection.
    pub record_id: Option<String>,
    /// Field that failed validation.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Severity.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-level issue.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            record_id: None,
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-level issue.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            record_id: None,
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Attaches the id of the record the issue belongs to.
    #[must_use]
    pub fn for_record(mut self, id: impl Into<String>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    /// Returns true for error-level issues.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref id) = self.record_id {
            write!(f, "[{}] ", id)?;
        }
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable inputs.
pub trait Validate {
    /// Returns every finding, or an empty vector if the input is clean.
    fn validate(&self) -> Vec<ValidationIssue>;

    /// Returns true if there are no error-level findings.
    fn is_valid(&self) -> bool {
        self.validate().iter().all(|i| !i.is_error())
    }

    /// Returns an error carrying the error-level findings, if any.
    fn validate_or_error(&self) -> CoreResult<()> {
        let mut errors: Vec<ValidationIssue> =
            self.validate().into_iter().filter(ValidationIssue::is_error).collect();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(CoreError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(CoreError::MultipleValidationErrors(errors)),
        }
    }
}

/// Parses a YYYY-MM-DD date.
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::invalid_date(value))
}

fn check_amount(issues: &mut Vec<ValidationIssue>, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        if v.is_nan() || v.is_infinite() {
            issues.push(ValidationIssue::error(field, "must be a finite number"));
        } else if v < 0.0 {
            issues.push(ValidationIssue::error(field, format!("must not be negative, got {}", v)));
        }
    }
}

fn check_date(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: Option<&str>,
) -> Option<NaiveDate> {
    let value = value?;
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            issues.push(ValidationIssue::error(field, e.to_string()));
            None
        }
    }
}

impl Validate for PropertyRecord {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push(ValidationIssue::error("id", "must not be empty"));
        }

        check_amount(&mut issues, "purchasePrice", self.purchase_price);
        check_amount(&mut issues, "currentValue", self.current_value);
        check_amount(&mut issues, "rent", self.rent);
        check_amount(&mut issues, "charges", self.charges);
        check_amount(&mut issues, "propertyTax", self.property_tax);
        check_amount(&mut issues, "insurance", self.insurance);

        if let Some(fee) = self.management_fee {
            if !(0.0..=1.0).contains(&fee) {
                issues.push(ValidationIssue::error(
                    "managementFee",
                    format!("must be a fraction in [0, 1], got {}", fee),
                ));
            }
        }

        if let Some(area) = self.area {
            if area.is_nan() || area <= 0.0 {
                issues.push(ValidationIssue::warning("area", "should be positive"));
            }
        }

        if self.purchase_price() == 0.0 {
            issues.push(ValidationIssue::warning(
                "purchasePrice",
                "missing or zero, net yield reads as 0",
            ));
        }

        check_date(&mut issues, "acquisitionDate", self.acquisition_date.as_deref());
        let start = check_date(&mut issues, "leaseStart", self.lease_start.as_deref());
        let end = check_date(&mut issues, "leaseEnd", self.lease_end.as_deref());
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                issues.push(ValidationIssue::error(
                    "leaseEnd",
                    format!("lease ends ({}) before it starts ({})", end, start),
                ));
            }
        }

        if self.status == PropertyStatus::Vacant && self.lease_start.is_some() {
            issues.push(ValidationIssue::warning("leaseStart", "vacant property has a lease"));
        }

        issues
    }
}

impl Validate for Dataset {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for p in self.properties() {
            if !p.id.is_empty() && !seen.insert(p.id.as_str()) {
                issues.push(ValidationIssue::error("id", "duplicate id").for_record(&p.id));
            }
            issues.extend(p.validate().into_iter().map(|i| i.for_record(&p.id)));
        }

        issues
    }
}

/// Splits records into those without error-level findings and the findings
/// of the rejected ones. Order of the kept records is preserved.
pub fn partition_valid(
    records: Vec<PropertyRecord>,
) -> (Vec<PropertyRecord>, Vec<ValidationIssue>) {
    let mut kept = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for record in records {
        let errors: Vec<ValidationIssue> = record
            .validate()
            .into_iter()
            .filter(ValidationIssue::is_error)
            .map(|i| i.for_record(&record.id))
            .collect();
        if errors.is_empty() {
            kept.push(record);
        } else {
            rejected.extend(errors);
        }
    }

    (kept, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_dataset;

    #[test]
    fn test_demo_dataset_is_valid() {
        let ds = demo_dataset();
        assert!(ds.is_valid());
        assert!(ds.validate_or_error().is_ok());
    }

    #[test]
    fn test_negative_amounts_and_fee() {
        let p = PropertyRecord::builder("Bad")
            .id("bad")
            .rent(-10.0)
            .management_fee(1.5)
            .purchase_price(100_000.0)
            .build();
        let issues = p.validate();
        assert!(issues.iter().any(|i| i.field == "rent" && i.is_error()));
        assert!(issues.iter().any(|i| i.field == "managementFee" && i.is_error()));
        assert!(matches!(
            p.validate_or_error(),
            Err(CoreError::MultipleValidationErrors(ref v)) if v.len() == 2
        ));
    }

    #[test]
    fn test_zero_purchase_price_is_warning_only() {
        let p = PropertyRecord::builder("Gift").id("g").rent(500.0).build();
        assert!(p.is_valid());
        assert!(p
            .validate()
            .iter()
            .any(|i| i.field == "purchasePrice" && i.severity == Severity::Warning));
    }

    #[test]
    fn test_dates() {
        let p = PropertyRecord::builder("Lease")
            .id("l")
            .purchase_price(1.0)
            .lease("2025-01-01", "2024-01-01")
            .build();
        let issues = p.validate();
        assert!(issues.iter().any(|i| i.field == "leaseEnd" && i.is_error()));

        let p = PropertyRecord::builder("Typo")
            .id("t")
            .purchase_price(1.0)
            .acquisition_date("15/03/2020")
            .build();
        assert!(matches!(
            p.validate_or_error(),
            Err(CoreError::Validation { ref field, .. }) if field == "acquisitionDate"
        ));
        assert!(parse_date("2020-03-15").is_ok());
    }

    #[test]
    fn test_duplicate_ids_in_dataset() {
        let a = PropertyRecord::builder("A").id("same").purchase_price(1.0).build();
        let ds = Dataset::from_parts(vec![a.clone(), a], vec![]);
        let issues = ds.validate();
        assert!(issues
            .iter()
            .any(|i| i.message == "duplicate id" && i.record_id.as_deref() == Some("same")));
    }

    #[test]
    fn test_partition_valid() {
        let good = PropertyRecord::builder("Good").id("good").purchase_price(1.0).build();
        let bad = PropertyRecord::builder("Bad").id("bad").charges(-1.0).build();
        let (kept, rejected) = partition_valid(vec![bad, good]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "good");
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].record_id.as_deref(), Some("bad"));
        assert_eq!(rejected[0].to_string(), "[bad] charges: must not be negative, got -1");
    }
}
