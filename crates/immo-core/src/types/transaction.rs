//! Ledger entries attached to properties.
//!
//! The dataset carries a transaction list for forward compatibility. No
//! aggregate reads it yet; the monthly revenue series is synthetic.

use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received (rent, deposit).
    #[default]
    Income,
    /// Money paid (charges, works, tax).
    Expense,
}

/// A dated ledger entry for one property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Opaque unique identifier.
    #[serde(default)]
    pub id: String,

    /// Id of the property this entry belongs to.
    pub property_id: Option<String>,

    /// Booking date (YYYY-MM-DD).
    pub date: Option<String>,

    /// Income or expense.
    #[serde(default)]
    pub kind: TransactionKind,

    /// Amount, always non-negative; direction comes from `kind`.
    pub amount: Option<f64>,

    /// Free-form label.
    pub label: Option<String>,
}

impl TransactionRecord {
    /// Signed amount: positive for income, negative for expenses.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        let amount = self.amount.filter(|v| !v.is_nan()).unwrap_or(0.0);
        match self.kind {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}
