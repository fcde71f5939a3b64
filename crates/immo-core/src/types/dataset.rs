//! The mutable portfolio dataset.

use serde::{Deserialize, Serialize};

use super::{PropertyRecord, TransactionRecord};
use crate::error::{CoreError, CoreResult};

/// The property and transaction lists held by the caller.
///
/// This is the only mutable state in the system. Mutations go through the
/// methods below and each one increments [`revision`](Self::revision), which
/// analytics caches use as their key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    properties: Vec<PropertyRecord>,
    transactions: Vec<TransactionRecord>,
    revision: u64,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset from existing lists.
    #[must_use]
    pub fn from_parts(
        properties: Vec<PropertyRecord>,
        transactions: Vec<TransactionRecord>,
    ) -> Self {
        Self {
            properties,
            transactions,
            revision: 0,
        }
    }

    /// Property records in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    /// Transaction records in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Mutation counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Looks up a property by id.
    #[must_use]
    pub fn property(&self, id: &str) -> Option<&PropertyRecord> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Appends a property. Fails if the id is already taken.
    pub fn add_property(&mut self, property: PropertyRecord) -> CoreResult<()> {
        if self.property(&property.id).is_some() {
            return Err(CoreError::duplicate_property(property.id));
        }
        self.properties.push(property);
        self.touch();
        Ok(())
    }

    /// Inserts or replaces a property by id, keeping its position when replacing.
    ///
    /// Returns true if an existing record was replaced.
    pub fn upsert_property(&mut self, property: PropertyRecord) -> bool {
        let replaced = match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => {
                *slot = property;
                true
            }
            None => {
                self.properties.push(property);
                false
            }
        };
        self.touch();
        replaced
    }

    /// Removes a property by id.
    pub fn remove_property(&mut self, id: &str) -> CoreResult<PropertyRecord> {
        let index = self
            .properties
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::property_not_found(id))?;
        let removed = self.properties.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Replaces the whole property list.
    pub fn replace_properties(&mut self, properties: Vec<PropertyRecord>) {
        self.properties = properties;
        self.touch();
    }

    /// Appends a ledger entry.
    pub fn add_transaction(&mut self, transaction: TransactionRecord) {
        self.transactions.push(transaction);
        self.touch();
    }

    /// Consumes the dataset, returning its lists.
    #[must_use]
    pub fn into_parts(self) -> (Vec<PropertyRecord>, Vec<TransactionRecord>) {
        (self.properties, self.transactions)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: &str) -> PropertyRecord {
        PropertyRecord::builder(format!("Property {id}")).id(id).build()
    }

    #[test]
    fn test_add_and_lookup() {
        let mut ds = Dataset::new();
        ds.add_property(property("a")).unwrap();
        ds.add_property(property("b")).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.property("b").unwrap().name(), "Property b");
        assert!(ds.property("z").is_none());
        assert_eq!(ds.revision(), 2);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut ds = Dataset::new();
        ds.add_property(property("a")).unwrap();
        let err = ds.add_property(property("a")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProperty { .. }));
        assert_eq!(ds.revision(), 1);
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut ds = Dataset::from_parts(vec![property("a"), property("b")], vec![]);
        let replaced = ds.upsert_property(PropertyRecord::builder("Renamed").id("a").build());
        assert!(replaced);
        assert_eq!(ds.properties()[0].name(), "Renamed");

        assert!(!ds.upsert_property(property("c")));
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.revision(), 2);
    }

    #[test]
    fn test_remove() {
        let mut ds = Dataset::from_parts(vec![property("a"), property("b")], vec![]);
        let removed = ds.remove_property("a").unwrap();
        assert_eq!(removed.id, "a");
        assert_eq!(ds.len(), 1);
        assert!(ds.remove_property("a").is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let ds: Dataset = serde_json::from_str(r#"{"properties": []}"#).unwrap();
        assert!(ds.is_empty());
        assert!(ds.transactions().is_empty());
        assert_eq!(ds.revision(), 0);
    }
}
