//! In-memory transaction store
//!
//! Implements the four read primitives of the storage contract by
//! scanning the loaded dataset. Good enough for the dataset sizes
//! this backend serves; a disk-backed store can replace it behind the
//! same trait.

pub mod error;
pub mod import;

use async_trait::async_trait;
use chrono::NaiveDate;
use salesview_core::{
    FacetField, FilterCriteria, SortDirection, SortField, SortSpec, StoreError, Transaction,
    TransactionStore,
};
use std::collections::BTreeSet;

pub use error::ImportError;
pub use import::{load_csv, parse_csv};

/// Store over an immutable, fully-loaded record list
pub struct MemoryStore {
    records: Vec<Transaction>,
}

impl MemoryStore {
    /// Create a store over already-loaded records
    pub fn new(records: Vec<Transaction>) -> Self {
        Self { records }
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Evaluate the conjunction of all installed predicates
///
/// Membership lists are matched literally: no trimming, no case
/// folding. Only the free-text search folds case.
fn matches(filter: &FilterCriteria, tx: &Transaction) -> bool {
    if let Some(needle) = &filter.search {
        let needle = needle.to_lowercase();
        let in_name = tx.customer_name.to_lowercase().contains(&needle);
        let in_phone = tx.phone_number.to_lowercase().contains(&needle);
        if !in_name && !in_phone {
            return false;
        }
    }

    if let Some(list) = &filter.customer_region {
        if !list.iter().any(|v| v == &tx.customer_region) {
            return false;
        }
    }

    if let Some(list) = &filter.gender {
        if !list.iter().any(|v| v == &tx.gender) {
            return false;
        }
    }

    if let Some(list) = &filter.product_category {
        if !list.iter().any(|v| v == &tx.product_category) {
            return false;
        }
    }

    if let Some(list) = &filter.tags {
        if !tx.tags.iter().any(|tag| list.contains(tag)) {
            return false;
        }
    }

    if let Some(list) = &filter.payment_method {
        if !list.iter().any(|v| v == &tx.payment_method) {
            return false;
        }
    }

    if let Some(min) = filter.age_min {
        if (tx.age as i64) < min {
            return false;
        }
    }
    if let Some(max) = filter.age_max {
        if (tx.age as i64) > max {
            return false;
        }
    }

    if let Some(from) = filter.date_from {
        if tx.date < from {
            return false;
        }
    }
    if let Some(to) = filter.date_to {
        if tx.date > to {
            return false;
        }
    }

    true
}

/// Stable sort by the single requested field
///
/// Tied keys keep their input order in both directions, so the
/// comparator is reversed rather than the sorted slice.
fn sort_records(records: &mut [Transaction], sort: SortSpec) {
    records.sort_by(|a, b| {
        let ord = match sort.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::CustomerName => a.customer_name.cmp(&b.customer_name),
        };
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn find(
        &self,
        filter: &FilterCriteria,
        sort: SortSpec,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        let mut matched: Vec<Transaction> = self
            .records
            .iter()
            .filter(|tx| matches(filter, tx))
            .cloned()
            .collect();
        sort_records(&mut matched, sort);

        // Permissive parsing can hand us negative values; both clamp
        // to zero at execution. A negative skip starts at the first
        // record, a negative limit yields an empty page.
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, filter: &FilterCriteria) -> Result<u64, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|tx| matches(filter, tx))
            .count() as u64)
    }

    async fn distinct(&self, field: FacetField) -> Result<Vec<String>, StoreError> {
        log::debug!("distinct scan over {field}");
        let mut values = BTreeSet::new();
        for tx in &self.records {
            match field {
                FacetField::CustomerRegion => {
                    values.insert(tx.customer_region.clone());
                }
                FacetField::Gender => {
                    values.insert(tx.gender.clone());
                }
                FacetField::ProductCategory => {
                    values.insert(tx.product_category.clone());
                }
                FacetField::Tags => {
                    values.extend(tx.tags.iter().cloned());
                }
                FacetField::PaymentMethod => {
                    values.insert(tx.payment_method.clone());
                }
            }
        }
        Ok(values.into_iter().collect())
    }

    async fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>, StoreError> {
        let min = self.records.iter().map(|tx| tx.date).min();
        let max = self.records.iter().map(|tx| tx.date).max();
        Ok(min.zip(max))
    }
}

// ==================== Tests ====================
